//! Render smoke test and screenshot output.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use padkit_scenario_harness::PadHarness;
use padkit_ui::Direction;

#[test]
fn rendered_pad_shows_four_buttons() {
    let mut harness = PadHarness::new();
    harness.render();

    for direction in Direction::ALL {
        let center = harness.button_center(direction);
        assert_eq!(
            harness.display().pixel(center),
            Some(Rgb565::CSS_LIGHT_GRAY),
            "no button rendered at {direction:?}"
        );
    }

    // The gap at the pad origin stays background.
    assert_eq!(
        harness.display().pixel(harness.pad().position()),
        Some(Rgb565::BLACK)
    );
}

#[test]
fn screenshot_encodes_current_frame() {
    let mut harness = PadHarness::new();
    harness.render();

    let path = std::path::Path::new(env!("CARGO_TARGET_TMPDIR")).join("dpad.png");
    harness
        .save_screenshot_png(&path)
        .expect("screenshot should encode");

    let metadata = std::fs::metadata(&path).expect("screenshot file should exist");
    assert!(metadata.len() > 0);
}
