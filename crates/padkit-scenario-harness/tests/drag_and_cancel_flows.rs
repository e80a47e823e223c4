//! Drag and cancellation flows.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use padkit_scenario_harness::PadHarness;
use padkit_ui::{ColorButton, Direction, TouchPhase, TouchPoint};

#[test]
fn drag_within_a_button_reports_moves() {
    let mut harness = PadHarness::new();
    let center = harness.button_center(Direction::Right);

    harness.drag(&[
        center,
        center + Point::new(5, 0),
        center + Point::new(10, 5),
    ]);

    assert_eq!(
        harness.drain_events(),
        vec![
            (Direction::Right, TouchPhase::Began),
            (Direction::Right, TouchPhase::Moved),
            (Direction::Right, TouchPhase::Ended),
        ]
    );
}

#[test]
fn drag_off_a_button_stops_reporting() {
    let mut harness = PadHarness::new();
    let start = harness.button_center(Direction::Left);
    let pad_center = harness.pad().position();

    harness.drag(&[start, pad_center, Point::new(470, 10)]);

    assert_eq!(
        harness.drain_events(),
        vec![(Direction::Left, TouchPhase::Began)]
    );
}

#[test]
fn drag_across_buttons_reports_each_side() {
    let mut harness = PadHarness::new();

    harness.drag(&[
        harness.button_center(Direction::Left),
        harness.button_center(Direction::Right),
        harness.button_center(Direction::Right) + Point::new(2, 2),
    ]);

    assert_eq!(
        harness.drain_events(),
        vec![
            (Direction::Left, TouchPhase::Began),
            (Direction::Right, TouchPhase::Moved),
            (Direction::Right, TouchPhase::Ended),
        ]
    );
}

#[test]
fn cancelled_contact_passes_through_unchanged() {
    let mut harness = PadHarness::new();
    let center = harness.button_center(Direction::Up);

    harness.touch(TouchPhase::Began, center);
    harness.cancel(center);

    assert_eq!(
        harness.drain_events(),
        vec![
            (Direction::Up, TouchPhase::Began),
            (Direction::Up, TouchPhase::Cancelled),
        ]
    );
}

#[test]
fn pad_serves_as_listener_for_standalone_buttons() {
    let mut harness = PadHarness::new();
    let mut button = ColorButton::new(
        Some(Direction::Down),
        Rgb565::CSS_LIGHT_GRAY,
        Size::new(40, 40),
    );
    let touches = [TouchPoint::new(9, Point::zero())];

    button.set_interaction_enabled(false);
    button.handle_touches(TouchPhase::Began, &touches, Some(harness.pad_mut()));
    assert!(harness.drain_events().is_empty());

    button.set_interaction_enabled(true);
    button.handle_touches(TouchPhase::Began, &touches, Some(harness.pad_mut()));
    assert_eq!(
        harness.drain_events(),
        vec![(Direction::Down, TouchPhase::Began)]
    );
}
