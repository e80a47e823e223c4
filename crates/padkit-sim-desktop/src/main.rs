//! Desktop SDL simulator for the padkit directional pad.
//!
//! Mouse presses, drags, and releases on the pad become touch contacts.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{
    sdl2::Keycode, OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window,
};
use padkit_ui::{
    DirectionalPad, DirectionalPadDelegate, PadStyle, TouchPhase, TouchPoint, Viewport,
};

const DISPLAY_WIDTH: u32 = 480;
const DISPLAY_HEIGHT: u32 = 320;

/// Prints directional events as they arrive.
struct ConsoleDelegate;

impl DirectionalPadDelegate for ConsoleDelegate {
    fn up_pad_event_triggered(&mut self, phase: TouchPhase) {
        println!("up: {phase:?}");
    }
    fn down_pad_event_triggered(&mut self, phase: TouchPhase) {
        println!("down: {phase:?}");
    }
    fn left_pad_event_triggered(&mut self, phase: TouchPhase) {
        println!("left: {phase:?}");
    }
    fn right_pad_event_triggered(&mut self, phase: TouchPhase) {
        println!("right: {phase:?}");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut display: SimulatorDisplay<Rgb565> =
        SimulatorDisplay::new(Size::new(DISPLAY_WIDTH, DISPLAY_HEIGHT));
    let mut window = Window::new("padkit", &output_settings);

    let mut pad = DirectionalPad::with_style(PadStyle::default());
    pad.set_position_to_bottom_left(&Viewport::new(Size::new(DISPLAY_WIDTH, DISPLAY_HEIGHT)));
    pad.set_delegate(Box::new(ConsoleDelegate));

    display.clear(Rgb565::BLACK)?;
    pad.render(&mut display)?;
    window.update(&display);

    println!("padkit simulator");
    println!("Controls:");
    println!("  Mouse press/drag/release on a button - touch events");
    println!("  Escape                               - cancel the held touch");
    println!("  Close window                         - quit");

    // The single mouse cursor acts as one touch contact.
    let mut held_touch: Option<Point> = None;

    loop {
        let events = window.events().collect::<Vec<_>>();

        for event in events {
            match event {
                SimulatorEvent::Quit => {
                    return Ok(());
                }
                SimulatorEvent::MouseButtonDown { point, .. } => {
                    held_touch = Some(point);
                    pad.handle_touches(TouchPhase::Began, &[TouchPoint::new(0, point)]);
                }
                SimulatorEvent::MouseMove { point } => {
                    if held_touch.is_some() {
                        held_touch = Some(point);
                        pad.handle_touches(TouchPhase::Moved, &[TouchPoint::new(0, point)]);
                    }
                }
                SimulatorEvent::MouseButtonUp { point, .. } => {
                    held_touch = None;
                    pad.handle_touches(TouchPhase::Ended, &[TouchPoint::new(0, point)]);
                }
                SimulatorEvent::KeyDown {
                    keycode: Keycode::Escape,
                    ..
                } => {
                    if let Some(point) = held_touch.take() {
                        pad.handle_touches(TouchPhase::Cancelled, &[TouchPoint::new(0, point)]);
                    }
                }
                _ => {}
            }
        }

        pad.render(&mut display)?;
        window.update(&display);
    }
}
