//! Host-side scenario test harness for scripted directional pad flows.

use std::cell::RefCell;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::rc::Rc;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use padkit_ui::test_display::TestDisplay;
use padkit_ui::{
    Direction, DirectionalPad, DirectionalPadDelegate, PadStyle, TouchPhase, TouchPoint, Viewport,
};
use png::{BitDepth, ColorType, Encoder};

/// Display size used by scenario tests.
pub const DISPLAY_WIDTH: u32 = 480;
pub const DISPLAY_HEIGHT: u32 = 320;

/// Event record captured by the harness delegate.
pub type PadEvent = (Direction, TouchPhase);

struct RecordingDelegate {
    events: Rc<RefCell<Vec<PadEvent>>>,
}

impl DirectionalPadDelegate for RecordingDelegate {
    fn up_pad_event_triggered(&mut self, phase: TouchPhase) {
        self.events.borrow_mut().push((Direction::Up, phase));
    }
    fn down_pad_event_triggered(&mut self, phase: TouchPhase) {
        self.events.borrow_mut().push((Direction::Down, phase));
    }
    fn left_pad_event_triggered(&mut self, phase: TouchPhase) {
        self.events.borrow_mut().push((Direction::Left, phase));
    }
    fn right_pad_event_triggered(&mut self, phase: TouchPhase) {
        self.events.borrow_mut().push((Direction::Right, phase));
    }
}

/// Small helper that couples a pad, a recording delegate, and a display for
/// scenario tests.
pub struct PadHarness {
    pad: DirectionalPad<Rgb565>,
    display: TestDisplay<Rgb565>,
    events: Rc<RefCell<Vec<PadEvent>>>,
    next_touch_id: u32,
}

impl PadHarness {
    /// Construct a harness with a default-styled pad placed at the bottom
    /// left of the scenario display.
    pub fn new() -> Self {
        let mut pad = DirectionalPad::with_style(PadStyle::default());
        pad.set_position_to_bottom_left(&Viewport::new(Size::new(
            DISPLAY_WIDTH,
            DISPLAY_HEIGHT,
        )));

        let events: Rc<RefCell<Vec<PadEvent>>> = Rc::new(RefCell::new(Vec::new()));
        pad.set_delegate(Box::new(RecordingDelegate {
            events: Rc::clone(&events),
        }));

        Self {
            pad,
            display: TestDisplay::new(DISPLAY_WIDTH, DISPLAY_HEIGHT, Rgb565::BLACK),
            events,
            next_touch_id: 0,
        }
    }

    /// Screen-space center of a directional button.
    pub fn button_center(&self, direction: Direction) -> Point {
        self.pad.position() + self.pad.button(direction).position()
    }

    /// Deliver one touch contact at `point` in the given phase.
    pub fn touch(&mut self, phase: TouchPhase, point: Point) {
        let touch = TouchPoint::new(self.next_touch_id, point);
        self.pad.handle_touches(phase, &[touch]);
    }

    /// Simulate a full press-and-release on a directional button.
    pub fn tap(&mut self, direction: Direction) {
        let center = self.button_center(direction);
        self.touch(TouchPhase::Began, center);
        self.touch(TouchPhase::Ended, center);
        self.next_touch_id += 1;
    }

    /// Drag a held contact through `points`: a begin at the first, moves
    /// through the middle, an end at the last.
    pub fn drag(&mut self, points: &[Point]) {
        let Some((&first, rest)) = points.split_first() else {
            return;
        };
        self.touch(TouchPhase::Began, first);
        if let Some((&last, mids)) = rest.split_last() {
            for &mid in mids {
                self.touch(TouchPhase::Moved, mid);
            }
            self.touch(TouchPhase::Ended, last);
        } else {
            self.touch(TouchPhase::Ended, first);
        }
        self.next_touch_id += 1;
    }

    /// Cancel an in-flight contact at `point`.
    pub fn cancel(&mut self, point: Point) {
        self.touch(TouchPhase::Cancelled, point);
        self.next_touch_id += 1;
    }

    /// Events captured so far, clearing the log.
    pub fn drain_events(&mut self) -> Vec<PadEvent> {
        self.events.borrow_mut().drain(..).collect()
    }

    /// Access the pad for assertions.
    pub fn pad(&self) -> &DirectionalPad<Rgb565> {
        &self.pad
    }

    /// Access the pad for scenario setup.
    pub fn pad_mut(&mut self) -> &mut DirectionalPad<Rgb565> {
        &mut self.pad
    }

    /// Access the display for render assertions.
    pub fn display(&self) -> &TestDisplay<Rgb565> {
        &self.display
    }

    /// Render the pad over a cleared background.
    pub fn render(&mut self) {
        self.display
            .clear(Rgb565::BLACK)
            .expect("scenario render should succeed");
        self.pad
            .render(&mut self.display)
            .expect("scenario render should succeed");
    }

    /// Save the current framebuffer to a PNG.
    pub fn save_screenshot_png(&self, path: impl AsRef<Path>) -> Result<(), String> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| e.to_string())?;
        }

        let (width, height) = self.display.dimensions();
        let mut data = Vec::with_capacity((width * height * 3) as usize);
        for pixel in self.display.pixels() {
            data.push(expand_5bit(pixel.r()));
            data.push(expand_6bit(pixel.g()));
            data.push(expand_5bit(pixel.b()));
        }

        let file = File::create(path).map_err(|e| e.to_string())?;
        let writer = BufWriter::new(file);
        let mut encoder = Encoder::new(writer, width, height);
        encoder.set_color(ColorType::Rgb);
        encoder.set_depth(BitDepth::Eight);
        let mut png_writer = encoder.write_header().map_err(|e| e.to_string())?;
        png_writer
            .write_image_data(&data)
            .map_err(|e| e.to_string())
    }
}

impl Default for PadHarness {
    fn default() -> Self {
        Self::new()
    }
}

// Bit-replicating channel expansion from RGB565 to 8-bit.
fn expand_5bit(value: u8) -> u8 {
    (value << 3) | (value >> 2)
}

fn expand_6bit(value: u8) -> u8 {
    (value << 2) | (value >> 4)
}
