//! Directional pad composed of four color buttons.

use alloc::boxed::Box;
use alloc::vec::Vec;

use embedded_graphics::prelude::*;

use crate::button::{ColorButton, ColorButtonTouchesListener};
use crate::style::{PadStyle, Viewport};
use crate::touch::{TouchPhase, TouchPoint};

/// Logical role of a pad button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in delivery order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

/// Delegate receiving the pad's high-level directional events.
pub trait DirectionalPadDelegate {
    /// Notifies an event from the up button.
    fn up_pad_event_triggered(&mut self, phase: TouchPhase);
    /// Notifies an event from the down button.
    fn down_pad_event_triggered(&mut self, phase: TouchPhase);
    /// Notifies an event from the left button.
    fn left_pad_event_triggered(&mut self, phase: TouchPhase);
    /// Notifies an event from the right button.
    fn right_pad_event_triggered(&mut self, phase: TouchPhase);
}

/// Listener view over the pad's delegate.
///
/// Borrows only the delegate so the pad's buttons stay borrowable while a
/// notification is being dispatched.
struct DispatchToDelegate<'a> {
    delegate: Option<&'a mut (dyn DirectionalPadDelegate + 'static)>,
}

impl<C: PixelColor> ColorButtonTouchesListener<C> for DispatchToDelegate<'_> {
    fn button_touched(&mut self, button: &ColorButton<C>, phase: TouchPhase) {
        let Some(delegate) = self.delegate.as_deref_mut() else {
            return;
        };
        // An unidentified source is a valid no-op, not a failure.
        match button.identity() {
            Some(Direction::Up) => delegate.up_pad_event_triggered(phase),
            Some(Direction::Down) => delegate.down_pad_event_triggered(phase),
            Some(Direction::Left) => delegate.left_pad_event_triggered(phase),
            Some(Direction::Right) => delegate.right_pad_event_triggered(phase),
            None => {}
        }
    }
}

/// A node containing the four directional buttons.
///
/// Child buttons live in the pad's local space, one button dimension out
/// from the origin along each axis (screen coordinates, `y` down). Touches
/// arriving through [`DirectionalPad::handle_touches`] are hit-tested against
/// the children and re-raised through the delegate as directional events.
pub struct DirectionalPad<C: PixelColor> {
    position: Point,
    button_size: Size,
    up: ColorButton<C>,
    down: ColorButton<C>,
    left: ColorButton<C>,
    right: ColorButton<C>,
    delegate: Option<Box<dyn DirectionalPadDelegate>>,
}

impl<C: PixelColor> DirectionalPad<C> {
    /// Create a pad with the given button color and per-button size.
    pub fn new(color: C, button_size: Size) -> Self {
        let w = button_size.width as i32;
        let h = button_size.height as i32;

        let mut up = ColorButton::new(Some(Direction::Up), color, button_size);
        up.set_position(Point::new(0, -h));
        let mut down = ColorButton::new(Some(Direction::Down), color, button_size);
        down.set_position(Point::new(0, h));
        let mut left = ColorButton::new(Some(Direction::Left), color, button_size);
        left.set_position(Point::new(-w, 0));
        let mut right = ColorButton::new(Some(Direction::Right), color, button_size);
        right.set_position(Point::new(w, 0));

        Self {
            position: Point::zero(),
            button_size,
            up,
            down,
            left,
            right,
            delegate: None,
        }
    }

    /// Create a pad from a style bundle.
    pub fn with_style(style: PadStyle<C>) -> Self {
        Self::new(style.color, style.button_size)
    }

    /// Attach or replace the delegate. At most one delegate at a time.
    pub fn set_delegate(&mut self, delegate: Box<dyn DirectionalPadDelegate>) {
        log::debug!("directional pad delegate attached");
        self.delegate = Some(delegate);
    }

    /// Detach and return the current delegate.
    pub fn take_delegate(&mut self) -> Option<Box<dyn DirectionalPadDelegate>> {
        self.delegate.take()
    }

    /// Pad origin in the parent's coordinate space.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Move the pad origin.
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// Per-button size given at construction.
    pub fn button_size(&self) -> Size {
        self.button_size
    }

    /// The child button for a direction.
    pub fn button(&self, direction: Direction) -> &ColorButton<C> {
        match direction {
            Direction::Up => &self.up,
            Direction::Down => &self.down,
            Direction::Left => &self.left,
            Direction::Right => &self.right,
        }
    }

    /// All child buttons, in delivery order.
    pub fn buttons(&self) -> [&ColorButton<C>; 4] {
        [&self.up, &self.down, &self.left, &self.right]
    }

    /// Place the pad near the bottom-left corner of the viewport, honoring
    /// the host's safe-area insets (zero when unavailable): 2.5 button
    /// widths in from the left edge, 2.5 button heights up from the bottom.
    pub fn set_position_to_bottom_left(&mut self, viewport: &Viewport) {
        let insets = viewport.safe_insets;
        let w = self.button_size.width as i32;
        let h = self.button_size.height as i32;
        let x = w * 5 / 2 + insets.left;
        let y = viewport.size.height as i32 - h * 5 / 2 - insets.bottom;
        self.position = Point::new(x, y);
    }

    /// Route a host touch notification into the pad.
    ///
    /// Touch positions are in the parent's coordinate space. Every child
    /// containing at least one touch point receives exactly one notification
    /// carrying its hits, with the pad dispatching to the delegate; touches
    /// landing on no child are dropped.
    pub fn handle_touches(&mut self, phase: TouchPhase, touches: &[TouchPoint]) {
        let origin = self.position;
        let mut dispatch = DispatchToDelegate {
            delegate: self.delegate.as_deref_mut(),
        };

        for button in [&self.up, &self.down, &self.left, &self.right] {
            let hits: Vec<TouchPoint> = touches
                .iter()
                .map(|touch| touch.translated(-origin))
                .filter(|touch| button.contains(touch.position))
                .collect();
            if !hits.is_empty() {
                button.handle_touches(phase, &hits, Some(&mut dispatch));
            }
        }
    }

    /// Render the four buttons at their absolute positions.
    pub fn render<D: DrawTarget<Color = C>>(&self, display: &mut D) -> Result<(), D::Error> {
        for button in self.buttons() {
            button.render_translated(display, self.position)?;
        }
        Ok(())
    }
}

// Redirects button events to the delegate, so a pad can also serve as the
// listener for standalone buttons.
impl<C: PixelColor> ColorButtonTouchesListener<C> for DirectionalPad<C> {
    fn button_touched(&mut self, button: &ColorButton<C>, phase: TouchPhase) {
        DispatchToDelegate {
            delegate: self.delegate.as_deref_mut(),
        }
        .button_touched(button, phase);
    }
}
