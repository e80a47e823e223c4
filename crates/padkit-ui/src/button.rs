//! Rectangular color sprite button that registers touch events.

use embedded_graphics::{
    prelude::*,
    primitives::{ContainsPoint, PrimitiveStyle, Rectangle},
};

use crate::dpad::Direction;
use crate::touch::{TouchPhase, TouchPoint};

/// Listener for a button's touch event notifications.
pub trait ColorButtonTouchesListener<C: PixelColor> {
    /// Notifies that `button` received a touch notification in `phase`.
    fn button_touched(&mut self, button: &ColorButton<C>, phase: TouchPhase);
}

/// A rectangular color sprite that registers touch events.
///
/// The button is center-anchored: `position` names the center of its
/// rectangle in the parent's coordinate space.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorButton<C: PixelColor> {
    identity: Option<Direction>,
    color: C,
    size: Size,
    position: Point,
    interaction_enabled: bool,
}

impl<C: PixelColor> ColorButton<C> {
    /// Create a button with the given directional identity, color and size.
    ///
    /// Touch interaction starts enabled. The identity is fixed for the
    /// button's lifetime; `None` makes the button invisible to identity
    /// dispatch (its events are valid no-ops, not failures).
    pub fn new(identity: Option<Direction>, color: C, size: Size) -> Self {
        Self {
            identity,
            color,
            size,
            position: Point::zero(),
            interaction_enabled: true,
        }
    }

    /// Directional identity used as the dispatch key.
    pub fn identity(&self) -> Option<Direction> {
        self.identity
    }

    /// Fill color.
    pub fn color(&self) -> C {
        self.color
    }

    /// Rectangle size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Center position in the parent's coordinate space.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Move the button's center.
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// Whether touch notifications are delivered.
    pub fn interaction_enabled(&self) -> bool {
        self.interaction_enabled
    }

    /// Enable or disable touch delivery for this button.
    pub fn set_interaction_enabled(&mut self, enabled: bool) {
        self.interaction_enabled = enabled;
    }

    /// Bounding rectangle, centered on `position`.
    pub fn bounds(&self) -> Rectangle {
        let half = Point::new(self.size.width as i32 / 2, self.size.height as i32 / 2);
        Rectangle::new(self.position - half, self.size)
    }

    /// Check if a point in the parent's coordinate space hits this button.
    pub fn contains(&self, point: Point) -> bool {
        self.bounds().contains(point)
    }

    /// Deliver a touch-phase notification.
    ///
    /// Forwards `(self, phase)` to the listener synchronously, exactly once,
    /// when at least one touch point is present. An empty slice, an absent
    /// listener, or disabled interaction delivers nothing.
    pub fn handle_touches(
        &self,
        phase: TouchPhase,
        touches: &[TouchPoint],
        listener: Option<&mut dyn ColorButtonTouchesListener<C>>,
    ) {
        if !self.interaction_enabled || touches.is_empty() {
            return;
        }
        if let Some(listener) = listener {
            listener.button_touched(self, phase);
        }
    }

    /// Render the button as a filled rectangle.
    pub fn render<D: DrawTarget<Color = C>>(&self, display: &mut D) -> Result<(), D::Error> {
        self.render_translated(display, Point::zero())
    }

    /// Render with the parent's origin applied, for buttons positioned in a
    /// containing node's local space.
    pub fn render_translated<D: DrawTarget<Color = C>>(
        &self,
        display: &mut D,
        offset: Point,
    ) -> Result<(), D::Error> {
        self.bounds()
            .translate(offset)
            .into_styled(PrimitiveStyle::with_fill(self.color))
            .draw(display)
    }
}
