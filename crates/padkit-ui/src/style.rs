//! Pad construction style and host viewport metrics.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

/// Construction-time style for a directional pad.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PadStyle<C: PixelColor> {
    /// Fill color shared by the four buttons.
    pub color: C,
    /// Size of each individual button.
    pub button_size: Size,
}

impl<C: PixelColor> PadStyle<C> {
    /// Create a style with the given color and per-button size.
    pub const fn new(color: C, button_size: Size) -> Self {
        Self { color, button_size }
    }
}

impl Default for PadStyle<Rgb565> {
    /// Light gray 50x50 buttons.
    fn default() -> Self {
        Self::new(Rgb565::CSS_LIGHT_GRAY, Size::new(50, 50))
    }
}

/// Safe-area insets reported by the host, in pixels.
///
/// Zero on hosts without safe-area metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Insets {
    pub top: i32,
    pub left: i32,
    pub bottom: i32,
    pub right: i32,
}

impl Insets {
    /// Create insets from the four edge values.
    pub const fn new(top: i32, left: i32, bottom: i32, right: i32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// All-zero insets.
    pub const fn zero() -> Self {
        Self::new(0, 0, 0, 0)
    }
}

/// Host viewport metrics used for pad placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Visible size in pixels.
    pub size: Size,
    /// Safe-area insets within `size`.
    pub safe_insets: Insets,
}

impl Viewport {
    /// Viewport with no safe-area insets.
    pub const fn new(size: Size) -> Self {
        Self {
            size,
            safe_insets: Insets::zero(),
        }
    }

    /// Viewport with explicit safe-area insets.
    pub const fn with_safe_insets(size: Size, safe_insets: Insets) -> Self {
        Self { size, safe_insets }
    }
}
