//! Test display that allows pixel overdraw.
//!
//! `MockDisplay` from embedded-graphics panics when a pixel is drawn twice,
//! which doesn't work for scenes that clear a background then draw widgets
//! on top. This simple framebuffer display allows overdraw for render
//! smoke-tests and screenshots.

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;

use embedded_graphics::prelude::*;

/// Simple framebuffer display for tests that allows overdraw.
pub struct TestDisplay<C: PixelColor> {
    pixels: Vec<C>,
    width: u32,
    height: u32,
}

impl<C: PixelColor> TestDisplay<C> {
    /// Create a test display filled with `background`.
    pub fn new(width: u32, height: u32, background: C) -> Self {
        Self {
            pixels: vec![background; (width * height) as usize],
            width,
            height,
        }
    }

    /// Width and height in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Color at `point`, or `None` outside the framebuffer.
    pub fn pixel(&self, point: Point) -> Option<C> {
        if point.x < 0
            || point.y < 0
            || point.x as u32 >= self.width
            || point.y as u32 >= self.height
        {
            return None;
        }
        let idx = (point.y as u32 * self.width + point.x as u32) as usize;
        self.pixels.get(idx).copied()
    }

    /// Iterate over the framebuffer in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = C> + '_ {
        self.pixels.iter().copied()
    }
}

impl<C: PixelColor> DrawTarget for TestDisplay<C> {
    type Color = C;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            if coord.x >= 0
                && coord.y >= 0
                && (coord.x as u32) < self.width
                && (coord.y as u32) < self.height
            {
                let idx = (coord.y as u32 * self.width + coord.x as u32) as usize;
                self.pixels[idx] = color;
            }
        }
        Ok(())
    }
}

impl<C: PixelColor> OriginDimensions for TestDisplay<C> {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}
