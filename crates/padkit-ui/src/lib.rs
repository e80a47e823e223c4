//! On-screen directional pad widgets for embedded-graphics UIs.
//! Works on embedded targets, WASM, and desktop simulators.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![cfg_attr(
    not(test),
    deny(
        clippy::expect_used,
        clippy::panic,
        clippy::todo,
        clippy::unimplemented,
        clippy::unreachable,
        clippy::unwrap_used
    )
)]

extern crate alloc;

pub mod button;
pub mod dpad;
pub mod style;
pub mod test_display;
pub mod touch;

pub use button::{ColorButton, ColorButtonTouchesListener};
pub use dpad::{Direction, DirectionalPad, DirectionalPadDelegate};
pub use style::{Insets, PadStyle, Viewport};
pub use test_display::TestDisplay;
pub use touch::{TouchPhase, TouchPoint};
