//! Controller input decoding
//!
//! Turns the raw 16-bit mask read from the pad into logical button
//! queries, and decides which masks the game should act on.

pub mod buttons;
pub mod filter;

pub use buttons::{is_pressed, ButtonMapping, ButtonMask, LogicalButton, BUTTON_COUNT, BUTTON_MAP};
pub use filter::{MaskChange, MaskFilter};
