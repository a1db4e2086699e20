//! Game controller drivers

pub mod snes;

pub use snes::{SnesController, BIT_COUNT, HALF_CLOCK_US, LATCH_PULSE_US};
