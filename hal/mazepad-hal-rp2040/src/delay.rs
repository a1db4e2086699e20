//! Timer-backed busy-wait delay
//!
//! The RP2040 timer ticks at 1 MHz, so `embassy_time::block_for` has
//! single-microsecond resolution without calibrating a spin loop
//! against the core clock.

use embassy_time::{block_for, Duration};
use mazepad_hal::DelayUs;

/// Busy-wait delay driven by the Embassy time driver
#[derive(Debug, Default, Clone, Copy)]
pub struct TimerDelay;

impl TimerDelay {
    /// Create a new delay handle
    pub const fn new() -> Self {
        Self
    }
}

impl DelayUs for TimerDelay {
    fn delay_us(&mut self, us: u32) {
        block_for(Duration::from_micros(us as u64));
    }
}
