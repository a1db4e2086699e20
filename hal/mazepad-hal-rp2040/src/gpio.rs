//! GPIO wrappers for the RP2040
//!
//! Embassy pins are configured at construction time, which covers the
//! "pin mode" half of the pin abstraction. The wrappers only forward
//! level reads and writes to the `mazepad-hal` traits.

use embassy_rp::gpio::{self, Input, Output, Pin, Pull};
use embassy_rp::Peri;
use mazepad_hal::{InputPin, Level, OutputPin};

fn to_embassy(level: Level) -> gpio::Level {
    match level {
        Level::High => gpio::Level::High,
        Level::Low => gpio::Level::Low,
    }
}

/// Push-pull output pin
pub struct RpOutput<'d> {
    pin: Output<'d>,
}

impl<'d> RpOutput<'d> {
    /// Configure `pin` as an output, driven to `initial` immediately
    pub fn new(pin: Peri<'d, impl Pin>, initial: Level) -> Self {
        Self {
            pin: Output::new(pin, to_embassy(initial)),
        }
    }
}

impl OutputPin for RpOutput<'_> {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }
}

/// Input pin
pub struct RpInput<'d> {
    pin: Input<'d>,
}

impl<'d> RpInput<'d> {
    /// Configure `pin` as an input with both pull resistors disabled
    pub fn floating(pin: Peri<'d, impl Pin>) -> Self {
        Self {
            pin: Input::new(pin, Pull::None),
        }
    }
}

impl InputPin for RpInput<'_> {
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}
