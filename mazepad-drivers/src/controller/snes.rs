//! SNES controller driver
//!
//! The pad is a 16-bit parallel-in shift register behind three lines:
//!
//! ```text
//!          ┌──┐
//! LATCH ───┘  └──────────────────────────────────────────
//!          12µs
//! CLOCK ─────────┐  ┌──┐  ┌── ... ──┐  ┌───────────────
//!                └──┘  └──┘         └──┘
//! DATA  ─────────< b0 >< b1 > ...   < b15>
//!                ▲     ▲            ▲
//!              sample sample      sample
//! ```
//!
//! A pulse on LATCH captures the buttons. Each falling CLOCK edge is
//! followed by a DATA sample, 6 µs after the previous rising edge, and
//! CLOCK returns high 6 µs later. DATA is active low: a pressed button
//! reads as 0 and sets its bit in the returned mask.
//!
//! One read takes about 204 µs and cannot fail. A disconnected pad
//! reads as all-pressed or all-released depending on how DATA floats.

use mazepad_core::input::ButtonMask;
use mazepad_core::traits::Gamepad;
use mazepad_hal::{DelayUs, InputPin, OutputPin};

/// LATCH high time in microseconds
pub const LATCH_PULSE_US: u32 = 12;

/// Half of one CLOCK period in microseconds
pub const HALF_CLOCK_US: u32 = 6;

/// Bits shifted out per read
pub const BIT_COUNT: u8 = 16;

/// SNES pad on LATCH (out), CLOCK (out, idle high) and DATA (in)
pub struct SnesController<L, C, D, T> {
    latch: L,
    clock: C,
    data: D,
    delay: T,
}

impl<L, C, D, T> SnesController<L, C, D, T>
where
    L: OutputPin,
    C: OutputPin,
    D: InputPin,
    T: DelayUs,
{
    /// Take ownership of the lines and drive them to their idle levels
    ///
    /// LATCH is driven low and CLOCK high, so the first read starts from
    /// the expected state.
    pub fn new(mut latch: L, mut clock: C, data: D, delay: T) -> Self {
        latch.set_low();
        clock.set_high();
        Self {
            latch,
            clock,
            data,
            delay,
        }
    }

    /// Latch the buttons and shift out all 16 bits
    pub fn read(&mut self) -> ButtonMask {
        self.latch.set_high();
        self.delay.delay_us(LATCH_PULSE_US);
        self.latch.set_low();

        let mut raw: u16 = 0;
        for bit in 0..BIT_COUNT {
            self.delay.delay_us(HALF_CLOCK_US);
            self.clock.set_low();
            if self.data.is_low() {
                raw |= 1 << bit;
            }
            self.delay.delay_us(HALF_CLOCK_US);
            self.clock.set_high();
        }

        ButtonMask::from_raw(raw)
    }

    /// Give the lines and the delay back
    pub fn release(self) -> (L, C, D, T) {
        (self.latch, self.clock, self.data, self.delay)
    }
}

impl<L, C, D, T> Gamepad for SnesController<L, C, D, T>
where
    L: OutputPin,
    C: OutputPin,
    D: InputPin,
    T: DelayUs,
{
    fn poll(&mut self) -> ButtonMask {
        self.read()
    }
}
