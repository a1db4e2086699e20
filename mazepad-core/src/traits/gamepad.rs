//! Gamepad trait

use crate::input::ButtonMask;

/// A polled game controller
///
/// `poll` blocks for the duration of one full read of the pad and
/// cannot fail: a missing or faulty pad simply produces a mask that
/// does not reflect any real button presses.
pub trait Gamepad {
    /// Read the current state of every button
    fn poll(&mut self) -> ButtonMask;
}
