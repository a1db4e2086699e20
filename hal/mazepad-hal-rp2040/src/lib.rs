//! RP2040-specific HAL for the maze firmware
//!
//! This crate provides RP2040 implementations of the shared
//! `mazepad-hal` traits:
//!
//! - GPIO wrappers over `embassy_rp::gpio` implementing the pin traits
//! - A timer-backed busy-wait delay for bit-banged protocols

#![no_std]

pub mod delay;
pub mod gpio;

pub use delay::TimerDelay;
pub use gpio::{RpInput, RpOutput};

// Re-export shared traits from mazepad-hal for convenience
pub use mazepad_hal::{DelayUs, InputPin, Level, OutputPin};
