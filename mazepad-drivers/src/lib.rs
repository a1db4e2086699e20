//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in mazepad-core:
//!
//! - SNES controller over three bit-banged GPIO lines
//! - Render surface adapter for any embedded-graphics RGB565 display

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod controller;
pub mod display;
