//! Board-agnostic core logic for the maze firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Interface traits for the controller and the render surface
//! - Button mask decoding and change filtering
//! - Maze model and layout parsing
//! - Game state machine and redraw planning
//! - Maze rendering onto a tile surface
//!
//! One [`game::Session`] tick is the whole per-frame pipeline:
//!
//! ```text
//! ButtonMask ──▶ MaskFilter ──▶ GameState::handle_button ──▶ Redraw
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod game;
pub mod input;
pub mod maze;
pub mod render;
pub mod traits;
