//! Hardware abstraction traits
//!
//! These traits define the interface between the game logic and
//! hardware-specific implementations.

pub mod gamepad;
pub mod surface;

pub use gamepad::Gamepad;
pub use surface::{Colour, RenderSurface, SurfaceError};
