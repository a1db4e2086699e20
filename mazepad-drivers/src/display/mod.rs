//! Display drivers

pub mod graphics;

pub use graphics::{to_rgb565, GraphicsSurface};
