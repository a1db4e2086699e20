//! Render surface over an embedded-graphics draw target
//!
//! Works with any RGB565 [`DrawTarget`], such as a mipidsi ST7789 panel
//! on the board or a `MockDisplay` in tests. Packed `0xRRGGBB` colours
//! are narrowed to RGB565 on the way out.

use embedded_graphics::pixelcolor::{Rgb565, Rgb888};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use mazepad_core::traits::{Colour, RenderSurface, SurfaceError};

/// Convert a packed `0xRRGGBB` colour to RGB565
pub fn to_rgb565(colour: Colour) -> Rgb565 {
    Rgb888::new(colour.r(), colour.g(), colour.b()).into()
}

/// [`RenderSurface`] backed by an RGB565 draw target
pub struct GraphicsSurface<D> {
    display: D,
}

impl<D> GraphicsSurface<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    pub fn new(display: D) -> Self {
        Self { display }
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Give the draw target back
    pub fn release(self) -> D {
        self.display
    }
}

impl<D> RenderSurface for GraphicsSurface<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    fn init(&mut self) -> Result<(), SurfaceError> {
        self.display
            .clear(Rgb565::BLACK)
            .map_err(|_| SurfaceError::Communication)
    }

    fn fill_rect(
        &mut self,
        row: u16,
        col: u16,
        size: u16,
        colour: Colour,
    ) -> Result<(), SurfaceError> {
        let area = Rectangle::new(
            Point::new(i32::from(col), i32::from(row)),
            Size::new_equal(u32::from(size)),
        );

        // Empty squares have no bottom-right corner and draw nothing
        let Some(bottom_right) = area.bottom_right() else {
            return Ok(());
        };
        let bounds = self.display.bounding_box();
        if !bounds.contains(area.top_left) || !bounds.contains(bottom_right) {
            return Err(SurfaceError::OutOfBounds);
        }

        self.display
            .fill_solid(&area, to_rgb565(colour))
            .map_err(|_| SurfaceError::Communication)
    }
}
