//! Render surface trait for the tile display

/// Errors that can occur while drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SurfaceError {
    /// Communication with the display controller failed
    Communication,
    /// Rectangle falls outside the surface
    OutOfBounds,
}

/// Packed `0xRRGGBB` colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Colour(pub u32);

impl Colour {
    pub const BLACK: Colour = Colour(0x0000_0000);
    pub const WHITE: Colour = Colour(0x00FF_FFFF);
    pub const RED: Colour = Colour(0x00FF_0000);
    pub const GREEN: Colour = Colour(0x0000_FF00);

    /// Build a colour from its components
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Colour(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Red component
    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green component
    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue component
    pub const fn b(self) -> u8 {
        self.0 as u8
    }
}

/// Pixel surface the maze is drawn on
///
/// Coordinates are in pixels with the origin at the top-left corner.
pub trait RenderSurface {
    /// Prepare the surface for drawing (clears it)
    fn init(&mut self) -> Result<(), SurfaceError>;

    /// Fill a `size` × `size` square whose top-left pixel is at
    /// (`row`, `col`)
    fn fill_rect(&mut self, row: u16, col: u16, size: u16, colour: Colour)
        -> Result<(), SurfaceError>;
}
