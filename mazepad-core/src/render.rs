//! Maze rendering onto a tile surface
//!
//! Each grid cell maps to one `tile_size` × `tile_size` square; cell
//! (x, y) has its top-left pixel at row `y * tile_size`, column
//! `x * tile_size`.

use crate::game::Redraw;
use crate::maze::{Cell, Maze, Point};
use crate::traits::{Colour, RenderSurface, SurfaceError};

/// Background colour of a cell
pub fn colour_for(cell: Cell) -> Colour {
    match cell {
        Cell::Wall => Colour::BLACK,
        Cell::Floor | Cell::Entrance | Cell::Exit => Colour::WHITE,
    }
}

/// Draws cells as square tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeRenderer {
    tile_size: u16,
}

impl MazeRenderer {
    pub const fn new(tile_size: u16) -> Self {
        Self { tile_size }
    }

    pub fn tile_size(&self) -> u16 {
        self.tile_size
    }

    fn origin(&self, coord: i32) -> Result<u16, SurfaceError> {
        u16::try_from(coord)
            .ok()
            .and_then(|c| c.checked_mul(self.tile_size))
            .ok_or(SurfaceError::OutOfBounds)
    }

    /// Fill the tile of cell `p`
    pub fn draw_cell<S: RenderSurface>(
        &self,
        surface: &mut S,
        p: Point,
        colour: Colour,
    ) -> Result<(), SurfaceError> {
        let row = self.origin(p.y)?;
        let col = self.origin(p.x)?;
        surface.fill_rect(row, col, self.tile_size, colour)
    }

    /// Draw every cell in row-major order
    pub fn draw_maze<S: RenderSurface>(
        &self,
        surface: &mut S,
        maze: &Maze,
    ) -> Result<(), SurfaceError> {
        for (p, cell) in maze.cells() {
            self.draw_cell(surface, p, colour_for(cell))?;
        }
        Ok(())
    }

    /// Apply a tick's redraw plan
    pub fn apply<S: RenderSurface>(
        &self,
        surface: &mut S,
        redraw: &Redraw,
    ) -> Result<(), SurfaceError> {
        for command in redraw.commands() {
            self.draw_cell(surface, command.at, command.colour)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameState, Session};
    use crate::input::{ButtonMask, LogicalButton};
    use crate::maze::{MAZE_COLS, MAZE_ROWS, REFERENCE_LAYOUT};
    use heapless::Vec;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Fill {
        row: u16,
        col: u16,
        size: u16,
        colour: Colour,
    }

    #[derive(Default)]
    struct Recorder {
        fills: Vec<Fill, { MAZE_COLS * MAZE_ROWS }>,
        fail: bool,
    }

    impl RenderSurface for Recorder {
        fn init(&mut self) -> Result<(), SurfaceError> {
            self.fills.clear();
            Ok(())
        }

        fn fill_rect(
            &mut self,
            row: u16,
            col: u16,
            size: u16,
            colour: Colour,
        ) -> Result<(), SurfaceError> {
            if self.fail {
                return Err(SurfaceError::Communication);
            }
            self.fills
                .push(Fill { row, col, size, colour })
                .map_err(|_| SurfaceError::OutOfBounds)
        }
    }

    #[test]
    fn test_cell_colours() {
        assert_eq!(colour_for(Cell::Wall), Colour::BLACK);
        assert_eq!(colour_for(Cell::Floor), Colour::WHITE);
        assert_eq!(colour_for(Cell::Entrance), Colour::WHITE);
        assert_eq!(colour_for(Cell::Exit), Colour::WHITE);
    }

    #[test]
    fn test_draw_cell_geometry() {
        let renderer = MazeRenderer::new(64);
        let mut surface = Recorder::default();
        renderer
            .draw_cell(&mut surface, Point::new(3, 2), Colour::RED)
            .unwrap();
        assert_eq!(
            surface.fills[0],
            Fill { row: 128, col: 192, size: 64, colour: Colour::RED }
        );
    }

    #[test]
    fn test_draw_cell_rejects_unplaced() {
        let renderer = MazeRenderer::new(20);
        let mut surface = Recorder::default();
        assert_eq!(
            renderer.draw_cell(&mut surface, Point::UNPLACED, Colour::RED),
            Err(SurfaceError::OutOfBounds)
        );
        assert!(surface.fills.is_empty());
    }

    #[test]
    fn test_draw_maze_row_major() {
        let maze = Maze::parse(REFERENCE_LAYOUT).unwrap();
        let renderer = MazeRenderer::new(20);
        let mut surface = Recorder::default();
        renderer.draw_maze(&mut surface, &maze).unwrap();

        assert_eq!(surface.fills.len(), MAZE_COLS * MAZE_ROWS);
        assert_eq!(surface.fills[0].colour, Colour::BLACK);
        assert_eq!((surface.fills[1].row, surface.fills[1].col), (0, 20));
        // Entrance at (0, 2)
        let entrance = surface.fills[2 * MAZE_COLS];
        assert_eq!((entrance.row, entrance.col), (40, 0));
        assert_eq!(entrance.colour, Colour::WHITE);
        let last = surface.fills[MAZE_COLS * MAZE_ROWS - 1];
        assert_eq!((last.row, last.col), (220, 300));
    }

    #[test]
    fn test_surface_error_propagates() {
        let maze = Maze::parse(REFERENCE_LAYOUT).unwrap();
        let mut surface = Recorder { fail: true, ..Default::default() };
        assert_eq!(
            MazeRenderer::new(20).draw_maze(&mut surface, &maze),
            Err(SurfaceError::Communication)
        );
    }

    #[test]
    fn test_apply_redraw() {
        let maze = Maze::parse(REFERENCE_LAYOUT).unwrap();
        let renderer = MazeRenderer::new(20);
        let mut surface = Recorder::default();
        let mut session = Session::new(&maze);

        renderer
            .apply(&mut surface, &session.tick(ButtonMask::only(LogicalButton::Start)).redraw)
            .unwrap();
        session.commit_redraw();
        session.tick(ButtonMask::NONE);
        session.commit_redraw();
        renderer
            .apply(&mut surface, &session.tick(ButtonMask::only(LogicalButton::Right)).redraw)
            .unwrap();

        assert_eq!(
            &surface.fills[..],
            &[
                Fill { row: 40, col: 0, size: 20, colour: Colour::RED },
                Fill { row: 40, col: 0, size: 20, colour: Colour::WHITE },
                Fill { row: 40, col: 20, size: 20, colour: Colour::RED },
            ]
        );
    }

    #[test]
    fn test_failed_apply_erases_stale_marker_later() {
        let maze = Maze::parse(REFERENCE_LAYOUT).unwrap();
        let renderer = MazeRenderer::new(20);
        let mut surface = Recorder::default();
        let mut session = Session::new(&maze);

        let mut step = |surface: &mut Recorder, mask: ButtonMask| {
            let report = session.tick(mask);
            if renderer.apply(surface, &report.redraw).is_ok() {
                session.commit_redraw();
            }
        };

        step(&mut surface, ButtonMask::only(LogicalButton::Start));
        step(&mut surface, ButtonMask::NONE);

        surface.fail = true;
        step(&mut surface, ButtonMask::only(LogicalButton::Right));
        surface.fail = false;
        surface.fills.clear();
        step(&mut surface, ButtonMask::NONE);

        // Marker left at the entrance is cleared once the bus recovers
        assert_eq!(
            &surface.fills[..],
            &[
                Fill { row: 40, col: 0, size: 20, colour: Colour::WHITE },
                Fill { row: 40, col: 20, size: 20, colour: Colour::RED },
            ]
        );
    }

    #[test]
    fn test_idle_applies_nothing() {
        let maze = Maze::parse(REFERENCE_LAYOUT).unwrap();
        let mut surface = Recorder::default();
        MazeRenderer::new(20)
            .apply(&mut surface, &GameState::new().plan_redraw(&maze))
            .unwrap();
        assert!(surface.fills.is_empty());
    }
}
