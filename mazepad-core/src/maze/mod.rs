//! Maze model
//!
//! A fixed-size grid of cells loaded once at startup. The grid is
//! immutable afterwards; the entrance and exit are found by a single
//! row-major scan at load time.

pub mod cell;
pub mod grid;
pub mod layout;

pub use cell::{Cell, Direction, Point};
pub use grid::{Maze, MazeError, MAZE_COLS, MAZE_ROWS};
pub use layout::REFERENCE_LAYOUT;
