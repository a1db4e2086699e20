//! Maze grid and layout validation

use super::cell::{Cell, Point};

/// Number of columns in the grid
pub const MAZE_COLS: usize = 16;

/// Number of rows in the grid
pub const MAZE_ROWS: usize = 12;

/// Errors found while loading a maze layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MazeError {
    /// Layout does not have exactly [`MAZE_ROWS`] rows
    RowCount { found: usize },
    /// A row does not have exactly [`MAZE_COLS`] tiles
    RowLength { row: usize, found: usize },
    /// Tile character is not one of `#`, `.`, `E`, `X`
    UnknownTile { x: usize, y: usize },
    /// No entrance cell
    MissingEntrance,
    /// No exit cell
    MissingExit,
    /// More than one entrance cell
    DuplicateEntrance { x: usize, y: usize },
    /// More than one exit cell
    DuplicateExit { x: usize, y: usize },
    /// Border cell that is floor, so the character could walk off the grid
    OpenBorder { x: usize, y: usize },
}

/// Immutable maze grid with its entrance and exit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    grid: [[Cell; MAZE_COLS]; MAZE_ROWS],
    entrance: Point,
    exit: Point,
}

impl Maze {
    /// Parse a text layout
    ///
    /// One line per row, one character per cell (see
    /// [`Cell::from_tile`]). Surrounding whitespace and blank lines are
    /// ignored.
    pub fn parse(layout: &str) -> Result<Self, MazeError> {
        let mut grid = [[Cell::Wall; MAZE_COLS]; MAZE_ROWS];
        let mut rows = 0;

        for line in layout.lines().map(str::trim).filter(|l| !l.is_empty()) {
            if rows < MAZE_ROWS {
                let found = line.chars().count();
                if found != MAZE_COLS {
                    return Err(MazeError::RowLength { row: rows, found });
                }
                for (x, tile) in line.chars().enumerate() {
                    grid[rows][x] =
                        Cell::from_tile(tile).ok_or(MazeError::UnknownTile { x, y: rows })?;
                }
            }
            rows += 1;
        }

        if rows != MAZE_ROWS {
            return Err(MazeError::RowCount { found: rows });
        }

        Self::from_grid(grid)
    }

    /// Validate a grid and locate its entrance and exit
    pub fn from_grid(grid: [[Cell; MAZE_COLS]; MAZE_ROWS]) -> Result<Self, MazeError> {
        let mut entrance = None;
        let mut exit = None;

        for (y, row) in grid.iter().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                match cell {
                    Cell::Entrance if entrance.is_some() => {
                        return Err(MazeError::DuplicateEntrance { x, y })
                    }
                    Cell::Entrance => entrance = Some(Point::new(x as i32, y as i32)),
                    Cell::Exit if exit.is_some() => return Err(MazeError::DuplicateExit { x, y }),
                    Cell::Exit => exit = Some(Point::new(x as i32, y as i32)),
                    Cell::Floor if is_border(x, y) => return Err(MazeError::OpenBorder { x, y }),
                    Cell::Floor | Cell::Wall => {}
                }
            }
        }

        Ok(Self {
            grid,
            entrance: entrance.ok_or(MazeError::MissingEntrance)?,
            exit: exit.ok_or(MazeError::MissingExit)?,
        })
    }

    /// Where the character starts
    pub fn entrance(&self) -> Point {
        self.entrance
    }

    /// Where the game is won
    pub fn exit(&self) -> Point {
        self.exit
    }

    /// Check if `p` lies inside the grid
    pub fn contains(&self, p: Point) -> bool {
        (0..MAZE_COLS as i32).contains(&p.x) && (0..MAZE_ROWS as i32).contains(&p.y)
    }

    /// Checked cell lookup
    pub fn get(&self, p: Point) -> Option<Cell> {
        if self.contains(p) {
            Some(self.grid[p.y as usize][p.x as usize])
        } else {
            None
        }
    }

    /// Cell at `p`; anything outside the grid reads as [`Cell::Wall`]
    pub fn cell(&self, p: Point) -> Cell {
        self.get(p).unwrap_or(Cell::Wall)
    }

    /// Every cell with its coordinate, in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
        self.grid.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, &cell)| (Point::new(x as i32, y as i32), cell))
        })
    }
}

fn is_border(x: usize, y: usize) -> bool {
    x == 0 || y == 0 || x == MAZE_COLS - 1 || y == MAZE_ROWS - 1
}
