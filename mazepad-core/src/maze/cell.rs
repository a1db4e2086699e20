//! Grid cells and coordinates

/// Contents of one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Cell {
    /// Impassable
    Wall,
    /// Open corridor
    Floor,
    /// Where the character is placed on Start
    Entrance,
    /// Reaching it wins the game
    Exit,
}

impl Cell {
    /// Parse a layout tile character
    ///
    /// `#` wall, `.` floor, `E` entrance, `X` exit.
    pub fn from_tile(tile: char) -> Option<Self> {
        match tile {
            '#' => Some(Cell::Wall),
            '.' => Some(Cell::Floor),
            'E' => Some(Cell::Entrance),
            'X' => Some(Cell::Exit),
            _ => None,
        }
    }

    /// Layout tile character for this cell
    pub fn tile(self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Floor => '.',
            Cell::Entrance => 'E',
            Cell::Exit => 'X',
        }
    }

    /// Check if the character may stand on this cell
    pub fn is_passable(self) -> bool {
        !matches!(self, Cell::Wall)
    }
}

/// Movement direction on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Grid offset (dx, dy) of one step; y grows downwards
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Point {
    /// Column
    pub x: i32,
    /// Row
    pub y: i32,
}

impl Point {
    /// Sentinel for "character not yet placed"
    pub const UNPLACED: Point = Point { x: -1, y: -1 };

    /// Create a point
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Check if this is a real position rather than the sentinel
    pub fn is_placed(self) -> bool {
        self != Self::UNPLACED
    }

    /// The neighbouring point one step in `direction`
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}
