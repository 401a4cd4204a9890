#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// A grid cell addressed by row and column. Rows grow downwards.
///
/// Ordering is row-major, which makes `BTreeSet<Location>` iterate the way a layout is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Location {
    pub row: i32,
    pub col: i32,
}

impl Location {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub const fn offset(self, rows: i32, cols: i32) -> Self {
        Self {
            row: self.row + rows,
            col: self.col + cols,
        }
    }

    pub const fn step(self, direction: Direction) -> Self {
        let (rows, cols) = direction.delta();
        self.offset(rows, cols)
    }

    pub fn manhattan(self, other: Location) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    pub fn euclidean(self, other: Location) -> f64 {
        let dr = f64::from(self.row - other.row);
        let dc = f64::from(self.col - other.col);
        (dr * dr + dc * dc).sqrt()
    }

    /// 4-neighbourhood in a fixed order: up, down, left, right.
    pub fn neighbors(self) -> [Location; 4] {
        Direction::CARDINAL.map(|d| self.step(d))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Facing / movement direction. `Idle` is the zero vector: an agent that has not moved yet, or a
/// "stay" move during search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    #[default]
    Idle,
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const CARDINAL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// `(rows, cols)` displacement of one step.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Idle => (0, 0),
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// The exact opposite vector. `Idle` is its own opposite.
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Idle => Direction::Idle,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// `(rows, cols)` offset perpendicular to the facing, used to place the side rays of a field
    /// of view.
    pub const fn lateral(self) -> (i32, i32) {
        match self {
            Direction::Idle => (0, 0),
            Direction::Up | Direction::Down => (0, 1),
            Direction::Left | Direction::Right => (1, 0),
        }
    }

    /// Direction of a single step from `from` to `to`; `Idle` when the cells are not adjacent.
    pub fn between(from: Location, to: Location) -> Self {
        match (to.row - from.row, to.col - from.col) {
            (-1, 0) => Direction::Up,
            (1, 0) => Direction::Down,
            (0, -1) => Direction::Left,
            (0, 1) => Direction::Right,
            _ => Direction::Idle,
        }
    }

    pub const fn is_idle(self) -> bool {
        matches!(self, Direction::Idle)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Idle => "idle",
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}
