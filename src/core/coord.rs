//! Board coordinates.

use serde::{Deserialize, Serialize};

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 6;

/// A (row, column) cell address.
///
/// Components are signed so that any caller input, including negative
/// values, can be represented and rejected by the rules rather than
/// failing to construct.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Create a coordinate. Does not check bounds.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Check if this coordinate lies on the board.
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.row >= 0
            && self.row < BOARD_SIZE as i32
            && self.col >= 0
            && self.col < BOARD_SIZE as i32
    }

    /// Array indices for an in-bounds coordinate.
    #[must_use]
    pub fn indices(self) -> Option<(usize, usize)> {
        if self.in_bounds() {
            Some((self.row as usize, self.col as usize))
        } else {
            None
        }
    }

    /// Offset by `(d_row, d_col)`. The result may be off the board.
    #[must_use]
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self::new(self.row + d_row, self.col + d_col)
    }

    /// Iterate over every cell on the board in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE as i32)
            .flat_map(|row| (0..BOARD_SIZE as i32).map(move |col| Coord::new(row, col)))
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The four axis-aligned directions a stack can travel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step as `(d_row, d_col)`.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// The cell `distance` steps from `from` in this direction.
    #[must_use]
    pub const fn step(self, from: Coord, distance: i32) -> Coord {
        let (dr, dc) = self.delta();
        from.offset(dr * distance, dc * distance)
    }

    /// Direction and distance from `from` to `to`, if they share a row or
    /// column and differ.
    #[must_use]
    pub fn between(from: Coord, to: Coord) -> Option<(Direction, usize)> {
        let dr = to.row - from.row;
        let dc = to.col - from.col;
        match (dr, dc) {
            (0, 0) => None,
            (0, c) if c > 0 => Some((Direction::Right, c as usize)),
            (0, c) => Some((Direction::Left, c.unsigned_abs() as usize)),
            (r, 0) if r > 0 => Some((Direction::Down, r as usize)),
            (r, 0) => Some((Direction::Up, r.unsigned_abs() as usize)),
            _ => None,
        }
    }
}
