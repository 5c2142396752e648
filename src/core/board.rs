//! The 6×6 playing surface.
//!
//! Each cell holds either nothing or exactly one `Stack`. The board owns its
//! stacks outright; moving pieces always goes through split/merge so no
//! stack is ever reachable from two cells.

use serde::{Deserialize, Serialize};

use super::color::PieceColor;
use super::coord::{Coord, BOARD_SIZE};
use super::stack::Stack;

/// Column colors for even rows: `true` = first player's color.
const EVEN_ROW_PATTERN: [bool; BOARD_SIZE] = [true, true, false, false, true, true];

/// A 6×6 grid of optional stacks.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Stack>; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// A board with no pieces.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            cells: std::array::from_fn(|_| std::array::from_fn(|_| None)),
        }
    }

    /// The standard starting layout.
    ///
    /// Every cell holds one piece. Even rows read `A A B B A A` across the
    /// columns, odd rows `B B A A B B`, where `A` is `first` and `B` is
    /// `second`.
    #[must_use]
    pub fn standard(first: PieceColor, second: PieceColor) -> Self {
        let mut board = Self::empty();
        for coord in Coord::all() {
            let even_row = coord.row % 2 == 0;
            let first_here = EVEN_ROW_PATTERN[coord.col as usize] == even_row;
            let color = if first_here { first } else { second };
            board.set(coord, Some(Stack::single(color)));
        }
        board
    }

    /// Stack at `at`, or `None` for an empty or off-board cell.
    #[must_use]
    pub fn get(&self, at: Coord) -> Option<&Stack> {
        let (r, c) = at.indices()?;
        self.cells[r][c].as_ref()
    }

    /// Mutable stack at `at`.
    pub fn get_mut(&mut self, at: Coord) -> Option<&mut Stack> {
        let (r, c) = at.indices()?;
        self.cells[r][c].as_mut()
    }

    /// Replace the contents of a cell, returning what was there.
    ///
    /// An empty `Stack` is normalized to `None`. Off-board coordinates are
    /// ignored and return `None`.
    pub fn set(&mut self, at: Coord, stack: Option<Stack>) -> Option<Stack> {
        let (r, c) = at.indices()?;
        let stack = stack.filter(|s| !s.is_empty());
        std::mem::replace(&mut self.cells[r][c], stack)
    }

    /// Empty a cell, returning its stack.
    pub fn take(&mut self, at: Coord) -> Option<Stack> {
        self.set(at, None)
    }

    /// Whether a cell holds no stack.
    #[must_use]
    pub fn is_empty_at(&self, at: Coord) -> bool {
        self.get(at).is_none()
    }

    /// Iterate over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Option<&Stack>)> + '_ {
        Coord::all().map(move |c| (c, self.get(c)))
    }

    /// Iterate over occupied cells.
    pub fn stacks(&self) -> impl Iterator<Item = (Coord, &Stack)> + '_ {
        self.cells().filter_map(|(c, s)| s.map(|s| (c, s)))
    }

    /// One row of cells, left to right, or `None` past the last row.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[Option<Stack>]> {
        self.cells.get(row).map(|cells| cells.as_slice())
    }

    // === Counting ===

    /// Total pieces on the board.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.stacks().map(|(_, s)| s.len()).sum()
    }

    /// Pieces of one color anywhere on the board.
    #[must_use]
    pub fn count_of(&self, color: PieceColor) -> usize {
        self.stacks().map(|(_, s)| s.count_of(color)).sum()
    }

    /// Height of the tallest stack, 0 on an empty board.
    #[must_use]
    pub fn tallest(&self) -> usize {
        self.stacks().map(|(_, s)| s.len()).max().unwrap_or(0)
    }

    /// Cells whose top piece is `color`.
    pub fn controlled_by(&self, color: PieceColor) -> impl Iterator<Item = (Coord, &Stack)> + '_ {
        self.stacks()
            .filter(move |(_, s)| s.controller() == Some(color))
    }
}
