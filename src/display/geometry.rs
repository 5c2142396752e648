//! Pixel layout of the board window.
//!
//! The board is a square grid of equal cells anchored at a fixed origin
//! inside a larger window. Clicks map to cells by linear bucketing; the far
//! right and bottom edges belong to the last column and row.

use crate::core::coord::{Coord, BOARD_SIZE};

/// Window and grid dimensions, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardGeometry {
    /// Window width and height.
    pub window: (u32, u32),
    /// Top-left corner of the grid.
    pub origin: (i32, i32),
    /// Side length of one cell.
    pub cell_size: i32,
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self {
            window: (950, 500),
            origin: (50, 20),
            cell_size: 75,
        }
    }
}

impl BoardGeometry {
    /// Side length of the whole grid.
    #[must_use]
    pub fn extent(&self) -> i32 {
        self.cell_size * BOARD_SIZE as i32
    }

    /// Cell under the pixel `(x, y)`, or `None` outside the grid.
    #[must_use]
    pub fn cell_at(&self, x: i32, y: i32) -> Option<Coord> {
        let dx = x.checked_sub(self.origin.0)?;
        let dy = y.checked_sub(self.origin.1)?;
        let extent = self.extent();
        if self.cell_size <= 0 || dx < 0 || dy < 0 || dx > extent || dy > extent {
            return None;
        }
        let last = BOARD_SIZE as i32 - 1;
        Some(Coord::new(
            (dy / self.cell_size).min(last),
            (dx / self.cell_size).min(last),
        ))
    }

    /// Top-left pixel of a cell.
    #[must_use]
    pub fn cell_origin(&self, at: Coord) -> Option<(i32, i32)> {
        at.in_bounds().then(|| {
            (
                self.origin.0 + at.col * self.cell_size,
                self.origin.1 + at.row * self.cell_size,
            )
        })
    }

    /// Centre pixel of a cell.
    #[must_use]
    pub fn cell_center(&self, at: Coord) -> Option<(i32, i32)> {
        let half = self.cell_size / 2;
        self.cell_origin(at).map(|(x, y)| (x + half, y + half))
    }
}
