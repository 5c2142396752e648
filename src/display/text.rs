//! Plain-text board rendering.
//!
//! Each cell shows its controlling color and height (`R3`), or `X` when
//! empty. Rows are labelled down the left, columns across the top.

use std::fmt::Write;

use crate::core::board::Board;
use crate::core::coord::BOARD_SIZE;
use crate::core::state::GameSnapshot;

const CELL_WIDTH: usize = 4;

/// Render the grid only.
#[must_use]
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("   ");
    for col in 0..BOARD_SIZE {
        let _ = write!(out, "{:<width$}", col, width = CELL_WIDTH);
    }
    out.push('\n');

    for row in 0..BOARD_SIZE {
        let _ = write!(out, "{:<3}", row);
        for cell in board.row(row).into_iter().flatten() {
            let label = match cell {
                Some(stack) => stack.to_string(),
                None => "X".to_string(),
            };
            let _ = write!(out, "{:<width$}", label, width = CELL_WIDTH);
        }
        out.push('\n');
    }
    out
}

/// Render the grid followed by per-player pools and the turn.
#[must_use]
pub fn render_snapshot(snapshot: &GameSnapshot) -> String {
    let mut out = render_board(&snapshot.board);
    out.push('\n');
    for p in &snapshot.players {
        let _ = writeln!(
            out,
            "{} ({}): reserve {}, captured {}",
            p.name, p.color, p.reserve, p.captured
        );
    }
    let _ = writeln!(out, "{}", snapshot.turn);
    out
}
