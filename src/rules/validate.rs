//! Move and placement legality.
//!
//! These checks read the board and never modify it. Turn order is the
//! engine's concern; here only geometry, ownership and counts are judged.

use crate::core::board::Board;
use crate::core::color::PieceColor;
use crate::core::coord::{Coord, Direction};

use super::error::RuleError;

/// Check a stack move for a player of color `mover`.
///
/// In order:
/// 1. both cells are on the board
/// 2. the source holds a stack topped by `mover`
/// 3. `1 <= count <= source height`
/// 4. `to` is exactly `count` cells from `from` along a row or column
pub fn check_move(
    board: &Board,
    mover: PieceColor,
    from: Coord,
    to: Coord,
    count: usize,
) -> Result<(), RuleError> {
    check_location(from)?;
    check_location(to)?;

    let source = board
        .get(from)
        .filter(|s| s.controller() == Some(mover))
        .ok_or(RuleError::NotYourPiece(from))?;

    if count < 1 || count > source.len() {
        return Err(RuleError::InvalidPieceCount {
            requested: count,
            available: source.len(),
        });
    }

    match Direction::between(from, to) {
        Some((_, distance)) if distance == count => Ok(()),
        _ => Err(RuleError::IllegalMove { from, to, count }),
    }
}

/// Check that a cell is on the board.
pub fn check_location(at: Coord) -> Result<(), RuleError> {
    if at.in_bounds() {
        Ok(())
    } else {
        Err(RuleError::InvalidLocation(at))
    }
}

/// Every destination a stack of `height` at `from` could legally reach,
/// paired with the piece count that gets it there.
pub fn reachable(from: Coord, height: usize) -> impl Iterator<Item = (Coord, usize)> {
    (1..=height).flat_map(move |count| {
        Direction::ALL
            .into_iter()
            .map(move |dir| (dir.step(from, count as i32), count))
            .filter(|(to, _)| to.in_bounds())
    })
}
