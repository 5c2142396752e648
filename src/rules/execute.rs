//! Applying validated actions to the board.
//!
//! ## Overflow
//!
//! After pieces land, the destination stack is trimmed from the bottom
//! until it is no taller than the configured cap. Each removed piece goes to
//! the acting player: their own color back to reserve, the opponent's into
//! the capture pool. Oldest pieces are always the ones lost.

use tracing::trace;

use crate::core::action::Evictions;
use crate::core::board::Board;
use crate::core::coord::Coord;
use crate::core::player::{Disposition, Player};
use crate::core::stack::Stack;

use super::error::RuleError;
use super::validate::check_location;

/// Move the top `count` pieces of `from` onto `to`, then resolve overflow.
///
/// Expects a move already accepted by `validate::check_move`. Structural
/// problems (empty source, bad count, off-board cell) are still reported
/// rather than corrupting the board, and nothing is changed when they are.
pub fn move_stack(
    board: &mut Board,
    mover: &mut Player,
    from: Coord,
    to: Coord,
    count: usize,
    max_height: usize,
) -> Result<Evictions, RuleError> {
    check_location(from)?;
    check_location(to)?;

    let source = board.get_mut(from).ok_or(RuleError::NotYourPiece(from))?;
    let available = source.len();
    let group = source
        .split_top(count)
        .ok_or(RuleError::InvalidPieceCount {
            requested: count,
            available,
        })?;
    if source.is_empty() {
        board.take(from);
    }

    Ok(deposit(board, mover, to, group, max_height))
}

/// Place one reserve piece on `to`, then resolve overflow.
pub fn place_from_reserve(
    board: &mut Board,
    mover: &mut Player,
    to: Coord,
    max_height: usize,
) -> Result<Evictions, RuleError> {
    check_location(to)?;
    let piece = mover.take_reserve().ok_or(RuleError::NoReserve)?;
    Ok(deposit(board, mover, to, Stack::single(piece), max_height))
}

/// Drop `group` on `to` (creating a stack if the cell is empty) and trim.
fn deposit(
    board: &mut Board,
    mover: &mut Player,
    to: Coord,
    group: Stack,
    max_height: usize,
) -> Evictions {
    let mut landed = match board.take(to) {
        Some(mut existing) => {
            existing.place_on_top(group);
            existing
        }
        None => group,
    };
    let evictions = resolve_overflow(&mut landed, mover, max_height);
    board.set(to, Some(landed));
    evictions
}

/// Shed bottom pieces until `stack` is at most `max_height` tall.
pub fn resolve_overflow(stack: &mut Stack, mover: &mut Player, max_height: usize) -> Evictions {
    let mut evictions = Evictions::default();
    while stack.len() > max_height {
        let Some(piece) = stack.pop_bottom() else {
            break;
        };
        match mover.absorb(piece) {
            Disposition::Reserved => evictions.reserved += 1,
            Disposition::Captured => evictions.captured += 1,
        }
        trace!(player = mover.name(), %piece, "evicted from stack bottom");
    }
    evictions
}
