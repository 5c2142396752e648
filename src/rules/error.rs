//! Rule violations.
//!
//! Every rejected action produces one of these and leaves the game exactly
//! as it was.

use thiserror::Error;

use crate::core::coord::Coord;

/// Why an action or query was refused.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("invalid location: {0} is off the board")]
    InvalidLocation(Coord),

    #[error("not your piece: no stack you control at {0}")]
    NotYourPiece(Coord),

    #[error("invalid number of pieces: cannot move {requested} from a stack of {available}")]
    InvalidPieceCount { requested: usize, available: usize },

    #[error("illegal move: {to} is not {count} cells from {from} along a row or column")]
    IllegalMove { from: Coord, to: Coord, count: usize },

    #[error("not your turn")]
    NotYourTurn,

    #[error("game is over")]
    GameOver,

    #[error("no pieces in reserve")]
    NoReserve,

    #[error("player '{0}' not found")]
    UnknownPlayer(String),
}
