//! Turn state and read-only views of a game.
//!
//! ## TurnState
//!
//! `Unset -> ToMove(seat) -> ... -> GameOver` where `GameOver` absorbs.
//! Whoever acts first claims the opening turn.
//!
//! ## Snapshots
//!
//! `Turn` and `GameSnapshot` are owned values handed to renderers and other
//! collaborators. They share nothing mutable with the engine.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::color::PieceColor;
use super::player::{PlayerId, Players};

/// Engine-side turn state, by seat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnState {
    /// No action has succeeded yet; either player may open.
    #[default]
    Unset,
    /// Waiting on this seat.
    ToMove(PlayerId),
    /// Someone won. No further actions are accepted.
    GameOver { winner: PlayerId },
}

impl TurnState {
    /// Whether `player` may act now.
    #[must_use]
    pub fn allows(self, player: PlayerId) -> bool {
        match self {
            TurnState::Unset => true,
            TurnState::ToMove(p) => p == player,
            TurnState::GameOver { .. } => false,
        }
    }

    #[must_use]
    pub fn is_over(self) -> bool {
        matches!(self, TurnState::GameOver { .. })
    }

    /// The winning seat, once the game is over.
    #[must_use]
    pub fn winner(self) -> Option<PlayerId> {
        match self {
            TurnState::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    /// Resolve seats to names for outside callers.
    #[must_use]
    pub fn to_view(self, players: &Players) -> Turn {
        match self {
            TurnState::Unset => Turn::Unset,
            TurnState::ToMove(p) => Turn::ToMove(players[p].name().to_string()),
            TurnState::GameOver { winner } => Turn::GameOver {
                winner: players[winner].name().to_string(),
            },
        }
    }
}

/// Public turn view, by player name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Turn {
    Unset,
    ToMove(String),
    GameOver { winner: String },
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Turn::Unset => write!(f, "either player may start"),
            Turn::ToMove(name) => write!(f, "{} to move", name),
            Turn::GameOver { winner } => write!(f, "game over, {} wins", winner),
        }
    }
}

/// Per-player figures shown alongside the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub name: String,
    pub color: PieceColor,
    pub reserve: usize,
    pub captured: usize,
}

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: Board,
    pub players: Vec<PlayerSummary>,
    pub turn: Turn,
}

impl GameSnapshot {
    /// Capture the current board, players and turn.
    #[must_use]
    pub fn capture(board: &Board, players: &Players, turn: TurnState) -> Self {
        Self {
            board: board.clone(),
            players: players
                .iter()
                .map(|(_, p)| PlayerSummary {
                    name: p.name().to_string(),
                    color: p.color(),
                    reserve: p.reserve_count(),
                    captured: p.captured_count(),
                })
                .collect(),
            turn: turn.to_view(players),
        }
    }
}
