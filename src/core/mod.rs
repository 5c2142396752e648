//! Core value types: colors, coordinates, stacks, board, players, actions, state.
//!
//! Nothing here knows the movement rules. The `rules` module drives these
//! types through legal transitions.

pub mod color;
pub mod coord;
pub mod stack;
pub mod board;
pub mod player;
pub mod config;
pub mod action;
pub mod state;

pub use color::{ParseColorError, PieceColor};
pub use coord::{Coord, Direction, BOARD_SIZE};
pub use stack::{EmptyStackError, Stack};
pub use board::Board;
pub use player::{Disposition, Player, PlayerId, Players};
pub use config::{ConfigError, FocusConfig, PlayerSetup, DEFAULT_CAPTURES_TO_WIN, DEFAULT_MAX_STACK_HEIGHT};
pub use action::{Action, ActionRecord, Evictions};
pub use state::{GameSnapshot, PlayerSummary, Turn, TurnState};
