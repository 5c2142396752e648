//! # rust-focus
//!
//! A rules engine for Focus (also sold as Domination) on a 6×6 board.
//!
//! ## The Game
//!
//! Two players take turns moving stacks. Moving `n` pieces off the top of a
//! stack you control carries them exactly `n` cells along a row or column,
//! where they land on top of whatever is there. Stacks taller than five
//! shed pieces from the bottom: your own go to your reserve (and can be
//! placed back later as a turn), your opponent's are captured. Six
//! captures win.
//!
//! ## Design Principles
//!
//! 1. **Rejections Are Values**: every rule violation is a `RuleError`, and
//!    a rejected action leaves the game untouched.
//!
//! 2. **Snapshots, Not Handles**: queries hand out owned copies. Pools and
//!    history use `im-rs` so those copies are cheap.
//!
//! 3. **Explicit Wiring**: the presentation layer is given the engine it
//!    drives; nothing is global.
//!
//! ## Modules
//!
//! - `core`: colors, coordinates, stacks, board, players, actions, turn state
//! - `rules`: validation, execution, overflow resolution, `FocusGame`
//! - `display`: pixel geometry, click gestures, text rendering, sessions
//!
//! ## Example
//!
//! ```
//! use rust_focus::{FocusGame, Outcome, PieceColor};
//!
//! let mut game = FocusGame::with_players(("A", PieceColor::Red), ("B", PieceColor::Green)).unwrap();
//! assert_eq!(game.move_piece("A", (0, 0), (0, 1), 1), Ok(Outcome::Success));
//! assert_eq!(game.pieces_at((0, 0)), Ok(None));
//! assert_eq!(game.pieces_at((0, 1)), Ok(Some(vec![PieceColor::Red, PieceColor::Red])));
//! ```

pub mod core;
pub mod rules;
pub mod display;

// Re-export commonly used types
pub use crate::core::{
    PieceColor, Coord, Direction, BOARD_SIZE,
    Stack, EmptyStackError, Board,
    Player, PlayerId, Players, Disposition,
    FocusConfig, PlayerSetup, ConfigError,
    Action, ActionRecord, Evictions,
    Turn, TurnState, GameSnapshot, PlayerSummary,
};

pub use crate::rules::{FocusGame, Outcome, RuleError};

pub use crate::display::{BoardGeometry, Gesture, Session};
