//! Game configuration.
//!
//! `FocusConfig` names the two players and carries the rule parameters.
//! Defaults reproduce the standard game:
//! - stacks taller than 5 shed their bottom pieces
//! - 6 captured enemy pieces win
//!
//! Configurations are validated once, when the engine is constructed.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::color::PieceColor;
use super::coord::Coord;

/// Tallest stack allowed after a move resolves.
pub const DEFAULT_MAX_STACK_HEIGHT: usize = 5;

/// Captured enemy pieces needed to win.
pub const DEFAULT_CAPTURES_TO_WIN: usize = 6;

/// Name and color for one seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSetup {
    pub name: String,
    pub color: PieceColor,
}

impl PlayerSetup {
    pub fn new(name: impl Into<String>, color: PieceColor) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

impl<S: Into<String>> From<(S, PieceColor)> for PlayerSetup {
    fn from((name, color): (S, PieceColor)) -> Self {
        Self::new(name, color)
    }
}

/// Reasons a configuration cannot start a game.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("players must use different colors (both chose {0})")]
    SameColor(PieceColor),

    #[error("player names must be unique (both are '{0}')")]
    DuplicateName(String),

    #[error("player names must not be empty")]
    EmptyName,

    #[error("maximum stack height must be at least 1")]
    ZeroStackHeight,

    #[error("captures needed to win must be at least 1")]
    ZeroCaptureTarget,

    #[error("stack at {at} holds {height} pieces, more than the maximum of {max}")]
    StackTooTall { at: Coord, height: usize, max: usize },
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusConfig {
    /// Seat one, whose color fills the `A` columns of the starting layout.
    pub first: PlayerSetup,

    /// Seat two.
    pub second: PlayerSetup,

    /// Stacks above this height shed bottom pieces after every action.
    pub max_stack_height: usize,

    /// Captured pieces a player needs to win.
    pub captures_to_win: usize,
}

impl FocusConfig {
    /// Create a configuration with standard rules.
    pub fn new(first: impl Into<PlayerSetup>, second: impl Into<PlayerSetup>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
            max_stack_height: DEFAULT_MAX_STACK_HEIGHT,
            captures_to_win: DEFAULT_CAPTURES_TO_WIN,
        }
    }

    /// Set the stack height cap.
    #[must_use]
    pub fn with_max_stack_height(mut self, height: usize) -> Self {
        self.max_stack_height = height;
        self
    }

    /// Set the number of captures needed to win.
    #[must_use]
    pub fn with_captures_to_win(mut self, captures: usize) -> Self {
        self.captures_to_win = captures;
        self
    }

    /// Check that the configuration describes a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.first.color == self.second.color {
            return Err(ConfigError::SameColor(self.first.color));
        }
        if self.first.name.is_empty() || self.second.name.is_empty() {
            return Err(ConfigError::EmptyName);
        }
        if self.first.name == self.second.name {
            return Err(ConfigError::DuplicateName(self.first.name.clone()));
        }
        if self.max_stack_height == 0 {
            return Err(ConfigError::ZeroStackHeight);
        }
        if self.captures_to_win == 0 {
            return Err(ConfigError::ZeroCaptureTarget);
        }
        Ok(())
    }
}
