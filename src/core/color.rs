//! Piece colors.
//!
//! Pieces carry no identity beyond their color: two red pieces are
//! interchangeable. Each player plays exactly one color.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use thiserror::Error;

/// Color of a single piece, and of the player who owns pieces of that color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceColor {
    Red,
    Green,
}

impl PieceColor {
    /// Both colors, in a stable order.
    pub const ALL: [PieceColor; 2] = [PieceColor::Red, PieceColor::Green];

    /// The other color.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            PieceColor::Red => PieceColor::Green,
            PieceColor::Green => PieceColor::Red,
        }
    }

    /// Single-letter code used by the text renderer.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            PieceColor::Red => 'R',
            PieceColor::Green => 'G',
        }
    }
}

impl std::fmt::Display for PieceColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Returned when a string names neither color.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown piece color '{0}' (expected R, G, red or green)")]
pub struct ParseColorError(pub String);

impl FromStr for PieceColor {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "r" | "red" => Ok(PieceColor::Red),
            "g" | "green" => Ok(PieceColor::Green),
            _ => Err(ParseColorError(s.to_string())),
        }
    }
}
