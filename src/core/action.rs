//! Player actions and the history records kept for them.
//!
//! A turn is one of two actions:
//! - move the top `count` pieces of a controlled stack exactly `count`
//!   cells along a row or column
//! - place one piece from the reserve onto any cell

use serde::{Deserialize, Serialize};

use super::coord::Coord;
use super::player::PlayerId;

/// A single turn's action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Move the top `count` pieces from `from` to `to`.
    Move { from: Coord, to: Coord, count: usize },
    /// Place one reserve piece on `to`.
    Place { to: Coord },
}

impl Action {
    /// Create a move action.
    #[must_use]
    pub fn move_stack(from: impl Into<Coord>, to: impl Into<Coord>, count: usize) -> Self {
        Action::Move {
            from: from.into(),
            to: to.into(),
            count,
        }
    }

    /// Create a reserve placement.
    #[must_use]
    pub fn place(to: impl Into<Coord>) -> Self {
        Action::Place { to: to.into() }
    }

    /// The cell that receives pieces.
    #[must_use]
    pub fn destination(&self) -> Coord {
        match *self {
            Action::Move { to, .. } | Action::Place { to } => to,
        }
    }

    /// Number of pieces arriving at the destination.
    #[must_use]
    pub fn pieces_moved(&self) -> usize {
        match *self {
            Action::Move { count, .. } => count,
            Action::Place { .. } => 1,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Move { from, to, count } => write!(f, "move {} {} -> {}", count, from, to),
            Action::Place { to } => write!(f, "place {}", to),
        }
    }
}

/// Pieces shed from a stack's bottom while resolving one action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evictions {
    /// Own pieces sent back to the reserve.
    pub reserved: usize,
    /// Enemy pieces captured.
    pub captured: usize,
}

impl Evictions {
    #[must_use]
    pub fn total(&self) -> usize {
        self.reserved + self.captured
    }
}

/// A successful action, as recorded in the game history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Who acted.
    pub player: PlayerId,

    /// What they did.
    pub action: Action,

    /// 1-based position in the game's action sequence.
    pub sequence: usize,

    /// What overflow resolution removed.
    pub evictions: Evictions,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, action: Action, sequence: usize, evictions: Evictions) -> Self {
        Self {
            player,
            action,
            sequence,
            evictions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let mv = Action::move_stack((0, 0), (0, 2), 2);
        assert_eq!(
            mv,
            Action::Move {
                from: Coord::new(0, 0),
                to: Coord::new(0, 2),
                count: 2
            }
        );
        assert_eq!(mv.destination(), Coord::new(0, 2));
        assert_eq!(mv.pieces_moved(), 2);

        let place = Action::place((3, 4));
        assert_eq!(place.destination(), Coord::new(3, 4));
        assert_eq!(place.pieces_moved(), 1);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Action::move_stack((1, 1), (1, 2), 1).to_string(),
            "move 1 (1, 1) -> (1, 2)"
        );
        assert_eq!(Action::place((5, 0)).to_string(), "place (5, 0)");
    }

    #[test]
    fn test_evictions_total() {
        let e = Evictions {
            reserved: 1,
            captured: 2,
        };
        assert_eq!(e.total(), 3);
        assert_eq!(Evictions::default().total(), 0);
    }

    #[test]
    fn test_action_record_serialization() {
        let record = ActionRecord::new(
            PlayerId::Two,
            Action::place((2, 2)),
            7,
            Evictions {
                reserved: 0,
                captured: 1,
            },
        );
        let json = serde_json::to_string(&record).unwrap();
        let back: ActionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
