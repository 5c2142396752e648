//! Click gestures that build actions.
//!
//! A move takes two clicks: source, then destination. The number of pieces
//! to carry is chosen explicitly beforehand with `set_count` and resets to 1
//! after each move. Arming the reserve turns the next click into a
//! placement.

use crate::core::action::Action;
use crate::core::coord::Coord;

/// What the next click will complete.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    /// Nothing chosen; the next click picks a source.
    #[default]
    Idle,
    /// Source chosen; the next click picks a destination.
    Source(Coord),
    /// Reserve armed; the next click picks where to place.
    Reserve,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gesture {
    selection: Selection,
    count: usize,
}

impl Default for Gesture {
    fn default() -> Self {
        Self::new()
    }
}

impl Gesture {
    #[must_use]
    pub fn new() -> Self {
        Self {
            selection: Selection::Idle,
            count: 1,
        }
    }

    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Pieces the next move will carry.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Choose how many pieces the next move carries. Zero is refused.
    pub fn set_count(&mut self, count: usize) -> bool {
        if count == 0 {
            return false;
        }
        self.count = count;
        true
    }

    /// Make the next click a reserve placement.
    pub fn arm_reserve(&mut self) {
        self.selection = Selection::Reserve;
    }

    /// Drop any partial selection.
    pub fn cancel(&mut self) {
        self.selection = Selection::Idle;
    }

    /// Feed a clicked cell. Returns an action once the gesture completes.
    ///
    /// Clicking the selected source a second time deselects it.
    pub fn click(&mut self, cell: Coord) -> Option<Action> {
        match self.selection {
            Selection::Idle => {
                self.selection = Selection::Source(cell);
                None
            }
            Selection::Source(from) if from == cell => {
                self.selection = Selection::Idle;
                None
            }
            Selection::Source(from) => {
                self.selection = Selection::Idle;
                let count = std::mem::replace(&mut self.count, 1);
                Some(Action::Move {
                    from,
                    to: cell,
                    count,
                })
            }
            Selection::Reserve => {
                self.selection = Selection::Idle;
                Some(Action::Place { to: cell })
            }
        }
    }
}
