//! A pile of pieces occupying one board cell.
//!
//! ## Ordering
//!
//! Pieces are stored top-first: index 0 is the controlling piece, the last
//! index is the bottom piece. A stack on the board is never empty; cells
//! without pieces hold no `Stack` at all (see `Board`).
//!
//! Stacks are capped by the rules (five pieces by default) but a merge can
//! briefly exceed the cap before overflow resolution trims it back, so the
//! inline capacity covers twice the default cap.
//!
//! ## Serialization
//!
//! A stack serializes as its top-first list of colors. Deserializing an
//! empty list fails, so a decoded board never holds an empty stack.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use super::color::PieceColor;

/// Inline capacity: the tallest stack a default-rules merge can produce.
const INLINE_PIECES: usize = 10;

/// A stack listing with no pieces in it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("a stack must hold at least one piece")]
pub struct EmptyStackError;

/// An ordered, non-empty pile of pieces.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<PieceColor>", into = "Vec<PieceColor>")]
pub struct Stack {
    /// Top-first.
    pieces: SmallVec<[PieceColor; INLINE_PIECES]>,
}

impl Stack {
    /// Create a one-piece stack.
    #[must_use]
    pub fn single(color: PieceColor) -> Self {
        let mut pieces = SmallVec::new();
        pieces.push(color);
        Self { pieces }
    }

    /// Build a stack from pieces listed top-first.
    ///
    /// Returns `None` for an empty list.
    #[must_use]
    pub fn from_top_first(pieces: &[PieceColor]) -> Option<Self> {
        if pieces.is_empty() {
            return None;
        }
        Some(Self {
            pieces: SmallVec::from_slice(pieces),
        })
    }

    /// Build a stack from pieces listed bottom-first.
    #[must_use]
    pub fn from_bottom_up(pieces: &[PieceColor]) -> Option<Self> {
        if pieces.is_empty() {
            return None;
        }
        Some(Self {
            pieces: pieces.iter().rev().copied().collect(),
        })
    }

    /// Number of pieces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Always false for a stack obtained from the board.
    ///
    /// Only observable on a stack drained by `pop_top`/`pop_bottom`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Color of the top piece, which decides who may move the stack.
    #[must_use]
    pub fn controller(&self) -> Option<PieceColor> {
        self.top()
    }

    /// Top piece.
    #[must_use]
    pub fn top(&self) -> Option<PieceColor> {
        self.pieces.first().copied()
    }

    /// Bottom piece.
    #[must_use]
    pub fn bottom(&self) -> Option<PieceColor> {
        self.pieces.last().copied()
    }

    /// Pieces, top-first.
    #[must_use]
    pub fn top_first(&self) -> &[PieceColor] {
        &self.pieces
    }

    /// Owned copy of the pieces, bottom-first.
    #[must_use]
    pub fn bottom_to_top(&self) -> Vec<PieceColor> {
        self.pieces.iter().rev().copied().collect()
    }

    /// Number of pieces of the given color.
    #[must_use]
    pub fn count_of(&self, color: PieceColor) -> usize {
        self.pieces.iter().filter(|&&c| c == color).count()
    }

    // === Mutation ===

    /// Put a piece on top; it becomes the controller.
    pub fn push_top(&mut self, color: PieceColor) {
        self.pieces.insert(0, color);
    }

    /// Slide a piece underneath the stack.
    pub fn push_bottom(&mut self, color: PieceColor) {
        self.pieces.push(color);
    }

    /// Remove the top piece.
    pub fn pop_top(&mut self) -> Option<PieceColor> {
        if self.pieces.is_empty() {
            None
        } else {
            Some(self.pieces.remove(0))
        }
    }

    /// Remove the bottom piece.
    pub fn pop_bottom(&mut self) -> Option<PieceColor> {
        self.pieces.pop()
    }

    /// Detach the top `count` pieces as their own stack, keeping their order.
    ///
    /// Returns `None` (and leaves `self` untouched) unless
    /// `1 <= count <= len`. Splitting off every piece leaves `self` empty;
    /// the caller is responsible for clearing the cell.
    pub fn split_top(&mut self, count: usize) -> Option<Stack> {
        if count == 0 || count > self.pieces.len() {
            return None;
        }
        let pieces: SmallVec<[PieceColor; INLINE_PIECES]> = self.pieces.drain(..count).collect();
        Some(Stack { pieces })
    }

    /// Put `group` on top of this stack.
    ///
    /// The group keeps its internal order, so its top piece becomes the new
    /// top of the combined stack.
    pub fn place_on_top(&mut self, group: Stack) {
        self.pieces.insert_many(0, group.pieces);
    }
}

impl TryFrom<Vec<PieceColor>> for Stack {
    type Error = EmptyStackError;

    /// Pieces listed top-first.
    fn try_from(pieces: Vec<PieceColor>) -> Result<Self, Self::Error> {
        Self::from_top_first(&pieces).ok_or(EmptyStackError)
    }
}

impl From<Stack> for Vec<PieceColor> {
    fn from(stack: Stack) -> Self {
        stack.pieces.into_vec()
    }
}

impl std::fmt::Display for Stack {
    /// Controller letter followed by height, e.g. `R3`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.top() {
            Some(top) => write!(f, "{}{}", top, self.len()),
            None => write!(f, "-"),
        }
    }
}
