//! Players, seats, and per-player piece pools.
//!
//! ## PlayerId
//!
//! Seat identifier for the two players. Names are what callers use to act;
//! seats are what the engine indexes by.
//!
//! ## Player
//!
//! Name, color, and the two pools fed by overflow resolution:
//! - reserve: the player's own pieces, waiting to be placed back
//! - captured: opponent pieces, permanently out of play
//!
//! Pools are `im::Vector`s, so cloning a player for a snapshot is O(1) and
//! the snapshot never observes later mutation.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::color::PieceColor;

/// One of the two seats at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// Both seats, first player first.
    pub const ALL: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// 0-based index.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.index() + 1)
    }
}

/// Where an evicted piece ended up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Disposition {
    /// Own piece, back to the reserve.
    Reserved,
    /// Enemy piece, captured.
    Captured,
}

/// A participant: identity plus reserve and capture pools.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    color: PieceColor,
    reserve: Vector<PieceColor>,
    captured: Vector<PieceColor>,
}

impl Player {
    /// Create a player with empty pools.
    pub fn new(name: impl Into<String>, color: PieceColor) -> Self {
        Self {
            name: name.into(),
            color,
            reserve: Vector::new(),
            captured: Vector::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn color(&self) -> PieceColor {
        self.color
    }

    /// Pieces waiting to be placed, oldest first.
    #[must_use]
    pub fn reserve(&self) -> &Vector<PieceColor> {
        &self.reserve
    }

    /// Captured enemy pieces, in capture order.
    #[must_use]
    pub fn captured(&self) -> &Vector<PieceColor> {
        &self.captured
    }

    #[must_use]
    pub fn reserve_count(&self) -> usize {
        self.reserve.len()
    }

    #[must_use]
    pub fn captured_count(&self) -> usize {
        self.captured.len()
    }

    /// Route a piece removed from the bottom of a stack this player built.
    ///
    /// Own color goes to the reserve, anything else is captured. This is
    /// the only way either pool grows, which keeps the reserve single-color
    /// and the capture pool free of the player's own pieces.
    pub fn absorb(&mut self, piece: PieceColor) -> Disposition {
        if piece == self.color {
            self.reserve.push_back(piece);
            Disposition::Reserved
        } else {
            self.captured.push_back(piece);
            Disposition::Captured
        }
    }

    /// Remove the oldest reserve piece, if any.
    pub fn take_reserve(&mut self) -> Option<PieceColor> {
        self.reserve.pop_front()
    }
}

/// The two players, indexable by seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Players {
    seats: [Player; 2],
}

impl Players {
    /// Seat `first` as `PlayerId::One` and `second` as `PlayerId::Two`.
    #[must_use]
    pub fn new(first: Player, second: Player) -> Self {
        Self {
            seats: [first, second],
        }
    }

    /// Seat of the player with this name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<PlayerId> {
        PlayerId::ALL
            .into_iter()
            .find(|&id| self.seats[id.index()].name == name)
    }

    /// Player with this name.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&Player> {
        self.find(name).map(|id| &self[id])
    }

    /// Iterate over (PlayerId, &Player) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        PlayerId::ALL.into_iter().map(move |id| (id, &self.seats[id.index()]))
    }
}

impl Index<PlayerId> for Players {
    type Output = Player;

    fn index(&self, id: PlayerId) -> &Self::Output {
        &self.seats[id.index()]
    }
}

impl IndexMut<PlayerId> for Players {
    fn index_mut(&mut self, id: PlayerId) -> &mut Self::Output {
        &mut self.seats[id.index()]
    }
}
