//! Slot and game identification.
//!
//! Every card slot on a board has a `BoardIndex`. Indices are assigned after
//! shuffling and run contiguously from `0` to `2N - 1`, so they double as
//! positions in the board's card sequence.
//!
//! Every game started by a session has a `GameId`. Ids grow by one per game
//! and are used to scope deferred work (the flip reset) to the game that
//! scheduled it.
//!
//! ## Usage
//!
//! ```
//! use memory_cards::core::{BoardIndex, GameId};
//!
//! let slot = BoardIndex::new(3);
//! assert_eq!(slot.as_usize(), 3);
//! assert!(slot.in_bounds(4));
//! assert!(!slot.in_bounds(3));
//!
//! let first = GameId::FIRST;
//! assert_eq!(first.next(), GameId::new(2));
//! ```

use serde::{Deserialize, Serialize};

/// Identity of one card slot on a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BoardIndex(pub u32);

impl BoardIndex {
    /// Create a slot index.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Get the raw index value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Position of this slot in the card sequence.
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// Check whether this slot exists on a board of `len` cards.
    #[must_use]
    pub const fn in_bounds(self, len: usize) -> bool {
        (self.0 as usize) < len
    }
}

impl From<u32> for BoardIndex {
    fn from(index: u32) -> Self {
        Self(index)
    }
}

impl std::fmt::Display for BoardIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Slot({})", self.0)
    }
}

/// Generation counter for games within one session.
///
/// `GameId(0)` is reserved for the empty board a session starts with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GameId(pub u64);

impl GameId {
    /// The empty, never-started board.
    pub const NONE: Self = Self(0);

    /// The first real game of a session.
    pub const FIRST: Self = Self(1);

    /// Create a game id.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The id of the game that follows this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Get the raw id value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Game({})", self.0)
    }
}
