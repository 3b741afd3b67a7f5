//! Board state.
//!
//! ## BoardState
//!
//! Everything one game consists of:
//! - The laid-out cards, indexed by slot
//! - The (at most two) face-up cards pending evaluation
//! - The slots whose pairs have been found
//! - Move counter and completion flag
//!
//! Uses `im` persistent data structures, so every transition can return a
//! new state while the previous one stays valid, and cloning is O(1).
//! The fields are read-only outside the crate; only the rules engine
//! produces new states. A deserialized state is checked against the board
//! invariants before it is accepted.

use im::{OrdSet, Vector};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::entity::{BoardIndex, GameId};
use crate::cards::BoardCard;
use crate::error::BoardError;

/// State of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedBoardState")]
pub struct BoardState {
    /// Game this board belongs to.
    game: GameId,

    /// Cards by slot. `cards[i].board_index == i`.
    cards: Vector<BoardCard>,

    /// Face-up slots pending evaluation, in click order.
    flipped: SmallVec<[BoardIndex; 2]>,

    /// Slots whose pair has been found.
    matched: OrdSet<BoardIndex>,

    /// Counted clicks.
    move_count: u32,

    /// All pairs found.
    is_complete: bool,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::empty(GameId::NONE)
    }
}

impl BoardState {
    /// An empty, inactive board.
    #[must_use]
    pub fn empty(game: GameId) -> Self {
        Self {
            game,
            cards: Vector::new(),
            flipped: SmallVec::new(),
            matched: OrdSet::new(),
            move_count: 0,
            is_complete: false,
        }
    }

    /// A fresh board with the given cards, all face down.
    pub(crate) fn with_cards(game: GameId, cards: Vector<BoardCard>) -> Self {
        Self {
            cards,
            ..Self::empty(game)
        }
    }

    // === Queries ===

    /// Game this board belongs to.
    #[must_use]
    pub fn game(&self) -> GameId {
        self.game
    }

    /// Cards in slot order.
    pub fn cards(&self) -> impl Iterator<Item = &BoardCard> {
        self.cards.iter()
    }

    /// Card in a slot.
    #[must_use]
    pub fn card(&self, index: BoardIndex) -> Option<&BoardCard> {
        self.cards.get(index.as_usize())
    }

    /// Number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the board has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// A board accepts flips only when it has cards.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.cards.is_empty()
    }

    /// Face-up slots pending evaluation.
    #[must_use]
    pub fn flipped(&self) -> &[BoardIndex] {
        &self.flipped
    }

    /// Are two cards face up awaiting the reset?
    #[must_use]
    pub fn evaluation_pending(&self) -> bool {
        self.flipped.len() == 2
    }

    /// Found slots, ascending.
    pub fn matched(&self) -> impl Iterator<Item = &BoardIndex> {
        self.matched.iter()
    }

    /// Number of found slots.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.matched.len()
    }

    /// Is this slot part of a found pair?
    #[must_use]
    pub fn is_matched(&self, index: BoardIndex) -> bool {
        self.matched.contains(&index)
    }

    /// Is this slot pending evaluation?
    #[must_use]
    pub fn is_flipped(&self, index: BoardIndex) -> bool {
        self.flipped.contains(&index)
    }

    /// Should this slot show its image?
    #[must_use]
    pub fn is_face_up(&self, index: BoardIndex) -> bool {
        self.is_flipped(index) || self.is_matched(index)
    }

    /// Pairs not yet found.
    #[must_use]
    pub fn remaining_pairs(&self) -> usize {
        self.cards.len().saturating_sub(self.matched.len()) / 2
    }

    /// Counted clicks so far.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// All pairs found.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    // === Transitions (rules engine only) ===

    /// Turn a slot face up. The caller checks the slot exists and is not pending.
    pub(crate) fn push_flipped(&mut self, index: BoardIndex) {
        self.flipped.push(index);
        self.set_card_flipped(index, true);
    }

    /// Turn all pending slots face down.
    pub(crate) fn clear_flipped(&mut self) {
        let pending: SmallVec<[BoardIndex; 2]> = std::mem::take(&mut self.flipped);
        for index in pending {
            self.set_card_flipped(index, false);
        }
    }

    /// Record a found pair.
    pub(crate) fn insert_matched(&mut self, first: BoardIndex, second: BoardIndex) {
        self.matched.insert(first);
        self.matched.insert(second);
    }

    pub(crate) fn increment_moves(&mut self) {
        self.move_count += 1;
    }

    pub(crate) fn set_complete(&mut self, complete: bool) {
        self.is_complete = complete;
    }

    fn set_card_flipped(&mut self, index: BoardIndex, flipped: bool) {
        if let Some(card) = self.cards.get(index.as_usize()) {
            let updated = card.with_flipped(flipped);
            self.cards.set(index.as_usize(), updated);
        }
    }
}

/// Wire form of [`BoardState`], before the invariants are checked.
#[derive(Deserialize)]
struct UncheckedBoardState {
    game: GameId,
    cards: Vector<BoardCard>,
    flipped: SmallVec<[BoardIndex; 2]>,
    matched: OrdSet<BoardIndex>,
    move_count: u32,
    is_complete: bool,
}

impl TryFrom<UncheckedBoardState> for BoardState {
    type Error = BoardError;

    fn try_from(raw: UncheckedBoardState) -> Result<Self, Self::Error> {
        let invalid =
            |msg: String| -> Result<Self, BoardError> { Err(BoardError::InvalidState(msg)) };
        let len = raw.cards.len();

        if len % 2 != 0 {
            return invalid(format!("odd number of cards ({len})"));
        }
        if raw.flipped.len() > 2 {
            return invalid(format!("{} cards pending, at most 2 allowed", raw.flipped.len()));
        }
        if raw.flipped.len() == 2 && raw.flipped[0] == raw.flipped[1] {
            return invalid(format!("{} pending twice", raw.flipped[0]));
        }
        if let Some(index) = raw.flipped.iter().find(|i| !i.in_bounds(len)) {
            return invalid(format!("pending {index} is not on the board"));
        }
        if let Some(index) = raw.matched.iter().find(|i| !i.in_bounds(len)) {
            return invalid(format!("matched {index} is not on the board"));
        }
        for (position, card) in raw.cards.iter().enumerate() {
            if card.board_index.as_usize() != position {
                return invalid(format!("{} stored at position {position}", card.board_index));
            }
            if card.is_flipped != raw.flipped.contains(&card.board_index) {
                let index = card.board_index;
                return invalid(format!("{index} face-up flag disagrees with pending set"));
            }
        }
        if raw.is_complete != (len > 0 && raw.matched.len() == len) {
            return invalid(format!(
                "completion flag {} with {} of {len} slots matched",
                raw.is_complete,
                raw.matched.len()
            ));
        }

        Ok(Self {
            game: raw.game,
            cards: raw.cards,
            flipped: raw.flipped,
            matched: raw.matched,
            move_count: raw.move_count,
            is_complete: raw.is_complete,
        })
    }
}
