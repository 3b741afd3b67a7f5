//! Board cards - one slot of a laid-out board.
//!
//! `BoardCard` is a `CardDefinition` placed on the board. Every definition
//! produces two board cards. The slot's `board_index` is its identity for
//! all interaction; `match_key` decides which slots form a pair.

use serde::{Deserialize, Serialize};

use super::definition::{CardDefinition, CardId};
use crate::core::entity::BoardIndex;

/// A card in a board slot.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardCard {
    /// Catalog id of the originating definition. Shared by both cards of a pair.
    pub id: CardId,

    /// Name shown when face up.
    pub display_name: String,

    /// Image shown when face up.
    pub image_ref: String,

    /// Slot identity, unique within the board.
    pub board_index: BoardIndex,

    /// Face up and pending evaluation.
    pub is_flipped: bool,

    /// Pair key; equal to the originating display name.
    pub match_key: String,
}

impl BoardCard {
    /// Place a definition into a slot, face down.
    #[must_use]
    pub fn from_definition(definition: &CardDefinition, board_index: BoardIndex) -> Self {
        Self {
            id: definition.id,
            display_name: definition.display_name.clone(),
            image_ref: definition.image_ref.clone(),
            board_index,
            is_flipped: false,
            match_key: definition.display_name.clone(),
        }
    }

    /// Do these two slots form a pair?
    #[must_use]
    pub fn matches(&self, other: &BoardCard) -> bool {
        self.match_key == other.match_key
    }

    /// Copy of this card with `is_flipped` set to `flipped`.
    #[must_use]
    pub fn with_flipped(&self, flipped: bool) -> Self {
        Self {
            is_flipped: flipped,
            ..self.clone()
        }
    }
}
