//! Card definitions - one distinct catalog entry.
//!
//! `CardDefinition` holds what the catalog said about an item: its id, the
//! name shown to the player, and where its image lives. Definitions are
//! immutable once fetched; the board copies them into `BoardCard`s.

use serde::{Deserialize, Serialize};

/// Catalog identifier of a card definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u64);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use memory_cards::cards::{CardDefinition, CardId};
///
/// let card = CardDefinition::new(
///     CardId::new(25),
///     "pikachu",
///     "https://img.example/25.png",
/// );
///
/// assert_eq!(card.display_name, "pikachu");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Catalog identifier.
    pub id: CardId,

    /// Name shown to the player. Pairs are matched on this.
    pub display_name: String,

    /// Image location (URL).
    pub image_ref: String,
}

impl CardDefinition {
    /// Create a new card definition.
    #[must_use]
    pub fn new(id: CardId, display_name: impl Into<String>, image_ref: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            image_ref: image_ref.into(),
        }
    }
}
