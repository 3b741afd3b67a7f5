//! Validated card sets.
//!
//! A board can only tell pairs apart when every definition has its own
//! display name. `CardSet` enforces that once, at construction.

use rustc_hash::FxHashSet;

use super::definition::CardDefinition;
use crate::error::BoardError;

/// Definitions that are pairwise distinct by display name.
///
/// ## Example
///
/// ```
/// use memory_cards::cards::{CardDefinition, CardId, CardSet};
///
/// let set = CardSet::new(vec![
///     CardDefinition::new(CardId::new(1), "owl", "https://img.example/owl.png"),
///     CardDefinition::new(CardId::new(2), "fox", "https://img.example/fox.png"),
/// ])
/// .unwrap();
///
/// assert_eq!(set.len(), 2);
///
/// let duplicate = CardSet::new(vec![
///     CardDefinition::new(CardId::new(1), "owl", "https://img.example/a.png"),
///     CardDefinition::new(CardId::new(2), "owl", "https://img.example/b.png"),
/// ]);
/// assert!(duplicate.is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardSet {
    cards: Vec<CardDefinition>,
}

impl CardSet {
    /// Validate and wrap a list of definitions.
    pub fn new(cards: Vec<CardDefinition>) -> Result<Self, BoardError> {
        let mut seen = FxHashSet::default();
        for card in &cards {
            if !seen.insert(card.display_name.as_str()) {
                return Err(BoardError::DuplicateDisplayName(card.display_name.clone()));
            }
        }
        Ok(Self { cards })
    }

    /// Number of distinct definitions (pairs on the board).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over the definitions.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.iter()
    }

    /// The definitions as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[CardDefinition] {
        &self.cards
    }
}

impl TryFrom<Vec<CardDefinition>> for CardSet {
    type Error = BoardError;

    fn try_from(cards: Vec<CardDefinition>) -> Result<Self, Self::Error> {
        Self::new(cards)
    }
}
