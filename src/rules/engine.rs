//! Board rules: building a board and applying flips.
//!
//! All operations are pure: they take a `BoardState` and return a new one.
//! The caller decides which state is current. Cloning a state is O(1), so
//! holding on to the previous state costs nothing.

use im::Vector;
use tracing::debug;

use crate::cards::{BoardCard, CardDefinition, CardSet};
use crate::core::action::{FlipOutcome, IgnoreReason};
use crate::core::config::MovePolicy;
use crate::core::entity::{BoardIndex, GameId};
use crate::core::rng::GameRng;
use crate::core::state::BoardState;
use crate::error::BoardError;

/// A flip applied to a board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    /// The board after the flip. Equal to the input when the flip was ignored.
    pub state: BoardState,
    /// What the flip did.
    pub outcome: FlipOutcome,
}

/// Memory game rules.
///
/// ## Example
///
/// ```
/// use memory_cards::cards::{CardDefinition, CardId, CardSet};
/// use memory_cards::core::{BoardIndex, GameId, GameRng, MovePolicy};
/// use memory_cards::rules::BoardEngine;
///
/// let cards = CardSet::new(vec![
///     CardDefinition::new(CardId::new(1), "owl", "https://img.example/owl.png"),
/// ])
/// .unwrap();
///
/// let engine = BoardEngine::new(MovePolicy::EveryClick);
/// let board = engine.initialize(&cards, GameId::FIRST, &mut GameRng::new(1));
///
/// // One definition -> one pair -> two slots, and they match.
/// let first = engine.flip(&board, BoardIndex(0));
/// let second = engine.flip(&first.state, BoardIndex(1));
/// assert!(second.outcome.starts_evaluation());
/// assert!(second.state.is_complete());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoardEngine {
    policy: MovePolicy,
}

impl BoardEngine {
    /// Create an engine with the given move counting rule.
    #[must_use]
    pub fn new(policy: MovePolicy) -> Self {
        Self { policy }
    }

    /// Move counting rule in effect.
    #[must_use]
    pub fn policy(&self) -> MovePolicy {
        self.policy
    }

    /// Lay out a new board: every definition twice, shuffled.
    ///
    /// Slot indices are assigned after shuffling, so `board_index` always
    /// equals position. An empty set yields an empty, inactive board.
    #[must_use]
    pub fn initialize(&self, cards: &CardSet, game: GameId, rng: &mut GameRng) -> BoardState {
        let mut deck: Vec<&CardDefinition> = cards.iter().chain(cards.iter()).collect();
        rng.shuffle(&mut deck);

        let laid_out: Vector<BoardCard> = deck
            .into_iter()
            .enumerate()
            .map(|(position, definition)| {
                BoardCard::from_definition(definition, BoardIndex(position as u32))
            })
            .collect();

        debug!(%game, slots = laid_out.len(), "board laid out");
        BoardState::with_cards(game, laid_out)
    }

    /// Validate `definitions` and lay out a new board.
    pub fn try_initialize(
        &self,
        definitions: Vec<CardDefinition>,
        game: GameId,
        rng: &mut GameRng,
    ) -> Result<BoardState, BoardError> {
        let cards = CardSet::new(definitions)?;
        Ok(self.initialize(&cards, game, rng))
    }

    /// Decide what a click on `index` does, without applying it.
    #[must_use]
    pub fn evaluate(&self, state: &BoardState, index: BoardIndex) -> FlipOutcome {
        if !state.is_active() {
            return FlipOutcome::Ignored(IgnoreReason::Inactive);
        }
        if !index.in_bounds(state.len()) {
            return FlipOutcome::Ignored(IgnoreReason::OutOfRange);
        }
        if state.evaluation_pending() {
            return FlipOutcome::Ignored(IgnoreReason::EvaluationPending);
        }
        if state.is_matched(index) {
            return FlipOutcome::Ignored(IgnoreReason::AlreadyMatched);
        }
        if state.is_flipped(index) {
            return FlipOutcome::AlreadyFlipped(index);
        }

        match state.flipped().first() {
            None => FlipOutcome::Revealed(index),
            Some(&first) => {
                let is_pair = match (state.card(first), state.card(index)) {
                    (Some(a), Some(b)) => a.matches(b),
                    _ => false,
                };
                if is_pair {
                    FlipOutcome::Matched(first, index)
                } else {
                    FlipOutcome::Mismatched(first, index)
                }
            }
        }
    }

    /// Apply a click on `index`.
    ///
    /// A found pair moves into the matched set right away; the caller is
    /// responsible for scheduling [`BoardEngine::clear_flipped`] whenever
    /// `outcome.starts_evaluation()`.
    #[must_use]
    pub fn flip(&self, state: &BoardState, index: BoardIndex) -> Transition {
        let outcome = self.evaluate(state, index);
        let mut next = state.clone();

        match outcome {
            FlipOutcome::Ignored(reason) => {
                debug!(%index, %reason, "flip ignored");
                return Transition { state: next, outcome };
            }
            FlipOutcome::AlreadyFlipped(_) => {}
            FlipOutcome::Revealed(revealed) => next.push_flipped(revealed),
            FlipOutcome::Mismatched(_, second) => next.push_flipped(second),
            FlipOutcome::Matched(first, second) => {
                next.push_flipped(second);
                next.insert_matched(first, second);
                next = Self::check_completion(&next);
            }
        }

        if outcome.counts_as_move(self.policy) {
            next.increment_moves();
        }

        debug!(%index, ?outcome, moves = next.move_count(), "flip applied");
        Transition { state: next, outcome }
    }

    /// Turn the pending cards face down again.
    ///
    /// Only applies to the game that scheduled it: a reset carrying another
    /// game's id returns the state unchanged.
    #[must_use]
    pub fn clear_flipped(&self, state: &BoardState, game: GameId) -> BoardState {
        let mut next = state.clone();
        if state.game() == game {
            next.clear_flipped();
        } else {
            debug!(scheduled = %game, current = %state.game(), "stale flip reset dropped");
        }
        next
    }

    /// Mark the board complete once every slot is matched.
    #[must_use]
    pub fn check_completion(state: &BoardState) -> BoardState {
        let mut next = state.clone();
        let complete = next.is_active() && next.matched_count() == next.len();
        next.set_complete(complete);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;

    fn cards(names: &[&str]) -> CardSet {
        let defs = names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                CardDefinition::new(
                    CardId::new(i as u64),
                    *name,
                    format!("https://img.example/{name}.png"),
                )
            })
            .collect();
        CardSet::new(defs).unwrap()
    }

    /// Slots holding `key`, ascending.
    fn slots_of(state: &BoardState, key: &str) -> Vec<BoardIndex> {
        state
            .cards()
            .filter(|c| c.match_key == key)
            .map(|c| c.board_index)
            .collect()
    }

    fn new_board(names: &[&str]) -> (BoardEngine, BoardState) {
        let engine = BoardEngine::default();
        let state = engine.initialize(&cards(names), GameId::FIRST, &mut GameRng::new(42));
        (engine, state)
    }

    #[test]
    fn test_initialize_doubles_and_indexes() {
        let (_, state) = new_board(&["a", "b", "c"]);

        assert_eq!(state.len(), 6);
        for (position, card) in state.cards().enumerate() {
            assert_eq!(card.board_index, BoardIndex(position as u32));
            assert!(!card.is_flipped);
        }
        for key in ["a", "b", "c"] {
            assert_eq!(slots_of(&state, key).len(), 2);
        }
        assert_eq!(state.move_count(), 0);
        assert!(!state.is_complete());
    }

    #[test]
    fn test_initialize_empty_is_inactive() {
        let (engine, state) = new_board(&[]);

        assert!(state.is_empty());
        assert!(!state.is_complete());
        let transition = engine.flip(&state, BoardIndex(0));
        assert_eq!(transition.outcome, FlipOutcome::Ignored(IgnoreReason::Inactive));
        assert_eq!(transition.state, state);
    }

    #[test]
    fn test_try_initialize_rejects_duplicates() {
        let engine = BoardEngine::default();
        let defs = vec![
            CardDefinition::new(CardId::new(1), "a", "x"),
            CardDefinition::new(CardId::new(2), "a", "y"),
        ];
        let result = engine.try_initialize(defs, GameId::FIRST, &mut GameRng::new(1));
        assert_eq!(result, Err(BoardError::DuplicateDisplayName("a".into())));
    }

    #[test]
    fn test_first_flip_reveals() {
        let (engine, state) = new_board(&["a", "b"]);

        let t = engine.flip(&state, BoardIndex(0));

        assert_eq!(t.outcome, FlipOutcome::Revealed(BoardIndex(0)));
        assert_eq!(t.state.flipped(), &[BoardIndex(0)]);
        assert!(t.state.card(BoardIndex(0)).unwrap().is_flipped);
        assert_eq!(t.state.move_count(), 1);
        // Input state untouched
        assert!(state.flipped().is_empty());
    }

    #[test]
    fn test_matching_pair() {
        let (engine, state) = new_board(&["a", "b"]);
        let a = slots_of(&state, "a");

        let t1 = engine.flip(&state, a[0]);
        let t2 = engine.flip(&t1.state, a[1]);

        assert_eq!(t2.outcome, FlipOutcome::Matched(a[0], a[1]));
        assert!(t2.state.is_matched(a[0]));
        assert!(t2.state.is_matched(a[1]));
        assert!(t2.state.evaluation_pending());
        assert!(!t2.state.is_complete());
        assert_eq!(t2.state.move_count(), 2);
    }

    #[test]
    fn test_mismatched_pair() {
        let (engine, state) = new_board(&["a", "b"]);
        let a = slots_of(&state, "a")[0];
        let b = slots_of(&state, "b")[0];

        let t1 = engine.flip(&state, a);
        let t2 = engine.flip(&t1.state, b);

        assert_eq!(t2.outcome, FlipOutcome::Mismatched(a, b));
        assert_eq!(t2.state.matched_count(), 0);
        assert!(t2.state.evaluation_pending());
    }

    #[test]
    fn test_third_click_ignored_while_pending() {
        let (engine, state) = new_board(&["a", "b"]);
        let t1 = engine.flip(&state, BoardIndex(0));
        let t2 = engine.flip(&t1.state, BoardIndex(1));

        let t3 = engine.flip(&t2.state, BoardIndex(2));

        assert_eq!(t3.outcome, FlipOutcome::Ignored(IgnoreReason::EvaluationPending));
        assert!(!t3.outcome.starts_evaluation());
        assert_eq!(t3.state, t2.state);
    }

    #[test]
    fn test_matched_card_ignored() {
        let (engine, state) = new_board(&["a", "b"]);
        let a = slots_of(&state, "a");
        let t1 = engine.flip(&state, a[0]);
        let t2 = engine.flip(&t1.state, a[1]);
        let cleared = engine.clear_flipped(&t2.state, GameId::FIRST);

        let t3 = engine.flip(&cleared, a[0]);

        assert_eq!(t3.outcome, FlipOutcome::Ignored(IgnoreReason::AlreadyMatched));
        assert_eq!(t3.state, cleared);
    }

    #[test]
    fn test_out_of_range_ignored() {
        let (engine, state) = new_board(&["a"]);
        let t = engine.flip(&state, BoardIndex(2));
        assert_eq!(t.outcome, FlipOutcome::Ignored(IgnoreReason::OutOfRange));
        assert_eq!(t.state.move_count(), 0);
    }

    #[test]
    fn test_repeat_click_counts_under_every_click() {
        let (engine, state) = new_board(&["a", "b"]);
        let t1 = engine.flip(&state, BoardIndex(0));
        let t2 = engine.flip(&t1.state, BoardIndex(0));

        assert_eq!(t2.outcome, FlipOutcome::AlreadyFlipped(BoardIndex(0)));
        assert_eq!(t2.state.flipped(), &[BoardIndex(0)]);
        assert_eq!(t2.state.matched_count(), 0);
        assert_eq!(t2.state.move_count(), 2);
    }

    #[test]
    fn test_repeat_click_free_under_accepted_flips() {
        let engine = BoardEngine::new(MovePolicy::AcceptedFlips);
        let state = engine.initialize(&cards(&["a", "b"]), GameId::FIRST, &mut GameRng::new(42));

        let t1 = engine.flip(&state, BoardIndex(0));
        let t2 = engine.flip(&t1.state, BoardIndex(0));

        assert_eq!(t2.state.move_count(), 1);
    }

    #[test]
    fn test_clear_flipped_scoped_to_game() {
        let (engine, state) = new_board(&["a", "b"]);
        let t1 = engine.flip(&state, BoardIndex(0));

        let stale = engine.clear_flipped(&t1.state, GameId::new(99));
        assert_eq!(stale.flipped(), &[BoardIndex(0)]);

        let cleared = engine.clear_flipped(&t1.state, GameId::FIRST);
        assert!(cleared.flipped().is_empty());
        assert!(cleared.cards().all(|c| !c.is_flipped));
    }

    #[test]
    fn test_completion() {
        let (engine, mut state) = new_board(&["a", "b"]);

        for key in ["a", "b"] {
            let slots = slots_of(&state, key);
            let t1 = engine.flip(&state, slots[0]);
            let t2 = engine.flip(&t1.state, slots[1]);
            state = engine.clear_flipped(&t2.state, GameId::FIRST);
        }

        assert!(state.is_complete());
        assert_eq!(state.matched_count(), 4);
        assert_eq!(state.move_count(), 4);
    }

    #[test]
    fn test_check_completion_on_empty_board() {
        let state = BoardState::empty(GameId::FIRST);
        assert!(!BoardEngine::check_completion(&state).is_complete());
    }
}
