//! Flip outcomes.
//!
//! Every flip request resolves to exactly one `FlipOutcome`. The outcome
//! tells the caller whether the board changed, whether the click counts as
//! a move, and whether a flip reset must be scheduled.

use serde::{Deserialize, Serialize};

use super::config::MovePolicy;
use super::entity::BoardIndex;

/// Why a flip request left the board untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// The board has no cards (no game started, or an empty catalog).
    Inactive,
    /// The index does not name a slot on this board.
    OutOfRange,
    /// Two cards are already face up awaiting the reset.
    EvaluationPending,
    /// The card is already part of a found pair.
    AlreadyMatched,
}

impl std::fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            IgnoreReason::Inactive => "no game in progress",
            IgnoreReason::OutOfRange => "no such card",
            IgnoreReason::EvaluationPending => "wait for the cards to turn back",
            IgnoreReason::AlreadyMatched => "card already matched",
        };
        f.write_str(text)
    }
}

/// Result of a flip request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlipOutcome {
    /// First card of a pair turned face up.
    Revealed(BoardIndex),
    /// Second card turned face up and its match key equals the first.
    Matched(BoardIndex, BoardIndex),
    /// Second card turned face up and the keys differ.
    Mismatched(BoardIndex, BoardIndex),
    /// The card was already face up and pending.
    AlreadyFlipped(BoardIndex),
    /// Nothing happened.
    Ignored(IgnoreReason),
}

impl FlipOutcome {
    /// Does this outcome start the evaluation window (and so need a reset)?
    #[must_use]
    pub fn starts_evaluation(&self) -> bool {
        matches!(self, FlipOutcome::Matched(..) | FlipOutcome::Mismatched(..))
    }

    /// Does this outcome increment the move counter under `policy`?
    #[must_use]
    pub fn counts_as_move(&self, policy: MovePolicy) -> bool {
        match self {
            FlipOutcome::Revealed(_) | FlipOutcome::Matched(..) | FlipOutcome::Mismatched(..) => {
                true
            }
            FlipOutcome::AlreadyFlipped(_) => policy == MovePolicy::EveryClick,
            FlipOutcome::Ignored(_) => false,
        }
    }

    /// Was the request rejected outright?
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, FlipOutcome::Ignored(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_evaluation() {
        assert!(FlipOutcome::Matched(BoardIndex(0), BoardIndex(1)).starts_evaluation());
        assert!(FlipOutcome::Mismatched(BoardIndex(0), BoardIndex(1)).starts_evaluation());
        assert!(!FlipOutcome::Revealed(BoardIndex(0)).starts_evaluation());
        assert!(!FlipOutcome::AlreadyFlipped(BoardIndex(0)).starts_evaluation());
        assert!(!FlipOutcome::Ignored(IgnoreReason::EvaluationPending).starts_evaluation());
    }

    #[test]
    fn test_counts_as_move() {
        let repeat = FlipOutcome::AlreadyFlipped(BoardIndex(2));
        assert!(repeat.counts_as_move(MovePolicy::EveryClick));
        assert!(!repeat.counts_as_move(MovePolicy::AcceptedFlips));

        let revealed = FlipOutcome::Revealed(BoardIndex(2));
        assert!(revealed.counts_as_move(MovePolicy::EveryClick));
        assert!(revealed.counts_as_move(MovePolicy::AcceptedFlips));

        let ignored = FlipOutcome::Ignored(IgnoreReason::AlreadyMatched);
        assert!(!ignored.counts_as_move(MovePolicy::EveryClick));
        assert!(ignored.is_ignored());
    }

    #[test]
    fn test_ignore_reason_display() {
        assert_eq!(IgnoreReason::OutOfRange.to_string(), "no such card");
    }

    #[test]
    fn test_outcome_serialization() {
        let outcome = FlipOutcome::Matched(BoardIndex(4), BoardIndex(9));
        let json = serde_json::to_string(&outcome).unwrap();
        let deserialized: FlipOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(outcome, deserialized);
    }
}
