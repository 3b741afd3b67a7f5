//! Deferred flip resets.

use tokio::time::Instant;

use crate::core::GameId;

/// A scheduled "turn the pending cards back" for one game.
///
/// At most one reset is pending per session: a reset is only scheduled when
/// the second card of a pair flips, and no further flip is accepted until it
/// fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingReset {
    /// Game that scheduled the reset.
    pub game: GameId,
    /// When the reset becomes due.
    pub due: Instant,
}

impl PendingReset {
    /// Create a reset for `game`, due at `due`.
    #[must_use]
    pub fn new(game: GameId, due: Instant) -> Self {
        Self { game, due }
    }

    /// Has the deadline passed at `now`?
    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.due
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_is_due() {
        let now = Instant::now();
        let reset = PendingReset::new(GameId::FIRST, now + Duration::from_millis(500));

        assert!(!reset.is_due(now));
        assert!(!reset.is_due(now + Duration::from_millis(499)));
        assert!(reset.is_due(now + Duration::from_millis(500)));
        assert!(reset.is_due(now + Duration::from_secs(2)));
    }
}
