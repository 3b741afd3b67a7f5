//! Game configuration types.
//!
//! - `MovePolicy`: Which clicks count as moves
//! - `GameConfig`: Timing, move counting and seeding for a session

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Delay before a pair of flipped cards turns face down again.
pub const DEFAULT_FLIP_RESET_DELAY: Duration = Duration::from_millis(1000);

/// Which clicks increment the move counter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MovePolicy {
    /// Every click that is not blocked counts, including a repeat click
    /// on a card that is already face up and pending evaluation.
    #[default]
    EveryClick,
    /// Only clicks that reveal a new card count.
    AcceptedFlips,
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// How long a flipped pair stays face up before it is reset.
    pub flip_reset_delay: Duration,

    /// Move counting rule.
    pub move_policy: MovePolicy,

    /// Session seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            flip_reset_delay: DEFAULT_FLIP_RESET_DELAY,
            move_policy: MovePolicy::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a configuration with the default delay and move policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the flip reset delay.
    #[must_use]
    pub fn with_flip_reset_delay(mut self, delay: Duration) -> Self {
        self.flip_reset_delay = delay;
        self
    }

    /// Set the move counting rule.
    #[must_use]
    pub fn with_move_policy(mut self, policy: MovePolicy) -> Self {
        self.move_policy = policy;
        self
    }

    /// Use a fixed seed for reproducible shuffles.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.flip_reset_delay, Duration::from_millis(1000));
        assert_eq!(config.move_policy, MovePolicy::EveryClick);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::new()
            .with_flip_reset_delay(Duration::from_millis(250))
            .with_move_policy(MovePolicy::AcceptedFlips)
            .with_seed(123);

        assert_eq!(config.flip_reset_delay, Duration::from_millis(250));
        assert_eq!(config.move_policy, MovePolicy::AcceptedFlips);
        assert_eq!(config.seed, Some(123));
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default().with_seed(9);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
