//! Deterministic random number generation for board shuffles.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical boards
//! - **Forkable**: Each game draws from its own independent stream
//! - **Uniform shuffles**: Fisher–Yates over a ChaCha8 stream
//!
//! ## Usage
//!
//! ```
//! use memory_cards::core::GameRng;
//!
//! let mut session_rng = GameRng::new(42);
//!
//! // One stream per game
//! let mut game_rng = session_rng.fork();
//!
//! let mut slots = vec![0, 1, 2, 3, 4, 5];
//! game_rng.shuffle(&mut slots);
//!
//! // Same seed, same fork counter, same board
//! let mut replay = GameRng::new(42).fork();
//! let mut replayed = vec![0, 1, 2, 3, 4, 5];
//! replay.shuffle(&mut replayed);
//! assert_eq!(slots, replayed);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG with per-game forking.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from the thread RNG.
    ///
    /// The chosen seed is available through [`GameRng::seed`] so a game can
    /// be replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent stream.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Shuffle a slice in place.
    ///
    /// `SliceRandom::shuffle` is a Fisher–Yates shuffle, so every permutation
    /// is equally likely.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        let mut a: Vec<u32> = (0..20).collect();
        let mut b: Vec<u32> = (0..20).collect();
        rng1.shuffle(&mut a);
        rng2.shuffle(&mut b);

        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let mut a: Vec<u32> = (0..20).collect();
        let mut b: Vec<u32> = (0..20).collect();
        rng1.shuffle(&mut a);
        rng2.shuffle(&mut b);

        assert_ne!(a, b);
    }

    #[test]
    fn test_fork_produces_different_sequence() {
        let mut rng = GameRng::new(42);
        let mut first = rng.fork();
        let mut second = rng.fork();

        let mut a: Vec<u32> = (0..20).collect();
        let mut b: Vec<u32> = (0..20).collect();
        first.shuffle(&mut a);
        second.shuffle(&mut b);

        assert_ne!(a, b);
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        let forked1 = rng1.fork();
        let forked2 = rng2.fork();

        assert_eq!(forked1.seed(), forked2.seed());
    }

    #[test]
    fn test_from_entropy_records_seed() {
        let rng = GameRng::from_entropy();
        let replay = GameRng::new(rng.seed());
        assert_eq!(rng.seed(), replay.seed());
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut rng = GameRng::new(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let original = data.clone();

        rng.shuffle(&mut data);

        assert_eq!(data.len(), original.len());
        assert_ne!(data, original);

        data.sort();
        assert_eq!(data, original);
    }

    #[test]
    fn test_shuffle_is_uniform() {
        // 3 elements -> 6 permutations, each expected 1/6 of the time.
        const TRIALS: usize = 60_000;
        let mut rng = GameRng::new(7);
        let mut counts = rustc_hash::FxHashMap::default();

        for _ in 0..TRIALS {
            let mut data = [0u8, 1, 2];
            rng.shuffle(&mut data);
            *counts.entry(data).or_insert(0usize) += 1;
        }

        assert_eq!(counts.len(), 6);
        let expected = TRIALS / 6;
        for (perm, count) in counts {
            let deviation = count.abs_diff(expected);
            assert!(
                deviation < expected / 20,
                "permutation {:?} seen {} times, expected about {}",
                perm,
                count,
                expected
            );
        }
    }
}
