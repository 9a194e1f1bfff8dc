//! Deterministic random number generation for number draws.
//!
//! The caller owns a `DrawRng` and passes it into the draw helpers in
//! `numbers::draw`, so tests can replay the exact same calls from a seed.
//!
//! ```
//! use bingo_card::core::DrawRng;
//!
//! let mut a = DrawRng::new(42);
//! let mut b = DrawRng::new(42);
//! assert_eq!(a.gen_inclusive(1, 90), b.gen_inclusive(1, 90));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Seedable RNG used by the caller of a bingo game.
///
/// Uses ChaCha8 so the same seed produces the same calls on every platform.
#[derive(Clone, Debug)]
pub struct DrawRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DrawRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the thread-local entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform integer in `[low, high]`. Callers guarantee `low <= high`.
    pub fn gen_inclusive(&mut self, low: u32, high: u32) -> u32 {
        self.inner.gen_range(low..=high)
    }

    /// Pick `amount` distinct indices from `0..length`, in draw order.
    ///
    /// Callers guarantee `amount <= length`.
    pub fn sample_indices(&mut self, length: usize, amount: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.inner, length, amount).into_vec()
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> DrawRngState {
        DrawRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &DrawRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state, so a half-played game can be resumed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = DrawRng::new(42);
        let mut rng2 = DrawRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_inclusive(1, 90), rng2.gen_inclusive(1, 90));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = DrawRng::new(1);
        let mut rng2 = DrawRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.gen_inclusive(1, 1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.gen_inclusive(1, 1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_sample_indices_distinct() {
        let mut rng = DrawRng::new(7);
        let mut picked = rng.sample_indices(20, 20);
        picked.sort_unstable();
        assert_eq!(picked, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_state_roundtrip_resumes_sequence() {
        let mut rng = DrawRng::new(42);
        for _ in 0..50 {
            rng.gen_inclusive(1, 90);
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.gen_inclusive(1, 90)).collect();

        let mut restored = DrawRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.gen_inclusive(1, 90)).collect();

        assert_eq!(expected, actual);
        assert_eq!(restored.seed(), 42);
    }

    #[test]
    fn test_state_serde() {
        let state = DrawRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: DrawRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
