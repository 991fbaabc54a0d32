//! The session's single source of randomness.
//!
//! Every uniform pick and every Bernoulli roll in the engine goes through
//! [`Entropy`], so a test can swap in [`ScriptedEntropy`] and assert exact
//! template indices.
//!
//! [`ScriptedEntropy`]: crate::testing::ScriptedEntropy

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Randomness as the engine consumes it.
pub trait Entropy {
    /// Returns a uniform index in `0..bound`. `bound` is never zero.
    fn below(&mut self, bound: usize) -> usize;

    /// Returns true with the given probability.
    fn chance(&mut self, probability: f64) -> bool;

    /// Returns a uniform value in `low..=high`.
    fn between(&mut self, low: u64, high: u64) -> u64;
}

/// Production randomness backed by ChaCha8.
#[derive(Debug, Clone)]
pub struct SeededEntropy {
    rng: ChaCha8Rng,
}

impl SeededEntropy {
    /// Creates a reproducible source from a seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates a source seeded from the operating system.
    pub fn from_os() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }
}

impl Entropy for SeededEntropy {
    fn below(&mut self, bound: usize) -> usize {
        self.rng.gen_range(0..bound.max(1))
    }

    fn chance(&mut self, probability: f64) -> bool {
        self.rng.gen_bool(probability.clamp(0.0, 1.0))
    }

    fn between(&mut self, low: u64, high: u64) -> u64 {
        if high <= low {
            return low;
        }
        self.rng.gen_range(low..=high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SeededEntropy::from_seed(7);
        let mut b = SeededEntropy::from_seed(7);
        let left: Vec<_> = (0..16).map(|_| a.below(10)).collect();
        let right: Vec<_> = (0..16).map(|_| b.below(10)).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn test_between_stays_in_range() {
        let mut entropy = SeededEntropy::from_seed(1);
        for _ in 0..200 {
            let value = entropy.between(2000, 8000);
            assert!((2000..=8000).contains(&value));
        }
        assert_eq!(entropy.between(5, 5), 5);
    }

    #[test]
    fn test_chance_extremes() {
        let mut entropy = SeededEntropy::from_seed(3);
        assert!((0..50).all(|_| !entropy.chance(0.0)));
        assert!((0..50).all(|_| entropy.chance(1.0)));
    }
}
