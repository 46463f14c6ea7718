//! Deterministic random number generation.
//!
//! RULE: Nothing in the simulation may call any platform RNG.
//! All randomness flows through the single `GameRng` owned by the
//! `Company`, seeded from the master seed supplied at construction.
//! Identical seed + identical command sequence = identical playthrough.
//!
//! The draw order within a quarter is part of the engine contract and
//! is documented in `company.rs`. Adding a draw anywhere changes every
//! subsequent roll of the run.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// The deterministic RNG for one playthrough.
pub struct GameRng {
    inner: Pcg64Mcg,
}

impl GameRng {
    pub fn from_seed(master_seed: u64) -> Self {
        Self {
            inner: Pcg64Mcg::seed_from_u64(master_seed),
        }
    }

    /// Draw a raw u64 (full range).
    pub fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    /// Roll a float in [0.0, 1.0) with 53 bits of precision.
    pub fn next_f64(&mut self) -> f64 {
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Roll a float uniformly in [lo, hi).
    pub fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    /// Bernoulli trial: returns true with probability p.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Roll an index in [0, len).
    pub fn pick_index(&mut self, len: usize) -> usize {
        assert!(len > 0, "len must be > 0");
        (self.next_u64() % len as u64) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = GameRng::from_seed(42);
        let mut b = GameRng::from_seed(42);
        for _ in 0..100 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn uniform_stays_in_range() {
        let mut rng = GameRng::from_seed(7);
        for _ in 0..1000 {
            let x = rng.uniform(0.98, 1.02);
            assert!((0.98..1.02).contains(&x));
        }
    }

    #[test]
    fn pick_index_stays_in_range() {
        let mut rng = GameRng::from_seed(9);
        for _ in 0..1000 {
            assert!(rng.pick_index(12) < 12);
        }
    }
}
