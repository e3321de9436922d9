//! Seeded randomness for generation and population.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

/// ChaCha8 stream used for one level. Every random decision of a level draws from it,
/// so a `(run_seed, level)` pair reproduces the same layout and population.
#[derive(Clone, Debug)]
pub struct LevelRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl LevelRng {
    pub fn new(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed), seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform integer in `min..=max`.
    pub fn randint(&mut self, min: i32, max: i32) -> i32 {
        debug_assert!(min <= max);
        let span = (i64::from(max) - i64::from(min) + 1) as u64;
        let offset = self.rng.next_u64() % span;
        (i64::from(min) + offset as i64) as i32
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    pub fn index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        (self.rng.next_u64() % len as u64) as usize
    }

    /// True with probability `1 / n`.
    pub fn one_in(&mut self, n: u32) -> bool {
        n <= 1 || self.rng.next_u64() % u64::from(n) == 0
    }

    pub fn coin_flip(&mut self) -> bool {
        self.rng.next_u32() & 1 == 0
    }

    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = self.index(items.len());
        items.get(index)
    }
}

/// Mixes a run seed with a dungeon level so each level gets an independent stream.
pub fn derive_level_seed(run_seed: u64, level: u32) -> u64 {
    let mut mixed = run_seed ^ 0x9E37_79B9_7F4A_7C15;
    mixed ^= u64::from(level).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    mixed ^= mixed >> 30;
    mixed = mixed.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    mixed ^= mixed >> 27;
    mixed = mixed.wrapping_mul(0x94D0_49BB_1331_11EB);
    mixed ^ (mixed >> 31)
}
