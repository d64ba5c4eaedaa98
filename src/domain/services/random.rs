//! Injectable randomness for scenario generation
//!
//! Generation code never touches a global RNG. It takes `&mut dyn RngCore`
//! and samples through `rand::seq::SliceRandom`, so production can use
//! entropy and tests can use a fixed seed.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// `rand`'s standard RNG, seeded when a seed is supplied
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded when a seed is given, entropy otherwise
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        seed.map(Self::from_seed).unwrap_or_else(Self::from_entropy)
    }
}

impl RngCore for SeededRandom {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}
