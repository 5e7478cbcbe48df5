use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Deterministic random source for one game session.
///
/// Every randomized engine operation takes `&mut SessionRng`, so a whole
/// session can be reproduced from its seed and move list alone.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }

    pub fn random_bool(&mut self) -> bool {
        self.rng.random()
    }

    /// Uniform index into a slice of `len` elements. `len` must be nonzero.
    pub fn random_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }

    /// In-place Fisher-Yates shuffle.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.rng.random_range(0..=i);
            slice.swap(i, j);
        }
    }

    /// Splits off an independent stream seeded from this one.
    pub fn fork(&mut self) -> SessionRng {
        SessionRng::new(self.rng.random())
    }
}
