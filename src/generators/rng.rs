use rand::prelude::*;

/// Uniform integer source consumed by the generators.
pub trait RandomSource {
    /// Uniform pick from `0..n`. Callers never pass `n == 0`.
    fn pick(&mut self, n: usize) -> usize;
}

/// Seeded `StdRng`; the same seed replays the same sequence of picks.
#[derive(Debug, Clone)]
pub struct SeededSource {
    seed: u64,
    rng: StdRng,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Rewinds to the start of the seeded sequence.
    pub fn reseed(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
    }
}

impl RandomSource for SeededSource {
    fn pick(&mut self, n: usize) -> usize {
        self.rng.gen_range(0, n)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn pick(&mut self, n: usize) -> usize {
        (**self).pick(n)
    }
}
