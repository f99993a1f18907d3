use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// A source of uniformly distributed indices backed by its own PCG engine.
///
/// Every instance is seeded independently, so two queues (or two iterator
/// views over the same queue) never share generator state.
#[derive(Debug)]
pub struct RandomSource {
    rng: Pcg64Mcg,
}

impl RandomSource {
    /// Creates a source seeded from the operating system's entropy pool.
    pub fn new() -> Self {
        RandomSource {
            rng: Pcg64Mcg::from_entropy(),
        }
    }

    /// Creates a source whose draws are reproducible for a given `seed`.
    pub fn from_seed(seed: u64) -> Self {
        RandomSource {
            rng: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    /// Returns an integer `x` with `lo <= x <= hi`, every value equally likely.
    ///
    /// # Panics
    ///
    /// Panics if `lo > hi`.
    pub fn draw(&mut self, lo: usize, hi: usize) -> usize {
        self.rng.gen_range(lo..=hi)
    }

    /// Builds a uniformly random permutation of `0..n` with the Fisher-Yates shuffle.
    pub fn permutation(&mut self, n: usize) -> Vec<usize> {
        let mut order: Vec<usize> = (0..n).collect();
        for i in (1..=n).rev() {
            let j = self.draw(0, i - 1);
            order.swap(i - 1, j);
        }

        order
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::new()
    }
}
