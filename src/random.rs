use rand::{
    distr::{weighted::WeightedIndex, Distribution},
    Rng,
};

/// Where a random walk gets its randomness from.
///
/// Every [`rand::Rng`] is a source, so a seeded generator makes a walk
/// reproducible.
pub trait RandomSource {
    /// An index in `0..n`, uniformly. `n` must be positive.
    fn choose_uniform(&mut self, n: usize) -> usize;

    /// An index into `weights`, with probability proportional to its weight.
    /// `None` if the weights do not describe a distribution.
    fn choose_weighted(&mut self, weights: &[f64]) -> Option<usize>;
}

impl<R: Rng> RandomSource for R {
    fn choose_uniform(&mut self, n: usize) -> usize {
        self.random_range(0..n)
    }

    fn choose_weighted(&mut self, weights: &[f64]) -> Option<usize> {
        let dist = WeightedIndex::<f64>::new(weights).ok()?;
        Some(dist.sample(self))
    }
}
