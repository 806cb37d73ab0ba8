use rand::prelude::*;

use crate::config::DEFAULT_PROBABILITY;

/// Upon the insertion of a new node in the list, the node is replicated to high
/// levels with a certain probability as determined by a `LevelGenerator`.
pub trait LevelGenerator {
    /// Generate a height for a new node in the range `[1, max_level]`.
    ///
    /// The list passes its current height plus one as `max_level`, so the
    /// list can only ever grow by one level per insertion. This must never
    /// return `0` or anything above `max_level`.
    fn random(&mut self, max_level: usize) -> usize;
}

/// A level generator which will produce geometrically distributed numbers.
///
/// The probability of generating height `n` is `p` times the probability of
/// generating height `n-1`, with the probability truncated at the `max_level`
/// passed in by the list. With `p = 0.5`, `P(height >= k) = 0.5^(k-1)`.
#[derive(Debug)]
pub struct GeometricalLevelGenerator {
    p: f64,
    rng: SmallRng, // Fast generator
}

impl GeometricalLevelGenerator {
    /// Create a new GeometricalLevelGenerator with `p` as the probability that
    /// a given node is present in the next level. A `seed` makes every height
    /// it hands out reproducible, otherwise the generator is seeded from OS
    /// entropy.
    ///
    /// # Panics
    ///
    /// `p` must be between 0 and 1 and will panic otherwise.
    pub fn new(p: f64, seed: Option<u64>) -> Self {
        if p <= 0.0 || p >= 1.0 {
            panic!("p must be in (0, 1).");
        }
        let rng = match seed {
            | Some(seed) => SmallRng::seed_from_u64(seed),
            | None => SmallRng::from_entropy(),
        };
        GeometricalLevelGenerator { p, rng }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(DEFAULT_PROBABILITY, Some(seed))
    }

    pub fn p(&self) -> f64 {
        self.p
    }
}

impl Default for GeometricalLevelGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_PROBABILITY, None)
    }
}

impl LevelGenerator for GeometricalLevelGenerator {
    fn random(&mut self, max_level: usize) -> usize {
        let mut level = 1;
        while self.rng.gen::<f64>() < self.p && level < max_level {
            level += 1;
        }
        level
    }
}
