//! Seeded pseudo-random source for pricing runs.
//!
//! [`PricerRng`] wraps `StdRng` and remembers its seed, so every run
//! (including one seeded from entropy) can be reported and replayed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

use super::NormalSource;
use crate::error::PricerError;

/// Seeded generator of the normal draws behind a pricing run.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::rng::{NormalSource, PricerRng};
///
/// let mut rng = PricerRng::from_seed(42);
/// let mut draws = vec![0.0; 8];
/// rng.fill_normal(&mut draws).unwrap();
///
/// // Replaying the seed replays the draws
/// let mut replay = vec![0.0; 8];
/// PricerRng::from_seed(rng.seed()).fill_normal(&mut replay).unwrap();
/// assert_eq!(draws, replay);
/// ```
#[derive(Debug, Clone)]
pub struct PricerRng {
    inner: StdRng,
    seed: u64,
}

impl PricerRng {
    /// Deterministic generator for `seed`.
    ///
    /// ```rust
    /// use pricer_pricing::rng::PricerRng;
    ///
    /// let mut a = PricerRng::from_seed(12345);
    /// let mut b = PricerRng::from_seed(12345);
    /// assert_eq!(a.gen_normal(), b.gen_normal());
    /// ```
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Generator with a fresh seed taken from the thread-local entropy
    /// source.
    ///
    /// The seed is kept: [`seed`](Self::seed) returns it, and
    /// [`from_seed`](Self::from_seed) with that value replays the run.
    pub fn from_entropy() -> Self {
        Self::from_seed(rand::thread_rng().gen())
    }

    /// Seed this generator was built from.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// One draw from U[0, 1).
    #[inline]
    pub fn gen_uniform(&mut self) -> f64 {
        self.inner.gen()
    }

    /// One draw from N(0, 1).
    ///
    /// `rand_distr::StandardNormal` samples with the Ziggurat method
    /// (Marsaglia & Tsang, 2000).
    #[inline]
    pub fn gen_normal(&mut self) -> f64 {
        StandardNormal.sample(&mut self.inner)
    }

    /// Overwrites `buffer` with U[0, 1) draws.
    pub fn fill_uniform(&mut self, buffer: &mut [f64]) {
        buffer.iter_mut().for_each(|u| *u = self.inner.gen());
    }
}

impl NormalSource for PricerRng {
    /// Same sequence as repeated [`gen_normal`](PricerRng::gen_normal)
    /// calls. Never fails.
    fn fill_normal(&mut self, buffer: &mut [f64]) -> Result<(), PricerError> {
        buffer
            .iter_mut()
            .for_each(|z| *z = StandardNormal.sample(&mut self.inner));
        Ok(())
    }
}
