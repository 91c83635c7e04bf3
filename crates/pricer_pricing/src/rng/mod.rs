//! # Random Number Generation Infrastructure
//!
//! Standard normal draws are the only source of randomness in the pricer.
//! They reach the engine through the [`NormalSource`] trait so that a run
//! can be driven either by a seeded PRNG or by a fixed, replayed sequence.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: [`PricerRng`] records its seed, including seeds
//!   drawn from OS entropy, so any run can be replayed
//! - **Efficiency**: Zero-allocation batch operations via `&mut [f64]` slices
//! - **Static dispatch**: the pricer is generic over the source; no
//!   `Box<dyn Trait>` in the hot path
//!
//! ## Module Structure
//!
//! - `prng`: [`PricerRng`], seeded `StdRng` with seed tracking
//! - `replay`: [`ReplaySource`], finite source replaying caller-supplied draws
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::rng::{NormalSource, PricerRng};
//!
//! // Create a seeded RNG for reproducible simulations
//! let mut rng = PricerRng::from_seed(12345);
//!
//! // Batch generation into pre-allocated buffer (zero allocation)
//! let mut buffer = vec![0.0; 1000];
//! rng.fill_normal(&mut buffer).unwrap();
//! ```

mod prng;
mod replay;

pub use prng::PricerRng;
pub use replay::ReplaySource;

use crate::error::PricerError;

/// Supplier of independent standard normal (mean=0, std=1) draws.
///
/// Implementors fill the whole buffer or return an error without
/// producing a partial batch the caller could mistake for a full one.
pub trait NormalSource {
    /// Fills `buffer` with standard normal variates.
    ///
    /// # Errors
    ///
    /// Returns [`PricerError::RandomSourceExhausted`] when a finite source
    /// holds fewer draws than `buffer.len()`.
    fn fill_normal(&mut self, buffer: &mut [f64]) -> Result<(), PricerError>;
}

impl<S: NormalSource + ?Sized> NormalSource for &mut S {
    #[inline]
    fn fill_normal(&mut self, buffer: &mut [f64]) -> Result<(), PricerError> {
        (**self).fill_normal(buffer)
    }
}
