//! # Pricer Engine
//!
//! Monte Carlo valuation of European calls and puts under the
//! Black-Scholes-Merton risk-neutral model.
//!
//! ## Pipeline
//!
//! A run is a single linear pass with no state carried between runs:
//!
//! ```text
//! PricingParameters ──► NormalSource ──► S(T) = S₀·exp((r - σ²/2)T + σ√T·Z)
//!                                              │
//!                         ┌────────────────────┴───────────────┐
//!                         ▼                                    ▼
//!               SimulatedPriceSample            exp(-rT)·mean(max(S - K, 0))
//!                         │                     exp(-rT)·mean(max(K - S, 0))
//!                         ▼                                    │
//!                      Renderer ◄──────────── PricingResult ◄──┘
//! ```
//!
//! ## Modules
//!
//! - [`mc`]: parameters, the pricer and its outputs
//! - [`rng`]: seeded PRNG and replayable normal sources
//! - [`analytical`]: closed-form Black-Scholes reference prices
//! - [`stats`]: histogram binning of the simulated sample
//! - [`render`]: presentation layer (text, SVG, no-op)
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::analytical::black_scholes;
//! use pricer_pricing::mc::{MonteCarloPricer, PricingParameters};
//! use pricer_pricing::rng::PricerRng;
//!
//! let params = PricingParameters::default();
//! let mut rng = PricerRng::from_seed(42);
//!
//! let (_sample, result) = MonteCarloPricer::new().price(&params, &mut rng).unwrap();
//! let exact = black_scholes(&params);
//!
//! assert!((result.call_price - exact.call).abs() < 4.0 * result.call_std_error);
//! assert!((result.put_price - exact.put).abs() < 4.0 * result.put_std_error);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod error;
pub mod mc;
pub mod render;
pub mod rng;
pub mod stats;

// Re-export commonly used items for convenience
pub use error::PricerError;
pub use mc::{MonteCarloPricer, PricingParameters, PricingResult, SimulatedPriceSample};
pub use rng::{NormalSource, PricerRng, ReplaySource};
