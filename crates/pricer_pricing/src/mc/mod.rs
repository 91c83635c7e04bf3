//! Monte Carlo pricing of European options under Black-Scholes-Merton.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloPricer
//! ├── PricingParameters     (validated model inputs)
//! ├── NormalSource          (injected N(0,1) draws)
//! └── price()
//!     ├── terminal prices   S(T) = S₀·exp((r - σ²/2)T + σ√T·Z)
//!     ├── payoffs           max(S - K, 0), max(K - S, 0)
//!     └── discounting       exp(-rT) × mean
//! ```
//!
//! # Examples
//!
//! ## Seeded run
//!
//! ```rust
//! use pricer_pricing::mc::{MonteCarloPricer, PricingParameters};
//! use pricer_pricing::rng::PricerRng;
//!
//! let params = PricingParameters::builder()
//!     .initial_price(100.0)
//!     .strike(105.0)
//!     .risk_free_rate(0.05)
//!     .volatility(0.2)
//!     .maturity(1.0)
//!     .num_simulations(50_000)
//!     .build()
//!     .unwrap();
//!
//! let pricer = MonteCarloPricer::new();
//! let (sample, result) = pricer.price(&params, &mut PricerRng::from_seed(42)).unwrap();
//!
//! println!("Call: {:.4} +/- {:.4}", result.call_price, result.call_confidence_95());
//! println!("Put:  {:.4} +/- {:.4}", result.put_price, result.put_confidence_95());
//! assert_eq!(sample.len(), 50_000);
//! ```
//!
//! ## Fixed draws
//!
//! ```rust
//! use pricer_pricing::mc::{MonteCarloPricer, PricingParameters};
//! use pricer_pricing::rng::ReplaySource;
//!
//! let params = PricingParameters::new(100.0, 100.0, 0.0, 0.2, 1.0, 2).unwrap();
//! let mut source = ReplaySource::new(vec![0.0, 0.0]);
//!
//! let (sample, _) = MonteCarloPricer::new().price(&params, &mut source).unwrap();
//! // Zero draws leave only the -σ²T/2 drift
//! assert!((sample.as_slice()[0] - 100.0 * (-0.02_f64).exp()).abs() < 1e-12);
//! ```

mod params;
mod pricer;
mod sample;

pub use params::{PricingParameters, PricingParametersBuilder, SimulationCount, MAX_SIMULATIONS};
pub use pricer::{
    call_payoff, put_payoff, MonteCarloPricer, PricingResult, DEFAULT_PARALLEL_THRESHOLD,
};
pub use sample::SimulatedPriceSample;
