//! Analytical (closed-form) solutions for option pricing.
//!
//! Used to check Monte Carlo estimates against the exact Black-Scholes
//! price for the same inputs.
//!
//! # Usage
//!
//! ```rust
//! use pricer_pricing::analytical::{black_scholes_call, black_scholes_put};
//!
//! let call = black_scholes_call(
//!     100.0,  // spot
//!     105.0,  // strike
//!     0.05,   // risk-free rate
//!     0.2,    // volatility
//!     1.0,    // time to maturity
//! );
//! let put = black_scholes_put(100.0, 105.0, 0.05, 0.2, 1.0);
//! assert!(call > put);
//! ```

pub mod black_scholes;
pub mod distributions;

pub use black_scholes::{black_scholes, black_scholes_call, black_scholes_put, BlackScholesPrice};
pub use distributions::{norm_cdf, norm_pdf};
