//! Black-Scholes closed form for European options.
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! When σ√T vanishes the lognormal collapses to a point mass at the
//! forward and both prices reduce to discounted intrinsic values, which is
//! what the Monte Carlo engine produces for the same inputs.

use num_traits::Float;

use super::distributions::{constant, norm_cdf};
use crate::mc::PricingParameters;

/// Closed-form call and put prices.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BlackScholesPrice {
    /// European call price.
    pub call: f64,
    /// European put price.
    pub put: f64,
}

/// Closed-form prices for the same inputs a Monte Carlo run uses.
///
/// # Examples
/// ```
/// use pricer_pricing::analytical::black_scholes;
/// use pricer_pricing::mc::PricingParameters;
///
/// let bs = black_scholes(&PricingParameters::default());
/// assert!((bs.call - 8.0214).abs() < 1e-3);
/// assert!((bs.put - 7.9004).abs() < 1e-3);
/// ```
pub fn black_scholes(params: &PricingParameters) -> BlackScholesPrice {
    let (spot, strike, rate, vol, expiry) = (
        params.initial_price(),
        params.strike(),
        params.risk_free_rate(),
        params.volatility(),
        params.maturity(),
    );
    BlackScholesPrice {
        call: black_scholes_call(spot, strike, rate, vol, expiry),
        put: black_scholes_put(spot, strike, rate, vol, expiry),
    }
}

/// Returns (d₁, d₂), or `None` when σ√T is too small to divide by.
#[inline]
fn d1_d2<T: Float>(spot: T, strike: T, rate: T, vol: T, expiry: T) -> Option<(T, T)> {
    let vol_sqrt_t = vol * expiry.sqrt();
    if vol_sqrt_t <= constant::<T>(1e-12) {
        return None;
    }
    let half = constant::<T>(0.5);
    let d1 = ((spot / strike).ln() + (rate + half * vol * vol) * expiry) / vol_sqrt_t;
    Some((d1, d1 - vol_sqrt_t))
}

/// Black-Scholes European call price.
///
/// # Arguments
/// * `spot` - Spot price S
/// * `strike` - Strike K
/// * `rate` - Risk-free rate r (annualised)
/// * `vol` - Volatility σ (annualised)
/// * `expiry` - Time to maturity T in years
#[inline]
pub fn black_scholes_call<T: Float>(spot: T, strike: T, rate: T, vol: T, expiry: T) -> T {
    let df = (-rate * expiry).exp();
    match d1_d2(spot, strike, rate, vol, expiry) {
        Some((d1, d2)) => spot * norm_cdf(d1) - strike * df * norm_cdf(d2),
        None => (spot - strike * df).max(T::zero()),
    }
}

/// Black-Scholes European put price.
///
/// Arguments as for [`black_scholes_call`].
#[inline]
pub fn black_scholes_put<T: Float>(spot: T, strike: T, rate: T, vol: T, expiry: T) -> T {
    let df = (-rate * expiry).exp();
    match d1_d2(spot, strike, rate, vol, expiry) {
        Some((d1, d2)) => strike * df * norm_cdf(-d2) - spot * norm_cdf(-d1),
        None => (strike * df - spot).max(T::zero()),
    }
}
