//! Monte Carlo pricing engine.
//!
//! This module provides the orchestration layer for European option
//! pricing by Monte Carlo simulation.
//!
//! # Overview
//!
//! [`MonteCarloPricer::price`] runs a single linear pass:
//! 1. Validation of [`PricingParameters`]
//! 2. Normal draws from the injected [`NormalSource`]
//! 3. In-place transform of draws to terminal prices (closed-form GBM)
//! 4. Call and put payoff aggregation
//! 5. Discounting of the sample means
//!
//! Only the terminal value is simulated; no intermediate time steps are
//! needed for European payoffs.

use std::time::Instant;

use rayon::prelude::*;
use tracing::debug;

use super::params::PricingParameters;
use super::sample::SimulatedPriceSample;
use crate::error::PricerError;
use crate::rng::NormalSource;

/// Sample size from which the terminal-price transform runs on the rayon pool.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 65_536;

/// Call and put price estimates from one Monte Carlo run.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::PricingResult;
///
/// let result = PricingResult {
///     call_price: 8.02,
///     put_price: 7.90,
///     call_std_error: 0.05,
///     put_std_error: 0.03,
///     discount_factor: 0.951,
/// };
///
/// println!("Call: {} +/- {}", result.call_price, result.call_confidence_95());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PricingResult {
    /// Discounted mean call payoff.
    pub call_price: f64,
    /// Discounted mean put payoff.
    pub put_price: f64,
    /// Standard error of the call estimate.
    pub call_std_error: f64,
    /// Standard error of the put estimate.
    pub put_std_error: f64,
    /// Discount factor `exp(-rT)` applied to both means.
    pub discount_factor: f64,
}

impl PricingResult {
    /// Returns the 95% confidence interval half-width of the call price.
    #[inline]
    pub fn call_confidence_95(&self) -> f64 {
        1.96 * self.call_std_error
    }

    /// Returns the 95% confidence interval half-width of the put price.
    #[inline]
    pub fn put_confidence_95(&self) -> f64 {
        1.96 * self.put_std_error
    }

    /// Deviation from put-call parity: `C - P - (S₀ - K·exp(-rT))`.
    ///
    /// Zero up to Monte Carlo noise in the simulated forward.
    #[inline]
    pub fn parity_residual(&self, params: &PricingParameters) -> f64 {
        self.call_price - self.put_price - params.parity_value()
    }
}

/// Monte Carlo pricer for European calls and puts.
///
/// The pricer is stateless between runs: `price` borrows `self` immutably,
/// so a single pricer can serve concurrent runs as long as each run brings
/// its own random source.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::{MonteCarloPricer, PricingParameters};
/// use pricer_pricing::rng::PricerRng;
///
/// let params = PricingParameters::default();
/// let mut rng = PricerRng::from_seed(42);
///
/// let (sample, result) = MonteCarloPricer::new().price(&params, &mut rng).unwrap();
///
/// assert_eq!(sample.len(), params.num_simulations());
/// assert!((result.call_price - 8.02).abs() < 0.2);
/// assert!((result.put_price - 7.90).abs() < 0.2);
/// ```
#[derive(Clone, Debug)]
pub struct MonteCarloPricer {
    parallel_threshold: usize,
}

impl Default for MonteCarloPricer {
    fn default() -> Self {
        Self::new()
    }
}

impl MonteCarloPricer {
    /// Creates a pricer with the default parallel threshold.
    pub fn new() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Overrides the sample size from which the transform step is
    /// parallelised. `usize::MAX` keeps every run on the calling thread.
    ///
    /// The transform is elementwise, so the threshold never changes results.
    pub fn with_parallel_threshold(mut self, parallel_threshold: usize) -> Self {
        self.parallel_threshold = parallel_threshold;
        self
    }

    /// Returns the parallel threshold.
    #[inline]
    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Prices a European call and put on the same simulated sample.
    ///
    /// # Arguments
    ///
    /// * `params` - Model inputs
    /// * `source` - Supplier of `params.num_simulations()` standard normal draws
    ///
    /// # Returns
    ///
    /// The simulated terminal prices and the discounted call/put estimates.
    ///
    /// # Errors
    ///
    /// - `PricerError::InvalidParameter` / `InvalidSimulationCount` when
    ///   `params` fails validation; raised before any draw is taken
    /// - `PricerError::RandomSourceExhausted` when a finite source holds
    ///   too few draws
    pub fn price<R: NormalSource>(
        &self,
        params: &PricingParameters,
        source: &mut R,
    ) -> Result<(SimulatedPriceSample, PricingResult), PricerError> {
        params.validate()?;

        let started = Instant::now();
        let n_sims = params.num_simulations();

        // One buffer: normal draws first, then terminal prices in place
        let mut prices = vec![0.0; n_sims];
        source.fill_normal(&mut prices)?;

        let spot = params.initial_price();
        let drift = params.drift();
        let diffusion = params.diffusion();
        let to_terminal = move |z: &mut f64| *z = spot * (drift + diffusion * *z).exp();

        if n_sims >= self.parallel_threshold {
            prices.par_iter_mut().for_each(to_terminal);
        } else {
            prices.iter_mut().for_each(to_terminal);
        }

        let result = aggregate(&prices, params.strike(), params.discount_factor());

        debug!(
            n_sims,
            spot,
            strike = params.strike(),
            rate = params.risk_free_rate(),
            vol = params.volatility(),
            maturity = params.maturity(),
            call = result.call_price,
            put = result.put_price,
            call_se = result.call_std_error,
            put_se = result.put_std_error,
            elapsed_ms = started.elapsed().as_secs_f64() * 1e3,
            "Monte Carlo run complete"
        );

        Ok((SimulatedPriceSample::new(prices), result))
    }
}

/// Discounted payoff means and standard errors over terminal prices.
///
/// Sums run sequentially in index order so the result depends only on the
/// sample, never on thread scheduling.
fn aggregate(prices: &[f64], strike: f64, discount_factor: f64) -> PricingResult {
    let n = prices.len() as f64;

    let (call_sum, put_sum) = prices.iter().fold((0.0, 0.0), |(call, put), &st| {
        (call + call_payoff(st, strike), put + put_payoff(st, strike))
    });
    let call_mean = call_sum / n;
    let put_mean = put_sum / n;

    let (call_std_error, put_std_error) = if prices.len() > 1 {
        let (call_sq, put_sq) = prices.iter().fold((0.0, 0.0), |(call, put), &st| {
            (
                call + (call_payoff(st, strike) - call_mean).powi(2),
                put + (put_payoff(st, strike) - put_mean).powi(2),
            )
        });
        let call_sd = (call_sq / (n - 1.0)).sqrt();
        let put_sd = (put_sq / (n - 1.0)).sqrt();
        (call_sd / n.sqrt(), put_sd / n.sqrt())
    } else {
        (0.0, 0.0)
    };

    PricingResult {
        call_price: discount_factor * call_mean,
        put_price: discount_factor * put_mean,
        call_std_error: discount_factor * call_std_error,
        put_std_error: discount_factor * put_std_error,
        discount_factor,
    }
}

/// European call payoff `max(S - K, 0)`.
#[inline]
pub fn call_payoff(terminal: f64, strike: f64) -> f64 {
    (terminal - strike).max(0.0)
}

/// European put payoff `max(K - S, 0)`.
#[inline]
pub fn put_payoff(terminal: f64, strike: f64) -> f64 {
    (strike - terminal).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{PricerRng, ReplaySource};
    use approx::assert_relative_eq;

    fn params_with(n: usize) -> PricingParameters {
        PricingParameters::builder()
            .initial_price(100.0)
            .strike(105.0)
            .risk_free_rate(0.05)
            .volatility(0.2)
            .maturity(1.0)
            .num_simulations(n)
            .build()
            .unwrap()
    }

    #[test]
    fn test_price_reference_case() {
        let params = PricingParameters::default();
        let mut rng = PricerRng::from_seed(42);

        let (sample, result) = MonteCarloPricer::new().price(&params, &mut rng).unwrap();

        assert_eq!(sample.len(), 100_000);
        assert!(
            (result.call_price - 8.02).abs() < 0.15,
            "call {:.4}",
            result.call_price
        );
        assert!(
            (result.put_price - 7.90).abs() < 0.15,
            "put {:.4}",
            result.put_price
        );
        assert!(result.call_std_error > 0.0);
        assert!(result.call_std_error < 0.1);
        assert_relative_eq!(result.discount_factor, (-0.05_f64).exp());
    }

    #[test]
    fn test_pricer_reproducibility() {
        let params = params_with(5_000);
        let pricer = MonteCarloPricer::new();

        let (sample1, result1) = pricer
            .price(&params, &mut PricerRng::from_seed(42))
            .unwrap();
        let (sample2, result2) = pricer
            .price(&params, &mut PricerRng::from_seed(42))
            .unwrap();

        assert_eq!(sample1, sample2);
        assert_eq!(result1, result2);
    }

    #[test]
    fn test_replayed_draws_give_exact_terminal_prices() {
        let params = params_with(3);
        let draws = vec![0.0, 1.0, -1.0];
        let mut source = ReplaySource::new(draws.clone());

        let (sample, result) = MonteCarloPricer::new().price(&params, &mut source).unwrap();

        for (st, z) in sample.as_slice().iter().zip(&draws) {
            let expected = 100.0 * ((0.05 - 0.5 * 0.2_f64.powi(2)) * 1.0 + 0.2 * z).exp();
            assert_eq!(*st, expected);
        }

        let df = (-0.05_f64).exp();
        let calls: f64 = sample.as_slice().iter().map(|&s| (s - 105.0).max(0.0)).sum();
        let puts: f64 = sample.as_slice().iter().map(|&s| (105.0 - s).max(0.0)).sum();
        assert_relative_eq!(result.call_price, df * calls / 3.0, epsilon = 1e-12);
        assert_relative_eq!(result.put_price, df * puts / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_parallel_and_serial_bit_identical() {
        let params = params_with(20_000);
        let serial = MonteCarloPricer::new().with_parallel_threshold(usize::MAX);
        let parallel = MonteCarloPricer::new().with_parallel_threshold(1);

        let a = serial.price(&params, &mut PricerRng::from_seed(9)).unwrap();
        let b = parallel.price(&params, &mut PricerRng::from_seed(9)).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_maturity_is_point_mass() {
        let params = PricingParameters::new(100.0, 95.0, 0.05, 0.2, 0.0, 10_000).unwrap();
        let (sample, result) = MonteCarloPricer::new()
            .price(&params, &mut PricerRng::from_seed(1))
            .unwrap();

        assert!(sample.as_slice().iter().all(|&s| s == 100.0));
        assert_eq!(result.call_price, 5.0);
        assert_eq!(result.put_price, 0.0);
        assert_eq!(result.call_std_error, 0.0);
        assert_eq!(result.put_std_error, 0.0);
        assert_eq!(result.discount_factor, 1.0);
    }

    #[test]
    fn test_zero_maturity_with_overflowing_variance() {
        let params = PricingParameters::new(100.0, 95.0, 0.05, 1e155, 0.0, 8).unwrap();
        let (sample, result) = MonteCarloPricer::new()
            .price(&params, &mut PricerRng::from_seed(1))
            .unwrap();

        assert!(sample.as_slice().iter().all(|&s| s == 100.0));
        assert_eq!(result.call_price, 5.0);
        assert_eq!(result.put_price, 0.0);
    }

    #[test]
    fn test_debug_event_records_parameters() {
        use std::io;
        use std::sync::{Arc, Mutex};

        #[derive(Clone, Default)]
        struct Capture(Arc<Mutex<Vec<u8>>>);

        impl io::Write for Capture {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let capture = Capture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let params = PricingParameters::new(100.0, 105.0, 0.05, 0.2, 1.0, 100).unwrap();
        tracing::subscriber::with_default(subscriber, || {
            MonteCarloPricer::new()
                .price(&params, &mut PricerRng::from_seed(2))
                .unwrap();
        });

        let logs = String::from_utf8(capture.0.lock().unwrap().clone()).unwrap();
        for field in [
            "n_sims=100",
            "spot=100",
            "strike=105",
            "rate=0.05",
            "vol=0.2",
            "maturity=1",
        ] {
            assert!(logs.contains(field), "missing {} in {:?}", field, logs);
        }
    }

    #[test]
    fn test_zero_volatility_is_deterministic_forward() {
        let params = PricingParameters::new(100.0, 100.0, 0.05, 0.0, 1.0, 1_000).unwrap();
        let (sample, result) = MonteCarloPricer::new()
            .price(&params, &mut PricerRng::from_seed(3))
            .unwrap();

        let forward = 100.0 * 0.05_f64.exp();
        assert!(sample.as_slice().iter().all(|&s| s == sample.as_slice()[0]));
        assert_relative_eq!(sample.as_slice()[0], forward, max_relative = 1e-14);
        assert_relative_eq!(
            result.call_price,
            100.0 - 100.0 * (-0.05_f64).exp(),
            max_relative = 1e-12
        );
        assert_eq!(result.put_price, 0.0);
    }

    #[test]
    fn test_single_simulation_has_zero_std_error() {
        let params = params_with(1);
        let (sample, result) = MonteCarloPricer::new()
            .price(&params, &mut ReplaySource::new(vec![2.0]))
            .unwrap();

        assert_eq!(sample.len(), 1);
        assert_eq!(result.call_std_error, 0.0);
        assert_eq!(result.put_std_error, 0.0);
        assert!(result.call_price > 0.0);
        assert_eq!(result.put_price, 0.0);
    }

    #[test]
    fn test_invalid_params_take_no_draws() {
        let params = PricingParameters::default();
        // Bypass the builder to exercise the guard inside price()
        let bad = PricingParameters {
            strike: -1.0,
            ..params
        };
        let mut source = ReplaySource::new(vec![0.0; 10]);

        let err = MonteCarloPricer::new().price(&bad, &mut source).unwrap_err();

        assert!(err.is_invalid_parameter());
        assert_eq!(source.remaining(), 10);
    }

    #[test]
    fn test_exhausted_source() {
        let params = params_with(10);
        let err = MonteCarloPricer::new()
            .price(&params, &mut ReplaySource::new(vec![0.0; 4]))
            .unwrap_err();

        assert_eq!(
            err,
            PricerError::RandomSourceExhausted {
                requested: 10,
                available: 4
            }
        );
    }

    #[test]
    fn test_call_put_parity_mc() {
        let params = params_with(100_000);
        let (sample, result) = MonteCarloPricer::new()
            .price(&params, &mut PricerRng::from_seed(42))
            .unwrap();

        // C - P = df·(mean(S_T) - K), so the residual is df times the error in the simulated forward
        let n = sample.len() as f64;
        let mean = sample.mean().unwrap();
        let sd = (sample
            .as_slice()
            .iter()
            .map(|&s| (s - mean).powi(2))
            .sum::<f64>()
            / (n - 1.0))
            .sqrt();
        let tolerance = 4.0 * result.discount_factor * sd / n.sqrt();

        assert!(
            result.parity_residual(&params).abs() < tolerance,
            "parity residual {:.5} exceeds {:.5}",
            result.parity_residual(&params),
            tolerance
        );
    }

    #[test]
    fn test_payoff_functions() {
        assert_eq!(call_payoff(110.0, 100.0), 10.0);
        assert_eq!(call_payoff(90.0, 100.0), 0.0);
        assert_eq!(put_payoff(90.0, 100.0), 10.0);
        assert_eq!(put_payoff(110.0, 100.0), 0.0);
    }

    #[test]
    fn test_pricing_result_confidence() {
        let result = PricingResult {
            call_std_error: 0.1,
            put_std_error: 0.2,
            ..Default::default()
        };

        assert_relative_eq!(result.call_confidence_95(), 0.196, epsilon = 1e-12);
        assert_relative_eq!(result.put_confidence_95(), 0.392, epsilon = 1e-12);
    }
}
