//! Model parameters for a single pricing run.
//!
//! [`PricingParameters`] is immutable once built; every field is checked
//! against its domain in [`PricingParameters::validate`] before any random
//! draw is taken.

use crate::error::PricerError;

/// Maximum number of simulations allowed in one run.
///
/// The pricer holds one `f64` per simulation, so this caps a run at 80 MB.
pub const MAX_SIMULATIONS: usize = 10_000_000;

/// Black-Scholes-Merton inputs for a European option pricing run.
///
/// # Model
///
/// Under the risk-neutral measure the underlying follows
/// ```text
/// dS = r S dt + σ S dW
/// ```
/// whose terminal value has the closed form
/// ```text
/// S(T) = S₀ × exp((r - 0.5σ²)T + σ√T × Z),  Z ~ N(0, 1)
/// ```
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::PricingParameters;
///
/// let params = PricingParameters::builder()
///     .initial_price(100.0)
///     .strike(105.0)
///     .risk_free_rate(0.05)
///     .volatility(0.2)
///     .maturity(1.0)
///     .num_simulations(100_000)
///     .build()
///     .expect("valid parameters");
///
/// assert_eq!(params.num_simulations(), 100_000);
/// assert!((params.discount_factor() - (-0.05_f64).exp()).abs() < 1e-15);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PricingParameters {
    /// Initial spot price (S₀).
    pub(super) initial_price: f64,
    /// Strike price (K).
    pub(super) strike: f64,
    /// Risk-free rate (r) - annualised, continuously compounded.
    pub(super) risk_free_rate: f64,
    /// Volatility (σ) - annualised.
    pub(super) volatility: f64,
    /// Time to maturity (T) - in years.
    pub(super) maturity: f64,
    /// Number of terminal prices to draw.
    pub(super) num_simulations: usize,
}

impl PricingParameters {
    /// Creates a new parameter builder.
    #[inline]
    pub fn builder() -> PricingParametersBuilder {
        PricingParametersBuilder::default()
    }

    /// Creates validated parameters from positional arguments.
    ///
    /// # Errors
    ///
    /// See [`validate`](Self::validate).
    pub fn new(
        initial_price: f64,
        strike: f64,
        risk_free_rate: f64,
        volatility: f64,
        maturity: f64,
        num_simulations: usize,
    ) -> Result<Self, PricerError> {
        let params = Self {
            initial_price,
            strike,
            risk_free_rate,
            volatility,
            maturity,
            num_simulations,
        };
        params.validate()?;
        Ok(params)
    }

    /// Returns the initial spot price S₀.
    #[inline]
    pub fn initial_price(&self) -> f64 {
        self.initial_price
    }

    /// Returns the strike K.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the risk-free rate r.
    #[inline]
    pub fn risk_free_rate(&self) -> f64 {
        self.risk_free_rate
    }

    /// Returns the volatility σ.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns the time to maturity T in years.
    #[inline]
    pub fn maturity(&self) -> f64 {
        self.maturity
    }

    /// Returns the number of simulations.
    #[inline]
    pub fn num_simulations(&self) -> usize {
        self.num_simulations
    }

    /// Log-space drift over the life of the option: `(r - 0.5σ²)T`.
    ///
    /// Computed as `rT - 0.5(σ√T)²` so that `T = 0` gives exactly 0 even
    /// when `σ²` overflows.
    #[inline]
    pub fn drift(&self) -> f64 {
        self.risk_free_rate * self.maturity - 0.5 * self.diffusion().powi(2)
    }

    /// Log-space diffusion scale: `σ√T`.
    #[inline]
    pub fn diffusion(&self) -> f64 {
        self.volatility * self.maturity.sqrt()
    }

    /// Present value discount factor `exp(-rT)`.
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.risk_free_rate * self.maturity).exp()
    }

    /// Right-hand side of put-call parity: `S₀ - K·exp(-rT)`.
    #[inline]
    pub fn parity_value(&self) -> f64 {
        self.initial_price - self.strike * self.discount_factor()
    }

    /// Validates every field against its domain.
    ///
    /// # Errors
    ///
    /// - [`PricerError::InvalidSimulationCount`] if `num_simulations` is 0
    ///   or greater than [`MAX_SIMULATIONS`]
    /// - [`PricerError::InvalidParameter`] if `initial_price <= 0`,
    ///   `strike <= 0`, `volatility < 0`, `maturity < 0`, or any value is
    ///   not finite
    pub fn validate(&self) -> Result<(), PricerError> {
        if self.num_simulations == 0 || self.num_simulations > MAX_SIMULATIONS {
            return Err(PricerError::InvalidSimulationCount(
                i64::try_from(self.num_simulations).unwrap_or(i64::MAX),
            ));
        }
        ensure_positive("initial_price", self.initial_price)?;
        ensure_positive("strike", self.strike)?;
        ensure_non_negative("volatility", self.volatility)?;
        ensure_non_negative("maturity", self.maturity)?;
        if !self.risk_free_rate.is_finite() {
            return Err(PricerError::invalid(
                "risk_free_rate",
                format!("must be finite, got {}", self.risk_free_rate),
            ));
        }
        Ok(())
    }
}

impl Default for PricingParameters {
    /// At-the-money-forward style reference case: S₀=100, K=105, r=5%,
    /// σ=20%, T=1y, 100k simulations.
    fn default() -> Self {
        Self {
            initial_price: 100.0,
            strike: 105.0,
            risk_free_rate: 0.05,
            volatility: 0.2,
            maturity: 1.0,
            num_simulations: 100_000,
        }
    }
}

fn ensure_positive(name: &'static str, value: f64) -> Result<(), PricerError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PricerError::invalid(
            name,
            format!("must be positive and finite, got {}", value),
        ))
    }
}

fn ensure_non_negative(name: &'static str, value: f64) -> Result<(), PricerError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(PricerError::invalid(
            name,
            format!("must be non-negative and finite, got {}", value),
        ))
    }
}

/// A simulation count accepted from signed outer inputs.
///
/// Configuration files and command lines carry integers that may be
/// negative; conversion rejects them with the same error the pricer uses.
///
/// ```rust
/// use pricer_pricing::mc::SimulationCount;
///
/// assert_eq!(SimulationCount::try_from(1_000_i64).unwrap().get(), 1_000);
/// assert!(SimulationCount::try_from(-1_i64).is_err());
/// assert!(SimulationCount::try_from(0_i64).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulationCount(usize);

impl SimulationCount {
    /// Returns the count.
    #[inline]
    pub fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<i64> for SimulationCount {
    type Error = PricerError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match usize::try_from(value) {
            Ok(count) if (1..=MAX_SIMULATIONS).contains(&count) => Ok(Self(count)),
            _ => Err(PricerError::InvalidSimulationCount(value)),
        }
    }
}

/// Builder for [`PricingParameters`].
///
/// Every field must be set; validation runs in [`build`](Self::build).
#[derive(Clone, Debug, Default)]
pub struct PricingParametersBuilder {
    initial_price: Option<f64>,
    strike: Option<f64>,
    risk_free_rate: Option<f64>,
    volatility: Option<f64>,
    maturity: Option<f64>,
    num_simulations: Option<usize>,
}

impl PricingParametersBuilder {
    /// Sets the initial spot price S₀ (> 0).
    #[inline]
    pub fn initial_price(mut self, initial_price: f64) -> Self {
        self.initial_price = Some(initial_price);
        self
    }

    /// Sets the strike K (> 0).
    #[inline]
    pub fn strike(mut self, strike: f64) -> Self {
        self.strike = Some(strike);
        self
    }

    /// Sets the annualised risk-free rate r.
    #[inline]
    pub fn risk_free_rate(mut self, risk_free_rate: f64) -> Self {
        self.risk_free_rate = Some(risk_free_rate);
        self
    }

    /// Sets the annualised volatility σ (>= 0).
    #[inline]
    pub fn volatility(mut self, volatility: f64) -> Self {
        self.volatility = Some(volatility);
        self
    }

    /// Sets the time to maturity T in years (>= 0).
    #[inline]
    pub fn maturity(mut self, maturity: f64) -> Self {
        self.maturity = Some(maturity);
        self
    }

    /// Sets the number of simulations in [1, 10_000_000].
    #[inline]
    pub fn num_simulations(mut self, num_simulations: usize) -> Self {
        self.num_simulations = Some(num_simulations);
        self
    }

    /// Builds the parameters.
    ///
    /// # Errors
    ///
    /// Returns `PricerError` if a field is unset or fails validation.
    pub fn build(self) -> Result<PricingParameters, PricerError> {
        let params = PricingParameters {
            initial_price: self.initial_price.ok_or_else(|| missing("initial_price"))?,
            strike: self.strike.ok_or_else(|| missing("strike"))?,
            risk_free_rate: self.risk_free_rate.ok_or_else(|| missing("risk_free_rate"))?,
            volatility: self.volatility.ok_or_else(|| missing("volatility"))?,
            maturity: self.maturity.ok_or_else(|| missing("maturity"))?,
            num_simulations: self.num_simulations.ok_or_else(|| missing("num_simulations"))?,
        };

        params.validate()?;
        Ok(params)
    }
}

fn missing(name: &'static str) -> PricerError {
    PricerError::invalid(name, "must be specified")
}
