//! Error types for the Monte Carlo pricing engine.
//!
//! All failures are raised before any simulation work begins, so a
//! returned error never leaves a partially populated sample behind.

use thiserror::Error;

/// Errors raised by the pricing engine.
///
/// # Examples
/// ```
/// use pricer_pricing::PricerError;
///
/// let err = PricerError::InvalidParameter {
///     name: "volatility",
///     reason: "must be non-negative, got -0.2".to_string(),
/// };
/// assert!(err.to_string().contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PricerError {
    /// A model parameter violates its domain constraint.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the violated constraint.
        reason: String,
    },

    /// Simulation count outside `[1, MAX_SIMULATIONS]`.
    #[error("Invalid simulation count {0}: must be in range [1, 10_000_000]")]
    InvalidSimulationCount(i64),

    /// A finite random source ran out of draws.
    #[error("Random source exhausted: requested {requested} draws, {available} available")]
    RandomSourceExhausted {
        /// Number of draws asked for.
        requested: usize,
        /// Number of draws left in the source.
        available: usize,
    },
}

impl PricerError {
    /// Shorthand for [`PricerError::InvalidParameter`].
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Returns `true` for domain violations of model inputs.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(
            self,
            Self::InvalidParameter { .. } | Self::InvalidSimulationCount(_)
        )
    }
}
