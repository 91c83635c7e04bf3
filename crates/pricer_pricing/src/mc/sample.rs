//! Simulated terminal prices produced by one pricing run.

use crate::error::PricerError;
use crate::stats::Histogram;

/// Ordered, immutable sequence of simulated terminal prices S(T).
///
/// Element `i` is the terminal price produced by the `i`-th normal draw,
/// so the sample lines up index-for-index with the random sequence that
/// produced it.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulatedPriceSample {
    prices: Vec<f64>,
}

impl SimulatedPriceSample {
    pub(crate) fn new(prices: Vec<f64>) -> Self {
        Self { prices }
    }

    /// Returns the terminal prices as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.prices
    }

    /// Number of simulated prices.
    #[inline]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Returns `true` if the sample holds no prices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Smallest simulated price, `None` when empty.
    pub fn min(&self) -> Option<f64> {
        self.prices.iter().copied().reduce(f64::min)
    }

    /// Largest simulated price, `None` when empty.
    pub fn max(&self) -> Option<f64> {
        self.prices.iter().copied().reduce(f64::max)
    }

    /// Arithmetic mean, `None` when empty.
    pub fn mean(&self) -> Option<f64> {
        if self.prices.is_empty() {
            return None;
        }
        Some(self.prices.iter().sum::<f64>() / self.prices.len() as f64)
    }

    /// Bins the sample into `n_bins` equal-width bins.
    ///
    /// # Errors
    ///
    /// See [`Histogram::from_samples`].
    pub fn histogram(&self, n_bins: usize) -> Result<Histogram, PricerError> {
        Histogram::from_samples(&self.prices, n_bins)
    }

    /// Consumes the sample, returning the underlying buffer.
    pub fn into_vec(self) -> Vec<f64> {
        self.prices
    }
}

impl AsRef<[f64]> for SimulatedPriceSample {
    fn as_ref(&self) -> &[f64] {
        &self.prices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_statistics() {
        let sample = SimulatedPriceSample::new(vec![90.0, 110.0, 100.0, 120.0]);

        assert_eq!(sample.len(), 4);
        assert!(!sample.is_empty());
        assert_eq!(sample.min(), Some(90.0));
        assert_eq!(sample.max(), Some(120.0));
        assert_eq!(sample.mean(), Some(105.0));
        assert_eq!(sample.as_slice()[2], 100.0);
    }

    #[test]
    fn test_empty_sample() {
        let sample = SimulatedPriceSample::new(vec![]);

        assert!(sample.is_empty());
        assert_eq!(sample.min(), None);
        assert_eq!(sample.max(), None);
        assert_eq!(sample.mean(), None);
        assert!(sample.histogram(50).is_err());
    }
}
