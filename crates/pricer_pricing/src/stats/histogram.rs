//! Equal-width frequency histogram.

use crate::error::PricerError;

/// Bin count used when rendering the terminal price distribution.
pub const DEFAULT_BINS: usize = 50;

/// Upper bound on the bin count; keeps rendering memory bounded.
pub const MAX_BINS: usize = 10_000;

/// Histogram representation with bin edges and counts.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// Bin edges (length = `n_bins` + 1)
    edges: Vec<f64>,
    /// Bin counts (length = `n_bins`)
    counts: Vec<usize>,
}

impl Histogram {
    /// Bins `samples` into `n_bins` equal-width bins spanning `[min, max]`.
    ///
    /// Bins are half-open `[lo, hi)` except the last, which also takes the
    /// maximum. When every sample is equal the range is widened to
    /// `[x - 0.5, x + 0.5]` so a point mass still yields `n_bins` bins.
    ///
    /// # Errors
    ///
    /// `PricerError::InvalidParameter` if `samples` is empty, `n_bins` is
    /// outside `[1, MAX_BINS]`, or a sample is not finite.
    ///
    /// # Examples
    /// ```
    /// use pricer_pricing::stats::Histogram;
    ///
    /// let hist = Histogram::from_samples(&[1.0, 2.0, 3.0, 4.0, 5.0], 4).unwrap();
    /// assert_eq!(hist.edges(), &[1.0, 2.0, 3.0, 4.0, 5.0]);
    /// assert_eq!(hist.counts(), &[1, 1, 1, 2]);
    /// ```
    pub fn from_samples(samples: &[f64], n_bins: usize) -> Result<Self, PricerError> {
        if samples.is_empty() {
            return Err(PricerError::invalid(
                "samples",
                "cannot compute histogram of empty sample",
            ));
        }
        if !(1..=MAX_BINS).contains(&n_bins) {
            return Err(PricerError::invalid(
                "n_bins",
                format!("must be in range [1, {}], got {}", MAX_BINS, n_bins),
            ));
        }
        if let Some(bad) = samples.iter().find(|v| !v.is_finite()) {
            return Err(PricerError::invalid(
                "samples",
                format!("must be finite, found {}", bad),
            ));
        }

        let (mut lo, mut hi) = samples
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }

        let width = (hi - lo) / n_bins as f64;
        let mut edges: Vec<f64> = (0..n_bins).map(|i| lo + i as f64 * width).collect();
        edges.push(hi);

        let mut counts = vec![0usize; n_bins];
        for &value in samples {
            let idx = ((value - lo) / width) as usize;
            counts[idx.min(n_bins - 1)] += 1;
        }

        Ok(Self { edges, counts })
    }

    /// Bin edges, `n_bins() + 1` values in increasing order.
    #[inline]
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Per-bin counts.
    #[inline]
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Number of bins.
    #[inline]
    pub fn n_bins(&self) -> usize {
        self.counts.len()
    }

    /// Width shared by every bin.
    #[inline]
    pub fn bin_width(&self) -> f64 {
        (self.edges[self.edges.len() - 1] - self.edges[0]) / self.n_bins() as f64
    }

    /// Total number of binned samples.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Largest bin count.
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Midpoint of bin `index`, `None` if out of range.
    pub fn bin_centre(&self, index: usize) -> Option<f64> {
        (index < self.n_bins()).then(|| 0.5 * (self.edges[index] + self.edges[index + 1]))
    }

    /// Iterates `(lo, hi, count)` per bin.
    pub fn bins(&self) -> impl Iterator<Item = (f64, f64, usize)> + '_ {
        self.edges
            .windows(2)
            .zip(&self.counts)
            .map(|(edge, &count)| (edge[0], edge[1], count))
    }
}
