//! Terminal bar chart of the terminal price distribution.

use std::io::Write;

use super::{RenderError, Renderer, TITLE, X_LABEL, Y_LABEL};
use crate::mc::{PricingResult, SimulatedPriceSample};
use crate::stats::DEFAULT_BINS;

/// Horizontal bar chart written line by line to `W`.
///
/// ```rust
/// use pricer_pricing::mc::{MonteCarloPricer, PricingParameters};
/// use pricer_pricing::render::{Renderer, TextHistogram};
/// use pricer_pricing::rng::PricerRng;
///
/// let params = PricingParameters::new(100.0, 105.0, 0.05, 0.2, 1.0, 1_000).unwrap();
/// let (sample, result) = MonteCarloPricer::new()
///     .price(&params, &mut PricerRng::from_seed(1))
///     .unwrap();
///
/// let mut chart = TextHistogram::new(Vec::new()).with_bins(10);
/// chart.render(&sample, &result).unwrap();
///
/// let text = String::from_utf8(chart.into_inner()).unwrap();
/// assert!(text.starts_with("Simulated Stock Prices at Maturity"));
/// ```
#[derive(Debug)]
pub struct TextHistogram<W> {
    writer: W,
    bins: usize,
    bar_width: usize,
}

impl<W: Write> TextHistogram<W> {
    /// Creates a 50-bin chart with bars up to 50 characters long.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            bins: DEFAULT_BINS,
            bar_width: 50,
        }
    }

    /// Sets the number of bins.
    pub fn with_bins(mut self, bins: usize) -> Self {
        self.bins = bins;
        self
    }

    /// Sets the length of the longest bar in characters.
    pub fn with_bar_width(mut self, bar_width: usize) -> Self {
        self.bar_width = bar_width;
        self
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Renderer for TextHistogram<W> {
    fn render(
        &mut self,
        sample: &SimulatedPriceSample,
        result: &PricingResult,
    ) -> Result<(), RenderError> {
        let hist = sample.histogram(self.bins)?;
        let max_count = hist.max_count().max(1);
        let out = &mut self.writer;

        writeln!(out, "{}", TITLE)?;
        writeln!(out, "{:>21} | {}", X_LABEL, Y_LABEL)?;
        for (lo, hi, count) in hist.bins() {
            let len = (count * self.bar_width + max_count / 2) / max_count;
            writeln!(
                out,
                "{:>9.2} - {:<9.2} | {} {}",
                lo,
                hi,
                "#".repeat(len),
                count
            )?;
        }
        writeln!(
            out,
            "n = {}, call = {:.4}, put = {:.4}",
            sample.len(),
            result.call_price,
            result.put_price
        )?;
        out.flush()?;
        Ok(())
    }
}
