//! Presentation of a pricing run.
//!
//! Rendering sits outside the numerical core: a [`Renderer`] only reads
//! the sample and result, and its failures never alter them. Swap in
//! [`NoopRenderer`] for headless runs and tests.
//!
//! - [`TextHistogram`]: bar chart to any `io::Write`
//! - [`SvgHistogram`]: standalone SVG file, optionally opened in the
//!   system viewer

mod svg;
mod text;

pub use svg::SvgHistogram;
pub use text::TextHistogram;

use thiserror::Error;

use crate::error::PricerError;
use crate::mc::{PricingResult, SimulatedPriceSample};

/// Chart title shared by all renderers.
pub const TITLE: &str = "Simulated Stock Prices at Maturity (Monte Carlo)";
/// Horizontal axis label.
pub const X_LABEL: &str = "Stock Price at T";
/// Vertical axis label.
pub const Y_LABEL: &str = "Frequency";

/// Presentation failures.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Writing the output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Formatting the output failed.
    #[error("Format error: {0}")]
    Format(#[from] std::fmt::Error),

    /// The sample could not be binned.
    #[error("Invalid sample: {0}")]
    InvalidSample(#[from] PricerError),
}

/// Consumer of a finished pricing run.
pub trait Renderer {
    /// Presents `sample` and `result`.
    ///
    /// # Errors
    ///
    /// Returns `RenderError` when the output cannot be produced.
    fn render(
        &mut self,
        sample: &SimulatedPriceSample,
        result: &PricingResult,
    ) -> Result<(), RenderError>;
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(
        &mut self,
        sample: &SimulatedPriceSample,
        result: &PricingResult,
    ) -> Result<(), RenderError> {
        (**self).render(sample, result)
    }
}

/// Renderer that does nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopRenderer;

impl Renderer for NoopRenderer {
    fn render(&mut self, _: &SimulatedPriceSample, _: &PricingResult) -> Result<(), RenderError> {
        Ok(())
    }
}
