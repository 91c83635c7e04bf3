//! SVG histogram of the terminal price distribution.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use super::{RenderError, Renderer, TITLE, X_LABEL, Y_LABEL};
use crate::mc::{PricingResult, SimulatedPriceSample};
use crate::stats::{Histogram, DEFAULT_BINS};

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 500.0;
const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 60.0;
const MARGIN_BOTTOM: f64 = 60.0;

const BAR_FILL: &str = "#1f77b4";
const BAR_OPACITY: f64 = 0.7;

/// Writes the histogram as a standalone SVG document.
///
/// Bars are drawn semi-transparent with black outlines, under the chart
/// title and axis labels. With [`with_show`](Self::with_show) the file is
/// handed to the system viewer after writing; a viewer failure is logged
/// and otherwise ignored.
#[derive(Clone, Debug)]
pub struct SvgHistogram {
    path: PathBuf,
    bins: usize,
    show: bool,
}

impl SvgHistogram {
    /// Creates a 50-bin renderer writing to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            bins: DEFAULT_BINS,
            show: false,
        }
    }

    /// Sets the number of bins.
    pub fn with_bins(mut self, bins: usize) -> Self {
        self.bins = bins;
        self
    }

    /// Opens the written file in the system viewer when `true`.
    pub fn with_show(mut self, show: bool) -> Self {
        self.show = show;
        self
    }

    /// Output file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Builds the SVG document without touching the filesystem.
    ///
    /// # Errors
    ///
    /// `RenderError::InvalidSample` if the sample cannot be binned.
    pub fn to_svg(
        &self,
        sample: &SimulatedPriceSample,
        result: &PricingResult,
    ) -> Result<String, RenderError> {
        let hist = sample.histogram(self.bins)?;
        let mut svg = String::with_capacity(256 + 160 * hist.n_bins());

        writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif">"#,
            w = WIDTH,
            h = HEIGHT
        )?;
        writeln!(svg, r#"<rect width="100%" height="100%" fill="white"/>"#)?;
        writeln!(
            svg,
            r#"<text x="{:.1}" y="28" text-anchor="middle" font-size="18">{}</text>"#,
            WIDTH / 2.0,
            TITLE
        )?;
        writeln!(
            svg,
            r##"<text x="{:.1}" y="46" text-anchor="middle" font-size="12" fill="#555">n = {}, call = {:.4}, put = {:.4}</text>"##,
            WIDTH / 2.0,
            sample.len(),
            result.call_price,
            result.put_price
        )?;

        write_bars(&mut svg, &hist)?;
        write_axes(&mut svg, &hist)?;

        writeln!(svg, "</svg>")?;
        Ok(svg)
    }
}

fn plot_width() -> f64 {
    WIDTH - MARGIN_LEFT - MARGIN_RIGHT
}

fn plot_height() -> f64 {
    HEIGHT - MARGIN_TOP - MARGIN_BOTTOM
}

fn write_bars(svg: &mut String, hist: &Histogram) -> std::fmt::Result {
    let bar_width = plot_width() / hist.n_bins() as f64;
    let max_count = hist.max_count().max(1) as f64;
    let baseline = HEIGHT - MARGIN_BOTTOM;

    for (i, &count) in hist.counts().iter().enumerate() {
        let bar_height = plot_height() * count as f64 / max_count;
        writeln!(
            svg,
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}" fill-opacity="{}" stroke="black" stroke-width="1"/>"#,
            MARGIN_LEFT + i as f64 * bar_width,
            baseline - bar_height,
            bar_width,
            bar_height,
            BAR_FILL,
            BAR_OPACITY
        )?;
    }
    Ok(())
}

fn write_axes(svg: &mut String, hist: &Histogram) -> std::fmt::Result {
    let baseline = HEIGHT - MARGIN_BOTTOM;
    let right = WIDTH - MARGIN_RIGHT;

    writeln!(
        svg,
        r#"<line x1="{l}" y1="{b}" x2="{r}" y2="{b}" stroke="black"/>"#,
        l = MARGIN_LEFT,
        b = baseline,
        r = right
    )?;
    writeln!(
        svg,
        r#"<line x1="{l}" y1="{t}" x2="{l}" y2="{b}" stroke="black"/>"#,
        l = MARGIN_LEFT,
        t = MARGIN_TOP,
        b = baseline
    )?;

    // Price ticks at every fifth of the range
    let (lo, hi) = (hist.edges()[0], hist.edges()[hist.n_bins()]);
    for tick in 0..=5 {
        let frac = tick as f64 / 5.0;
        let x = MARGIN_LEFT + frac * plot_width();
        writeln!(
            svg,
            r#"<text x="{:.2}" y="{:.2}" text-anchor="middle" font-size="11">{:.1}</text>"#,
            x,
            baseline + 16.0,
            lo + frac * (hi - lo)
        )?;
    }

    // Frequency ticks at quarters of the tallest bar
    let max_count = hist.max_count();
    for tick in 0..=4 {
        let y = baseline - plot_height() * tick as f64 / 4.0;
        writeln!(
            svg,
            r#"<text x="{:.2}" y="{:.2}" text-anchor="end" font-size="11">{}</text>"#,
            MARGIN_LEFT - 6.0,
            y + 4.0,
            max_count * tick / 4
        )?;
    }

    writeln!(
        svg,
        r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="13">{}</text>"#,
        MARGIN_LEFT + plot_width() / 2.0,
        HEIGHT - 18.0,
        X_LABEL
    )?;
    let mid_y = MARGIN_TOP + plot_height() / 2.0;
    writeln!(
        svg,
        r#"<text x="18" y="{y:.1}" text-anchor="middle" font-size="13" transform="rotate(-90 18 {y:.1})">{}</text>"#,
        Y_LABEL,
        y = mid_y
    )?;
    Ok(())
}

impl Renderer for SvgHistogram {
    fn render(
        &mut self,
        sample: &SimulatedPriceSample,
        result: &PricingResult,
    ) -> Result<(), RenderError> {
        let svg = self.to_svg(sample, result)?;
        fs::write(&self.path, svg)?;
        info!(path = %self.path.display(), bins = self.bins, "Histogram written");

        if self.show {
            if let Err(err) = open::that(&self.path) {
                warn!(path = %self.path.display(), error = %err, "Could not open histogram viewer");
            }
        }
        Ok(())
    }
}
