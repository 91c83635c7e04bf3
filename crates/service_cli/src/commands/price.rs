//! Price command implementation
//!
//! Runs the Monte Carlo engine once, writes the prices to stdout and hands
//! the simulated sample to the configured renderer.

use std::io::Write;

use pricer_pricing::analytical::{black_scholes, BlackScholesPrice};
use pricer_pricing::mc::{MonteCarloPricer, PricingParameters, PricingResult};
use pricer_pricing::render::{NoopRenderer, Renderer, SvgHistogram, TextHistogram};
use pricer_pricing::rng::PricerRng;
use serde::Serialize;
use tracing::{info, warn};

use crate::cli::{OutputFormat, PlotMode};
use crate::config::RunConfig;
use crate::Result;

/// JSON document for `--format json`.
#[derive(Serialize)]
struct Report<'a> {
    #[serde(flatten)]
    result: &'a PricingResult,
    parameters: &'a PricingParameters,
    seed: u64,
    black_scholes: BlackScholesPrice,
}

/// Run the price command, writing the report to `out`.
pub fn run<W: Write>(config: &RunConfig, out: &mut W) -> Result<PricingResult> {
    let params = &config.params;
    let mut rng = match config.seed {
        Some(seed) => PricerRng::from_seed(seed),
        None => PricerRng::from_entropy(),
    };
    info!(seed = rng.seed(), n = params.num_simulations(), "Starting pricing");

    let (sample, result) = MonteCarloPricer::new().price(params, &mut rng)?;

    let reference = black_scholes(params);
    info!(
        call = result.call_price,
        call_bs = reference.call,
        call_se = result.call_std_error,
        put = result.put_price,
        put_bs = reference.put,
        put_se = result.put_std_error,
        "Monte Carlo vs Black-Scholes"
    );
    info!(
        residual = result.parity_residual(params),
        "Put-call parity residual"
    );

    match config.format {
        OutputFormat::Text => write_text(out, &result)?,
        OutputFormat::Json => {
            let report = Report {
                result: &result,
                parameters: params,
                seed: rng.seed(),
                black_scholes: reference,
            };
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
    }
    out.flush()?;

    if config.show && config.plot != PlotMode::Svg {
        warn!("--show only applies to --plot svg");
    }
    renderer(config).render(&sample, &result)?;

    info!("Pricing complete");
    Ok(result)
}

/// The two report lines, four decimal places each.
pub fn write_text<W: Write>(out: &mut W, result: &PricingResult) -> std::io::Result<()> {
    writeln!(out, "Monte Carlo European Call Price: {:.4}", result.call_price)?;
    writeln!(out, "Monte Carlo European Put Price: {:.4}", result.put_price)
}

fn renderer(config: &RunConfig) -> Box<dyn Renderer> {
    match config.plot {
        PlotMode::None => Box::new(NoopRenderer),
        PlotMode::Text => Box::new(TextHistogram::new(std::io::stderr()).with_bins(config.bins)),
        PlotMode::Svg => Box::new(
            SvgHistogram::new(config.plot_output.clone())
                .with_bins(config.bins)
                .with_show(config.show),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_PLOT_OUTPUT;
    use approx::assert_abs_diff_eq;
    use std::path::PathBuf;

    fn config(seed: u64, format: OutputFormat) -> RunConfig {
        RunConfig {
            params: PricingParameters::default(),
            seed: Some(seed),
            format,
            plot: PlotMode::None,
            bins: 50,
            plot_output: PathBuf::from(DEFAULT_PLOT_OUTPUT),
            show: false,
        }
    }

    #[test]
    fn test_text_report() {
        let mut out = Vec::new();
        let result = run(&config(42, OutputFormat::Text), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            format!("Monte Carlo European Call Price: {:.4}", result.call_price)
        );
        assert_eq!(
            lines[1],
            format!("Monte Carlo European Put Price: {:.4}", result.put_price)
        );
        assert_abs_diff_eq!(result.call_price, 8.02, epsilon = 0.15);
        assert_abs_diff_eq!(result.put_price, 7.90, epsilon = 0.15);
    }

    #[test]
    fn test_same_seed_same_output() {
        let mut first = Vec::new();
        let mut second = Vec::new();
        run(&config(9, OutputFormat::Text), &mut first).unwrap();
        run(&config(9, OutputFormat::Text), &mut second).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_json_report() {
        let mut out = Vec::new();
        let result = run(&config(42, OutputFormat::Json), &mut out).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_abs_diff_eq!(json["call_price"].as_f64().unwrap(), result.call_price, epsilon = 1e-12);
        assert_abs_diff_eq!(json["put_price"].as_f64().unwrap(), result.put_price, epsilon = 1e-12);
        assert_eq!(json["seed"].as_u64(), Some(42));
        assert_eq!(json["parameters"]["strike"].as_f64(), Some(105.0));
        assert!(json["black_scholes"]["call"].as_f64().is_some());
    }

    #[test]
    fn test_write_text_rounds_to_four_places() {
        let result = PricingResult {
            call_price: 8.123_456,
            put_price: 0.000_04,
            ..PricingResult::default()
        };
        let mut out = Vec::new();
        write_text(&mut out, &result).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Monte Carlo European Call Price: 8.1235\nMonte Carlo European Put Price: 0.0000\n"
        );
    }

    #[test]
    fn test_svg_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hist.svg");
        let config = RunConfig {
            plot: PlotMode::Svg,
            plot_output: path.clone(),
            params: PricingParameters::new(100.0, 105.0, 0.05, 0.2, 1.0, 2_000).unwrap(),
            ..config(1, OutputFormat::Text)
        };

        run(&config, &mut Vec::new()).unwrap();
        let svg = std::fs::read_to_string(path).unwrap();
        assert!(svg.contains("<svg"));
    }
}
