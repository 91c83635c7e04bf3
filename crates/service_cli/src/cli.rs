//! Command-line arguments.
//!
//! Pricing inputs are optional here so that an absent flag can fall back
//! to its environment variable, then the config file, then the built-in
//! default. clap resolves flag-over-env; [`crate::config`] does the rest.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::Deserialize;

/// Monte Carlo pricer for European call and put options
#[derive(Debug, Parser)]
#[command(name = "mc-pricer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Configuration file path [default: mc_pricer.toml, if present]
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Spot price of the underlying (S0)
    #[arg(long, env = "MC_PRICER_INITIAL_PRICE", allow_negative_numbers = true)]
    pub initial_price: Option<f64>,

    /// Strike price (K)
    #[arg(long, env = "MC_PRICER_STRIKE", allow_negative_numbers = true)]
    pub strike: Option<f64>,

    /// Continuously compounded risk-free rate (r)
    #[arg(long, env = "MC_PRICER_RISK_FREE_RATE", allow_negative_numbers = true)]
    pub risk_free_rate: Option<f64>,

    /// Annualised volatility (sigma)
    #[arg(long, env = "MC_PRICER_VOLATILITY", allow_negative_numbers = true)]
    pub volatility: Option<f64>,

    /// Time to maturity in years (T)
    #[arg(long, env = "MC_PRICER_MATURITY", allow_negative_numbers = true)]
    pub maturity: Option<f64>,

    /// Number of simulated terminal prices
    #[arg(short, long, env = "MC_PRICER_NUM_SIMULATIONS", allow_negative_numbers = true)]
    pub num_simulations: Option<i64>,

    /// Random seed; omit for a fresh entropy seed
    #[arg(short, long, env = "MC_PRICER_SEED")]
    pub seed: Option<u64>,

    /// Output format for the prices
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Histogram output [default: text]
    #[arg(long, value_enum)]
    pub plot: Option<PlotMode>,

    /// SVG file written by `--plot svg` [default: monte_carlo_histogram.svg]
    #[arg(long)]
    pub plot_output: Option<PathBuf>,

    /// Open the SVG histogram in the system viewer
    #[arg(long)]
    pub show: bool,

    /// Number of histogram bins [default: 50]
    #[arg(long)]
    pub bins: Option<usize>,
}

/// Format of the price report on stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Two human-readable lines
    #[default]
    Text,
    /// One JSON document
    Json,
}

/// Where the histogram goes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlotMode {
    /// No histogram
    None,
    /// Bar chart on stderr
    #[default]
    Text,
    /// SVG file
    Svg,
}
