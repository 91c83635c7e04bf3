//! Run configuration.
//!
//! Each setting is taken from the first layer that provides it:
//!
//! 1. command-line flag
//! 2. `MC_PRICER_*` environment variable
//! 3. TOML config file (`--config`, or `mc_pricer.toml` if present)
//! 4. built-in default
//!
//! ```toml
//! [pricing]
//! initial_price = 100.0
//! strike = 105.0
//! num_simulations = 250000
//! seed = 42
//!
//! [plot]
//! mode = "svg"
//! output = "histogram.svg"
//! ```

use std::path::{Path, PathBuf};

use pricer_pricing::mc::{PricingParameters, SimulationCount};
use pricer_pricing::stats::{DEFAULT_BINS, MAX_BINS};
use serde::Deserialize;
use tracing::debug;

use crate::cli::{Cli, OutputFormat, PlotMode};
use crate::{CliError, Result};

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "mc_pricer.toml";

/// SVG path used when none is configured.
pub const DEFAULT_PLOT_OUTPUT: &str = "monte_carlo_histogram.svg";

/// Contents of a config file.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// `[pricing]` table.
    #[serde(default)]
    pub pricing: PricingSection,
    /// `[plot]` table.
    #[serde(default)]
    pub plot: PlotSection,
}

/// `[pricing]` table.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PricingSection {
    pub initial_price: Option<f64>,
    pub strike: Option<f64>,
    pub risk_free_rate: Option<f64>,
    pub volatility: Option<f64>,
    pub maturity: Option<f64>,
    pub num_simulations: Option<i64>,
    pub seed: Option<u64>,
}

/// `[plot]` table.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PlotSection {
    pub mode: Option<PlotMode>,
    pub bins: Option<usize>,
    pub output: Option<PathBuf>,
    pub show: Option<bool>,
}

impl FileConfig {
    /// Loads `path`, or [`DEFAULT_CONFIG_FILE`] if it exists when `path`
    /// is `None`.
    ///
    /// # Errors
    ///
    /// `CliError::ConfigRead` if an explicitly named file cannot be read,
    /// `CliError::ConfigParse` if the TOML is invalid.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::read(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::read(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&text).map_err(|source| CliError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// Parses TOML text.
    pub fn parse(text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

/// Fully resolved settings for one run.
#[derive(Clone, Debug, PartialEq)]
pub struct RunConfig {
    pub params: PricingParameters,
    pub seed: Option<u64>,
    pub format: OutputFormat,
    pub plot: PlotMode,
    pub bins: usize,
    pub plot_output: PathBuf,
    pub show: bool,
}

impl RunConfig {
    /// Merges parsed arguments over `file` and the defaults.
    ///
    /// # Errors
    ///
    /// `CliError::Pricing` for out-of-domain pricing inputs,
    /// `CliError::InvalidArgument` for a bin count outside `[1, MAX_BINS]`.
    pub fn resolve(cli: &Cli, file: FileConfig) -> Result<Self> {
        let defaults = PricingParameters::default();
        let pricing = file.pricing;

        let num_simulations = match cli.num_simulations.or(pricing.num_simulations) {
            Some(n) => SimulationCount::try_from(n)?.get(),
            None => defaults.num_simulations(),
        };

        let params = PricingParameters::builder()
            .initial_price(
                cli.initial_price
                    .or(pricing.initial_price)
                    .unwrap_or(defaults.initial_price()),
            )
            .strike(cli.strike.or(pricing.strike).unwrap_or(defaults.strike()))
            .risk_free_rate(
                cli.risk_free_rate
                    .or(pricing.risk_free_rate)
                    .unwrap_or(defaults.risk_free_rate()),
            )
            .volatility(
                cli.volatility
                    .or(pricing.volatility)
                    .unwrap_or(defaults.volatility()),
            )
            .maturity(cli.maturity.or(pricing.maturity).unwrap_or(defaults.maturity()))
            .num_simulations(num_simulations)
            .build()?;

        let plot = file.plot;
        let bins = cli.bins.or(plot.bins).unwrap_or(DEFAULT_BINS);
        if !(1..=MAX_BINS).contains(&bins) {
            return Err(CliError::InvalidArgument(format!(
                "bins must be in range [1, {}], got {}",
                MAX_BINS, bins
            )));
        }

        Ok(Self {
            params,
            seed: cli.seed.or(pricing.seed),
            format: cli.format,
            plot: cli.plot.or(plot.mode).unwrap_or_default(),
            bins,
            plot_output: cli
                .plot_output
                .clone()
                .or(plot.output)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PLOT_OUTPUT)),
            show: cli.show || plot.show.unwrap_or(false),
        })
    }
}
