//! # service_cli: `mc-pricer` entry point
//!
//! Resolves pricing inputs from flags, environment and config file, runs
//! the Monte Carlo engine from `pricer_pricing`, prints the call and put
//! prices on stdout and renders the terminal-price histogram.
//!
//! Logs go to stderr so stdout carries only the price report.

use std::io::Write;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub mod cli;
pub mod commands;
pub mod config;
mod error;

pub use cli::Cli;
pub use error::{CliError, Result};

use config::{FileConfig, RunConfig};

/// Initialise tracing on stderr.
///
/// `RUST_LOG` wins when set; otherwise `info` with `verbose`, `warn`
/// without.
pub fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "info" } else { "warn" }));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Resolve configuration and run one pricing pass.
pub fn run(cli: &Cli) -> Result<()> {
    let file = FileConfig::load(cli.config.as_deref())?;
    let config = RunConfig::resolve(cli, file)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::price::run(&config, &mut out)?;
    out.flush()?;
    Ok(())
}
