//! mc-pricer: Monte Carlo pricing of European options
//!
//! # Usage
//!
//! - `mc-pricer` - price with the built-in defaults (S0=100, K=105, r=5%, σ=20%, T=1)
//! - `mc-pricer --seed 42 --num-simulations 1000000` - reproducible larger run
//! - `mc-pricer --plot svg --show` - write the histogram as SVG and open it
//! - `mc-pricer --config pricer.toml --format json` - config file, JSON report

use clap::Parser;
use tracing::info;

use service_cli::{Cli, Result};

fn main() -> Result<()> {
    let cli = Cli::parse();

    service_cli::init_tracing(cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    service_cli::run(&cli)
}
