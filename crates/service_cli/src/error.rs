//! CLI error types.

use std::path::PathBuf;

use pricer_pricing::render::RenderError;
use pricer_pricing::PricerError;
use thiserror::Error;

/// Errors surfaced by the `mc-pricer` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Parameters rejected by the pricing engine.
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricerError),

    /// Histogram could not be produced.
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Config file missing or unreadable.
    #[error("Cannot read config file {path}: {source}")]
    ConfigRead {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this tool.
    #[error("Invalid config file {path}: {source}")]
    ConfigParse {
        /// File that was parsed.
        path: PathBuf,
        /// Parser diagnostic.
        #[source]
        source: toml::de::Error,
    },

    /// Option value outside its allowed range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON output could not be written.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing to stdout failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
