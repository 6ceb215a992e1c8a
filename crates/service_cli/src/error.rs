//! CLI error types.

use deal_core::types::InputError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced to the user by the `underwrite` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// The deal file does not exist.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// The deal file extension is not `.toml` or `.json`.
    #[error("Unsupported deal file format: {0}. Supported: toml, json")]
    UnsupportedFormat(String),

    /// The deal file could not be parsed.
    #[error("Failed to parse deal file {path}: {message}")]
    Parse {
        /// File that failed
        path: String,
        /// Parser message
        message: String,
    },

    /// The deal assumptions are structurally invalid.
    #[error("Invalid deal assumptions: {0}")]
    InvalidInput(#[from] InputError),

    /// Configuration could not be resolved.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Results could not be encoded.
    #[error("Failed to encode output: {0}")]
    Output(#[from] serde_json::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
