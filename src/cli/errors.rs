//! CLI-specific error types
//!
//! Every CLI error is fatal: `main` prints it and exits with status 1.

use thiserror::Error;

use crate::config::ConfigError;
use crate::http_server::ServerError;
use crate::observability::LoggingError;
use crate::store::StoreError;

/// Result type for CLI commands
pub type CliResult<T> = Result<T, CliError>;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Logging setup failed: {0}")]
    Logging(#[from] LoggingError),

    #[error("Record store error: {0}")]
    Store(#[from] StoreError),

    #[error("HTTP server error: {0}")]
    Server(#[from] ServerError),
}
