//! CLI-specific error types
//!
//! Every CLI error is fatal: main prints it to stderr and exits non-zero.

use thiserror::Error;

use crate::config::ConfigError;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be read from the environment.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The process could not reach a serving state.
    #[error("boot failed: {0}")]
    Boot(String),

    /// The server stopped with an I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),

    /// The API description could not be rendered.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Boot failure
    pub fn boot_failed(msg: impl Into<String>) -> Self {
        CliError::Boot(msg.into())
    }
}
