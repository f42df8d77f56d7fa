//! Error types for the fieldcheck CLI.

use fieldcheck_core::ValidationErrors;
use thiserror::Error;

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Reading input failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Flags were parsed but did not pass validation
    #[error("input failed validation: {0}")]
    Invalid(ValidationErrors),

    /// The request was answered with a non-success status
    #[error("request rejected with status {0}")]
    Rejected(u16),
}
