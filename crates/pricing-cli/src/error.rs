//! Error types for pricing-cli

use std::path::PathBuf;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from the pricing engine
    #[error(transparent)]
    Engine(#[from] pricing_core::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A configuration file does not exist
    #[error("'{path}' not found", path = .path.display())]
    ConfigNotFound { path: PathBuf },

    /// One or more documents in the batch failed
    #[error("{failed} of {total} configuration file(s) failed")]
    BatchFailed { failed: usize, total: usize },
}
