//! Error types for the CLI application.

use parsewright_agent::AgentError;
use parsewright_extractor::ExtractorError;
use parsewright_store::StoreError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Agent run ended without a verdict
    #[error("{0}")]
    Agent(#[from] AgentError),

    /// Artifact could not be loaded
    #[error("Artifact error: {0}")]
    Artifact(#[from] ExtractorError),

    /// Dataset could not be read or written
    #[error("Dataset error: {0}")]
    Store(#[from] StoreError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
