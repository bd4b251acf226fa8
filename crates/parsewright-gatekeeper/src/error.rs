//! Gatekeeper error types

use parsewright_extractor::ExtractorError;
use parsewright_store::StoreError;
use thiserror::Error;

/// Errors that can occur during validation
///
/// A candidate that does not match the reference is not an error; it is a
/// failed [`ValidationResult`](crate::ValidationResult).
#[derive(Error, Debug)]
pub enum GatekeeperError {
    /// Artifact could not be loaded or instantiated
    #[error("Artifact load error: {0}")]
    ArtifactLoad(#[from] ExtractorError),

    /// Reference dataset could not be read
    #[error("Reference error: {0}")]
    Reference(#[from] StoreError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
