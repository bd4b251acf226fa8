//! Error types for agent runs

use parsewright_gatekeeper::GatekeeperError;
use parsewright_store::StoreError;
use parsewright_synthesizer::SynthesisError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that end a run before a verdict is reached
///
/// Exhausting the attempt ceiling is not an error; it is a report whose
/// terminal state is [`AgentState::Exhausted`](crate::AgentState::Exhausted).
#[derive(Error, Debug)]
pub enum AgentError {
    /// A required input file does not exist
    #[error("Missing {what}: {}", .path.display())]
    MissingInput {
        /// Which input is missing
        what: &'static str,
        /// Where it was expected
        path: PathBuf,
    },

    /// Reference dataset is unreadable or malformed
    #[error("Reference dataset error: {0}")]
    Reference(#[from] StoreError),

    /// Artifact could not be written
    #[error("Synthesis error: {0}")]
    Synthesis(#[from] SynthesisError),

    /// Artifact could not be loaded
    #[error("Validation error: {0}")]
    Validation(#[from] GatekeeperError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
