//! Error types for the Synthesizer

use thiserror::Error;

/// Errors that can occur while writing or reading artifacts
#[derive(Error, Debug)]
pub enum SynthesisError {
    /// Filesystem error while writing or reading the artifact
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Artifact could not be serialized
    #[error("Failed to serialize artifact: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Artifact could not be parsed
    #[error("Malformed artifact: {0}")]
    Malformed(#[from] toml::de::Error),

    /// Artifact was written by an incompatible format version
    #[error("Unsupported artifact format version {found} (expected {expected})")]
    UnsupportedVersion {
        /// Version found in the artifact
        found: u32,
        /// Version this build understands
        expected: u32,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
