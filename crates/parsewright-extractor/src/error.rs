//! Error types for the Extractor

use parsewright_synthesizer::SynthesisError;
use thiserror::Error;

/// Errors that can occur while loading an artifact
///
/// Failures while *running* a strategy are not errors; they are reported as
/// `ExtractionOutcome::Failed`.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Artifact could not be read or parsed
    #[error("Artifact error: {0}")]
    Artifact(#[from] SynthesisError),

    /// Artifact exposes an entry point this loader cannot run
    #[error("Unsupported entry point '{0}'")]
    UnsupportedEntryPoint(String),

    /// Artifact declares columns other than the statement schema
    #[error("Unsupported column schema: {0:?}")]
    UnsupportedColumns(Vec<String>),

    /// Artifact declares a record width other than the schema width
    #[error("Unsupported record width {found} (expected {expected})")]
    UnsupportedRecordWidth {
        /// Width found in the artifact
        found: usize,
        /// Width of the statement schema
        expected: usize,
    },
}
