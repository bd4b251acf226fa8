//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the feedback loop and the code
//! that actually touches documents. Implementations live in other crates.

use crate::Table;
use std::path::Path;
use thiserror::Error;

/// Rows of cells as found in a document's structure
///
/// `None` marks a cell the document left empty.
pub type RawTable = Vec<Vec<Option<String>>>;

/// Error raised by a document source
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct DocumentError {
    message: String,
}

impl DocumentError {
    /// Create a document error with a message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Access to the content of a document
///
/// Implemented by the infrastructure layer (parsewright-extractor). Rendering,
/// OCR and table detection are the implementor's business.
pub trait DocumentSource {
    /// Text of every page, rendered at the given resolution
    fn page_texts(&self, document: &Path, dpi: u32) -> Result<Vec<String>, DocumentError>;

    /// Tables found in the document's structure
    fn tables(&self, document: &Path) -> Result<Vec<RawTable>, DocumentError>;
}

/// Result of running an extraction strategy
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractionOutcome {
    /// Extraction ran to completion (the table may legitimately be empty)
    Extracted(Table),

    /// Extraction failed internally
    Failed {
        /// What went wrong
        reason: String,
    },
}

impl ExtractionOutcome {
    /// The extracted table, or an empty statement table on failure
    pub fn into_table(self) -> Table {
        match self {
            ExtractionOutcome::Extracted(table) => table,
            ExtractionOutcome::Failed { .. } => Table::statement(),
        }
    }

    /// The failure reason, if extraction failed
    pub fn fault(&self) -> Option<&str> {
        match self {
            ExtractionOutcome::Extracted(_) => None,
            ExtractionOutcome::Failed { reason } => Some(reason),
        }
    }
}

/// An extraction routine
///
/// Implemented by the application layer (parsewright-extractor) and by test
/// doubles. Implementations must not panic on expected failure paths; they
/// report them as `ExtractionOutcome::Failed`.
pub trait ExtractionStrategy {
    /// Short strategy name for logs
    fn name(&self) -> &str;

    /// Extract a statement table from a document
    fn extract(&self, document: &Path) -> ExtractionOutcome;
}
