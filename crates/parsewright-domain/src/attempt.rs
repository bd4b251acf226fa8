//! Attempt records - the outcome of one generate/test iteration

use crate::{ParameterSet, Table};
use std::fmt;

/// Why a candidate failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MismatchKind {
    /// Row or column counts differ
    Shape,

    /// Column labels differ
    Columns,

    /// At least one cell differs
    Values,
}

impl MismatchKind {
    /// Short name for reports
    pub fn as_str(&self) -> &'static str {
        match self {
            MismatchKind::Shape => "shape",
            MismatchKind::Columns => "columns",
            MismatchKind::Values => "values",
        }
    }
}

impl fmt::Display for MismatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Record of a single attempt
///
/// Transient: attempt records feed failure analysis and the final report and
/// are discarded with the run.
#[derive(Debug, Clone, PartialEq)]
pub struct AttemptRecord {
    /// 1-based attempt number
    pub attempt: u32,

    /// Whether the candidate passed validation
    pub success: bool,

    /// Diagnostic message (empty on success)
    pub diagnostic: String,

    /// Candidate dataset produced by the artifact
    pub candidate: Table,

    /// Parameters the artifact was synthesized with
    pub params: ParameterSet,

    /// Kind of mismatch, when validation failed
    pub mismatch: Option<MismatchKind>,

    /// Reason reported by the strategy when extraction itself failed
    pub extraction_fault: Option<String>,
}

impl AttemptRecord {
    /// Number of rows the candidate produced
    pub fn candidate_rows(&self) -> usize {
        self.candidate.row_count()
    }
}
