//! Run reports

use crate::AgentState;
use parsewright_domain::{AttemptRecord, ParameterSet, RunId, Table, TargetId};
use parsewright_gatekeeper::AccuracyReport;
use serde::Serialize;

/// Outcome of one orchestration run
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Run identifier
    pub run_id: RunId,

    /// Target the run worked on
    pub target: TargetId,

    /// Terminal state (Succeeded or Exhausted)
    pub state: AgentState,

    /// Every state the run passed through, in order
    pub trail: Vec<AgentState>,

    /// Attempt ceiling the run was configured with
    pub max_attempts: u32,

    /// One record per attempt, in order
    pub attempts: Vec<AttemptRecord>,

    /// Parameters in effect at the end of the run
    pub final_params: ParameterSet,

    /// Accuracy of the last candidate against the reference
    pub accuracy: Option<AccuracyReport>,
}

impl RunReport {
    /// Whether the run ended in success
    pub fn succeeded(&self) -> bool {
        self.state == AgentState::Succeeded
    }

    /// Number of attempts made
    pub fn attempt_count(&self) -> usize {
        self.attempts.len()
    }

    /// Candidate produced by the last attempt
    pub fn last_candidate(&self) -> Option<&Table> {
        self.attempts.last().map(|a| &a.candidate)
    }

    /// One-line verdict
    pub fn verdict(&self) -> String {
        if self.succeeded() {
            format!(
                "Parser for '{}' passed on attempt {} of {}",
                self.target,
                self.attempt_count(),
                self.max_attempts
            )
        } else {
            format!(
                "Parser for '{}' failed after {} attempts",
                self.target,
                self.attempt_count()
            )
        }
    }

    /// Serializable projection of the report
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            run_id: self.run_id.to_string(),
            target: self.target.to_string(),
            state: self.state.as_str(),
            succeeded: self.succeeded(),
            max_attempts: self.max_attempts,
            trail: self.trail.iter().map(AgentState::as_str).collect(),
            attempts: self.attempts.iter().map(AttemptSummary::from).collect(),
            final_render_dpi: self.final_params.render_dpi(),
            accuracy: self.accuracy.clone(),
        }
    }
}

/// Serializable view of a [`RunReport`]
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    /// Run identifier
    pub run_id: String,
    /// Target name
    pub target: String,
    /// Terminal state name
    pub state: &'static str,
    /// Whether the run succeeded
    pub succeeded: bool,
    /// Attempt ceiling
    pub max_attempts: u32,
    /// State names in order
    pub trail: Vec<&'static str>,
    /// Per-attempt summaries
    pub attempts: Vec<AttemptSummary>,
    /// Final rendering resolution
    pub final_render_dpi: u32,
    /// Accuracy of the last candidate
    pub accuracy: Option<AccuracyReport>,
}

/// Serializable view of an [`AttemptRecord`]
#[derive(Debug, Clone, Serialize)]
pub struct AttemptSummary {
    /// 1-based attempt number
    pub attempt: u32,
    /// Whether validation passed
    pub success: bool,
    /// Rendering resolution used
    pub render_dpi: u32,
    /// Candidate row count
    pub rows: usize,
    /// Mismatch kind name
    pub mismatch: Option<&'static str>,
    /// Diagnostic message
    pub diagnostic: String,
    /// Extraction fault reason
    pub extraction_fault: Option<String>,
}

impl From<&AttemptRecord> for AttemptSummary {
    fn from(record: &AttemptRecord) -> Self {
        Self {
            attempt: record.attempt,
            success: record.success,
            render_dpi: record.params.render_dpi(),
            rows: record.candidate_rows(),
            mismatch: record.mismatch.map(|m| m.as_str()),
            diagnostic: record.diagnostic.clone(),
            extraction_fault: record.extraction_fault.clone(),
        }
    }
}
