//! The generate-test-analyze loop

use crate::{AgentConfig, AgentError, AnalyzerConfig, FailureAnalyzer, RunReport};
use parsewright_domain::{AttemptRecord, ParameterSet, RunId, TargetId};
use parsewright_extractor::StrategyLoader;
use parsewright_gatekeeper::{AccuracyScorer, ValidationConfig, ValidationRunner};
use parsewright_store::DatasetStore;
use parsewright_synthesizer::{Synthesizer, SynthesizerConfig};
use std::fmt;
use std::path::Path;
use tracing::{debug, info, warn};

/// Orchestrator states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentState {
    /// Resolving paths, checking inputs, loading the reference
    Planning,
    /// Writing the artifact for the current parameters
    Synthesizing,
    /// Running the artifact and comparing against the reference
    Validating,
    /// Deriving the next parameters from a failure
    Analyzing,
    /// Terminal: a candidate passed validation
    Succeeded,
    /// Terminal: the attempt ceiling was reached without success
    Exhausted,
}

impl AgentState {
    /// State name
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentState::Planning => "planning",
            AgentState::Synthesizing => "synthesizing",
            AgentState::Validating => "validating",
            AgentState::Analyzing => "analyzing",
            AgentState::Succeeded => "succeeded",
            AgentState::Exhausted => "exhausted",
        }
    }
}

impl fmt::Display for AgentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Drives synthesis, validation and analysis until success or exhaustion
///
/// One orchestrator covers every combination of comparison policy, strategy
/// family and analyzer strictness; each is a configuration value.
///
/// # Examples
///
/// ```no_run
/// use parsewright_agent::{AgentConfig, Orchestrator};
/// use parsewright_domain::TargetId;
/// use parsewright_extractor::{ArtifactLoader, PdfTextSource};
/// use std::sync::Arc;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let loader = ArtifactLoader::new(Arc::new(PdfTextSource::new()));
/// let orchestrator = Orchestrator::new(AgentConfig::default(), loader);
///
/// let report = orchestrator.run(&TargetId::parse("icici")?)?;
/// println!("{}", report.verdict());
/// # Ok(())
/// # }
/// ```
pub struct Orchestrator<L: StrategyLoader> {
    config: AgentConfig,
    synthesizer: Synthesizer,
    runner: ValidationRunner<L>,
    analyzer: FailureAnalyzer,
    scorer: AccuracyScorer,
    store: DatasetStore,
}

impl<L: StrategyLoader> Orchestrator<L> {
    /// Create an orchestrator with default synthesis, validation and analysis
    pub fn new(config: AgentConfig, loader: L) -> Self {
        let validation = ValidationConfig::default();
        Self {
            config,
            synthesizer: Synthesizer::default_config(),
            scorer: AccuracyScorer::new(validation.tolerance),
            runner: ValidationRunner::new(loader, validation),
            analyzer: FailureAnalyzer::default_config(),
            store: DatasetStore::default(),
        }
    }

    /// Use a different strategy family or synthesis settings
    pub fn with_synthesizer_config(mut self, config: SynthesizerConfig) -> Self {
        self.synthesizer = Synthesizer::new(config);
        self
    }

    /// Use a different comparison policy
    pub fn with_validation_config(mut self, config: ValidationConfig) -> Self {
        self.scorer = AccuracyScorer::new(config.tolerance);
        self.runner = self.runner.with_config(config);
        self
    }

    /// Use a different analyzer strictness
    pub fn with_analyzer_config(mut self, config: AnalyzerConfig) -> Self {
        self.analyzer = FailureAnalyzer::new(config);
        self
    }

    /// The agent configuration
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    fn validate_configs(&self) -> Result<(), AgentError> {
        self.config.validate().map_err(AgentError::Config)?;
        self.synthesizer.config().validate().map_err(AgentError::Config)?;
        self.runner.config().validate().map_err(AgentError::Config)?;
        self.analyzer.config().validate().map_err(AgentError::Config)?;
        Ok(())
    }

    /// Run the loop for one target
    ///
    /// # Errors
    ///
    /// Missing inputs, an unreadable reference, an artifact write failure and
    /// an unloadable artifact end the run with an error. Running out of
    /// attempts is a normal outcome reported as [`AgentState::Exhausted`].
    pub fn run(&self, target: &TargetId) -> Result<RunReport, AgentError> {
        self.validate_configs()?;

        let run_id = RunId::new();
        let mut trail = vec![AgentState::Planning];
        info!("[Run {}] Planning for target '{}'", run_id, target);

        let paths = self.config.layout().resolve(target);
        require_file("input document", &paths.document)?;
        require_file("reference dataset", &paths.reference)?;
        let reference = self.store.read_reference(&paths.reference)?;
        debug!(
            "Reference {} has {} rows; artifact path {}",
            paths.reference.display(),
            reference.row_count(),
            paths.artifact.display()
        );

        let max_attempts = self.config.max_attempts;
        let mut params = ParameterSet::new(self.config.initial_render_dpi);
        let mut attempts: Vec<AttemptRecord> = Vec::new();
        let mut state = AgentState::Exhausted;

        for attempt in 1..=max_attempts {
            trail.push(AgentState::Synthesizing);
            info!(
                "--- Attempt {}/{} (render_dpi={}) ---",
                attempt,
                max_attempts,
                params.render_dpi()
            );
            self.synthesizer.synthesize(target, &paths.artifact, &params)?;

            trail.push(AgentState::Validating);
            let result = self.runner.run(&paths.artifact, &paths.document, &reference)?;
            let record = AttemptRecord {
                attempt,
                success: result.success,
                diagnostic: result.diagnostic,
                candidate: result.candidate,
                params,
                mismatch: result.mismatch,
                extraction_fault: result.extraction_fault,
            };

            if record.success {
                attempts.push(record);
                state = AgentState::Succeeded;
                break;
            }

            if attempt < max_attempts {
                trail.push(AgentState::Analyzing);
                let analysis = self.analyzer.analyze(&record.diagnostic, &record.candidate, &reference, &params);
                params = analysis.params;
            }
            attempts.push(record);
        }

        trail.push(state);
        if state == AgentState::Succeeded {
            info!("[Run {}] Succeeded after {} attempt(s)", run_id, attempts.len());
        } else {
            warn!("[Run {}] Exhausted {} attempts without a passing parser", run_id, max_attempts);
        }

        let accuracy = attempts
            .last()
            .map(|last| self.scorer.score(&reference, &last.candidate));

        Ok(RunReport {
            run_id,
            target: target.clone(),
            state,
            trail,
            max_attempts,
            attempts,
            final_params: params,
            accuracy,
        })
    }
}

fn require_file(what: &'static str, path: &Path) -> Result<(), AgentError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(AgentError::MissingInput {
            what,
            path: path.to_path_buf(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_names() {
        assert_eq!(AgentState::Validating.to_string(), "validating");
        assert_eq!(AgentState::Exhausted.as_str(), "exhausted");
    }
}
