//! Core Synthesizer implementation

use crate::artifact::ENTRY_POINT;
use crate::{
    ArtifactSpec, HybridSpec, RenderingSpec, StrategyFamily, StrategySpec, StructuralSpec,
    SynthesisError, SynthesizerConfig, ARTIFACT_FORMAT_VERSION,
};
use parsewright_domain::{ParameterSet, TargetId, STATEMENT_COLUMNS};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// The Synthesizer renders extraction-routine artifacts
///
/// Synthesis is deterministic: the same target, configuration and parameters
/// always produce byte-identical artifacts. The synthesizer never runs the
/// routine it writes.
pub struct Synthesizer {
    config: SynthesizerConfig,
}

impl Synthesizer {
    /// Create a new Synthesizer
    pub fn new(config: SynthesizerConfig) -> Self {
        Self { config }
    }

    /// Create a Synthesizer with default configuration
    pub fn default_config() -> Self {
        Self::new(SynthesizerConfig::default())
    }

    /// The active configuration
    pub fn config(&self) -> &SynthesizerConfig {
        &self.config
    }

    /// Build the artifact description for a target without writing it
    pub fn design(&self, target: &TargetId, params: &ParameterSet) -> ArtifactSpec {
        let structural = StructuralSpec {
            header_token: self.config.header_token.clone(),
            record_width: STATEMENT_COLUMNS.len(),
        };
        let rendering = RenderingSpec {
            dpi: params.render_dpi(),
            header_token: self.config.header_token.clone(),
            record_width: STATEMENT_COLUMNS.len(),
        };

        let strategy = match self.config.strategy {
            StrategyFamily::Rendering => StrategySpec::Rendering(rendering),
            StrategyFamily::Structural => StrategySpec::Structural(structural),
            StrategyFamily::Hybrid => StrategySpec::Hybrid(HybridSpec {
                min_rows: self.config.hybrid_min_rows,
                structural,
                rendering,
            }),
        };

        ArtifactSpec {
            format_version: ARTIFACT_FORMAT_VERSION,
            target: target.as_str().to_string(),
            entry_point: ENTRY_POINT.to_string(),
            columns: STATEMENT_COLUMNS.iter().map(|c| c.to_string()).collect(),
            strategy,
        }
    }

    /// Render an artifact description to its file contents
    pub fn render(&self, spec: &ArtifactSpec) -> Result<String, SynthesisError> {
        let body = spec.to_toml()?;
        Ok(format!(
            "# Extraction routine for target '{}'.\n# Regenerated on every attempt; edits are overwritten.\n\n{}",
            spec.target, body
        ))
    }

    /// Synthesize the artifact for a target and write it to `destination`
    ///
    /// Parent directories are created as needed and an existing artifact is
    /// overwritten.
    pub fn synthesize(
        &self,
        target: &TargetId,
        destination: &Path,
        params: &ParameterSet,
    ) -> Result<ArtifactSpec, SynthesisError> {
        self.config.validate().map_err(SynthesisError::Config)?;

        let spec = self.design(target, params);
        let contents = self.render(&spec)?;

        if let Some(parent) = destination.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(destination, &contents)?;

        debug!("Artifact is {} bytes", contents.len());
        info!(
            "Generated {} artifact for '{}' at {} with dpi={}",
            spec.strategy.kind(),
            target,
            destination.display(),
            params.render_dpi()
        );

        Ok(spec)
    }
}
