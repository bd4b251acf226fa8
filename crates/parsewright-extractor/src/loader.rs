//! Artifact loading: from a synthesized file to a runnable strategy

use crate::{ExtractorError, HybridStrategy, RenderingStrategy, StructuralStrategy};
use parsewright_domain::{DocumentSource, ExtractionStrategy, STATEMENT_COLUMNS};
use parsewright_synthesizer::{ArtifactSpec, StrategySpec, ENTRY_POINT};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Loads an artifact and exposes its entry point as a strategy
///
/// Implementations must read the artifact afresh on every call so a
/// regenerated file is never served from a stale copy.
pub trait StrategyLoader {
    /// Load the artifact at `artifact` and instantiate its strategy
    fn load(&self, artifact: &Path) -> Result<Box<dyn ExtractionStrategy>, ExtractorError>;
}

/// Loader for artifacts written by the synthesizer
#[derive(Clone)]
pub struct ArtifactLoader {
    source: Arc<dyn DocumentSource>,
}

impl ArtifactLoader {
    /// Create a loader whose strategies read documents through `source`
    pub fn new(source: Arc<dyn DocumentSource>) -> Self {
        Self { source }
    }

    /// Instantiate the strategy an already-parsed artifact names
    pub fn instantiate(&self, spec: &ArtifactSpec) -> Result<Box<dyn ExtractionStrategy>, ExtractorError> {
        if spec.entry_point != ENTRY_POINT {
            return Err(ExtractorError::UnsupportedEntryPoint(spec.entry_point.clone()));
        }
        if !spec.columns.iter().map(String::as_str).eq(STATEMENT_COLUMNS.iter().copied()) {
            return Err(ExtractorError::UnsupportedColumns(spec.columns.clone()));
        }

        let strategy: Box<dyn ExtractionStrategy> = match &spec.strategy {
            StrategySpec::Rendering(s) => {
                check_width(s.record_width)?;
                Box::new(RenderingStrategy::new(s.clone(), self.source.clone()))
            }
            StrategySpec::Structural(s) => {
                check_width(s.record_width)?;
                Box::new(StructuralStrategy::new(s.clone(), self.source.clone()))
            }
            StrategySpec::Hybrid(s) => {
                check_width(s.structural.record_width)?;
                check_width(s.rendering.record_width)?;
                Box::new(HybridStrategy::new(s.clone(), self.source.clone()))
            }
        };

        debug!("Instantiated {} strategy for '{}'", strategy.name(), spec.target);
        Ok(strategy)
    }
}

impl StrategyLoader for ArtifactLoader {
    fn load(&self, artifact: &Path) -> Result<Box<dyn ExtractionStrategy>, ExtractorError> {
        let spec = ArtifactSpec::load(artifact)?;
        self.instantiate(&spec)
    }
}

fn check_width(found: usize) -> Result<(), ExtractorError> {
    if found == STATEMENT_COLUMNS.len() {
        Ok(())
    } else {
        Err(ExtractorError::UnsupportedRecordWidth {
            found,
            expected: STATEMENT_COLUMNS.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PdfTextSource;
    use parsewright_synthesizer::{RenderingSpec, ARTIFACT_FORMAT_VERSION};

    fn artifact(strategy: StrategySpec) -> ArtifactSpec {
        ArtifactSpec {
            format_version: ARTIFACT_FORMAT_VERSION,
            target: "icici".to_string(),
            entry_point: ENTRY_POINT.to_string(),
            columns: STATEMENT_COLUMNS.iter().map(|c| c.to_string()).collect(),
            strategy,
        }
    }

    fn rendering(record_width: usize) -> StrategySpec {
        StrategySpec::Rendering(RenderingSpec {
            dpi: 300,
            header_token: "date".to_string(),
            record_width,
        })
    }

    fn loader() -> ArtifactLoader {
        ArtifactLoader::new(Arc::new(PdfTextSource::new()))
    }

    #[test]
    fn test_instantiates_named_strategy() {
        let strategy = loader().instantiate(&artifact(rendering(5))).unwrap();
        assert_eq!(strategy.name(), "rendering");
    }

    #[test]
    fn test_rejects_foreign_entry_point() {
        let mut spec = artifact(rendering(5));
        spec.entry_point = "main".to_string();
        assert!(matches!(
            loader().instantiate(&spec),
            Err(ExtractorError::UnsupportedEntryPoint(name)) if name == "main"
        ));
    }

    #[test]
    fn test_rejects_other_schema() {
        let mut spec = artifact(rendering(5));
        spec.columns.swap(0, 1);
        assert!(matches!(
            loader().instantiate(&spec),
            Err(ExtractorError::UnsupportedColumns(_))
        ));
    }

    #[test]
    fn test_rejects_other_record_width() {
        assert!(matches!(
            loader().instantiate(&artifact(rendering(4))),
            Err(ExtractorError::UnsupportedRecordWidth { found: 4, expected: 5 })
        ));
    }
}
