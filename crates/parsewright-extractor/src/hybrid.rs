//! Hybrid strategy: structural extraction with a rendering fallback

use crate::{RenderingStrategy, StructuralStrategy};
use parsewright_domain::{DocumentSource, ExtractionOutcome, ExtractionStrategy};
use parsewright_synthesizer::HybridSpec;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Runs the structural strategy first and falls back to rendering
///
/// The rendering result is adopted only when it reaches `min_rows`; otherwise
/// the structural result is kept, even when it is short.
pub struct HybridStrategy {
    min_rows: usize,
    structural: StructuralStrategy,
    rendering: RenderingStrategy,
}

impl HybridStrategy {
    /// Create a hybrid strategy over a document source
    pub fn new(spec: HybridSpec, source: Arc<dyn DocumentSource>) -> Self {
        Self {
            min_rows: spec.min_rows,
            structural: StructuralStrategy::new(spec.structural, source.clone()),
            rendering: RenderingStrategy::new(spec.rendering, source),
        }
    }
}

fn rows_of(outcome: &ExtractionOutcome) -> usize {
    match outcome {
        ExtractionOutcome::Extracted(table) => table.row_count(),
        ExtractionOutcome::Failed { .. } => 0,
    }
}

impl ExtractionStrategy for HybridStrategy {
    fn name(&self) -> &str {
        "hybrid"
    }

    fn extract(&self, document: &Path) -> ExtractionOutcome {
        let structural = self.structural.extract(document);
        let structural_rows = rows_of(&structural);
        if structural_rows >= self.min_rows {
            return structural;
        }

        info!(
            "Structural pass found {} rows (< {}), falling back to rendering at {} dpi",
            structural_rows,
            self.min_rows,
            self.rendering.dpi()
        );
        let rendered = self.rendering.extract(document);
        if rows_of(&rendered) >= self.min_rows {
            return rendered;
        }

        info!("Rendering fallback also below threshold, keeping structural result");
        structural
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parsewright_domain::{DocumentError, RawTable};
    use parsewright_synthesizer::{RenderingSpec, StructuralSpec};

    struct SplitSource {
        structural_rows: usize,
        rendered_rows: usize,
    }

    impl DocumentSource for SplitSource {
        fn page_texts(&self, _document: &Path, _dpi: u32) -> Result<Vec<String>, DocumentError> {
            let record = "01-08-2024\nrendered\n10\n0.00\n100\n";
            Ok(vec![record.repeat(self.rendered_rows)])
        }

        fn tables(&self, _document: &Path) -> Result<Vec<RawTable>, DocumentError> {
            let row = vec![
                Some("01-08-2024".to_string()),
                Some("structural".to_string()),
                Some("10".to_string()),
                None,
                Some("100".to_string()),
            ];
            Ok(vec![vec![row; self.structural_rows]])
        }
    }

    fn hybrid(structural_rows: usize, rendered_rows: usize) -> HybridStrategy {
        let spec = HybridSpec {
            min_rows: 3,
            structural: StructuralSpec {
                header_token: "date".to_string(),
                record_width: 5,
            },
            rendering: RenderingSpec {
                dpi: 300,
                header_token: "date".to_string(),
                record_width: 5,
            },
        };
        HybridStrategy::new(spec, Arc::new(SplitSource { structural_rows, rendered_rows }))
    }

    fn description_of(outcome: ExtractionOutcome) -> (usize, Option<String>) {
        let table = outcome.into_table();
        let description = table.cell(0, 1).map(|c| c.to_string());
        (table.row_count(), description)
    }

    #[test]
    fn test_structural_result_kept_when_sufficient() {
        let outcome = hybrid(4, 9).extract(Path::new("statement.pdf"));
        assert_eq!(description_of(outcome), (4, Some("structural".to_string())));
    }

    #[test]
    fn test_rendering_adopted_when_it_clears_threshold() {
        let outcome = hybrid(1, 3).extract(Path::new("statement.pdf"));
        assert_eq!(description_of(outcome), (3, Some("rendered".to_string())));
    }

    #[test]
    fn test_structural_kept_when_fallback_also_short() {
        let outcome = hybrid(2, 2).extract(Path::new("statement.pdf"));
        assert_eq!(description_of(outcome), (2, Some("structural".to_string())));
    }
}
