//! Rendering-based strategy: page text grouped into fixed-width records

use crate::records::{is_header, statement_row};
use parsewright_domain::{DocumentSource, ExtractionOutcome, ExtractionStrategy, Table};
use parsewright_synthesizer::RenderingSpec;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

/// Extracts records by rendering pages and reading their text line by line
///
/// Lines are trimmed and empty lines dropped. Records start after the first
/// line equal to the header token (or at the first line if there is none) and
/// every run of `record_width` lines forms one record. A partial trailing run
/// is discarded.
pub struct RenderingStrategy {
    spec: RenderingSpec,
    source: Arc<dyn DocumentSource>,
}

impl RenderingStrategy {
    /// Create a rendering strategy over a document source
    pub fn new(spec: RenderingSpec, source: Arc<dyn DocumentSource>) -> Self {
        Self { spec, source }
    }

    /// Rendering resolution this strategy was synthesized with
    pub fn dpi(&self) -> u32 {
        self.spec.dpi
    }

    /// Group already-rendered text into a statement table
    pub fn records_from_text(&self, text: &str) -> Table {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let start = lines
            .iter()
            .position(|line| is_header(line, &self.spec.header_token))
            .map(|idx| idx + 1)
            .unwrap_or(0);

        let width = self.spec.record_width.max(1);
        let mut table = Table::statement();
        for block in lines[start..].chunks(width) {
            if block.len() < width {
                debug!("Discarding partial trailing record of {} lines", block.len());
                break;
            }
            let row = statement_row(block.iter().map(|line| Some(*line)));
            if let Err(e) = table.push_row(row) {
                warn!("Skipping malformed record: {}", e);
            }
        }
        table
    }
}

impl ExtractionStrategy for RenderingStrategy {
    fn name(&self) -> &str {
        "rendering"
    }

    fn extract(&self, document: &Path) -> ExtractionOutcome {
        let pages = match self.source.page_texts(document, self.spec.dpi) {
            Ok(pages) => pages,
            Err(e) => {
                warn!("[Parser] Rendering failed for {}: {}", document.display(), e);
                return ExtractionOutcome::Failed {
                    reason: e.to_string(),
                };
            }
        };

        debug!("Rendered {} pages at {} dpi", pages.len(), self.spec.dpi);
        ExtractionOutcome::Extracted(self.records_from_text(&pages.join("\n")))
    }
}
