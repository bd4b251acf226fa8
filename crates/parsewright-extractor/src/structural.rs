//! Structural strategy: rows read straight from the document's tables

use crate::records::{is_header, statement_row};
use parsewright_domain::{DocumentSource, ExtractionOutcome, ExtractionStrategy, RawTable, Table};
use parsewright_synthesizer::StructuralSpec;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

/// Extracts records from tables found in the document structure
///
/// Only rows with exactly `record_width` cells are considered. Header rows
/// (first cell equal to the header token) and rows with an absent first cell
/// are skipped.
pub struct StructuralStrategy {
    spec: StructuralSpec,
    source: Arc<dyn DocumentSource>,
}

impl StructuralStrategy {
    /// Create a structural strategy over a document source
    pub fn new(spec: StructuralSpec, source: Arc<dyn DocumentSource>) -> Self {
        Self { spec, source }
    }

    /// Convert raw tables into a statement table
    pub fn records_from_tables(&self, tables: &[RawTable]) -> Table {
        let mut table = Table::statement();
        let mut skipped = 0usize;

        for row in tables.iter().flatten() {
            if row.len() != self.spec.record_width {
                skipped += 1;
                continue;
            }
            let first = match row.first().and_then(|c| c.as_deref()) {
                Some(first) => first,
                None => continue,
            };
            if is_header(first, &self.spec.header_token) {
                continue;
            }
            if let Err(e) = table.push_row(statement_row(row.iter().map(|c| c.as_deref()))) {
                warn!("Skipping malformed row: {}", e);
            }
        }

        if skipped > 0 {
            debug!("Skipped {} rows without {} cells", skipped, self.spec.record_width);
        }
        table
    }
}

impl ExtractionStrategy for StructuralStrategy {
    fn name(&self) -> &str {
        "structural"
    }

    fn extract(&self, document: &Path) -> ExtractionOutcome {
        match self.source.tables(document) {
            Ok(tables) => {
                debug!("Found {} tables in {}", tables.len(), document.display());
                ExtractionOutcome::Extracted(self.records_from_tables(&tables))
            }
            Err(e) => {
                warn!("[Parser] Table extraction failed for {}: {}", document.display(), e);
                ExtractionOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parsewright_domain::{Cell, DocumentError};

    struct TableSource(Vec<RawTable>);

    impl DocumentSource for TableSource {
        fn page_texts(&self, _document: &Path, _dpi: u32) -> Result<Vec<String>, DocumentError> {
            Ok(Vec::new())
        }

        fn tables(&self, _document: &Path) -> Result<Vec<RawTable>, DocumentError> {
            Ok(self.0.clone())
        }
    }

    fn row(cells: &[Option<&str>]) -> Vec<Option<String>> {
        cells.iter().map(|c| c.map(str::to_string)).collect()
    }

    fn strategy(tables: Vec<RawTable>) -> StructuralStrategy {
        let spec = StructuralSpec {
            header_token: "date".to_string(),
            record_width: 5,
        };
        StructuralStrategy::new(spec, Arc::new(TableSource(tables)))
    }

    #[test]
    fn test_filters_header_short_and_blank_rows() {
        let tables = vec![
            vec![
                row(&[Some("Date"), Some("Description"), Some("Debit Amt"), Some("Credit Amt"), Some("Balance")]),
                row(&[Some("01-08-2024"), Some(" UPI Swiggy "), Some("320.50"), None, Some("9,679.50")]),
                row(&[Some("Opening balance"), Some("10,000")]),
                row(&[None, Some("continued"), None, None, None]),
            ],
            vec![row(&[Some("02-08-2024"), Some("Interest"), Some(""), Some("12.00"), Some("9,691.50")])],
        ];

        let table = strategy(tables).extract(Path::new("statement.pdf")).into_table();

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.cell(0, 1), Some(&Cell::text("UPI Swiggy")));
        assert_eq!(table.cell(0, 3), Some(&Cell::Missing));
        assert_eq!(table.cell(0, 4), Some(&Cell::Number(9679.5)));
        assert_eq!(table.cell(1, 2), Some(&Cell::Missing));
        assert_eq!(table.cell(1, 3), Some(&Cell::Number(12.0)));
    }

    #[test]
    fn test_no_tables_is_empty_statement() {
        let outcome = strategy(Vec::new()).extract(Path::new("statement.pdf"));
        assert_eq!(outcome.fault(), None);
        assert!(outcome.into_table().is_empty());
    }
}
