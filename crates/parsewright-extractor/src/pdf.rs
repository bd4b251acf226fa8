//! Text-layer document source backed by lopdf

use lopdf::Document;
use parsewright_domain::{DocumentError, DocumentSource, RawTable};
use std::path::Path;
use tracing::debug;

/// Reads the embedded text layer of a PDF
///
/// Scanned statements without a text layer yield empty pages. The requested
/// rendering resolution has no effect on a text layer and is only logged.
/// Tables are approximated by splitting each text line into cells on tabs or
/// runs of two or more spaces.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfTextSource;

impl PdfTextSource {
    /// Create a text-layer source
    pub fn new() -> Self {
        Self
    }

    fn load(document: &Path) -> Result<Document, DocumentError> {
        Document::load(document)
            .map_err(|e| DocumentError::new(format!("Cannot open {}: {}", document.display(), e)))
    }
}

impl DocumentSource for PdfTextSource {
    fn page_texts(&self, document: &Path, dpi: u32) -> Result<Vec<String>, DocumentError> {
        debug!("Reading text layer of {} (requested {} dpi)", document.display(), dpi);
        let doc = Self::load(document)?;

        doc.get_pages()
            .keys()
            .map(|&number| {
                doc.extract_text(&[number])
                    .map_err(|e| DocumentError::new(format!("Page {}: {}", number, e)))
            })
            .collect()
    }

    fn tables(&self, document: &Path) -> Result<Vec<RawTable>, DocumentError> {
        let pages = self.page_texts(document, 0)?;
        Ok(pages.iter().map(|text| split_table(text)).collect())
    }
}

/// Split page text into rows of cells
fn split_table(text: &str) -> RawTable {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(split_cells)
        .collect()
}

fn split_cells(line: &str) -> Vec<Option<String>> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut spaces = 0usize;

    for ch in line.trim().chars() {
        match ch {
            '\t' => {
                cells.push(take_cell(&mut current));
                spaces = 0;
            }
            ' ' => spaces += 1,
            _ => {
                if spaces >= 2 {
                    cells.push(take_cell(&mut current));
                } else if spaces == 1 {
                    current.push(' ');
                }
                spaces = 0;
                current.push(ch);
            }
        }
    }
    cells.push(take_cell(&mut current));
    cells
}

fn take_cell(current: &mut String) -> Option<String> {
    let cell = std::mem::take(current);
    if cell.trim().is_empty() {
        None
    } else {
        Some(cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_wide_gaps_and_tabs() {
        let cells = split_cells("01-08-2024   UPI Swiggy order  320.50\t\t9,679.50");
        assert_eq!(
            cells,
            vec![
                Some("01-08-2024".to_string()),
                Some("UPI Swiggy order".to_string()),
                Some("320.50".to_string()),
                None,
                Some("9,679.50".to_string()),
            ]
        );
    }

    #[test]
    fn test_blank_lines_are_not_rows() {
        let table = split_table("Date  Description\n\n   \n01-08-2024  Salary\n");
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_missing_file_is_document_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.pdf");

        let err = PdfTextSource::new().page_texts(&path, 300).unwrap_err();
        assert!(err.message().contains("absent.pdf"));
        assert!(PdfTextSource::new().tables(&path).is_err());
    }

    #[test]
    fn test_garbage_file_is_document_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.pdf");
        std::fs::write(&path, b"not a pdf").unwrap();

        assert!(PdfTextSource::new().page_texts(&path, 300).is_err());
    }
}
