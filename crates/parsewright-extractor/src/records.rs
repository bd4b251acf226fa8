//! Shared helpers for turning raw fields into statement rows

use crate::clean_amount;
use parsewright_domain::Cell;

/// Leading columns holding free text (Date, Description); the rest are amounts
const TEXT_COLUMNS: usize = 2;

/// Build one statement row from raw fields, in schema order
pub(crate) fn statement_row<'a, I>(fields: I) -> Vec<Cell>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    fields
        .into_iter()
        .enumerate()
        .map(|(idx, field)| match field {
            None => Cell::Missing,
            Some(raw) if idx < TEXT_COLUMNS => text_cell(raw),
            Some(raw) => clean_amount(raw),
        })
        .collect()
}

/// Whether a field is the header token (case-insensitive, trimmed)
pub(crate) fn is_header(field: &str, token: &str) -> bool {
    field.trim().to_lowercase() == token.trim().to_lowercase()
}

fn text_cell(raw: &str) -> Cell {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Cell::Missing
    } else {
        Cell::text(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statement_row_mixes_text_and_amounts() {
        let row = statement_row([
            Some(" 01-08-2024 "),
            Some("NEFT ICICI"),
            Some("1,200.00"),
            None,
            Some("5,000"),
        ]);
        assert_eq!(
            row,
            vec![
                Cell::text("01-08-2024"),
                Cell::text("NEFT ICICI"),
                Cell::Number(1200.0),
                Cell::Missing,
                Cell::Number(5000.0),
            ]
        );
    }

    #[test]
    fn test_header_detection() {
        assert!(is_header("  DATE ", "date"));
        assert!(!is_header("Date:", "date"));
    }
}
