//! Field-level accuracy scoring

use parsewright_domain::{Cell, Table};
use serde::Serialize;
use tracing::info;

/// Absolute tolerance for numeric cell comparison
pub const DEFAULT_TOLERANCE: f64 = 0.01;

/// Whether two cells match under the scoring rules
///
/// Two missing cells match. A missing cell on one side never matches. Cells
/// that both coerce to numbers match when they differ by at most `tolerance`;
/// otherwise the trimmed, lowercased text forms must be equal.
pub fn cells_match(expected: &Cell, actual: &Cell, tolerance: f64) -> bool {
    match (expected.is_missing(), actual.is_missing()) {
        (true, true) => return true,
        (true, false) | (false, true) => return false,
        (false, false) => {}
    }

    match (expected.as_number(), actual.as_number()) {
        (Some(a), Some(b)) if a.is_finite() && b.is_finite() => (a - b).abs() <= tolerance,
        _ => normalized(expected) == normalized(actual),
    }
}

fn normalized(cell: &Cell) -> String {
    cell.to_string().trim().to_lowercase()
}

/// Match counts for one reference column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnAccuracy {
    /// Column name
    pub column: String,
    /// Matching cells in this column
    pub matched: usize,
    /// Reference cells in this column
    pub total: usize,
}

impl ColumnAccuracy {
    /// Match percentage for this column (0 when the column is empty)
    pub fn percentage(&self) -> f64 {
        percentage(self.matched, self.total)
    }
}

/// Result of scoring a candidate against the reference
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccuracyReport {
    /// Matching cells
    pub matched: usize,
    /// Reference cells
    pub total: usize,
    /// Per-column breakdown, in reference column order
    pub columns: Vec<ColumnAccuracy>,
}

impl AccuracyReport {
    /// Overall match percentage in [0, 100]
    pub fn percentage(&self) -> f64 {
        percentage(self.matched, self.total)
    }

    /// The human-readable summary line
    pub fn summary(&self) -> String {
        format!("Detailed field-level accuracy: {:.2}%", self.percentage())
    }
}

fn percentage(matched: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        matched as f64 / total as f64 * 100.0
    }
}

/// Scores candidate tables cell by cell against a reference
#[derive(Debug, Clone, Copy)]
pub struct AccuracyScorer {
    tolerance: f64,
}

impl Default for AccuracyScorer {
    fn default() -> Self {
        Self::new(DEFAULT_TOLERANCE)
    }
}

impl AccuracyScorer {
    /// Create a scorer with the given numeric tolerance
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }

    /// Score `actual` against `expected`
    ///
    /// Every cell of `expected` counts once. Rows or columns of `expected`
    /// that `actual` lacks count as non-matching; extra rows or columns in
    /// `actual` are ignored.
    pub fn score(&self, expected: &Table, actual: &Table) -> AccuracyReport {
        let columns: Vec<ColumnAccuracy> = expected
            .columns()
            .iter()
            .enumerate()
            .map(|(col, name)| {
                let actual_col = actual.column_index(name);
                let matched = expected
                    .rows()
                    .iter()
                    .enumerate()
                    .filter(|(row, cells)| {
                        actual_col
                            .and_then(|idx| actual.cell(*row, idx))
                            .map(|cell| cells_match(&cells[col], cell, self.tolerance))
                            .unwrap_or(false)
                    })
                    .count();
                ColumnAccuracy {
                    column: name.clone(),
                    matched,
                    total: expected.row_count(),
                }
            })
            .collect();

        let report = AccuracyReport {
            matched: columns.iter().map(|c| c.matched).sum(),
            total: expected.cell_count(),
            columns,
        };
        info!("{}", report.summary());
        report
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn cell() -> impl Strategy<Value = Cell> {
        prop_oneof![
            Just(Cell::Missing),
            (-1.0e6f64..1.0e6).prop_map(Cell::Number),
            "[a-zA-Z ]{0,12}".prop_map(Cell::Text),
        ]
    }

    proptest! {
        /// Property: a cell always matches itself
        #[test]
        fn test_match_is_reflexive(c in cell()) {
            prop_assert!(cells_match(&c, &c, DEFAULT_TOLERANCE));
        }

        /// Property: matching is symmetric
        #[test]
        fn test_match_is_symmetric(a in cell(), b in cell()) {
            prop_assert_eq!(
                cells_match(&a, &b, DEFAULT_TOLERANCE),
                cells_match(&b, &a, DEFAULT_TOLERANCE)
            );
        }

        /// Property: the score is a percentage and a table matches itself fully
        #[test]
        fn test_score_bounds(cells in proptest::collection::vec(cell(), 0..40)) {
            let rows: Vec<Vec<Cell>> = cells.chunks(2).filter(|c| c.len() == 2).map(|c| c.to_vec()).collect();
            let table = Table::from_rows(["A", "B"], rows).unwrap();
            let report = AccuracyScorer::default().score(&table, &Table::new(["A", "B"]));
            prop_assert!((0.0..=100.0).contains(&report.percentage()));

            let same = AccuracyScorer::default().score(&table, &table);
            if table.cell_count() > 0 {
                prop_assert_eq!(same.percentage(), 100.0);
            }
        }
    }
}
