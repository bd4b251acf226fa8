//! Table module - the tabular value type shared by every stage of the loop

use std::fmt;

/// Column schema of a bank statement, in order
///
/// Reference datasets and candidate datasets both use this layout; column
/// order is significant.
pub const STATEMENT_COLUMNS: [&str; 5] = ["Date", "Description", "Debit Amt", "Credit Amt", "Balance"];

/// A single table cell
///
/// Delimited-text loading infers the variant per field: an empty field is
/// `Missing`, a field that parses as a float is `Number`, anything else is
/// `Text`.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// No value
    Missing,

    /// Numeric value
    Number(f64),

    /// Free text value
    Text(String),
}

impl Cell {
    /// Infer a cell from a raw field
    ///
    /// # Examples
    ///
    /// ```
    /// use parsewright_domain::Cell;
    ///
    /// assert_eq!(Cell::infer(""), Cell::Missing);
    /// assert_eq!(Cell::infer("1935.30"), Cell::Number(1935.3));
    /// assert_eq!(Cell::infer("NEFT transfer"), Cell::Text("NEFT transfer".to_string()));
    /// ```
    pub fn infer(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Cell::Missing;
        }
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_nan() => Cell::Missing,
            Ok(value) => Cell::Number(value),
            Err(_) => Cell::Text(raw.to_string()),
        }
    }

    /// Create a text cell
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    /// Whether the cell holds no value
    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    /// Coerce the cell to a number
    ///
    /// Text cells are coerced when their trimmed content parses as a float.
    /// Missing cells never coerce.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Missing => None,
            Cell::Number(value) => Some(*value),
            Cell::Text(text) => text.trim().parse::<f64>().ok().filter(|v| !v.is_nan()),
        }
    }

    /// Exact equality that ignores the difference between numeric and text storage
    ///
    /// `Text("10.5")` equals `Number(10.5)`, but `Text("10.50 ")` compared to
    /// `Text("10.5")` does not.
    pub fn same_value(&self, other: &Cell) -> bool {
        match (self, other) {
            (Cell::Missing, Cell::Missing) => true,
            (Cell::Number(a), Cell::Number(b)) => a == b,
            (Cell::Text(a), Cell::Text(b)) => a == b,
            (Cell::Number(n), Cell::Text(t)) | (Cell::Text(t), Cell::Number(n)) => {
                t.trim().parse::<f64>().map(|v| v == *n).unwrap_or(false)
            }
            _ => false,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Missing => Ok(()),
            Cell::Number(value) => write!(f, "{}", value),
            Cell::Text(text) => f.write_str(text),
        }
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

/// An ordered table with named columns
///
/// Every row has exactly one cell per column. Tables are values: stages of the
/// loop produce new tables rather than editing existing ones.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Create an empty table with the given columns
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Create an empty table with the statement schema
    ///
    /// # Examples
    ///
    /// ```
    /// use parsewright_domain::Table;
    ///
    /// let table = Table::statement();
    /// assert!(table.has_statement_schema());
    /// assert_eq!(table.row_count(), 0);
    /// ```
    pub fn statement() -> Self {
        Self::new(STATEMENT_COLUMNS)
    }

    /// Create a table from columns and rows, checking row widths
    pub fn from_rows<I, S>(columns: I, rows: Vec<Vec<Cell>>) -> Result<Self, String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::new(columns);
        for row in rows {
            table.push_row(row)?;
        }
        Ok(table)
    }

    /// Append a row
    ///
    /// Fails if the row width differs from the column count.
    pub fn push_row(&mut self, row: Vec<Cell>) -> Result<(), String> {
        if row.len() != self.columns.len() {
            return Err(format!(
                "row {} has {} cells, expected {}",
                self.rows.len(),
                row.len(),
                self.columns.len()
            ));
        }
        self.rows.push(row);
        Ok(())
    }

    /// Column labels, in order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows, in order
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        (self.row_count(), self.column_count())
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.row_count() * self.column_count()
    }

    /// Whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by label
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cell at (row, column)
    pub fn cell(&self, row: usize, column: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(column))
    }

    /// Whether the columns are exactly the statement schema
    pub fn has_statement_schema(&self) -> bool {
        self.columns.len() == STATEMENT_COLUMNS.len()
            && self.columns.iter().zip(STATEMENT_COLUMNS).all(|(a, b)| a == b)
    }

    /// Copy of this table with one cell replaced
    ///
    /// Returns `None` when the position is out of range.
    pub fn with_cell(&self, row: usize, column: usize, cell: Cell) -> Option<Self> {
        if row >= self.row_count() || column >= self.column_count() {
            return None;
        }
        let mut copy = self.clone();
        copy.rows[row][column] = cell;
        Some(copy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_cells() {
        assert_eq!(Cell::infer("   "), Cell::Missing);
        assert_eq!(Cell::infer("NaN"), Cell::Missing);
        assert_eq!(Cell::infer("-42.5"), Cell::Number(-42.5));
        assert_eq!(Cell::infer("01-08-2024"), Cell::text("01-08-2024"));
    }

    #[test]
    fn test_as_number_coerces_text() {
        assert_eq!(Cell::text(" 10.25 ").as_number(), Some(10.25));
        assert_eq!(Cell::text("salary").as_number(), None);
        assert_eq!(Cell::Missing.as_number(), None);
    }

    #[test]
    fn test_same_value_ignores_storage_type() {
        assert!(Cell::Number(10.5).same_value(&Cell::text("10.5")));
        assert!(Cell::Missing.same_value(&Cell::Missing));
        assert!(!Cell::Number(10.5).same_value(&Cell::Number(10.51)));
        assert!(!Cell::Missing.same_value(&Cell::text("")));
    }

    #[test]
    fn test_push_row_rejects_wrong_width() {
        let mut table = Table::statement();
        assert!(table.push_row(vec![Cell::Missing; 4]).is_err());
        assert!(table.push_row(vec![Cell::Missing; 5]).is_ok());
        assert_eq!(table.shape(), (1, 5));
        assert_eq!(table.cell_count(), 5);
    }

    #[test]
    fn test_with_cell_leaves_original_untouched() {
        let table = Table::from_rows(["A"], vec![vec![Cell::Number(1.0)]]).unwrap();
        let changed = table.with_cell(0, 0, Cell::Number(2.0)).unwrap();

        assert_eq!(table.cell(0, 0), Some(&Cell::Number(1.0)));
        assert_eq!(changed.cell(0, 0), Some(&Cell::Number(2.0)));
        assert!(table.with_cell(1, 0, Cell::Missing).is_none());
    }

    #[test]
    fn test_statement_schema_detection() {
        assert!(Table::statement().has_statement_schema());
        assert!(!Table::new(["Date", "Balance"]).has_statement_schema());
        assert_eq!(Table::statement().column_index("Balance"), Some(4));
    }
}
