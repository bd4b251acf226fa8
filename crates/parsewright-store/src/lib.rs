//! Parsewright Dataset Store
//!
//! Reads and writes delimited-text tables: the reference dataset that acts as
//! ground truth, and optional dumps of candidate datasets.
//!
//! # Cell inference
//!
//! Every field is inferred independently with [`Cell::infer`]: empty fields
//! become `Missing`, fields that parse as floats become `Number`, everything
//! else is kept as `Text`.
//!
//! # Examples
//!
//! ```no_run
//! use parsewright_store::DatasetStore;
//!
//! let store = DatasetStore::default();
//! let reference = store.read_reference("data/icici/icici_sample.csv").unwrap();
//! println!("{} reference rows", reference.row_count());
//! ```

#![warn(missing_docs)]

use parsewright_domain::{Cell, Table};
use std::fs;
use std::io::{Read, Write};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during dataset operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed delimited text
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Header does not match the expected schema
    #[error("Schema mismatch: expected columns {expected:?}, found {found:?}")]
    Schema {
        /// Expected column labels
        expected: Vec<String>,
        /// Column labels found in the header
        found: Vec<String>,
    },

    /// Invalid data format
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Reader/writer for delimited-text tables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetStore {
    delimiter: u8,
}

impl Default for DatasetStore {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl DatasetStore {
    /// Create a store using a custom field delimiter
    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Read any table from a file
    pub fn read_table<P: AsRef<Path>>(&self, path: P) -> Result<Table, StoreError> {
        let path = path.as_ref();
        let file = fs::File::open(path)?;
        let table = self.read_table_from(file)?;
        debug!(
            "Loaded {} rows x {} columns from {}",
            table.row_count(),
            table.column_count(),
            path.display()
        );
        Ok(table)
    }

    /// Read a reference dataset, requiring the statement schema
    ///
    /// Column order is significant: a header naming the right columns in a
    /// different order is rejected.
    pub fn read_reference<P: AsRef<Path>>(&self, path: P) -> Result<Table, StoreError> {
        let table = self.read_table(path)?;
        if !table.has_statement_schema() {
            return Err(StoreError::Schema {
                expected: parsewright_domain::STATEMENT_COLUMNS
                    .iter()
                    .map(|c| c.to_string())
                    .collect(),
                found: table.columns().to_vec(),
            });
        }
        Ok(table)
    }

    /// Read a table from any reader
    pub fn read_table_from<R: Read>(&self, reader: R) -> Result<Table, StoreError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .delimiter(self.delimiter)
            .from_reader(reader);

        let columns: Vec<String> = csv_reader.headers()?.iter().map(str::to_string).collect();
        let mut table = Table::new(columns);

        for record in csv_reader.records() {
            let record = record?;
            let row: Vec<Cell> = record.iter().map(Cell::infer).collect();
            table.push_row(row).map_err(StoreError::InvalidData)?;
        }

        Ok(table)
    }

    /// Write a table to a file, creating parent directories as needed
    pub fn write_table<P: AsRef<Path>>(&self, path: P, table: &Table) -> Result<(), StoreError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = fs::File::create(path)?;
        self.write_table_to(file, table)?;
        debug!("Wrote {} rows to {}", table.row_count(), path.display());
        Ok(())
    }

    /// Write a table to any writer
    pub fn write_table_to<W: Write>(&self, writer: W, table: &Table) -> Result<(), StoreError> {
        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(writer);

        csv_writer.write_record(table.columns())?;
        for row in table.rows() {
            csv_writer.write_record(row.iter().map(|cell| cell.to_string()))?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Date,Description,Debit Amt,Credit Amt,Balance
01-08-2024,Salary Credit XYZ Pvt Ltd,,1935.3,6864.58
02-08-2024,Salary Credit XYZ Pvt Ltd,,1652.61,8517.19
";

    #[test]
    fn test_read_infers_cells() {
        let table = DatasetStore::default().read_table_from(SAMPLE.as_bytes()).unwrap();

        assert!(table.has_statement_schema());
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.cell(0, 0), Some(&Cell::text("01-08-2024")));
        assert_eq!(table.cell(0, 2), Some(&Cell::Missing));
        assert_eq!(table.cell(1, 4), Some(&Cell::Number(8517.19)));
    }

    #[test]
    fn test_ragged_rows_are_rejected() {
        let ragged = "A,B\n1,2\n3\n";
        let result = DatasetStore::default().read_table_from(ragged.as_bytes());
        assert!(matches!(result, Err(StoreError::Csv(_))));
    }

    #[test]
    fn test_custom_delimiter() {
        let data = "A;B\n1;x\n";
        let table = DatasetStore::with_delimiter(b';').read_table_from(data.as_bytes()).unwrap();
        assert_eq!(table.columns(), &["A".to_string(), "B".to_string()]);
        assert_eq!(table.cell(0, 1), Some(&Cell::text("x")));
    }

    #[test]
    fn test_write_renders_missing_as_empty() {
        let table = DatasetStore::default().read_table_from(SAMPLE.as_bytes()).unwrap();
        let mut out = Vec::new();
        DatasetStore::default().write_table_to(&mut out, &table).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, SAMPLE);
    }
}
