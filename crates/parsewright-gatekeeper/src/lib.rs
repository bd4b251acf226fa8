//! Parsewright Gatekeeper
//!
//! Decides whether a candidate table is good enough.
//!
//! The Gatekeeper provides:
//! - Field-level accuracy scoring with a numeric tolerance
//! - Validation of a synthesized artifact against the reference dataset
//! - Mismatch classification (shape, columns, values) for the analyzer
//!
//! # Examples
//!
//! ```no_run
//! use parsewright_extractor::{ArtifactLoader, PdfTextSource};
//! use parsewright_gatekeeper::{ValidationConfig, ValidationRunner};
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let loader = ArtifactLoader::new(Arc::new(PdfTextSource::new()));
//! let runner = ValidationRunner::new(loader, ValidationConfig::default());
//!
//! let result = runner.run_with_paths(
//!     Path::new("custom_parsers/icici_parser.toml"),
//!     Path::new("data/icici/icici_sample.pdf"),
//!     Path::new("data/icici/icici_sample.csv"),
//! )?;
//! println!("passed: {}", result.success);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod runner;
mod scorer;

pub use config::{CellComparison, ValidationConfig};
pub use error::GatekeeperError;
pub use runner::{compare_tables, ValidationResult, ValidationRunner};
pub use scorer::{cells_match, AccuracyReport, AccuracyScorer, ColumnAccuracy, DEFAULT_TOLERANCE};
