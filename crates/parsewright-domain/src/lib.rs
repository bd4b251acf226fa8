//! Parsewright Domain Layer
//!
//! This crate contains the core value objects and trait interfaces for Parsewright.
//! It keeps external dependencies to a minimum and defines the fundamental
//! concepts that every other crate in the workspace builds upon.
//!
//! ## Key Concepts
//!
//! - **Table**: An ordered table of cells with named columns
//! - **Statement schema**: The fixed five-column layout of a bank statement
//! - **Target**: A key naming a document, its reference dataset and its artifact
//! - **Parameter set**: Tunable extraction knobs carried between attempts
//! - **Attempt record**: The outcome of one generate/test iteration
//!
//! ## Architecture
//!
//! - Pure value types and trait definitions only
//! - Document access and strategy implementations live in other crates
//! - Trait definitions for every external interaction

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod attempt;
pub mod params;
pub mod run;
pub mod table;
pub mod target;
pub mod traits;

// Re-exports for convenience
pub use attempt::{AttemptRecord, MismatchKind};
pub use params::ParameterSet;
pub use run::RunId;
pub use table::{Cell, Table, STATEMENT_COLUMNS};
pub use target::{PathLayout, TargetId, TargetPaths};
pub use traits::{DocumentError, DocumentSource, ExtractionOutcome, ExtractionStrategy, RawTable};
