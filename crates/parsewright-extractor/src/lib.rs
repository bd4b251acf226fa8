//! Parsewright Extractor
//!
//! Extraction strategies for bank statements and the loader that turns a
//! synthesized artifact into a runnable strategy.
//!
//! # Overview
//!
//! Each strategy implements [`ExtractionStrategy`](parsewright_domain::ExtractionStrategy)
//! on top of a [`DocumentSource`](parsewright_domain::DocumentSource):
//!
//! - **Rendering**: page text split into lines, grouped five at a time
//! - **Structural**: five-cell rows read from the document's tables
//! - **Hybrid**: structural first, rendering when the structural pass comes up short
//!
//! Strategies never panic or raise on document problems. Internal failures
//! come back as `ExtractionOutcome::Failed` with a reason.
//!
//! # Architecture
//!
//! ```text
//! artifact.toml → ArtifactLoader → Box<dyn ExtractionStrategy> → Table
//!                                        ↑
//!                                  DocumentSource
//! ```
//!
//! # Example Usage
//!
//! ```no_run
//! use parsewright_extractor::{ArtifactLoader, PdfTextSource, StrategyLoader};
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let loader = ArtifactLoader::new(Arc::new(PdfTextSource::new()));
//! let strategy = loader.load(Path::new("custom_parsers/icici_parser.toml"))?;
//!
//! let outcome = strategy.extract(Path::new("data/icici/icici_sample.pdf"));
//! println!("{:?}", outcome.fault());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod cleaning;
mod error;
mod hybrid;
mod loader;
mod pdf;
mod records;
mod rendering;
mod structural;

pub use cleaning::clean_amount;
pub use error::ExtractorError;
pub use hybrid::HybridStrategy;
pub use loader::{ArtifactLoader, StrategyLoader};
pub use pdf::PdfTextSource;
pub use rendering::RenderingStrategy;
pub use structural::StructuralStrategy;
