//! Command implementations.

mod accuracy;
mod run;

pub use accuracy::execute_accuracy;
pub use run::execute_run;

use crate::error::{CliError, Result};
use parsewright_domain::TargetId;
use parsewright_extractor::{ArtifactLoader, PdfTextSource};
use std::sync::Arc;

/// Parse a target name given on the command line.
pub(crate) fn parse_target(raw: &str) -> Result<TargetId> {
    TargetId::parse(raw).map_err(CliError::InvalidInput)
}

/// Artifact loader reading documents through their PDF text layer.
pub(crate) fn pdf_loader() -> ArtifactLoader {
    ArtifactLoader::new(Arc::new(PdfTextSource::new()))
}
