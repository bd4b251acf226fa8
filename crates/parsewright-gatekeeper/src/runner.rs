//! Validation of a synthesized artifact against the reference dataset

use crate::{cells_match, CellComparison, GatekeeperError, ValidationConfig};
use parsewright_domain::{MismatchKind, Table};
use parsewright_extractor::StrategyLoader;
use parsewright_store::DatasetStore;
use std::path::Path;
use tracing::{debug, info, warn};

/// Result of one validation
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the candidate equals the reference under the configured policy
    pub success: bool,

    /// Human-readable mismatch description (empty on success)
    pub diagnostic: String,

    /// Which comparison stage rejected the candidate
    pub mismatch: Option<MismatchKind>,

    /// The candidate the artifact produced, returned even on failure
    pub candidate: Table,

    /// Internal extraction fault, when the strategy reported one
    pub extraction_fault: Option<String>,
}

/// Loads an artifact, runs it against a document and compares the output
pub struct ValidationRunner<L: StrategyLoader> {
    loader: L,
    config: ValidationConfig,
    store: DatasetStore,
}

impl<L: StrategyLoader> ValidationRunner<L> {
    /// Create a new runner with the given loader and policy
    pub fn new(loader: L, config: ValidationConfig) -> Self {
        Self {
            loader,
            config,
            store: DatasetStore::default(),
        }
    }

    /// Same loader, different comparison policy
    pub fn with_config(self, config: ValidationConfig) -> Self {
        Self { config, ..self }
    }

    /// The active comparison policy
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate the artifact against an already-loaded reference
    ///
    /// # Errors
    ///
    /// Fails only when the artifact cannot be loaded. Extraction faults and
    /// mismatches are reported in the returned [`ValidationResult`].
    pub fn run(
        &self,
        artifact: &Path,
        document: &Path,
        reference: &Table,
    ) -> Result<ValidationResult, GatekeeperError> {
        self.config.validate().map_err(GatekeeperError::Config)?;

        let strategy = self.loader.load(artifact)?;
        debug!("Running {} strategy on {}", strategy.name(), document.display());

        let outcome = strategy.extract(document);
        let extraction_fault = outcome.fault().map(str::to_string);
        if let Some(reason) = &extraction_fault {
            warn!("Extraction fault, comparing an empty candidate: {}", reason);
        }
        let candidate = outcome.into_table();

        let result = match compare_tables(&candidate, reference, &self.config) {
            None => ValidationResult {
                success: true,
                diagnostic: String::new(),
                mismatch: None,
                candidate,
                extraction_fault,
            },
            Some((kind, diagnostic)) => ValidationResult {
                success: false,
                diagnostic,
                mismatch: Some(kind),
                candidate,
                extraction_fault,
            },
        };

        if result.success {
            info!("Test result: PASS");
        } else {
            info!("Test result: FAIL ({})", result.diagnostic);
        }
        Ok(result)
    }

    /// Validate the artifact, reading the reference from `reference_path`
    pub fn run_with_paths(
        &self,
        artifact: &Path,
        document: &Path,
        reference_path: &Path,
    ) -> Result<ValidationResult, GatekeeperError> {
        let reference = self.store.read_reference(reference_path)?;
        self.run(artifact, document, &reference)
    }
}

/// Compare a candidate to the reference under a policy
///
/// Returns `None` when they are equal, otherwise the mismatch kind and a
/// diagnostic. Row order matters; row labels do not exist.
pub fn compare_tables(
    candidate: &Table,
    reference: &Table,
    config: &ValidationConfig,
) -> Option<(MismatchKind, String)> {
    if config.shape_gate && candidate.shape() != reference.shape() {
        let (er, ec) = reference.shape();
        let (ar, ac) = candidate.shape();
        return Some((
            MismatchKind::Shape,
            format!("Shape mismatch: expected {}x{}, got {}x{}", er, ec, ar, ac),
        ));
    }

    if candidate.columns() != reference.columns() {
        return Some((
            MismatchKind::Columns,
            format!(
                "Column mismatch: expected {:?}, got {:?}",
                reference.columns(),
                candidate.columns()
            ),
        ));
    }

    if candidate.row_count() != reference.row_count() {
        return Some((
            MismatchKind::Shape,
            format!(
                "Row count mismatch: expected {}, got {}",
                reference.row_count(),
                candidate.row_count()
            ),
        ));
    }

    let mut differing = 0usize;
    let mut first = None;
    for (row, (expected, actual)) in reference.rows().iter().zip(candidate.rows()).enumerate() {
        for (col, (e, a)) in expected.iter().zip(actual).enumerate() {
            let equal = match config.cell_comparison {
                CellComparison::Exact => e.same_value(a),
                CellComparison::Tolerant => cells_match(e, a, config.tolerance),
            };
            if !equal {
                differing += 1;
                first.get_or_insert((row, col, e, a));
            }
        }
    }

    first.map(|(row, col, e, a)| {
        (
            MismatchKind::Values,
            format!(
                "Value mismatch in {} cell(s); first at row {}, column '{}': expected '{}', got '{}'",
                differing,
                row,
                reference.columns()[col],
                e,
                a
            ),
        )
    })
}
