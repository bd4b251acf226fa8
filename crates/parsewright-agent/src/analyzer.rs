//! Failure analysis: deciding the next parameter set after a failed attempt

use parsewright_domain::{ParameterSet, Table};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

/// How strictly a row shortfall is judged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strictness {
    /// Deficient when the candidate has fewer than `ratio` × reference rows
    #[default]
    Ratio,

    /// Deficient when the candidate has fewer rows than the reference
    Shortfall,
}

/// Configuration for the FailureAnalyzer
///
/// # Examples
///
/// ```
/// use parsewright_agent::{AnalyzerConfig, Strictness};
///
/// let config = AnalyzerConfig::default();
/// assert_eq!(config.strictness, Strictness::Ratio);
/// assert_eq!(config.dpi_max, 400);
///
/// let strict = AnalyzerConfig::strict();
/// assert_eq!(strict.strictness, Strictness::Shortfall);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Shortfall rule
    pub strictness: Strictness,

    /// Row ratio below which a candidate is deficient (ratio strictness only)
    pub ratio: f64,

    /// Resolution increase per deficient attempt
    pub dpi_step: u32,

    /// Resolution ceiling
    pub dpi_max: u32,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            strictness: Strictness::Ratio,
            ratio: 0.8,
            dpi_step: 50,
            dpi_max: 400,
        }
    }
}

impl AnalyzerConfig {
    /// Any missing row counts as a shortfall
    pub fn strict() -> Self {
        Self {
            strictness: Strictness::Shortfall,
            ..Self::default()
        }
    }

    /// Escalate only when less than half of the rows came through
    pub fn lenient() -> Self {
        Self {
            ratio: 0.5,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(self.ratio > 0.0 && self.ratio <= 1.0) {
            return Err(format!("ratio must be in (0, 1], got {}", self.ratio));
        }
        if self.dpi_step == 0 {
            return Err("dpi_step must be greater than 0".to_string());
        }
        if self.dpi_max == 0 {
            return Err("dpi_max must be greater than 0".to_string());
        }
        Ok(())
    }
}

/// What the analyzer decided
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyzerAction {
    /// Rendering resolution raised
    IncreaseDpi {
        /// Previous resolution
        from: u32,
        /// New resolution
        to: u32,
    },

    /// Candidate was deficient but the resolution is already at its ceiling
    DpiAtMaximum,

    /// Candidate was not deficient; nothing to adjust
    Unchanged,
}

impl fmt::Display for AnalyzerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalyzerAction::IncreaseDpi { from, to } => write!(f, "raise render_dpi {} -> {}", from, to),
            AnalyzerAction::DpiAtMaximum => write!(f, "render_dpi already at maximum"),
            AnalyzerAction::Unchanged => write!(f, "no parameter change"),
        }
    }
}

/// Analysis of one failed attempt
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Analysis {
    /// Parameters for the next attempt
    pub params: ParameterSet,

    /// Whether the candidate under-produced rows
    pub deficient: bool,

    /// Decision taken
    pub action: AnalyzerAction,
}

/// Turns a failed attempt into the next parameter set
///
/// Only row shortfalls are diagnosed. Column or value mismatches leave the
/// parameters unchanged.
pub struct FailureAnalyzer {
    config: AnalyzerConfig,
}

impl FailureAnalyzer {
    /// Create a new FailureAnalyzer
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Create a FailureAnalyzer with default configuration
    pub fn default_config() -> Self {
        Self::new(AnalyzerConfig::default())
    }

    /// The active configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Whether `candidate_rows` is a shortfall against `reference_rows`
    pub fn is_deficient(&self, candidate_rows: usize, reference_rows: usize) -> bool {
        match self.config.strictness {
            Strictness::Ratio => (candidate_rows as f64) < self.config.ratio * reference_rows as f64,
            Strictness::Shortfall => candidate_rows < reference_rows,
        }
    }

    /// Analyze a failed attempt
    ///
    /// The returned parameters never lower `render_dpi` and never raise it
    /// above `dpi_max`.
    pub fn analyze(
        &self,
        diagnostic: &str,
        candidate: &Table,
        reference: &Table,
        params: &ParameterSet,
    ) -> Analysis {
        debug!("Analyzing failure: {}", diagnostic);
        let deficient = self.is_deficient(candidate.row_count(), reference.row_count());
        if !deficient {
            info!(
                "[Analyzer] Candidate has {} of {} rows; not a shortfall",
                candidate.row_count(),
                reference.row_count()
            );
            return Analysis {
                params: *params,
                deficient,
                action: AnalyzerAction::Unchanged,
            };
        }

        let current = params.render_dpi();
        let next = current.saturating_add(self.config.dpi_step).min(self.config.dpi_max);
        let action = if next > current {
            AnalyzerAction::IncreaseDpi { from: current, to: next }
        } else {
            AnalyzerAction::DpiAtMaximum
        };
        info!(
            "[Analyzer] Row shortfall ({} of {} rows): {}",
            candidate.row_count(),
            reference.row_count(),
            action
        );

        Analysis {
            params: params.with_render_dpi(current.max(next)),
            deficient,
            action,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parsewright_domain::{Cell, STATEMENT_COLUMNS};

    fn rows(n: usize) -> Table {
        let rows = (0..n)
            .map(|i| {
                vec![
                    Cell::text(format!("{:02}-08-2024", i + 1)),
                    Cell::text("UPI"),
                    Cell::Number(10.0),
                    Cell::Missing,
                    Cell::Number(1000.0 - i as f64 * 10.0),
                ]
            })
            .collect();
        Table::from_rows(STATEMENT_COLUMNS, rows).unwrap()
    }

    #[test]
    fn test_ratio_threshold() {
        let analyzer = FailureAnalyzer::default_config();
        assert!(analyzer.is_deficient(7, 10));
        assert!(!analyzer.is_deficient(8, 10));
        assert!(!analyzer.is_deficient(0, 0));
    }

    #[test]
    fn test_shortfall_threshold() {
        let analyzer = FailureAnalyzer::new(AnalyzerConfig::strict());
        assert!(analyzer.is_deficient(9, 10));
        assert!(!analyzer.is_deficient(10, 10));
    }

    #[test]
    fn test_deficient_candidate_raises_dpi() {
        let analysis = FailureAnalyzer::default_config().analyze(
            "Shape mismatch",
            &rows(0),
            &rows(10),
            &ParameterSet::default(),
        );
        assert!(analysis.deficient);
        assert_eq!(analysis.params.render_dpi(), 350);
        assert_eq!(analysis.action, AnalyzerAction::IncreaseDpi { from: 300, to: 350 });
    }

    #[test]
    fn test_dpi_clamped_at_maximum() {
        let analyzer = FailureAnalyzer::default_config();
        let near = analyzer.analyze("", &rows(0), &rows(10), &ParameterSet::new(380));
        assert_eq!(near.params.render_dpi(), 400);

        let at_max = analyzer.analyze("", &rows(0), &rows(10), &ParameterSet::new(400));
        assert_eq!(at_max.params.render_dpi(), 400);
        assert_eq!(at_max.action, AnalyzerAction::DpiAtMaximum);
    }

    #[test]
    fn test_value_mismatch_leaves_params_unchanged() {
        let analysis = FailureAnalyzer::default_config().analyze(
            "Value mismatch in 1 cell(s)",
            &rows(10),
            &rows(10),
            &ParameterSet::default(),
        );
        assert!(!analysis.deficient);
        assert_eq!(analysis.params, ParameterSet::default());
        assert_eq!(analysis.action, AnalyzerAction::Unchanged);
    }

    #[test]
    fn test_starting_above_ceiling_never_lowers_dpi() {
        let analysis = FailureAnalyzer::default_config().analyze("", &rows(0), &rows(5), &ParameterSet::new(600));
        assert_eq!(analysis.params.render_dpi(), 600);
        assert_eq!(analysis.action, AnalyzerAction::DpiAtMaximum);
    }

    #[test]
    fn test_config_validation() {
        assert!(AnalyzerConfig::default().validate().is_ok());
        assert!(AnalyzerConfig::lenient().validate().is_ok());
        let bad = AnalyzerConfig {
            ratio: 1.5,
            ..AnalyzerConfig::default()
        };
        assert!(bad.validate().is_err());
    }
}
