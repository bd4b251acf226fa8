//! Gatekeeper configuration

use crate::DEFAULT_TOLERANCE;
use serde::{Deserialize, Serialize};

/// How individual cells are compared during validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellComparison {
    /// Values must be identical (numeric and text storage are interchangeable)
    #[default]
    Exact,

    /// Numbers within `tolerance` match; text compares case-insensitively
    Tolerant,
}

/// Configuration for the validation policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Compare row and column counts before anything else
    pub shape_gate: bool,

    /// Cell comparison mode
    pub cell_comparison: CellComparison,

    /// Absolute numeric tolerance for tolerant comparison and scoring
    pub tolerance: f64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            shape_gate: true,
            cell_comparison: CellComparison::Exact,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl ValidationConfig {
    /// Structural equality only, without the shape gate
    pub fn structural() -> Self {
        Self {
            shape_gate: false,
            ..Self::default()
        }
    }

    /// Shape gate plus tolerant cell comparison
    pub fn lenient() -> Self {
        Self {
            cell_comparison: CellComparison::Tolerant,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(format!(
                "tolerance must be a finite non-negative number, got {}",
                self.tolerance
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ValidationConfig::default();
        assert!(config.shape_gate);
        assert_eq!(config.cell_comparison, CellComparison::Exact);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_presets() {
        assert!(!ValidationConfig::structural().shape_gate);
        assert_eq!(ValidationConfig::lenient().cell_comparison, CellComparison::Tolerant);
    }

    #[test]
    fn test_negative_tolerance_rejected() {
        let config = ValidationConfig {
            tolerance: -0.5,
            ..ValidationConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        #[derive(Deserialize)]
        struct Wrapper {
            validation: ValidationConfig,
        }

        let wrapper: Wrapper = toml::from_str("[validation]\ncell_comparison = \"tolerant\"\n").unwrap();
        assert!(wrapper.validation.shape_gate);
        assert_eq!(wrapper.validation.cell_comparison, CellComparison::Tolerant);
    }
}
