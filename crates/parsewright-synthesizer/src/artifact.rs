//! Artifact format - the on-disk description of an extraction routine

use crate::SynthesisError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Version of the artifact format written by this build
pub const ARTIFACT_FORMAT_VERSION: u32 = 1;

/// Entry point every artifact exposes
pub const ENTRY_POINT: &str = "parse";

/// Settings of the rendering-based strategy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderingSpec {
    /// Page rendering resolution (dots per inch)
    pub dpi: u32,

    /// Line marking the start of the transaction block (case-insensitive)
    pub header_token: String,

    /// Number of consecutive lines forming one record
    pub record_width: usize,
}

/// Settings of the structural-extraction strategy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuralSpec {
    /// First-cell value identifying header rows (case-insensitive)
    pub header_token: String,

    /// Exact number of cells a row needs to be considered
    pub record_width: usize,
}

/// Settings of the hybrid strategy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HybridSpec {
    /// Row count below which the structural result is considered incomplete
    pub min_rows: usize,

    /// Structural pass settings
    pub structural: StructuralSpec,

    /// Rendering fallback settings
    pub rendering: RenderingSpec,
}

/// The strategy an artifact selects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StrategySpec {
    /// Render pages, read text lines, group them into records
    Rendering(RenderingSpec),

    /// Read tables from the document structure
    Structural(StructuralSpec),

    /// Structural first, rendering as fallback
    Hybrid(HybridSpec),
}

impl StrategySpec {
    /// Strategy name as written in the artifact
    pub fn kind(&self) -> &'static str {
        match self {
            StrategySpec::Rendering(_) => "rendering",
            StrategySpec::Structural(_) => "structural",
            StrategySpec::Hybrid(_) => "hybrid",
        }
    }

    /// Rendering resolution baked into the strategy, if it renders pages
    pub fn render_dpi(&self) -> Option<u32> {
        match self {
            StrategySpec::Rendering(spec) => Some(spec.dpi),
            StrategySpec::Structural(_) => None,
            StrategySpec::Hybrid(spec) => Some(spec.rendering.dpi),
        }
    }
}

/// A synthesized extraction routine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactSpec {
    /// Artifact format version
    pub format_version: u32,

    /// Target the routine was synthesized for
    pub target: String,

    /// Name of the routine's entry point
    pub entry_point: String,

    /// Columns the routine produces, in order
    pub columns: Vec<String>,

    /// Selected strategy and its settings
    pub strategy: StrategySpec,
}

impl ArtifactSpec {
    /// Parse an artifact from TOML text
    pub fn from_toml(text: &str) -> Result<Self, SynthesisError> {
        let spec: ArtifactSpec = toml::from_str(text)?;
        if spec.format_version != ARTIFACT_FORMAT_VERSION {
            return Err(SynthesisError::UnsupportedVersion {
                found: spec.format_version,
                expected: ARTIFACT_FORMAT_VERSION,
            });
        }
        Ok(spec)
    }

    /// Serialize the artifact to TOML text
    pub fn to_toml(&self) -> Result<String, SynthesisError> {
        Ok(toml::to_string(self)?)
    }

    /// Load an artifact from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SynthesisError> {
        let text = fs::read_to_string(path)?;
        Self::from_toml(&text)
    }
}
