//! Configuration for the Synthesizer

use serde::{Deserialize, Serialize};

/// Family of extraction strategy the synthesizer emits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyFamily {
    /// Render pages to text and group lines into records
    Rendering,
    /// Read tables from the document structure
    Structural,
    /// Structural first, rendering as fallback
    Hybrid,
}

impl Default for StrategyFamily {
    fn default() -> Self {
        StrategyFamily::Rendering
    }
}

impl StrategyFamily {
    /// Parse a family name
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "rendering" => Some(StrategyFamily::Rendering),
            "structural" => Some(StrategyFamily::Structural),
            "hybrid" => Some(StrategyFamily::Hybrid),
            _ => None,
        }
    }
}

impl std::str::FromStr for StrategyFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid strategy family: {}", s))
    }
}

/// Configuration for the Synthesizer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesizerConfig {
    /// Strategy family baked into every artifact
    #[serde(default)]
    pub strategy: StrategyFamily,

    /// Minimum structural row count before the hybrid strategy falls back
    #[serde(default = "default_hybrid_min_rows")]
    pub hybrid_min_rows: usize,

    /// Token marking header lines and header rows
    #[serde(default = "default_header_token")]
    pub header_token: String,
}

fn default_hybrid_min_rows() -> usize {
    5
}

fn default_header_token() -> String {
    "date".to_string()
}

impl Default for SynthesizerConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyFamily::default(),
            hybrid_min_rows: default_hybrid_min_rows(),
            header_token: default_header_token(),
        }
    }
}

impl SynthesizerConfig {
    /// Configuration emitting the given strategy family with default settings
    pub fn for_family(strategy: StrategyFamily) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.header_token.trim().is_empty() {
            return Err("header_token must not be empty".to_string());
        }
        if self.strategy == StrategyFamily::Hybrid && self.hybrid_min_rows == 0 {
            return Err("hybrid_min_rows must be greater than 0 for the hybrid strategy".to_string());
        }
        Ok(())
    }
}
