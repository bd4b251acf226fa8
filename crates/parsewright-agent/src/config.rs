//! Configuration for agent runs

use parsewright_domain::params::DEFAULT_RENDER_DPI;
use parsewright_domain::PathLayout;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for the Orchestrator
///
/// # Examples
///
/// ```
/// use parsewright_agent::AgentConfig;
///
/// let config = AgentConfig::default();
/// assert_eq!(config.max_attempts, 3);
/// assert_eq!(config.initial_render_dpi, 300);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Attempt ceiling per run
    pub max_attempts: u32,

    /// Rendering resolution of the first attempt
    pub initial_render_dpi: u32,

    /// Directory holding one sub-directory per target
    pub data_dir: PathBuf,

    /// Directory receiving synthesized artifacts
    pub parsers_dir: PathBuf,
}

impl Default for AgentConfig {
    fn default() -> Self {
        let layout = PathLayout::default();
        Self {
            max_attempts: 3,
            initial_render_dpi: DEFAULT_RENDER_DPI,
            data_dir: layout.data_dir,
            parsers_dir: layout.parsers_dir,
        }
    }
}

impl AgentConfig {
    /// Default configuration with both directories beneath `base`
    pub fn rooted_at(base: &Path) -> Self {
        let layout = PathLayout::rooted_at(base);
        Self {
            data_dir: layout.data_dir,
            parsers_dir: layout.parsers_dir,
            ..Self::default()
        }
    }

    /// The path layout targets resolve against
    pub fn layout(&self) -> PathLayout {
        PathLayout {
            data_dir: self.data_dir.clone(),
            parsers_dir: self.parsers_dir.clone(),
            ..PathLayout::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_attempts == 0 {
            return Err("max_attempts must be at least 1".to_string());
        }
        if self.initial_render_dpi == 0 {
            return Err("initial_render_dpi must be greater than 0".to_string());
        }
        Ok(())
    }
}
