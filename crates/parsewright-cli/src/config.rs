//! Configuration management for the CLI.
//!
//! One TOML file carries a section per component:
//!
//! ```toml
//! [agent]
//! max_attempts = 3
//! data_dir = "data"
//!
//! [synthesizer]
//! strategy = "hybrid"
//!
//! [validation]
//! shape_gate = true
//! cell_comparison = "exact"
//!
//! [analyzer]
//! strictness = "ratio"
//!
//! [settings]
//! color = true
//! format = "table"
//! ```

use crate::error::{CliError, Result};
use parsewright_agent::{AgentConfig, AnalyzerConfig};
use parsewright_gatekeeper::ValidationConfig;
use parsewright_synthesizer::SynthesizerConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "parsewright.toml";

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Orchestration settings
    #[serde(default)]
    pub agent: AgentConfig,

    /// Artifact synthesis settings
    #[serde(default)]
    pub synthesizer: SynthesizerConfig,

    /// Comparison policy
    #[serde(default)]
    pub validation: ValidationConfig,

    /// Failure analysis settings
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// Presentation settings
    #[serde(default)]
    pub settings: Settings,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// User-level configuration file path.
    pub fn user_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("parsewright").join("config.toml"))
    }

    /// Find the configuration file to use.
    ///
    /// An explicit path must exist. Otherwise `./parsewright.toml` and then the
    /// user-level file are tried; `None` means built-in defaults.
    pub fn locate(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(CliError::Config(format!(
                    "Config file {} does not exist",
                    path.display()
                )));
            }
            return Ok(Some(path.to_path_buf()));
        }

        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.is_file() {
            return Ok(Some(local));
        }
        Ok(Self::user_path().filter(|path| path.is_file()))
    }

    /// Load configuration from the located file or fall back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match Self::locate(explicit)? {
            Some(path) => {
                debug!("Loading configuration from {}", path.display());
                Self::from_file(&path)
            }
            None => {
                debug!("No configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load and validate a configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse and validate configuration text.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Config = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<()> {
        let sections = [
            ("agent", self.agent.validate()),
            ("synthesizer", self.synthesizer.validate()),
            ("validation", self.validation.validate()),
            ("analyzer", self.analyzer.validate()),
        ];
        for (name, result) in sections {
            result.map_err(|e| CliError::Config(format!("[{}] {}", name, e)))?;
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}
