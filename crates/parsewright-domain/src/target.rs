//! Target module - the key naming a document, its reference and its artifact

use std::fmt;
use std::path::{Path, PathBuf};

/// Identifier of one document/reference/artifact triple
///
/// Identifiers are non-empty and must not contain path separators, so that
/// every derived location stays inside its configured root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetId(String);

impl TargetId {
    /// Parse a target identifier
    ///
    /// # Examples
    ///
    /// ```
    /// use parsewright_domain::TargetId;
    ///
    /// assert!(TargetId::parse("icici").is_ok());
    /// assert!(TargetId::parse("").is_err());
    /// assert!(TargetId::parse("../etc").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("target identifier is empty".to_string());
        }
        if trimmed.contains('/') || trimmed.contains('\\') || trimmed.contains("..") {
            return Err(format!("target identifier '{}' contains a path separator", trimmed));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for TargetId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Roots and extensions from which target paths are derived
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathLayout {
    /// Directory holding one sub-directory per target
    pub data_dir: PathBuf,

    /// Directory receiving synthesized artifacts
    pub parsers_dir: PathBuf,

    /// Extension of the input document
    pub document_ext: String,

    /// Extension of the reference dataset
    pub reference_ext: String,

    /// Extension of the synthesized artifact
    pub artifact_ext: String,
}

impl Default for PathLayout {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            parsers_dir: PathBuf::from("custom_parsers"),
            document_ext: "pdf".to_string(),
            reference_ext: "csv".to_string(),
            artifact_ext: "toml".to_string(),
        }
    }
}

impl PathLayout {
    /// Derive the three locations for a target
    ///
    /// # Examples
    ///
    /// ```
    /// use parsewright_domain::{PathLayout, TargetId};
    /// use std::path::Path;
    ///
    /// let target = TargetId::parse("icici").unwrap();
    /// let paths = PathLayout::default().resolve(&target);
    /// assert_eq!(paths.document, Path::new("data/icici/icici_sample.pdf"));
    /// assert_eq!(paths.reference, Path::new("data/icici/icici_sample.csv"));
    /// assert_eq!(paths.artifact, Path::new("custom_parsers/icici_parser.toml"));
    /// ```
    pub fn resolve(&self, target: &TargetId) -> TargetPaths {
        let t = target.as_str();
        let target_dir = self.data_dir.join(t);
        TargetPaths {
            document: target_dir.join(format!("{}_sample.{}", t, self.document_ext)),
            reference: target_dir.join(format!("{}_sample.{}", t, self.reference_ext)),
            artifact: self.parsers_dir.join(format!("{}_parser.{}", t, self.artifact_ext)),
        }
    }

    /// Layout rooted at a base directory (default names beneath it)
    pub fn rooted_at(base: &Path) -> Self {
        let default = Self::default();
        Self {
            data_dir: base.join(default.data_dir),
            parsers_dir: base.join(default.parsers_dir),
            ..default
        }
    }
}

/// Filesystem locations derived from a target identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetPaths {
    /// Input document
    pub document: PathBuf,

    /// Reference dataset
    pub reference: PathBuf,

    /// Synthesized artifact
    pub artifact: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(TargetId::parse("  hdfc ").unwrap().as_str(), "hdfc");
    }

    #[test]
    fn test_parse_rejects_separators() {
        assert!(TargetId::parse("a/b").is_err());
        assert!(TargetId::parse("a\\b").is_err());
        assert!(TargetId::parse("..").is_err());
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let target = TargetId::parse("sbi").unwrap();
        let layout = PathLayout::rooted_at(Path::new("/work"));
        assert_eq!(layout.resolve(&target), layout.resolve(&target));
        assert_eq!(
            layout.resolve(&target).artifact,
            Path::new("/work/custom_parsers/sbi_parser.toml")
        );
    }
}
