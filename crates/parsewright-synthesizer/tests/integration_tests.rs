//! Integration tests for parsewright-synthesizer
//!
//! These tests write artifacts to a temporary directory and read them back.

use parsewright_domain::{ParameterSet, TargetId};
use parsewright_synthesizer::{
    ArtifactSpec, StrategyFamily, SynthesisError, Synthesizer, SynthesizerConfig,
};
use std::fs;

fn icici() -> TargetId {
    TargetId::parse("icici").unwrap()
}

#[test]
fn test_synthesis_is_byte_identical_for_identical_inputs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom_parsers").join("icici_parser.toml");
    let synthesizer = Synthesizer::new(SynthesizerConfig::for_family(StrategyFamily::Hybrid));
    let params = ParameterSet::new(350);

    synthesizer.synthesize(&icici(), &path, &params).unwrap();
    let first = fs::read(&path).unwrap();

    synthesizer.synthesize(&icici(), &path, &params).unwrap();
    let second = fs::read(&path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_synthesis_overwrites_previous_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("icici_parser.toml");
    fs::write(&path, "stale contents from an earlier attempt, much longer than needed ".repeat(50)).unwrap();

    let synthesizer = Synthesizer::default_config();
    synthesizer.synthesize(&icici(), &path, &ParameterSet::new(400)).unwrap();

    let loaded = ArtifactSpec::load(&path).unwrap();
    assert_eq!(loaded.strategy.render_dpi(), Some(400));
    assert_eq!(loaded.target, "icici");
}

#[test]
fn test_synthesis_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a").join("b").join("c").join("icici_parser.toml");

    Synthesizer::default_config()
        .synthesize(&icici(), &path, &ParameterSet::default())
        .unwrap();

    assert!(path.is_file());
}

#[test]
fn test_write_failure_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    // A directory where the artifact file should go cannot be overwritten.
    let path = dir.path().join("icici_parser.toml");
    fs::create_dir_all(&path).unwrap();

    let result = Synthesizer::default_config().synthesize(&icici(), &path, &ParameterSet::default());
    assert!(matches!(result, Err(SynthesisError::Io(_))));
}

#[test]
fn test_invalid_config_is_rejected_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("icici_parser.toml");
    let mut config = SynthesizerConfig::default();
    config.header_token = "  ".to_string();

    let result = Synthesizer::new(config).synthesize(&icici(), &path, &ParameterSet::default());
    assert!(matches!(result, Err(SynthesisError::Config(_))));
    assert!(!path.exists());
}
