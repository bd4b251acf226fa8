//! Parsewright CLI library.
//!
//! This library provides the pieces shared by the `parsewright` and
//! `parsewright-accuracy` binaries: argument parsing, layered configuration,
//! command execution and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{AccuracyCli, Cli};
pub use config::{Config, OutputFormat};
pub use error::{CliError, Result};
pub use output::Formatter;

/// Install the stderr log subscriber (`RUST_LOG`, default `info`)
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}
