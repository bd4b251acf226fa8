//! Parsewright Agent
//!
//! The self-correcting loop that produces a parser for one target.
//!
//! # Overview
//!
//! The agent is responsible for:
//! - **Planning**: resolving a target's paths and loading its reference once
//! - **Synthesis**: writing the artifact for the current parameters
//! - **Validation**: running the artifact and comparing its output
//! - **Analysis**: turning a row shortfall into a higher rendering resolution
//!
//! # Architecture
//!
//! ```text
//! Planning → [Synthesizing → Validating → (Analyzing)] × max_attempts
//!                               │
//!                          Succeeded | Exhausted
//! ```
//!
//! | State | Leaves to | When |
//! |-------|-----------|------|
//! | Planning | Synthesizing | inputs exist and the reference loads |
//! | Synthesizing | Validating | artifact written |
//! | Validating | Succeeded | candidate equals the reference |
//! | Validating | Analyzing | mismatch and attempts remain |
//! | Validating | Exhausted | mismatch on the last attempt |
//! | Analyzing | Synthesizing | next parameters chosen |
//!
//! # Usage
//!
//! ```no_run
//! use parsewright_agent::{AgentConfig, AnalyzerConfig, Orchestrator};
//! use parsewright_domain::TargetId;
//! use parsewright_extractor::{ArtifactLoader, PdfTextSource};
//! use parsewright_gatekeeper::ValidationConfig;
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let loader = ArtifactLoader::new(Arc::new(PdfTextSource::new()));
//! let orchestrator = Orchestrator::new(AgentConfig::default(), loader)
//!     .with_validation_config(ValidationConfig::lenient())
//!     .with_analyzer_config(AnalyzerConfig::strict());
//!
//! let report = orchestrator.run(&TargetId::parse("icici")?)?;
//! println!("{}", report.verdict());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod analyzer;
mod config;
mod error;
mod orchestrator;
mod report;

pub use analyzer::{Analysis, AnalyzerAction, AnalyzerConfig, FailureAnalyzer, Strictness};
pub use config::AgentConfig;
pub use error::AgentError;
pub use orchestrator::{AgentState, Orchestrator};
pub use report::{AttemptSummary, RunReport, RunSummary};
