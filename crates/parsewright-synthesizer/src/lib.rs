//! Parsewright Synthesizer
//!
//! Renders a parameterized extraction-routine artifact to a fixed path.
//!
//! # Overview
//!
//! The artifact is a small TOML document naming an extraction strategy and the
//! settings baked into it. It replaces generated source code: the validation
//! stage loads the artifact and instantiates the strategy it names, so no code
//! is compiled or evaluated at runtime.
//!
//! # Architecture
//!
//! ```text
//! ParameterSet → Synthesizer → custom_parsers/<target>_parser.toml → ArtifactLoader
//! ```
//!
//! # Example Usage
//!
//! ```no_run
//! use parsewright_domain::{ParameterSet, TargetId};
//! use parsewright_synthesizer::{Synthesizer, SynthesizerConfig};
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let synthesizer = Synthesizer::new(SynthesizerConfig::default());
//! let target = TargetId::parse("icici")?;
//!
//! let artifact = synthesizer.synthesize(
//!     &target,
//!     Path::new("custom_parsers/icici_parser.toml"),
//!     &ParameterSet::default(),
//! )?;
//! println!("Synthesized a {} strategy", artifact.strategy.kind());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod artifact;
mod config;
mod error;
mod synthesizer;

pub use artifact::{ArtifactSpec, HybridSpec, RenderingSpec, StrategySpec, StructuralSpec, ARTIFACT_FORMAT_VERSION, ENTRY_POINT};
pub use config::{StrategyFamily, SynthesizerConfig};
pub use error::SynthesisError;
pub use synthesizer::Synthesizer;
