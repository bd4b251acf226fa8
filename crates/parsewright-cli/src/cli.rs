//! Command-line definitions and argument parsing.

use clap::Parser;
use parsewright_synthesizer::StrategyFamily;
use std::path::PathBuf;

/// Parsewright - synthesize and validate a bank statement parser.
#[derive(Debug, Parser)]
#[command(name = "parsewright")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Target name (e.g. icici); selects data/<target>/ and the artifact path
    #[arg(short, long, env = "PARSEWRIGHT_TARGET")]
    pub target: String,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Write the last candidate table to this CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Attempt ceiling (overrides the configuration)
    #[arg(long)]
    pub max_attempts: Option<u32>,

    /// Strategy family baked into the artifact (overrides the configuration)
    #[arg(long, value_enum)]
    pub strategy: Option<StrategyArg>,
}

/// Parsewright accuracy - score an existing parser against its reference.
#[derive(Debug, Parser)]
#[command(name = "parsewright-accuracy")]
#[command(version, about, long_about = None)]
pub struct AccuracyCli {
    /// Target name
    #[arg(short, long, default_value = "icici")]
    pub target: String,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (verdict only)
    Quiet,
}

/// Strategy family options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum StrategyArg {
    /// Render pages and group text lines into records
    Rendering,
    /// Read rows from the document's tables
    Structural,
    /// Structural first, rendering as fallback
    Hybrid,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<StrategyArg> for StrategyFamily {
    fn from(strategy: StrategyArg) -> Self {
        match strategy {
            StrategyArg::Rendering => StrategyFamily::Rendering,
            StrategyArg::Structural => StrategyFamily::Structural,
            StrategyArg::Hybrid => StrategyFamily::Hybrid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_is_required() {
        assert!(Cli::try_parse_from(["parsewright"]).is_err());
    }

    #[test]
    fn test_run_flags() {
        let cli = Cli::try_parse_from([
            "parsewright",
            "--target",
            "sbi",
            "--format",
            "json",
            "--max-attempts",
            "5",
            "--strategy",
            "hybrid",
            "--output",
            "out.csv",
        ])
        .unwrap();
        assert_eq!(cli.target, "sbi");
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        assert_eq!(cli.max_attempts, Some(5));
        assert!(matches!(cli.strategy, Some(StrategyArg::Hybrid)));
        assert_eq!(cli.output, Some(PathBuf::from("out.csv")));
    }

    #[test]
    fn test_accuracy_defaults_to_icici() {
        let cli = AccuracyCli::try_parse_from(["parsewright-accuracy"]).unwrap();
        assert_eq!(cli.target, "icici");
        assert!(!cli.no_color);
    }

    #[test]
    fn test_unknown_strategy_rejected() {
        assert!(Cli::try_parse_from(["parsewright", "-t", "icici", "--strategy", "ocr"]).is_err());
    }
}
