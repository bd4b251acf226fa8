//! Standalone accuracy check of an existing artifact.

use super::{parse_target, pdf_loader};
use crate::cli::AccuracyCli;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use parsewright_extractor::StrategyLoader;
use parsewright_gatekeeper::{AccuracyReport, AccuracyScorer};
use parsewright_store::DatasetStore;
use tracing::warn;

/// Score the target's current artifact against its reference dataset.
pub fn execute_accuracy(cli: &AccuracyCli, config: &Config, formatter: &Formatter) -> Result<AccuracyReport> {
    score_with_loader(cli, config, formatter, &pdf_loader())
}

pub(crate) fn score_with_loader<L: StrategyLoader>(
    cli: &AccuracyCli,
    config: &Config,
    formatter: &Formatter,
    loader: &L,
) -> Result<AccuracyReport> {
    let target = parse_target(&cli.target)?;
    let paths = config.agent.layout().resolve(&target);

    for (what, path) in [("artifact", &paths.artifact), ("input document", &paths.document)] {
        if !path.is_file() {
            return Err(CliError::InvalidInput(format!("Missing {}: {}", what, path.display())));
        }
    }

    let reference = DatasetStore::default().read_reference(&paths.reference)?;
    let strategy = loader.load(&paths.artifact)?;
    let outcome = strategy.extract(&paths.document);
    if let Some(reason) = outcome.fault() {
        warn!("Extraction fault: {}", reason);
        eprintln!("{}", formatter.warning(&format!("Extraction fault: {}", reason)));
    }

    let report = AccuracyScorer::new(config.validation.tolerance).score(&reference, &outcome.into_table());
    println!("{}", formatter.format_accuracy(&report)?);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use clap::Parser;
    use parsewright_domain::{Cell, ExtractionOutcome, ExtractionStrategy, Table, STATEMENT_COLUMNS};
    use parsewright_extractor::ExtractorError;
    use std::path::Path;

    struct HalfRight;

    impl ExtractionStrategy for HalfRight {
        fn name(&self) -> &str {
            "half-right"
        }

        fn extract(&self, _document: &Path) -> ExtractionOutcome {
            ExtractionOutcome::Extracted(
                Table::from_rows(
                    STATEMENT_COLUMNS,
                    vec![vec![
                        Cell::text("01-08-2024"),
                        Cell::text("salary "),
                        Cell::Number(1.0),
                        Cell::Number(50000.004),
                        Cell::Number(1.0),
                    ]],
                )
                .unwrap(),
            )
        }
    }

    struct HalfRightLoader;

    impl StrategyLoader for HalfRightLoader {
        fn load(&self, _artifact: &Path) -> std::result::Result<Box<dyn ExtractionStrategy>, ExtractorError> {
            Ok(Box::new(HalfRight))
        }
    }

    fn workspace(with_artifact: bool) -> (tempfile::TempDir, Config) {
        let dir = tempfile::tempdir().unwrap();
        let target_dir = dir.path().join("data").join("icici");
        std::fs::create_dir_all(&target_dir).unwrap();
        std::fs::write(target_dir.join("icici_sample.pdf"), b"%PDF").unwrap();
        let reference = Table::from_rows(
            STATEMENT_COLUMNS,
            vec![vec![
                Cell::text("01-08-2024"),
                Cell::text("Salary"),
                Cell::Missing,
                Cell::Number(50000.0),
                Cell::Number(60000.0),
            ]],
        )
        .unwrap();
        DatasetStore::default()
            .write_table(target_dir.join("icici_sample.csv"), &reference)
            .unwrap();
        if with_artifact {
            let parsers = dir.path().join("custom_parsers");
            std::fs::create_dir_all(&parsers).unwrap();
            std::fs::write(parsers.join("icici_parser.toml"), "").unwrap();
        }

        let mut config = Config::default();
        config.agent = parsewright_agent::AgentConfig::rooted_at(dir.path());
        (dir, config)
    }

    #[test]
    fn test_scores_existing_artifact() {
        let (_dir, config) = workspace(true);
        let cli = AccuracyCli::try_parse_from(["parsewright-accuracy"]).unwrap();
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        let report = score_with_loader(&cli, &config, &formatter, &HalfRightLoader).unwrap();

        // Date, Description and Credit match; Debit and Balance do not.
        assert_eq!(report.matched, 3);
        assert_eq!(report.total, 5);
    }

    #[test]
    fn test_missing_artifact_is_reported() {
        let (_dir, config) = workspace(false);
        let cli = AccuracyCli::try_parse_from(["parsewright-accuracy"]).unwrap();
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        let err = score_with_loader(&cli, &config, &formatter, &HalfRightLoader).unwrap_err();
        assert!(err.to_string().contains("Missing artifact"));
    }
}
