//! The agent run.

use super::{parse_target, pdf_loader};
use crate::cli::Cli;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use parsewright_agent::Orchestrator;
use parsewright_extractor::StrategyLoader;
use parsewright_store::DatasetStore;
use tracing::info;

/// Execute the agent for the target named on the command line.
///
/// Returns whether the run succeeded.
pub fn execute_run(cli: &Cli, config: Config, formatter: &Formatter) -> Result<bool> {
    run_with_loader(cli, config, formatter, pdf_loader())
}

pub(crate) fn run_with_loader<L: StrategyLoader>(
    cli: &Cli,
    mut config: Config,
    formatter: &Formatter,
    loader: L,
) -> Result<bool> {
    let target = parse_target(&cli.target)?;

    if let Some(max_attempts) = cli.max_attempts {
        config.agent.max_attempts = max_attempts;
    }
    if let Some(strategy) = cli.strategy {
        config.synthesizer.strategy = strategy.into();
    }
    config.validate()?;

    let orchestrator = Orchestrator::new(config.agent, loader)
        .with_synthesizer_config(config.synthesizer)
        .with_validation_config(config.validation)
        .with_analyzer_config(config.analyzer);
    let report = orchestrator.run(&target)?;

    if let Some(path) = &cli.output {
        if let Some(candidate) = report.last_candidate() {
            DatasetStore::default().write_table(path, candidate)?;
            info!("Wrote last candidate ({} rows) to {}", candidate.row_count(), path.display());
        }
    }

    println!("{}", formatter.format_run(&report)?);
    Ok(report.succeeded())
}
