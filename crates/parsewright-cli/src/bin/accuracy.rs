//! Parsewright accuracy - score the current parser for a target.

use clap::Parser;
use parsewright_cli::{commands, AccuracyCli, Config, Formatter};
use std::process::ExitCode;

fn main() -> ExitCode {
    parsewright_cli::init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run() -> anyhow::Result<()> {
    let cli = AccuracyCli::parse();
    let config = Config::load(cli.config.as_deref())?;

    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    commands::execute_accuracy(&cli, &config, &formatter)?;
    Ok(())
}
