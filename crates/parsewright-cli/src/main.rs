//! Parsewright CLI - synthesize and validate a bank statement parser.
//!
//! Exit codes: 0 when a parser passed, 1 when attempts were exhausted, 2 on a
//! fatal error.

use clap::Parser;
use parsewright_cli::{commands, Cli, Config, Formatter};
use std::process::ExitCode;

fn main() -> ExitCode {
    parsewright_cli::init_tracing();

    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run() -> anyhow::Result<bool> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    Ok(commands::execute_run(&cli, config, &formatter)?)
}
