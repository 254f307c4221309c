//! BAAC normalizer CLI.

use std::process::ExitCode;

use baac_cli::logging::{LogConfig, init_logging};
use clap::Parser;
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command};
use crate::commands::{run_kinds, run_normalize};
use crate::summary::print_summary;

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.color.write_global();
    let counted = cli
        .verbosity
        .is_present()
        .then(|| cli.verbosity.tracing_level_filter());
    let log_config = LogConfig::default()
        .with_levels(counted, cli.log_level.map(LevelFilter::from))
        .with_format(cli.log_format.into())
        .with_log_file(cli.log_file.clone())
        .with_color(cli.color.color);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        return ExitCode::FAILURE;
    }

    match dispatch(cli.command) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

/// Returns `false` when a pass failed.
fn dispatch(command: Command) -> anyhow::Result<bool> {
    match command {
        Command::Run(args) => {
            let report = run_normalize(&args)?;
            print_summary(&report);
            Ok(!report.has_failures())
        }
        Command::Kinds => run_kinds().map(|()| true),
    }
}
