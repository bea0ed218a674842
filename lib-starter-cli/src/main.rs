//! lib-starter CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use console::{style, Term};
use lib_starter_cli_lib::error::GENERATION_FAILURE_CODE;
use lib_starter_cli_lib::{observability, Config, CreateCommand, FailureReport, Stream, TerminalPrompter};
use tracing::error;

#[derive(Parser)]
#[command(name = "lib-starter")]
#[command(version)]
#[command(about = "Scaffold a new TypeScript or JavaScript library", long_about = None)]
struct Cli {
    /// Directory holding the project templates (overrides LIB_STARTER_TEMPLATES_DIR)
    #[arg(long, value_name = "PATH")]
    templates_dir: Option<PathBuf>,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = observability::init(cli.verbose) {
        eprintln!("Failed to initialize logging: {err:#}");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err),
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::from_env(cli.templates_dir).context("Failed to read current directory")?;

    CreateCommand::new(config, TerminalPrompter::new()).execute()?;

    Ok(())
}

/// Print the failure and pick the exit code
fn report(err: &anyhow::Error) -> ExitCode {
    let report = FailureReport::from_error(err);

    match report.stream {
        Stream::Stdout => {
            // Select prompts hide the cursor and do not restore it on Ctrl-C
            let _ = Term::stderr().show_cursor();
            println!();
            println!("{}", style(&report.message).red());
        }
        Stream::Stderr => {
            error!(error = %err, status = report.status, "Run failed");
            if report.status == GENERATION_FAILURE_CODE {
                eprintln!("{}", style(&report.message).red());
            } else {
                eprintln!("{}", report.message);
            }
        }
    }

    ExitCode::from(report.status)
}
