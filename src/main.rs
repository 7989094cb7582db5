//! Entry point for the `catbayes` command.

use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use catbayes::cli::args::{CatbayesArgs, Command};
use catbayes::cli::commands::execute_command;

/// `-q` shows errors only, no flag shows warnings, and each extra `-v`
/// opens one more level up to debug.
fn log_level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

fn init_logging(level: LevelFilter) {
    Builder::new()
        .filter_level(level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}

fn subcommand_name(command: &Command) -> &'static str {
    match command {
        Command::Categories(_) => "categories",
        Command::Evaluate(_) => "evaluate",
        Command::Classify(_) => "classify",
    }
}

fn run(args: CatbayesArgs) -> anyhow::Result<()> {
    let name = subcommand_name(&args.command);
    execute_command(args).with_context(|| format!("`catbayes {name}` failed"))
}

fn main() -> ExitCode {
    let args = CatbayesArgs::parse();
    init_logging(log_level(args.verbosity()));

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
