// src/bin/arbor.rs
use std::io;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use arbor_core::cli::{self, Cli};
use arbor_core::config::Config;
use arbor_core::exit::ArborExit;

const LOG_FILTER_ENV: &str = "ARBOR_LOG";

fn main() -> ArborExit {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let Some(cmd) = cli.command else {
        use clap::CommandFactory;
        let _ = Cli::command().print_help();
        return ArborExit::Success;
    };

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };

    let result = config
        .map_err(anyhow::Error::from)
        .and_then(|config| cli::dispatch::execute(cmd, config));

    match result {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            ArborExit::Error
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
