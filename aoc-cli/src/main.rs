//! AOC CLI - runs one Advent of Code solution part against cached or fetched input

mod cache;
mod cli;
mod config;
mod error;
mod executor;
mod output;

use clap::Parser;
use cli::Args;
use config::Config;
use executor::Executor;
use output::OutputFormatter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let args = Args::parse();
    init_logger(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), error::CliError> {
    let config = Config::from_args(args);
    tracing::debug!(?config, "resolved configuration");

    let registry = aoc_solutions::registry()?;
    let executor = Executor::new(registry, &config)?;

    let result = executor.execute(config.key)?;
    OutputFormatter::new(config.quiet).print_result(&result);

    Ok(())
}

/// Logs go to stderr so stdout carries only the answer
fn init_logger(verbose: bool) {
    let default_filter = if verbose {
        "aoc_cli=debug,aoc_http_client=debug,aoc_solver=debug,info"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}
