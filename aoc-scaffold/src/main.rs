//! AOC scaffold - creates a solution module and registers it for dispatch

mod cli;
mod error;
mod module;
mod registry;
mod scaffold;

use clap::Parser;
use cli::Args;
use module::DayModule;
use scaffold::Scaffold;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let args = Args::parse();
    init_logger(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), error::ScaffoldError> {
    let module = DayModule::new(args.year, args.day);
    let generated = Scaffold::new(args.root).generate(&module)?;

    println!("Created {}", generated.module_path.display());
    println!(
        "Registered {} in {} (line {})",
        module.name(),
        generated.registry_path.display(),
        generated.injection.import_at + 1
    );
    Ok(())
}

fn init_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "aoc_scaffold=debug,info" } else { "warn" })
    });

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
