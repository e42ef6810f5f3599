//! transition-tracker - provision and operate the Ubuntu transition tracker
//!
//! Invoked by the host runtime once per lifecycle event.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use transition_tracker::cli::Cli;
use transition_tracker::commands;

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.global.verbose);

    if let Err(e) = commands::run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
