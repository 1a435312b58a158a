//! Brainseed - versioned brain seed phrases from the command line.
//!
//! Generate seeds from your own entropy, check them, and stretch them into
//! BIP-39 compatible key material.

mod commands;

use clap::Parser;
use commands::{Cli, Commands};
use env_logger::Env;
use log::LevelFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::New(cmd) => cmd.execute()?,
        Commands::Check(cmd) => cmd.execute()?,
        Commands::Version(cmd) => cmd.execute()?,
        Commands::Stretch(cmd) => cmd.execute()?,
    }
    Ok(())
}
