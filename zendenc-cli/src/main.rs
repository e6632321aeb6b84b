// zendenc-cli/src/main.rs
//
// Entry point for the zendenc command-line tool.
//
// Responsibilities:
// - Parsing command-line arguments (see cli.rs).
// - Initializing logging (env_logger, RUST_LOG, default info).
// - Dispatching to the subcommand implementations.
// - Translating run failures into a non-zero exit code.

mod cli;
mod commands;
mod error;

use clap::Parser;
use std::process;

use cli::{Cli, Commands};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Encode(args) => commands::encode::run_encode(args),
    };

    if let Err(e) = result {
        log::error!("{}", e);
        process::exit(1);
    }
}
