// websan/src/main.rs
//! WebSan entry point.
//!
//! Parses the CLI, initializes logging, and dispatches to the command
//! runners.

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use websan::cli::{Cli, Commands};
use websan::commands;
use websan::logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.quiet {
        logger::init_logger(Some(LevelFilter::Off));
    } else if cli.debug {
        logger::init_logger(Some(LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    match cli.command {
        Commands::Sanitize(cmd) => commands::sanitize::run(&cmd),
        Commands::CheckEmail(cmd) => {
            let all_valid = commands::check_email::run(&cmd)?;
            if !all_valid {
                // Invalid syntax is a verdict, not an error; report it
                // through the exit code.
                std::process::exit(1);
            }
            Ok(())
        }
    }
}
