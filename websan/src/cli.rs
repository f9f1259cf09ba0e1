// websan/src/cli.rs
//! This file defines the command-line interface (CLI) for the websan
//! application, including all available commands and their arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "websan",
    version = env!("CARGO_PKG_VERSION"),
    about = "Neutralize HTML and JavaScript injection in untrusted text",
    long_about = "Websan is a command-line utility for neutralizing HTML and JavaScript \
injection in untrusted text and for validating email-address syntax. It applies an ordered, \
configurable rule set of find-and-replace patterns so that quotes, angle brackets, and known \
script vectors are defused before the text reaches a browser.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for the 'websan' crates to DEBUG)
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `websan` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sanitizes an input file or stdin, neutralizing HTML/JavaScript injection.
    #[command(about = "Sanitizes an input file or stdin, neutralizing HTML/JavaScript injection.")]
    Sanitize(SanitizeCommand),

    /// Validates email-address syntax for an address or one address per stdin line.
    #[command(about = "Validates email-address syntax for an address or one address per stdin line.")]
    CheckEmail(CheckEmailCommand),
}

/// Arguments for the `sanitize` command.
#[derive(Parser, Debug)]
pub struct SanitizeCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Write sanitized output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Path to a custom filter rule file (YAML), merged over the built-in rules.
    #[arg(long = "config", value_name = "FILE", help = "Path to a custom filter rule file (YAML).")]
    pub config: Option<PathBuf>,

    /// Explicitly disable these rule names (comma-separated).
    #[arg(long, short = 'x', value_delimiter = ',', help = "Explicitly disable these rule names (comma-separated).")]
    pub disable: Vec<String>,

    /// Suppress the per-rule filter summary.
    #[arg(long = "no-summary", help = "Suppress the per-rule filter summary.")]
    pub no_summary: bool,
}

/// Arguments for the `check-email` command.
#[derive(Parser, Debug)]
pub struct CheckEmailCommand {
    /// Address to validate (reads one address per line from stdin if omitted).
    #[arg(value_name = "ADDRESS", help = "Address to validate; omit to read one address per line from stdin.")]
    pub address: Option<String>,
}
