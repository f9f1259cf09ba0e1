//! Sanitize command implementation: neutralize HTML/JavaScript injection in
//! text from stdin or a file.

use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::io::{self, Read, Write};

use websan_core::{merge_rules, FilterConfig, FilterEngine, FilterSummaryItem};

use crate::cli::SanitizeCommand;

/// The main operation runner for `websan sanitize`.
pub fn run(cmd: &SanitizeCommand) -> Result<()> {
    info!("Starting sanitize operation.");

    let input = read_input(cmd)?;
    let config = build_config(cmd)?;
    let engine = FilterEngine::new(config)?;

    let (sanitized_content, summary) = engine.apply(&input);
    debug!(
        "Content sanitized. Original length: {}, sanitized length: {}",
        input.len(),
        sanitized_content.len()
    );

    write_output(cmd, &sanitized_content)?;

    if !cmd.no_summary {
        print_summary(&summary);
    }

    info!("Sanitize operation completed.");
    Ok(())
}

fn read_input(cmd: &SanitizeCommand) -> Result<String> {
    match &cmd.input_file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read input from stdin")?;
            Ok(buffer)
        }
    }
}

/// Assembles the active rule set: built-in rules, overlaid with an optional
/// user rule file, minus any explicitly disabled rules.
fn build_config(cmd: &SanitizeCommand) -> Result<FilterConfig> {
    let default_config = FilterConfig::load_default_rules()?;

    let user_config = match &cmd.config {
        Some(path) => Some(FilterConfig::load_from_file(path)?),
        None => None,
    };

    let mut config = merge_rules(default_config, user_config);
    if !cmd.disable.is_empty() {
        config.set_disabled_rules(&cmd.disable);
    }
    Ok(config)
}

fn write_output(cmd: &SanitizeCommand, sanitized_content: &str) -> Result<()> {
    match &cmd.output {
        Some(path) => {
            info!("Writing sanitized content to file: {}", path.display());
            let mut file = fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            writeln!(file, "{}", sanitized_content)?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            writeln!(writer, "{}", sanitized_content)?;
        }
    }
    Ok(())
}

/// Prints the per-rule summary to stderr so it never mixes with the
/// sanitized output stream.
fn print_summary(summary: &[FilterSummaryItem]) {
    let mut stderr = io::stderr().lock();
    if summary.is_empty() {
        let _ = writeln!(stderr, "websan: no rules matched");
        return;
    }

    let _ = writeln!(stderr, "websan: filter summary");
    for item in summary {
        let _ = writeln!(
            stderr,
            "  {} ({}): {} occurrence(s)",
            item.rule_name, item.category, item.occurrences
        );
    }
}
