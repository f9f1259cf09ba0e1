//! Check-email command implementation: validate email-address syntax.

use anyhow::{Context, Result};
use log::info;
use std::io::{self, BufRead};

use websan_core::is_valid_email;

use crate::cli::CheckEmailCommand;

/// Runs `websan check-email`. Returns `true` when every checked address is
/// syntactically valid; the caller maps that to the process exit code.
pub fn run(cmd: &CheckEmailCommand) -> Result<bool> {
    match &cmd.address {
        Some(address) => Ok(report(address)),
        None => {
            info!("No address argument given; reading addresses from stdin.");
            let stdin = io::stdin();
            let mut all_valid = true;
            for line in stdin.lock().lines() {
                let line = line.context("Failed to read address from stdin")?;
                let address = line.trim();
                if address.is_empty() {
                    continue;
                }
                if !report(address) {
                    all_valid = false;
                }
            }
            Ok(all_valid)
        }
    }
}

fn report(address: &str) -> bool {
    let valid = is_valid_email(Some(address));
    println!("{}: {}", address, if valid { "valid" } else { "invalid" });
    valid
}
