// websan/src/commands/mod.rs
//! Command runners for the websan CLI.

pub mod check_email;
pub mod sanitize;
