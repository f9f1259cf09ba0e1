// websan/src/logger.rs
//! Logger initialization for the websan CLI.

use env_logger::Builder;
use log::LevelFilter;

/// Initializes the global logger.
///
/// An explicit level overrides `RUST_LOG`; with `None`, the environment
/// decides. Safe to call more than once (later calls are ignored), which
/// keeps integration tests that spawn the binary repeatedly well-behaved.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_default_env();
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.format_timestamp(None);
    let _ = builder.try_init();
}
