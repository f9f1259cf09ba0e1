//! errors.rs - Custom error types for the websan-core library.
//!
//! License: MIT OR Apache-2.0

use thiserror::Error;

/// This enum represents all possible error types in the `websan-core` library.
///
/// `#[non_exhaustive]` signals to consumers that new variants may be added in
/// future versions, so they cannot match exhaustively.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum WebsanError {
    #[error("Failed to compile filter rule '{0}': {1}")]
    RuleCompilationError(String, regex::Error),

    #[error("Rule '{0}': pattern length ({1}) exceeds maximum allowed ({2})")]
    PatternLengthExceeded(String, usize, usize),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    #[error("A fatal error occurred: {0}")]
    Fatal(String),
}
