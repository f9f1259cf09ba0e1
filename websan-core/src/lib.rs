// websan-core/src/lib.rs
//! # WebSan Core Library
//!
//! `websan-core` provides the platform-independent logic for neutralizing
//! HTML/JavaScript injection in untrusted text, plus programmatic validation
//! of email-address syntax. It defines the data structures for filter rules,
//! compiles them into efficient regular expressions, and applies them as an
//! ordered, chained sequence of global find-and-replace passes.
//!
//! The library is pure and stateless: both entry points are total functions
//! over their arguments, with no I/O beyond optional config-file loading and
//! no shared mutable state between invocations. The built-in rule table and
//! the email pattern are process-wide immutable constants, so concurrent use
//! from multiple threads needs no locking.
//!
//! ## Modules
//!
//! * `config`: Defines `FilterRule`s and `FilterConfig` and handles YAML
//!   loading, validation, and order-preserving merging.
//! * `compiler`: Compiles rule sets into `CompiledRules` with a global cache.
//! * `engine`: The `FilterEngine` and the one-shot `sanitize` entry point.
//! * `validators`: Programmatic validation for specific data types (email).
//! * `errors`: The library's structured error type.
//!
//! ## Usage Example
//!
//! ```rust
//! use websan_core::{is_valid_email, sanitize};
//!
//! let filtered = sanitize(Some("<script>alert(1)</script>"));
//! assert_eq!(filtered.as_deref(), Some("&lt;script&gt;alert[1)&lt;/script&gt;"));
//!
//! // Absent input is passed through, not treated as an error.
//! assert_eq!(sanitize(None), None);
//!
//! assert!(is_valid_email(Some("user@example.com")));
//! assert!(!is_valid_email(Some("foo[]#plop.com")));
//! ```
//!
//! ## Rule ordering
//!
//! Rules apply strictly in the order the configuration lists them; each
//! rule's output is the next rule's input. The built-in order escapes quotes
//! and angle brackets before the script-neutralization rules run, which
//! leaves the literal `<script>`-tag rule permanently starved of matches.
//! That ordering is preserved deliberately; see `config/default_rules.yaml`.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod compiler;
pub mod config;
pub mod engine;
pub mod errors;
pub mod validators;

/// Re-exports the public configuration types and functions.
pub use config::{
    merge_rules,
    validate_rules,
    FilterConfig,
    FilterRule,
    FilterSummaryItem,
    MAX_PATTERN_LENGTH,
};

/// Re-exports the custom error type for clear error reporting.
pub use errors::WebsanError;

/// Re-exports the filter engine and the one-shot sanitizer entry point.
pub use engine::{sanitize, FilterEngine};

/// Re-exports programmatic validators.
pub use validators::is_valid_email;

/// Re-exports the rule compilation layer for advanced usage.
pub use compiler::{compile_rules, get_or_compile_rules, CompiledRule, CompiledRules};
