//! Programmatic validation functions for specific data types.
//!
//! Currently this module hosts the email-address syntax validator. The
//! validator is deliberately permissive about absence: an optional email
//! field that was never filled in is acceptable, so `None` and the empty
//! string both validate. Only a present, non-empty value is matched against
//! the address grammar.
//!
//! License: MIT OR Apache-2.0

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

/// A single character permitted in a local-part or domain label.
///
/// Excludes control characters (0x00-0x1F), whitespace, and the literal
/// characters `( ) < > @ , ; : \ " . [ ] ^`.
const ATOM: &str = r#"[^\x00-\x1F^()<>@,;:\\".\[\]\s]"#;

/// A bracketed IPv4-shaped literal. Digit groups are 1-3 digits wide and are
/// not range-checked against 0-255.
const IP_DOMAIN: &str = r"\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\]";

/// The composed address pattern, built once per process.
///
/// The shape is `^local@(domain|ip-literal)$`: the alternation sits in a
/// single group directly after the `@`, so the IP-literal branch is only
/// reachable immediately after `@local`. A bare bracketed IP with no
/// `local@` prefix does not match. This grouping is load-bearing for
/// existing callers; keep it as written.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let atom_sequence = format!(r"{}+(\.{}+)*", ATOM, ATOM);
    let pattern = format!("^{}@({}|{})$", atom_sequence, atom_sequence, IP_DOMAIN);
    RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .expect("email pattern is a valid regex")
});

/// Validates email-address syntax.
///
/// `None` and the empty string are treated as valid: absence of a value is
/// accepted at this layer. Any other input must match the address pattern in
/// full. Never fails for any input.
pub fn is_valid_email(email: Option<&str>) -> bool {
    let Some(address) = email else {
        return true;
    };
    if address.is_empty() {
        return true;
    }
    EMAIL_PATTERN.is_match(address)
}
