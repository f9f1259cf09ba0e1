//! compiler.rs - Manages the compilation and caching of filter rules.
//!
//! This module converts a [`FilterConfig`] into [`CompiledRules`] optimized
//! for repeated application, using a global, thread-safe cache to avoid
//! redundant compilation of identical configs.
//!
//! License: MIT OR Apache-2.0

use anyhow::Result;
use lazy_static::lazy_static;
use log::{debug, warn};
use regex::{Regex, RegexBuilder};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, RwLock};

use crate::config::{FilterConfig, FilterRule, MAX_PATTERN_LENGTH};
use crate::errors::WebsanError;

/// Represents a single compiled filter rule.
#[derive(Debug)]
pub struct CompiledRule {
    /// The compiled regular expression used for matching.
    pub regex: Regex,
    /// The replacement text, with `${n}` capture-group references intact.
    pub replace_with: String,
    /// The unique name of the filter rule.
    pub name: String,
    /// The category the rule belongs to.
    pub category: String,
}

/// An ordered collection of compiled rules ready for application.
#[derive(Debug)]
pub struct CompiledRules {
    pub rules: Vec<CompiledRule>,
}

lazy_static! {
    /// A thread-safe, global cache for compiled rules, keyed by config hash.
    static ref COMPILED_RULES_CACHE: RwLock<HashMap<u64, Arc<CompiledRules>>> =
        RwLock::new(HashMap::new());
}

/// Hashes the `FilterConfig` to create a stable cache key.
///
/// Rules are hashed in sequence order: two configs holding the same rules in
/// a different order are different configs, because application order
/// changes the output.
fn hash_config(config: &FilterConfig) -> u64 {
    let mut hasher = DefaultHasher::new();
    config.rules.hash(&mut hasher);
    hasher.finish()
}

/// Compiles a list of `FilterRule`s into `CompiledRules`, preserving order.
///
/// Rules explicitly disabled via `enabled: false` are skipped. Any
/// compilation failures are collected and reported together.
pub fn compile_rules(rules_to_compile: Vec<FilterRule>) -> Result<CompiledRules, WebsanError> {
    debug!("Starting compilation of {} rules.", rules_to_compile.len());

    let mut compiled_rules = Vec::new();
    let mut compilation_errors = Vec::new();

    for rule in rules_to_compile {
        if let Some(false) = rule.enabled {
            warn!("Skipping rule '{}' because it is disabled.", &rule.name);
            continue;
        }

        if rule.pattern.len() > MAX_PATTERN_LENGTH {
            compilation_errors.push(WebsanError::PatternLengthExceeded(
                rule.name,
                rule.pattern.len(),
                MAX_PATTERN_LENGTH,
            ));
            continue;
        }

        let regex_result = RegexBuilder::new(&rule.pattern)
            .case_insensitive(rule.case_insensitive)
            .size_limit(10 * (1 << 20)) // 10 MB limit for compiled regex
            .build();

        match regex_result {
            Ok(regex) => {
                debug!("Rule '{}' compiled successfully.", &rule.name);
                compiled_rules.push(CompiledRule {
                    regex,
                    replace_with: rule.replace_with,
                    name: rule.name,
                    category: rule.category,
                });
            }
            Err(e) => {
                compilation_errors.push(WebsanError::RuleCompilationError(rule.name, e));
            }
        }
    }

    if !compilation_errors.is_empty() {
        let error_message = compilation_errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<String>>()
            .join("\n");
        Err(WebsanError::Fatal(format!(
            "Failed to compile {} rule(s):\n{}",
            compilation_errors.len(),
            error_message
        )))
    } else {
        debug!("Finished compiling rules. Total compiled: {}.", compiled_rules.len());
        Ok(CompiledRules { rules: compiled_rules })
    }
}

/// Gets a `CompiledRules` instance from the cache or compiles them if absent.
///
/// Returns an `Arc` to the compiled rules, allowing cheap sharing between
/// engines and threads.
pub fn get_or_compile_rules(config: &FilterConfig) -> Result<Arc<CompiledRules>> {
    let cache_key = hash_config(config);

    {
        let cache = COMPILED_RULES_CACHE.read().unwrap();
        if let Some(rules) = cache.get(&cache_key) {
            debug!("Serving compiled rules from cache for key: {}", &cache_key);
            return Ok(Arc::clone(rules));
        }
    } // Read lock is released here.

    debug!("Compiled rules not found in cache. Compiling now.");
    let compiled = compile_rules(config.rules.clone())?;
    let compiled_arc = Arc::new(compiled);

    COMPILED_RULES_CACHE
        .write()
        .unwrap()
        .insert(cache_key, Arc::clone(&compiled_arc));

    Ok(compiled_arc)
}
