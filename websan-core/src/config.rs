//! Configuration management for `websan-core`.
//!
//! This module defines the data structures for filter rules and handles
//! loading them from YAML, validating them, and merging user-supplied rule
//! files over the built-in defaults.
//!
//! Unlike a keyed rule map, a [`FilterConfig`] holds its rules as an ordered
//! sequence. Order is part of the contract: rules are applied one after
//! another and each rule's output is the next rule's input.
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use log::{debug, info, warn};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Maximum allowed length for a regex pattern string.
pub const MAX_PATTERN_LENGTH: usize = 500;

/// Represents a single find-and-replace filter rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct FilterRule {
    /// Unique identifier for the rule (e.g., "double_quote").
    pub name: String,
    /// Human-readable description of what the rule targets.
    pub description: Option<String>,
    /// The regex pattern string.
    pub pattern: String,
    /// The replacement text. May reference capture groups as `${n}`.
    pub replace_with: String,
    /// Category grouping: "quotes", "angle_brackets" or "script".
    pub category: String,
    /// If true, the pattern matches case-insensitively.
    pub case_insensitive: bool,
    /// Explicit override for enabling/disabling the rule.
    pub enabled: Option<bool>,
}

impl Default for FilterRule {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: None,
            pattern: String::new(),
            replace_with: String::new(),
            category: "script".to_string(),
            case_insensitive: false,
            enabled: None,
        }
    }
}

/// The top-level configuration: an ordered sequence of filter rules.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq, Hash)]
pub struct FilterConfig {
    pub rules: Vec<FilterRule>,
}

/// A per-rule entry in the filter summary returned alongside filtered output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSummaryItem {
    pub rule_name: String,
    pub category: String,
    pub occurrences: usize,
}

impl FilterConfig {
    /// Loads filter rules from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading custom rules from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: FilterConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        validate_rules(&config.rules)?;
        info!("Loaded {} rules from file {}.", config.rules.len(), path.display());

        Ok(config)
    }

    /// Loads the built-in filter rules from the embedded configuration.
    pub fn load_default_rules() -> Result<Self> {
        debug!("Loading default rules from embedded string...");
        let default_yaml = include_str!("../config/default_rules.yaml");
        let config: FilterConfig = serde_yml::from_str(default_yaml)
            .context("Failed to parse default rules")?;

        debug!("Loaded {} default rules.", config.rules.len());
        Ok(config)
    }

    /// Removes the named rules from the sequence, warning on unknown names.
    pub fn set_disabled_rules(&mut self, disable_rules: &[String]) {
        let disable_set: HashSet<&str> = disable_rules.iter().map(String::as_str).collect();
        let all_rule_names: HashSet<&str> = self.rules.iter().map(|r| r.name.as_str()).collect();

        for rule_name in disable_set.difference(&all_rule_names) {
            warn!("Rule '{}' in `disable_rules` list does not exist.", rule_name);
        }

        self.rules.retain(|rule| !disable_set.contains(rule.name.as_str()));
        debug!("Active rules after filtering: {}", self.rules.len());
    }
}

/// Merges user-defined rules over the defaults, preserving rule order.
///
/// A user rule whose name matches a default replaces that rule in place;
/// user rules with new names are appended after the defaults. Application
/// order is part of the filter contract, so the merge never reorders the
/// default sequence.
pub fn merge_rules(default_config: FilterConfig, user_config: Option<FilterConfig>) -> FilterConfig {
    let mut final_rules = default_config.rules;

    if let Some(user_cfg) = user_config {
        debug!("User config provided. Merging {} user rules.", user_cfg.rules.len());
        for user_rule in user_cfg.rules {
            match final_rules.iter_mut().find(|r| r.name == user_rule.name) {
                Some(existing) => *existing = user_rule,
                None => final_rules.push(user_rule),
            }
        }
    }

    debug!("Final total rules after merge: {}", final_rules.len());
    FilterConfig { rules: final_rules }
}

/// Validates rule integrity (names, regex compilation, capture groups).
pub fn validate_rules(rules: &[FilterRule]) -> Result<()> {
    let mut rule_names = HashSet::new();
    let mut errors = Vec::new();
    // Accepts both `$1` and `${1}` replacement spellings.
    let capture_group_regex = Regex::new(r"\$\{?(\d+)\}?").unwrap();

    for rule in rules {
        if rule.name.is_empty() {
            errors.push("A rule has an empty `name` field.".to_string());
        } else if !rule_names.insert(rule.name.clone()) {
            errors.push(format!("Duplicate rule name found: '{}'.", rule.name));
        }

        if rule.pattern.is_empty() {
            errors.push(format!("Rule '{}' has an empty `pattern` field.", rule.name));
            continue;
        }

        if rule.pattern.len() > MAX_PATTERN_LENGTH {
            errors.push(format!(
                "Rule '{}': pattern length ({}) exceeds maximum allowed ({}).",
                rule.name,
                rule.pattern.len(),
                MAX_PATTERN_LENGTH
            ));
            continue;
        }

        if let Err(e) = Regex::new(&rule.pattern) {
            errors.push(format!("Rule '{}' has an invalid regex pattern: {}", rule.name, e));
            continue;
        }

        let mut group_count = 0;
        let mut is_escaped = false;
        for c in rule.pattern.chars() {
            match c {
                '\\' => is_escaped = !is_escaped,
                '(' if !is_escaped => group_count += 1,
                _ => is_escaped = false,
            }
        }

        for cap in capture_group_regex.captures_iter(&rule.replace_with) {
            if let Some(group_num_str) = cap.get(1) {
                if let Ok(group_num) = group_num_str.as_str().parse::<usize>() {
                    if group_num > group_count {
                        errors.push(format!(
                            "Rule '{}': replacement references non-existent capture group '${{{}}}'.",
                            rule.name, group_num
                        ));
                    }
                }
            }
        }
    }

    if !errors.is_empty() {
        let full_error_message = format!("Rule validation failed:\n{}", errors.join("\n"));
        Err(anyhow!(full_error_message))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(name: &str, pattern: &str, replace_with: &str) -> FilterRule {
        FilterRule {
            name: name.to_string(),
            pattern: pattern.to_string(),
            replace_with: replace_with.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn validate_rejects_duplicate_names() {
        let rules = vec![rule("a", "x", "y"), rule("a", "x", "y")];
        assert!(validate_rules(&rules).is_err());
    }

    #[test]
    fn validate_rejects_bad_capture_reference() {
        let rules = vec![rule("a", "ab(c)", "${2}")];
        assert!(validate_rules(&rules).is_err());
    }

    #[test]
    fn validate_accepts_both_reference_spellings() {
        let rules = vec![rule("a", "ab(c)", "$1"), rule("b", "ab(c)", "${1}x")];
        assert!(validate_rules(&rules).is_ok());
    }

    #[test]
    fn merge_preserves_default_order() {
        let default_config = FilterConfig {
            rules: vec![rule("a", "a", "1"), rule("b", "b", "2"), rule("c", "c", "3")],
        };
        let user_config = FilterConfig {
            rules: vec![rule("b", "B", "override"), rule("d", "d", "4")],
        };

        let merged = merge_rules(default_config, Some(user_config));
        let names: Vec<&str> = merged.rules.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c", "d"]);
        assert_eq!(merged.rules[1].pattern, "B");
    }
}
