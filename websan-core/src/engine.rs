//! The sequential filter engine.
//!
//! A [`FilterEngine`] holds a compiled, ordered rule set and applies it to
//! input text. Application is chained: every rule performs a global
//! replace-all over the current working string, and the output of each rule
//! becomes the input of the next. A replacement produced by an earlier rule
//! can therefore be matched by a later rule, and escaping rules that run
//! early can keep later rules from ever matching. That chaining is the
//! contract, not an accident; see the notes in `default_rules.yaml`.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::debug;
use once_cell::sync::Lazy;
use std::sync::Arc;

use crate::compiler::{get_or_compile_rules, CompiledRules};
use crate::config::{FilterConfig, FilterSummaryItem};

/// Applies an ordered, compiled rule set to input text.
#[derive(Debug)]
pub struct FilterEngine {
    compiled_rules: Arc<CompiledRules>,
    config: FilterConfig,
}

impl FilterEngine {
    /// Builds an engine from the given configuration.
    pub fn new(config: FilterConfig) -> Result<Self> {
        let compiled_rules = get_or_compile_rules(&config)
            .context("Failed to compile filter rules for FilterEngine")?;

        Ok(Self { compiled_rules, config })
    }

    /// Builds an engine over the built-in rule set.
    pub fn with_default_rules() -> Result<Self> {
        let config = FilterConfig::load_default_rules()?;
        Self::new(config)
    }

    /// Applies every rule in sequence and reports per-rule match counts.
    ///
    /// Occurrences are counted against the working string as it stands when
    /// the rule runs, so a rule that an earlier rule starved of matches
    /// reports zero and is omitted from the summary.
    pub fn apply(&self, content: &str) -> (String, Vec<FilterSummaryItem>) {
        let mut current = content.to_string();
        let mut summary = Vec::new();

        for rule in &self.compiled_rules.rules {
            let occurrences = rule.regex.find_iter(&current).count();
            if occurrences == 0 {
                continue;
            }
            current = rule
                .regex
                .replace_all(&current, rule.replace_with.as_str())
                .into_owned();
            summary.push(FilterSummaryItem {
                rule_name: rule.name.clone(),
                category: rule.category.clone(),
                occurrences,
            });
        }

        debug!(
            "Filtered content. Original length: {}, filtered length: {}, rules fired: {}",
            content.len(),
            current.len(),
            summary.len()
        );
        (current, summary)
    }

    /// Applies every rule in sequence, discarding the summary.
    pub fn filter(&self, content: &str) -> String {
        self.apply(content).0
    }

    /// Option-aware variant of [`filter`](Self::filter): absent in, absent out.
    pub fn filter_opt(&self, content: Option<&str>) -> Option<String> {
        content.map(|c| self.filter(c))
    }

    /// Returns the engine's configuration.
    pub fn rules(&self) -> &FilterConfig {
        &self.config
    }

    /// Returns the engine's compiled rules.
    pub fn compiled_rules(&self) -> &CompiledRules {
        &self.compiled_rules
    }
}

/// Shared engine over the built-in rules, built once per process.
static DEFAULT_ENGINE: Lazy<FilterEngine> =
    Lazy::new(|| FilterEngine::with_default_rules().expect("built-in rules must compile"));

/// Neutralizes HTML/JavaScript injection in `input` using the built-in rules.
///
/// Absent input is passed through unchanged: `None` means "no value", not an
/// error. Any present string is accepted and a filtered string is returned;
/// this function never fails.
pub fn sanitize(input: Option<&str>) -> Option<String> {
    input.map(|content| DEFAULT_ENGINE.filter(content))
}
