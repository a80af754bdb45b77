//! Memoized case-insensitive suffix patterns.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use regex::Regex;
use tracing::{debug, trace};

use super::table::SuffixTable;
use crate::error::Result;

/// Cache of compiled abbreviated-number grammars, one per suffix table.
///
/// Entries are keyed by table content, so equal tables built separately
/// share one compiled pattern. Compiling the same table twice yields equal
/// patterns, so population order does not matter.
#[derive(Debug, Default)]
pub struct PatternCache {
    patterns: Mutex<HashMap<Vec<String>, Arc<Regex>>>,
}

impl PatternCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compiled grammar for `table`, built on first use.
    ///
    /// The pattern matches a whole numeral (`[0-9,.]+`, group 1) followed by
    /// an optional tag from `table` in any letter case (group 2).
    ///
    /// # Errors
    ///
    /// Returns [`crate::NumTextError::Pattern`] if the regex engine rejects
    /// the generated pattern.
    pub fn get_or_compile(&self, table: &SuffixTable) -> Result<Arc<Regex>> {
        let mut patterns = self.patterns.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(regex) = patterns.get(table.tags()) {
            trace!(tiers = table.len(), "suffix pattern cache hit");
            return Ok(Arc::clone(regex));
        }

        let pattern = format!(r"^([0-9,.]+)({})?$", case_insensitive_alternation(table));
        let regex = Arc::new(Regex::new(&pattern)?);
        debug!(tiers = table.len(), pattern_len = pattern.len(), "compiled suffix pattern");
        patterns.insert(table.tags().to_vec(), Arc::clone(&regex));
        Ok(regex)
    }

    /// Whether a pattern for `table` is already compiled.
    pub fn contains(&self, table: &SuffixTable) -> bool {
        self.patterns
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(table.tags())
    }

    /// Number of distinct tables with a compiled pattern.
    pub fn len(&self) -> usize {
        self.patterns
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Alternation of every tag with each letter widened to `[Xx]`.
///
/// `["K", "Qd"]` becomes `[Kk]|[Qq][Dd]`.
pub fn case_insensitive_alternation(table: &SuffixTable) -> String {
    table
        .iter()
        .map(|tag| {
            tag.chars()
                .map(|c| {
                    if c.is_ascii_alphabetic() {
                        format!("[{}{}]", c.to_ascii_uppercase(), c.to_ascii_lowercase())
                    } else {
                        regex::escape(&c.to_string())
                    }
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("|")
}
