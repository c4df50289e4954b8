//! The acyclic rule set.

use std::fmt;

use crate::error::{ReplacerError, Result};
use crate::map::{MapConfig, MapFactory, MapStats, WordMap};
use crate::rules::parser::Rule;

/// Whether adding `key -> value` to `map` would close a cycle.
///
/// Follows the chain `value -> map[value] -> ...` until it either reaches
/// `key` (cycle) or runs out of mappings (no cycle). `map` must already be
/// acyclic, otherwise this walk does not terminate; [`RuleSet`] guarantees
/// that for the maps it owns.
pub fn would_create_cycle(map: &dyn WordMap, key: &str, value: &str) -> bool {
    let mut current = Some(value);
    while let Some(word) = current {
        if word == key {
            return true;
        }
        current = map.get(word);
    }
    false
}

/// Replacement rules stored in a map backend.
///
/// Rules can only be added through [`RuleSet::insert`], which rejects any
/// rule that would make the rule graph cyclic.
pub struct RuleSet {
    map: Box<dyn WordMap>,
}

impl RuleSet {
    /// Create an empty rule set on a fresh backend.
    pub fn from_config(config: MapConfig) -> Result<Self> {
        Ok(RuleSet {
            map: MapFactory::create(config)?,
        })
    }

    /// Create an empty rule set on an existing backend.
    ///
    /// The map must be empty: its contents could not be checked for cycles.
    pub fn with_map(map: Box<dyn WordMap>) -> Result<Self> {
        if !map.is_empty() {
            return Err(ReplacerError::config(format!(
                "rule set needs an empty map, got {} entries",
                map.len()
            )));
        }
        Ok(RuleSet { map })
    }

    /// Add a rule, overwriting any earlier rule for the same source word.
    ///
    /// Fails with [`ReplacerError::Cycle`] and leaves the set unchanged if
    /// the rule would close a cycle.
    pub fn insert(&mut self, rule: Rule) -> Result<()> {
        if would_create_cycle(self.map.as_ref(), &rule.source, &rule.target) {
            return Err(ReplacerError::cycle(rule.source, rule.target));
        }
        self.map.put(rule.source, rule.target);
        Ok(())
    }

    /// Direct replacement for `word`, without following the chain.
    pub fn get(&self, word: &str) -> Option<&str> {
        self.map.get(word)
    }

    /// Number of distinct source words.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the set holds no rules.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Name of the backing map.
    pub fn backend(&self) -> &'static str {
        self.map.name()
    }

    /// Structural statistics of the backing map.
    pub fn stats(&self) -> MapStats {
        self.map.stats()
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSet").field("map", &self.map).finish()
    }
}
