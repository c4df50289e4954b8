//! Map abstraction trait and common types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A string-to-string associative container holding replacement rules.
///
/// This provides a pluggable interface over the tree and hash backends.
/// `get` never changes what later lookups observe, whatever the backend does
/// internally.
pub trait WordMap: Send + Sync + fmt::Debug {
    /// Insert a new entry, or overwrite the value of an existing key.
    fn put(&mut self, key: String, value: String);

    /// Look up the value stored for `key`.
    fn get(&self, key: &str) -> Option<&str>;

    /// Number of entries in the map.
    fn len(&self) -> usize;

    /// Whether the map holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the name of this backend (for logging and statistics).
    fn name(&self) -> &'static str;

    /// Structural statistics used to compare backends.
    fn stats(&self) -> MapStats;
}

/// Structural statistics of a map backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapStats {
    /// Backend name.
    pub backend: String,

    /// Number of entries.
    pub entries: usize,

    /// Tree height in nodes (tree backends only).
    pub height: Option<usize>,

    /// Current bucket count (hash backend only).
    pub buckets: Option<usize>,

    /// Length of the longest bucket chain (hash backend only).
    pub longest_chain: Option<usize>,
}

impl MapStats {
    /// Statistics for a tree backend.
    pub fn tree(backend: &str, entries: usize, height: usize) -> Self {
        MapStats {
            backend: backend.to_string(),
            entries,
            height: Some(height),
            buckets: None,
            longest_chain: None,
        }
    }

    /// Statistics for a hash backend.
    pub fn hash(backend: &str, entries: usize, buckets: usize, longest_chain: usize) -> Self {
        MapStats {
            backend: backend.to_string(),
            entries,
            height: None,
            buckets: Some(buckets),
            longest_chain: Some(longest_chain),
        }
    }
}

impl fmt::Display for MapStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} entries", self.backend, self.entries)?;
        if let Some(height) = self.height {
            write!(f, ", height {height}")?;
        }
        if let (Some(buckets), Some(chain)) = (self.buckets, self.longest_chain) {
            write!(f, ", {buckets} buckets, longest chain {chain}")?;
        }
        Ok(())
    }
}
