//! Configuration types for map backends.

use std::fmt;

use crate::error::{ReplacerError, Result};

/// Default number of buckets a hash map starts with.
pub const DEFAULT_INITIAL_BUCKETS: usize = 16;

/// Default ratio of entries to buckets above which a hash map grows.
pub const DEFAULT_MAX_LOAD_FACTOR: f64 = 0.75;

/// Names of the available map backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MapKind {
    /// Unbalanced binary search tree
    #[default]
    Bst,
    /// Red-black tree
    Rbt,
    /// Chained hash table
    Hash,
}

impl MapKind {
    /// All backends, in the order they are listed to users.
    pub const ALL: [MapKind; 3] = [MapKind::Bst, MapKind::Rbt, MapKind::Hash];

    /// Get the name of this backend.
    pub fn name(&self) -> &'static str {
        match self {
            MapKind::Bst => "bst",
            MapKind::Rbt => "rbt",
            MapKind::Hash => "hash",
        }
    }

    /// Parse a backend name, ignoring case.
    pub fn parse_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "bst" => Ok(MapKind::Bst),
            "rbt" => Ok(MapKind::Rbt),
            "hash" => Ok(MapKind::Hash),
            _ => Err(ReplacerError::config(format!(
                "Invalid data structure '{s}' received."
            ))),
        }
    }
}

impl fmt::Display for MapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Settings for the chained hash map backend.
#[derive(Debug, Clone, PartialEq)]
pub struct HashMapConfig {
    /// Bucket count before the first resize.
    pub initial_buckets: usize,

    /// Resize once `len / buckets` exceeds this value.
    pub max_load_factor: f64,
}

impl Default for HashMapConfig {
    fn default() -> Self {
        HashMapConfig {
            initial_buckets: DEFAULT_INITIAL_BUCKETS,
            max_load_factor: DEFAULT_MAX_LOAD_FACTOR,
        }
    }
}

impl HashMapConfig {
    /// Check that the settings describe a usable table.
    pub fn validate(&self) -> Result<()> {
        if self.initial_buckets == 0 {
            return Err(ReplacerError::config(
                "hash map needs at least one initial bucket",
            ));
        }
        if !self.max_load_factor.is_finite() || self.max_load_factor <= 0.0 {
            return Err(ReplacerError::config(format!(
                "hash map load factor must be a positive number, got {}",
                self.max_load_factor
            )));
        }
        Ok(())
    }
}

/// Backend selection together with backend-specific settings.
#[derive(Debug, Clone, PartialEq)]
pub enum MapConfig {
    /// Binary search tree map.
    Bst,
    /// Red-black tree map.
    Rbt,
    /// Chained hash map.
    Hash(HashMapConfig),
}

impl Default for MapConfig {
    fn default() -> Self {
        MapConfig::from_kind(MapKind::default())
    }
}

impl MapConfig {
    /// Configuration for `kind` with default settings.
    pub fn from_kind(kind: MapKind) -> Self {
        match kind {
            MapKind::Bst => MapConfig::Bst,
            MapKind::Rbt => MapConfig::Rbt,
            MapKind::Hash => MapConfig::Hash(HashMapConfig::default()),
        }
    }
}
