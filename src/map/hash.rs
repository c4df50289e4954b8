//! Chained hash map with load-factor resizing.
//!
//! Keys are hashed with ahash's [`AHasher`] using its fixed default keys, so
//! bucket placement is the same from run to run. Each bucket holds a chain of
//! entries; once `len / buckets` exceeds the configured load factor the bucket
//! array doubles and every entry is rehashed into it.

use std::borrow::Borrow;
use std::fmt;
use std::hash::{BuildHasher, BuildHasherDefault, Hash};
use std::mem;

use ahash::AHasher;
use log::debug;

use crate::error::Result;
use crate::map::config::{DEFAULT_INITIAL_BUCKETS, DEFAULT_MAX_LOAD_FACTOR, HashMapConfig};
use crate::map::traits::{MapStats, WordMap};

/// Deterministic hasher builder used by default.
pub type DefaultHashBuilder = BuildHasherDefault<AHasher>;

type Bucket<K, V> = Vec<(K, V)>;

/// A hash map resolving collisions by chaining.
pub struct ChainedHashMap<K, V, S = DefaultHashBuilder> {
    buckets: Vec<Bucket<K, V>>,
    len: usize,
    max_load_factor: f64,
    hash_builder: S,
}

impl<K: Hash + Eq, V> Default for ChainedHashMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq, V> ChainedHashMap<K, V> {
    /// Create an empty map with 16 buckets and a 0.75 load factor.
    pub fn new() -> Self {
        Self::with_valid_settings(
            DEFAULT_INITIAL_BUCKETS,
            DEFAULT_MAX_LOAD_FACTOR,
            DefaultHashBuilder::default(),
        )
    }

    /// Create an empty map from validated settings.
    pub fn from_config(config: &HashMapConfig) -> Result<Self> {
        Self::with_hasher(config, DefaultHashBuilder::default())
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> ChainedHashMap<K, V, S> {
    /// Create an empty map using `hash_builder` for bucket placement.
    ///
    /// Fails with a configuration error for zero buckets or a load factor
    /// that is not a positive finite number.
    pub fn with_hasher(config: &HashMapConfig, hash_builder: S) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_valid_settings(
            config.initial_buckets,
            config.max_load_factor,
            hash_builder,
        ))
    }

    fn with_valid_settings(initial_buckets: usize, max_load_factor: f64, hash_builder: S) -> Self {
        ChainedHashMap {
            buckets: empty_buckets(initial_buckets),
            len: 0,
            max_load_factor,
            hash_builder,
        }
    }

    /// Insert `key -> value`, returning the previous value when the key was
    /// already present.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let index = self.bucket_index(&key);
        let bucket = &mut self.buckets[index];
        if let Some((_, existing)) = bucket.iter_mut().find(|(k, _)| *k == key) {
            return Some(mem::replace(existing, value));
        }

        bucket.push((key, value));
        self.len += 1;
        if self.load_factor() > self.max_load_factor {
            self.resize(self.buckets.len() * 2);
        }
        None
    }

    /// Look up `key` within its bucket chain.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        self.buckets[index]
            .iter()
            .find(|(k, _)| Borrow::<Q>::borrow(k) == key)
            .map(|(_, v)| v)
    }

    fn bucket_index<Q: Hash + ?Sized>(&self, key: &Q) -> usize {
        (self.hash_builder.hash_one(key) % self.buckets.len() as u64) as usize
    }

    fn resize(&mut self, bucket_count: usize) {
        let old = mem::replace(&mut self.buckets, empty_buckets(bucket_count));
        for (key, value) in old.into_iter().flatten() {
            let index = self.bucket_index(&key);
            self.buckets[index].push((key, value));
        }
        debug!("hash map grew to {bucket_count} buckets ({} entries)", self.len);
    }
}

impl<K, V, S> ChainedHashMap<K, V, S> {
    /// Number of entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current number of buckets.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Ratio of entries to buckets.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    /// Length of the longest chain.
    pub fn longest_chain(&self) -> usize {
        self.buckets.iter().map(Vec::len).max().unwrap_or(0)
    }
}

fn empty_buckets<K, V>(count: usize) -> Vec<Bucket<K, V>> {
    (0..count).map(|_| Vec::new()).collect()
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for ChainedHashMap<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainedHashMap")
            .field("len", &self.len)
            .field("buckets", &self.buckets.len())
            .field("max_load_factor", &self.max_load_factor)
            .finish()
    }
}

impl<S> WordMap for ChainedHashMap<String, String, S>
where
    S: BuildHasher + Send + Sync,
{
    fn put(&mut self, key: String, value: String) {
        ChainedHashMap::put(self, key, value);
    }

    fn get(&self, key: &str) -> Option<&str> {
        ChainedHashMap::get(self, key).map(String::as_str)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn name(&self) -> &'static str {
        "hash"
    }

    fn stats(&self) -> MapStats {
        MapStats::hash(
            WordMap::name(self),
            self.len,
            self.buckets.len(),
            self.longest_chain(),
        )
    }
}
