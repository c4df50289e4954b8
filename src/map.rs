//! Associative map backends for replacement rules.
//!
//! All backends implement the [`WordMap`] trait and have identical observable
//! key/value semantics (last `put` for a key wins). They differ only in cost
//! and internal structure:
//!
//! - [`BstMap`] - ordered binary search tree without rebalancing
//! - [`RedBlackMap`] - self-balancing red-black tree
//! - [`ChainedHashMap`] - bucketed hash table with chaining and resizing
//!
//! Backends are chosen at runtime through [`MapFactory`] and [`MapConfig`].

pub mod bst;
pub mod config;
pub mod factory;
pub mod hash;
pub mod red_black;
pub mod traits;

// Re-export commonly used types
pub use bst::BstMap;
pub use config::{HashMapConfig, MapConfig, MapKind};
pub use factory::MapFactory;
pub use hash::ChainedHashMap;
pub use red_black::RedBlackMap;
pub use traits::{MapStats, WordMap};
