//! # word-replacer
//!
//! Dictionary-driven word substitution over text.
//!
//! ## Features
//!
//! - `key->value` rules resolved transitively (`cat->dog`, `dog->wolf` turns
//!   `cat` into `wolf`)
//! - Cyclic rule sets rejected while loading
//! - Case style of the original word carried over to the replacement
//! - Pluggable map backends: binary search tree, red-black tree, hash table
//!
//! ## Example
//!
//! ```
//! use word_replacer::prelude::*;
//!
//! # fn main() -> word_replacer::error::Result<()> {
//! let config = MapConfig::from_kind(MapKind::parse_str("hash")?);
//! let (rules, _) = RuleLoader::new(config).load_lines(["cat->dog", "dog->wolf"])?;
//! let engine = SubstitutionEngine::new(&rules);
//!
//! assert_eq!(engine.rewrite_line("The cat, the CAT."), "The wolf, the WOLF.");
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod error;
pub mod map;
pub mod rules;
pub mod substitution;
pub mod util;

pub mod prelude {
    pub use crate::error::{ReplacerError, Result};
    pub use crate::map::{MapConfig, MapFactory, MapKind, WordMap};
    pub use crate::rules::{Rule, RuleLoader, RuleSet};
    pub use crate::substitution::SubstitutionEngine;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
