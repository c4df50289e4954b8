//! Replacement rules: parsing, the acyclic rule set and the loader.
//!
//! A rule `key->value` is a directed edge in the rule graph. [`RuleSet`] only
//! accepts rules that keep this graph acyclic, which is what lets every
//! lookup chain terminate without tracking visited words.

pub mod loader;
pub mod parser;
pub mod rule_set;

// Re-export commonly used types
pub use loader::{LoadReport, RuleLoader};
pub use parser::{RULE_SEPARATOR, Rule, parse_rule_line};
pub use rule_set::{RuleSet, would_create_cycle};
