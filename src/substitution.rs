//! Word-by-word rewriting driven by a [`RuleSet`](crate::rules::RuleSet).
//!
//! A line is split into word tokens and pass-through runs, every word is
//! resolved through the rule chain, the replacement takes on a case style
//! derived from the original word, and the pieces are joined back together.

pub mod case;
pub mod engine;
pub mod tokenizer;

// Re-export commonly used types
pub use case::match_case;
pub use engine::{RewrittenLine, SubstitutionEngine};
pub use tokenizer::{Token, TokenKind, WordTokenizer};
