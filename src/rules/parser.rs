//! Parsing of `key->value` rule lines.

use std::fmt;

use crate::util::trim_text;

/// Literal separating the source word from its replacement.
pub const RULE_SEPARATOR: &str = "->";

/// A single replacement rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rule {
    /// Word to be replaced.
    pub source: String,

    /// Word it is replaced with.
    pub target: String,
}

impl Rule {
    /// Create a new rule.
    pub fn new<S: Into<String>, T: Into<String>>(source: S, target: T) -> Self {
        Rule {
            source: source.into(),
            target: target.into(),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{RULE_SEPARATOR}{}", self.source, self.target)
    }
}

/// Parse a `key->value` line.
///
/// Both sides are trimmed. Returns `None` when the line does not contain
/// exactly one separator or when either side is empty after trimming.
///
/// # Examples
///
/// ```
/// use word_replacer::rules::{Rule, parse_rule_line};
///
/// assert_eq!(parse_rule_line("  cat -> dog "), Some(Rule::new("cat", "dog")));
/// assert_eq!(parse_rule_line("cat -> dog -> wolf"), None);
/// assert_eq!(parse_rule_line("just a sentence"), None);
/// ```
pub fn parse_rule_line(line: &str) -> Option<Rule> {
    let mut parts = line.split(RULE_SEPARATOR);
    let source = trim_text(parts.next()?);
    let target = trim_text(parts.next()?);
    if parts.next().is_some() || source.is_empty() || target.is_empty() {
        return None;
    }
    Some(Rule::new(source, target))
}
