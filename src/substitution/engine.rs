//! Line rewriting engine.

use crate::rules::RuleSet;
use crate::substitution::case::match_case;
use crate::substitution::tokenizer::WordTokenizer;
use crate::util::trim_text;

/// A rewritten line together with per-line counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewrittenLine {
    /// The rewritten, trimmed text.
    pub text: String,

    /// Word tokens seen in the line.
    pub words: usize,

    /// Word tokens that had a replacement.
    pub replaced: usize,
}

/// Rewrites text using a loaded rule set.
///
/// The engine only borrows the rules, so one rule set can serve any number
/// of lines.
///
/// # Examples
///
/// ```
/// use word_replacer::map::MapConfig;
/// use word_replacer::rules::RuleLoader;
/// use word_replacer::substitution::SubstitutionEngine;
///
/// # fn main() -> word_replacer::error::Result<()> {
/// let (rules, _) = RuleLoader::new(MapConfig::Rbt).load_lines(["cat->dog", "dog->wolf"])?;
/// let engine = SubstitutionEngine::new(&rules);
///
/// assert_eq!(engine.rewrite_line("The cat sleeps"), "The wolf sleeps");
/// assert_eq!(engine.rewrite_line("CAT"), "WOLF");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SubstitutionEngine<'a> {
    rules: &'a RuleSet,
    tokenizer: WordTokenizer,
}

impl<'a> SubstitutionEngine<'a> {
    /// Create an engine over `rules`.
    pub fn new(rules: &'a RuleSet) -> Self {
        SubstitutionEngine {
            rules,
            tokenizer: WordTokenizer::new(),
        }
    }

    /// Final value of the replacement chain starting at `word`, or `None`
    /// when `word` has no rule.
    ///
    /// `word` is looked up as written first, then lowercased, so `CAT` and
    /// `Cat` find a `cat` rule. Later steps of the chain use stored values
    /// as they are. Terminates because a [`RuleSet`] never holds a cycle.
    pub fn resolve(&self, word: &str) -> Option<&'a str> {
        let rules = self.rules;
        let mut replacement = rules.get(word).or_else(|| {
            let folded = word.to_lowercase();
            (folded != word).then(|| rules.get(&folded)).flatten()
        })?;
        while let Some(next) = rules.get(replacement) {
            replacement = next;
        }
        Some(replacement)
    }

    /// Replacement for a single word token, case-matched to it.
    pub fn replace_word(&self, word: &str) -> Option<String> {
        self.resolve(word)
            .map(|replacement| match_case(word, replacement))
    }

    /// Rewrite one line, returning the trimmed result.
    pub fn rewrite_line(&self, line: &str) -> String {
        self.rewrite(line).text
    }

    /// Rewrite one line and count the words seen and replaced.
    pub fn rewrite(&self, line: &str) -> RewrittenLine {
        let mut output = String::with_capacity(line.len());
        let mut words = 0;
        let mut replaced = 0;

        for token in self.tokenizer.tokenize(line) {
            if !token.is_word() {
                output.push_str(token.text);
                continue;
            }
            words += 1;
            match self.replace_word(token.text) {
                Some(replacement) => {
                    replaced += 1;
                    output.push_str(&replacement);
                }
                None => output.push_str(token.text),
            }
        }

        RewrittenLine {
            text: trim_text(&output).to_string(),
            words,
            replaced,
        }
    }
}
