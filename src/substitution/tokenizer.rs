//! Two-level word tokenizer.
//!
//! The outer pass splits a line into maximal letter-or-digit runs and
//! everything else. The inner pass splits each letter-or-digit run into
//! maximal letter runs (words) and the characters between them (digits).
//! Only words are eligible for replacement; every other character is kept
//! verbatim at its position.
//!
//! ```text
//! Input: "cat2dog, ok!"
//!
//!   outer: [cat2dog] [, ] [ok] [!]
//!   inner: [cat][2][dog]  [ok]
//!
//! Tokens: Word("cat") Pass("2") Word("dog") Pass(", ") Word("ok") Pass("!")
//! ```
//!
//! # Examples
//!
//! ```
//! use word_replacer::substitution::{TokenKind, WordTokenizer};
//!
//! let tokens = WordTokenizer::new().tokenize("cat2dog!");
//! let words: Vec<_> = tokens
//!     .iter()
//!     .filter(|t| t.kind == TokenKind::Word)
//!     .map(|t| t.text)
//!     .collect();
//!
//! assert_eq!(words, vec!["cat", "dog"]);
//! ```

use std::ops::Range;

/// Classification of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A maximal run of letters, eligible for replacement.
    Word,
    /// Anything else: whitespace, punctuation, digits.
    PassThrough,
}

/// A slice of the input line with its classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// The token text, borrowed from the input.
    pub text: &'a str,

    /// Whether the token is a word or passed through.
    pub kind: TokenKind,

    /// Byte offset where this token starts in the input.
    pub start_offset: usize,

    /// Byte offset where this token ends in the input.
    pub end_offset: usize,
}

impl<'a> Token<'a> {
    fn new(input: &'a str, kind: TokenKind, range: Range<usize>) -> Self {
        Token {
            text: &input[range.clone()],
            kind,
            start_offset: range.start,
            end_offset: range.end,
        }
    }

    /// Whether this token is a replaceable word.
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }
}

/// Tokenizer splitting lines by letter and digit classification.
#[derive(Clone, Debug, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    /// Create a new word tokenizer.
    pub fn new() -> Self {
        WordTokenizer
    }

    /// Split `text` into tokens. Concatenating the token texts in order
    /// reproduces `text` exactly.
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<Token<'a>> {
        let mut tokens = Vec::new();

        for (is_alnum, unit) in split_runs(text, 0, char::is_alphanumeric) {
            if !is_alnum {
                tokens.push(Token::new(text, TokenKind::PassThrough, unit));
                continue;
            }
            let start = unit.start;
            for (is_letter, run) in split_runs(&text[unit], start, char::is_alphabetic) {
                let kind = if is_letter {
                    TokenKind::Word
                } else {
                    TokenKind::PassThrough
                };
                tokens.push(Token::new(text, kind, run));
            }
        }

        tokens
    }
}

/// Maximal runs of characters on which `predicate` agrees, as byte ranges
/// shifted by `base`.
fn split_runs(text: &str, base: usize, predicate: fn(char) -> bool) -> Vec<(bool, Range<usize>)> {
    let mut runs = Vec::new();
    let mut current: Option<(bool, usize)> = None;

    for (offset, ch) in text.char_indices() {
        let class = predicate(ch);
        match current {
            Some((run_class, _)) if run_class == class => {}
            Some((run_class, start)) => {
                runs.push((run_class, base + start..base + offset));
                current = Some((class, offset));
            }
            None => current = Some((class, offset)),
        }
    }
    if let Some((run_class, start)) = current {
        runs.push((run_class, base + start..base + text.len()));
    }

    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds_and_texts(text: &str) -> Vec<(TokenKind, &str)> {
        WordTokenizer::new()
            .tokenize(text)
            .into_iter()
            .map(|t| (t.kind, t.text))
            .collect()
    }

    #[test]
    fn test_words_and_punctuation() {
        use TokenKind::*;

        assert_eq!(
            kinds_and_texts("cat, dog!"),
            vec![(Word, "cat"), (PassThrough, ", "), (Word, "dog"), (PassThrough, "!")]
        );
    }

    #[test]
    fn test_digits_split_words() {
        use TokenKind::*;

        assert_eq!(
            kinds_and_texts("cat2dog"),
            vec![(Word, "cat"), (PassThrough, "2"), (Word, "dog")]
        );
        assert_eq!(kinds_and_texts("1984"), vec![(PassThrough, "1984")]);
    }

    #[test]
    fn test_offsets_cover_input() {
        let text = "  Héllo, wörld 42x ";
        let tokens = WordTokenizer::new().tokenize(text);

        let rebuilt: String = tokens.iter().map(|t| t.text).collect();
        assert_eq!(rebuilt, text);

        let mut expected_start = 0;
        for token in &tokens {
            assert_eq!(token.start_offset, expected_start);
            assert_eq!(&text[token.start_offset..token.end_offset], token.text);
            expected_start = token.end_offset;
        }
        assert_eq!(expected_start, text.len());

        let words: Vec<_> = tokens.iter().filter(|t| t.is_word()).map(|t| t.text).collect();
        assert_eq!(words, vec!["Héllo", "wörld", "x"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(WordTokenizer::new().tokenize("").is_empty());
    }
}
