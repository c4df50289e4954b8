//! Text helpers shared by rule loading and rewriting.

use std::borrow::Cow;
use std::io::BufRead;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{ReplacerError, Result};

/// Strip leading and trailing characters at or below U+0020, which covers
/// ASCII control characters, together with any Unicode whitespace.
///
/// ```
/// use word_replacer::util::trim_text;
///
/// assert_eq!(trim_text("\u{1} cat\t\r"), "cat");
/// assert_eq!(trim_text("\u{3000}dog\u{a0}"), "dog");
/// ```
pub fn trim_text(text: &str) -> &str {
    text.trim_matches(|c: char| c <= ' ' || c.is_whitespace())
}

/// Iterator over the lines of a reader, decoding each line as UTF-8 with
/// invalid sequences replaced by U+FFFD.
///
/// `\n` and `\r\n` terminators are removed. Read failures are reported as
/// [`ReplacerError::Read`] naming `path`, after which the iterator is done.
#[derive(Debug)]
pub struct LossyLines<R> {
    reader: R,
    path: PathBuf,
    buf: Vec<u8>,
    line_number: usize,
    failed: bool,
}

impl<R: BufRead> LossyLines<R> {
    pub fn new<P: AsRef<Path>>(reader: R, path: P) -> Self {
        LossyLines {
            reader,
            path: path.as_ref().to_path_buf(),
            buf: Vec::new(),
            line_number: 0,
            failed: false,
        }
    }
}

impl<R: BufRead> Iterator for LossyLines<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                self.line_number += 1;
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                    if self.buf.last() == Some(&b'\r') {
                        self.buf.pop();
                    }
                }
                let line = match String::from_utf8_lossy(&self.buf) {
                    Cow::Borrowed(text) => text.to_string(),
                    Cow::Owned(text) => {
                        debug!(
                            "{}:{}: invalid UTF-8 replaced",
                            self.path.display(),
                            self.line_number
                        );
                        text
                    }
                };
                Some(Ok(line))
            }
            Err(e) => {
                self.failed = true;
                Some(Err(ReplacerError::read(&self.path, e)))
            }
        }
    }
}
