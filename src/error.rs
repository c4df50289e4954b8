//! Error types for word-replacer.
//!
//! Every fallible operation in the crate returns [`Result`], whose error side
//! is the [`ReplacerError`] enum. All errors are terminal for a run: the CLI
//! reports them and exits with a nonzero status.
//!
//! # Examples
//!
//! ```
//! use word_replacer::error::{ReplacerError, Result};
//!
//! fn pick_backend(name: &str) -> Result<()> {
//!     Err(ReplacerError::config(format!("Invalid data structure '{name}' received.")))
//! }
//!
//! match pick_backend("splay") {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The main error type for word-replacer operations.
#[derive(Error, Debug)]
pub enum ReplacerError {
    /// Invalid backend name, invalid map settings or a malformed invocation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A rule would close a cycle in the rule graph.
    #[error("Cycle detected when trying to add replacement rule: {key}->{value}")]
    Cycle { key: String, value: String },

    /// A file could not be opened.
    #[error("Cannot open file '{}' for input: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A file was opened but reading from it failed.
    #[error("An I/O error occurred reading '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Other I/O errors (writing to the output sink, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with ReplacerError.
pub type Result<T> = std::result::Result<T, ReplacerError>;

impl ReplacerError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        ReplacerError::Config(msg.into())
    }

    /// Create a new cycle error for the rule `key->value`.
    pub fn cycle<K: Into<String>, V: Into<String>>(key: K, value: V) -> Self {
        ReplacerError::Cycle {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create a new error for a file that failed to open.
    pub fn open<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        ReplacerError::Open {
            path: path.into(),
            source,
        }
    }

    /// Create a new error for a file that failed while being read.
    pub fn read<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        ReplacerError::Read {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = ReplacerError::config("Invalid data structure 'avl' received.");
        assert_eq!(
            error.to_string(),
            "Configuration error: Invalid data structure 'avl' received."
        );

        let error = ReplacerError::cycle("dog", "cat");
        assert_eq!(
            error.to_string(),
            "Cycle detected when trying to add replacement rule: dog->cat"
        );
    }

    #[test]
    fn test_file_errors_name_the_path() {
        let error = ReplacerError::open(
            "missing.txt",
            io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        );
        assert_eq!(
            error.to_string(),
            "Cannot open file 'missing.txt' for input: No such file or directory"
        );

        let error = ReplacerError::read(
            "rules.txt",
            io::Error::new(io::ErrorKind::InvalidData, "stream did not contain valid UTF-8"),
        );
        assert!(error.to_string().starts_with("An I/O error occurred reading 'rules.txt'"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
        let replacer_error = ReplacerError::from(io_error);

        match replacer_error {
            ReplacerError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
