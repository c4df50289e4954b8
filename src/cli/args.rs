//! Command line argument parsing for word-replacer using clap.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::error::Result;
use crate::map::config::{DEFAULT_INITIAL_BUCKETS, DEFAULT_MAX_LOAD_FACTOR};
use crate::map::{HashMapConfig, MapConfig, MapKind};

/// word-replacer - global search and replace driven by a rules file
#[derive(Parser, Debug, Clone)]
#[command(name = "word-replacer")]
#[command(about = "Replace words in a text file using transitive key->value rules")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct ReplacerArgs {
    /// Text file to rewrite
    #[arg(value_name = "INPUT_FILE")]
    pub input_file: PathBuf,

    /// File of `key->value` replacement rules
    #[arg(value_name = "RULES_FILE")]
    pub rules_file: PathBuf,

    /// Map backend holding the rules: bst, rbt or hash (any case)
    #[arg(value_name = "BACKEND")]
    pub backend: String,

    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Print a run summary to stderr after rewriting
    #[arg(long)]
    pub stats: bool,

    /// Summary format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Initial bucket count of the hash backend
    #[arg(long, env = "WORD_REPLACER_INITIAL_BUCKETS", default_value_t = DEFAULT_INITIAL_BUCKETS)]
    pub initial_buckets: usize,

    /// Load factor above which the hash backend doubles its buckets
    #[arg(long, env = "WORD_REPLACER_LOAD_FACTOR", default_value_t = DEFAULT_MAX_LOAD_FACTOR)]
    pub load_factor: f64,
}

impl ReplacerArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Map configuration selected by the backend argument and hash settings.
    pub fn map_config(&self) -> Result<MapConfig> {
        let config = match MapKind::parse_str(&self.backend)? {
            MapKind::Hash => {
                let hash_config = HashMapConfig {
                    initial_buckets: self.initial_buckets,
                    max_load_factor: self.load_factor,
                };
                hash_config.validate()?;
                MapConfig::Hash(hash_config)
            }
            kind => MapConfig::from_kind(kind),
        };
        Ok(config)
    }
}

/// Output formats for the run summary
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
