//! Loading rule sets from text.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info};

use crate::error::{ReplacerError, Result};
use crate::map::MapConfig;
use crate::rules::parser::parse_rule_line;
use crate::rules::rule_set::RuleSet;
use crate::util::LossyLines;

/// Counts collected while loading rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Rules accepted into the set, overwrites included.
    pub rules_loaded: usize,

    /// Lines that were not a single `key->value` pair.
    pub lines_skipped: usize,
}

/// Builds a [`RuleSet`] on the configured backend from `key->value` lines.
///
/// The first rule that would close a cycle aborts the whole load; no partial
/// rule set is ever returned.
///
/// # Examples
///
/// ```
/// use word_replacer::map::MapConfig;
/// use word_replacer::rules::RuleLoader;
///
/// # fn main() -> word_replacer::error::Result<()> {
/// let loader = RuleLoader::new(MapConfig::Rbt);
/// let (rules, report) = loader.load_lines(["cat->dog", "# comment", "dog->wolf"])?;
///
/// assert_eq!(rules.get("cat"), Some("dog"));
/// assert_eq!(report.rules_loaded, 2);
/// assert_eq!(report.lines_skipped, 1);
///
/// assert!(loader.load_lines(["x->y", "y->x"]).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct RuleLoader {
    config: MapConfig,
}

impl RuleLoader {
    /// Create a loader that stores rules in the backend selected by `config`.
    pub fn new(config: MapConfig) -> Self {
        RuleLoader { config }
    }

    /// Load rules from in-memory lines.
    pub fn load_lines<I, S>(&self, lines: I) -> Result<(RuleSet, LoadReport)>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.load_fallible(lines.into_iter().map(Ok))
    }

    /// Load rules from a reader; `path` names the source in I/O errors.
    ///
    /// Invalid UTF-8 is replaced rather than rejected.
    pub fn load_reader<R: BufRead>(&self, reader: R, path: &Path) -> Result<(RuleSet, LoadReport)> {
        self.load_fallible(LossyLines::new(reader, path))
    }

    /// Open and load a rules file.
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<(RuleSet, LoadReport)> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| ReplacerError::open(path, e))?;
        info!("loading rules from {}", path.display());
        self.load_reader(BufReader::new(file), path)
    }

    fn load_fallible<I, S>(&self, lines: I) -> Result<(RuleSet, LoadReport)>
    where
        I: Iterator<Item = Result<S>>,
        S: AsRef<str>,
    {
        let mut rules = RuleSet::from_config(self.config.clone())?;
        let mut report = LoadReport::default();

        for (line_number, line) in lines.enumerate() {
            let line = line?;
            let Some(rule) = parse_rule_line(line.as_ref()) else {
                debug!("skipping line {}: not a key->value rule", line_number + 1);
                report.lines_skipped += 1;
                continue;
            };
            rules.insert(rule)?;
            report.rules_loaded += 1;
        }

        info!(
            "loaded {} rules into {} map ({} distinct, {} lines skipped)",
            report.rules_loaded,
            rules.backend(),
            rules.len(),
            report.lines_skipped
        );
        Ok((rules, report))
    }
}
