//! Command implementation for the word-replacer CLI.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use log::{debug, info};

use crate::cli::args::ReplacerArgs;
use crate::cli::output::{RunSummary, write_summary};
use crate::error::{ReplacerError, Result};
use crate::rules::RuleLoader;
use crate::substitution::SubstitutionEngine;
use crate::util::LossyLines;

/// Totals collected while rewriting a text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteTotals {
    pub lines: usize,
    pub words: usize,
    pub replaced: usize,
}

/// Execute a CLI invocation, writing rewritten text to stdout.
pub fn execute_command(args: ReplacerArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let summary = run(&args, &mut out)?;
    out.flush()?;

    if args.stats {
        let stderr = io::stderr();
        write_summary(&summary, &args, &mut stderr.lock())?;
    }
    Ok(())
}

/// Load the rules, rewrite the input file into `out`, and summarize the run.
///
/// The backend argument is validated before any file is opened.
pub fn run<W: Write>(args: &ReplacerArgs, out: &mut W) -> Result<RunSummary> {
    let config = args.map_config()?;
    debug!("using {:?}", config);

    let start = Instant::now();
    let (rules, report) = RuleLoader::new(config).load_file(&args.rules_file)?;
    let load_ms = start.elapsed().as_millis() as u64;

    let engine = SubstitutionEngine::new(&rules);
    let start = Instant::now();
    let input = File::open(&args.input_file)
        .map_err(|e| ReplacerError::open(&args.input_file, e))?;
    let totals = rewrite_reader(&engine, BufReader::new(input), &args.input_file, out)?;
    let rewrite_ms = start.elapsed().as_millis() as u64;

    info!(
        "rewrote {} lines from {}, {} of {} words replaced",
        totals.lines,
        args.input_file.display(),
        totals.replaced,
        totals.words
    );

    Ok(RunSummary {
        map: rules.stats(),
        rules_loaded: report.rules_loaded,
        lines_skipped: report.lines_skipped,
        lines_processed: totals.lines,
        words_seen: totals.words,
        words_replaced: totals.replaced,
        load_ms,
        rewrite_ms,
    })
}

/// Rewrite every line of `reader` into `out`, one output line per input line.
///
/// `path` names the source in I/O errors. Invalid UTF-8 is replaced rather
/// than rejected, so one bad byte never cuts the output short.
pub fn rewrite_reader<R: BufRead, W: Write>(
    engine: &SubstitutionEngine<'_>,
    reader: R,
    path: &Path,
    out: &mut W,
) -> Result<RewriteTotals> {
    let mut totals = RewriteTotals::default();
    for line in LossyLines::new(reader, path) {
        let line = line?;
        let rewritten = engine.rewrite(&line);
        writeln!(out, "{}", rewritten.text)?;

        totals.lines += 1;
        totals.words += rewritten.words;
        totals.replaced += rewritten.replaced;
    }
    Ok(totals)
}
