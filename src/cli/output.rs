//! Output formatting for the run summary.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, ReplacerArgs};
use crate::error::Result;
use crate::map::MapStats;

/// Summary of one run, printed with `--stats`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub map: MapStats,
    pub rules_loaded: usize,
    pub lines_skipped: usize,
    pub lines_processed: usize,
    pub words_seen: usize,
    pub words_replaced: usize,
    pub load_ms: u64,
    pub rewrite_ms: u64,
}

/// Write `summary` to `writer` in the format selected by `args`.
pub fn write_summary<W: Write>(
    summary: &RunSummary,
    args: &ReplacerArgs,
    writer: &mut W,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => write_human(summary, writer),
        OutputFormat::Json => write_json(summary, args.pretty, writer),
    }
}

fn write_human<W: Write>(summary: &RunSummary, writer: &mut W) -> Result<()> {
    writeln!(writer, "Map: {}", summary.map)?;
    writeln!(
        writer,
        "Rules: {} loaded, {} lines skipped ({} ms)",
        summary.rules_loaded, summary.lines_skipped, summary.load_ms
    )?;
    writeln!(
        writer,
        "Text: {} lines, {} of {} words replaced ({} ms)",
        summary.lines_processed, summary.words_replaced, summary.words_seen, summary.rewrite_ms
    )?;
    Ok(())
}

fn write_json<W: Write>(summary: &RunSummary, pretty: bool, writer: &mut W) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, summary)?;
    } else {
        serde_json::to_writer(&mut *writer, summary)?;
    }
    writeln!(writer)?;
    Ok(())
}
