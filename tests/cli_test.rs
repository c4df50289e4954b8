use std::fs;
use std::path::Path;
use std::process::Command;

use clap::Parser;
use tempfile::tempdir;
use word_replacer::cli::{ReplacerArgs, run};
use word_replacer::error::ReplacerError;

const RULES: &str = "cat->dog\ndog->wolf\nthis line is ignored\nquick -> Slow\n";
const INPUT: &str = "The quick cat.\n  A DOG, a Cat!  \n\nnothing here\n";
const EXPECTED: &str = "The Slow wolf.\nA WOLF, a wolf!\n\nnothing here\n";

fn args(input: &Path, rules: &Path, backend: &str, extra: &[&str]) -> ReplacerArgs {
    let mut argv = vec![
        "word-replacer".to_string(),
        input.display().to_string(),
        rules.display().to_string(),
        backend.to_string(),
    ];
    argv.extend(extra.iter().map(|s| s.to_string()));
    ReplacerArgs::try_parse_from(argv).unwrap()
}

#[test]
fn test_run_on_every_backend() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let input = dir.path().join("input.txt");
    let rules = dir.path().join("rules.txt");
    fs::write(&input, INPUT)?;
    fs::write(&rules, RULES)?;

    for backend in ["bst", "RBT", "Hash"] {
        let mut out = Vec::new();
        let summary = run(&args(&input, &rules, backend, &[]), &mut out)?;

        assert_eq!(String::from_utf8(out)?, EXPECTED, "backend {backend}");
        assert_eq!(summary.rules_loaded, 3);
        assert_eq!(summary.lines_skipped, 1);
        assert_eq!(summary.lines_processed, 4);
        assert_eq!(summary.words_seen, 9);
        assert_eq!(summary.words_replaced, 4);
        assert_eq!(summary.map.entries, 3);
        assert_eq!(summary.map.backend, backend.to_lowercase());
    }
    Ok(())
}

#[test]
fn test_unknown_backend_checked_before_files() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.txt");

    let mut out = Vec::new();
    let err = run(&args(&missing, &missing, "splay", &[]), &mut out).unwrap_err();

    assert!(matches!(err, ReplacerError::Config(_)));
    assert_eq!(
        err.to_string(),
        "Configuration error: Invalid data structure 'splay' received."
    );
    assert!(out.is_empty());
}

#[test]
fn test_missing_files_reported() {
    let dir = tempdir().unwrap();
    let rules = dir.path().join("rules.txt");
    let input = dir.path().join("input.txt");
    let mut out = Vec::new();

    let err = run(&args(&input, &rules, "bst", &[]), &mut out).unwrap_err();
    assert!(matches!(&err, ReplacerError::Open { path, .. } if path == &rules));

    fs::write(&rules, RULES).unwrap();
    let err = run(&args(&input, &rules, "bst", &[]), &mut out).unwrap_err();
    assert!(matches!(&err, ReplacerError::Open { path, .. } if path == &input));
    assert!(out.is_empty());
}

#[test]
fn test_cyclic_rules_fail_without_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.txt");
    let rules = dir.path().join("rules.txt");
    fs::write(&input, INPUT).unwrap();
    fs::write(&rules, "a->b\nb->c\nc->a\n").unwrap();

    let mut out = Vec::new();
    let err = run(&args(&input, &rules, "hash", &[]), &mut out).unwrap_err();

    assert!(matches!(err, ReplacerError::Cycle { .. }));
    assert!(out.is_empty());
}

#[test]
fn test_hash_settings_reach_the_map() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let input = dir.path().join("input.txt");
    let rules = dir.path().join("rules.txt");
    fs::write(&input, INPUT)?;
    fs::write(&rules, RULES)?;

    let extra = ["--initial-buckets", "2", "--load-factor", "1.0"];
    let summary = run(&args(&input, &rules, "hash", &extra), &mut Vec::new())?;

    // Three entries in two buckets exceed 1.0, so the table doubled once.
    assert_eq!(summary.map.buckets, Some(4));
    Ok(())
}

#[test]
fn test_binary_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let input = dir.path().join("input.txt");
    let rules = dir.path().join("rules.txt");
    fs::write(&input, INPUT)?;
    fs::write(&rules, RULES)?;

    let output = Command::new(env!("CARGO_BIN_EXE_word-replacer"))
        .arg(&input)
        .arg(&rules)
        .arg("rbt")
        .args(["--stats", "--format", "json"])
        .output()?;

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?, EXPECTED);

    let stderr = String::from_utf8(output.stderr)?;
    let summary: serde_json::Value = serde_json::from_str(stderr.trim_end())?;
    assert_eq!(summary["map"]["backend"], "rbt");
    assert_eq!(summary["words_replaced"], 4);
    Ok(())
}

#[test]
fn test_binary_reports_errors() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let missing = dir.path().join("missing.txt");

    let output = Command::new(env!("CARGO_BIN_EXE_word-replacer"))
        .arg(&missing)
        .arg(&missing)
        .arg("bst")
        .output()?;

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Cannot open file"));
    assert!(stderr.contains("missing.txt"));
    Ok(())
}

#[test]
fn test_latin1_input_still_rewritten() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let input = dir.path().join("input.txt");
    let rules = dir.path().join("rules.txt");
    fs::write(&input, b"caf\xe9 cat\nthe cat\n")?;
    fs::write(&rules, RULES)?;

    let mut out = Vec::new();
    let summary = run(&args(&input, &rules, "bst", &[]), &mut out)?;

    assert_eq!(String::from_utf8(out)?, "caf\u{fffd} wolf\nthe wolf\n");
    assert_eq!(summary.lines_processed, 2);
    Ok(())
}

#[test]
fn test_zero_load_factor_rejected() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.txt");

    let err = run(
        &args(&missing, &missing, "hash", &["--load-factor", "0"]),
        &mut Vec::new(),
    )
    .unwrap_err();
    assert!(matches!(err, ReplacerError::Config(_)));
}
