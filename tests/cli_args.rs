// tests/cli_args.rs
//
// Argument mapping and a full offline run through `--input`.
//
#![cfg(feature = "cli")]

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use register_scrape::cli::{self, Args};
use register_scrape::config::consts::{DEFAULT_ANCHOR, DEFAULT_LOOKAHEAD};
use register_scrape::config::options::{ExportFormat, FeedSource};

fn tmp(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("register_cli_{}", name));
    p
}

const BODY: &str = r#"[
    {"undefined": "NAME"},
    {"undefined": "ELIZABETH WARREN"},
    {"undefined": "https://x.com/ewarren"},
    {"undefined": "TDS, HIGH"},
    {"undefined": "JANE DOE"},
    {"undefined": "MILD"}
]"#;

#[test]
fn defaults_map_to_options() {
    let args = Args::try_parse_from(["register-scrape", "-i", "dump.json"]).unwrap();
    let opts = args.to_options();

    assert_eq!(opts.feed.source, FeedSource::File(PathBuf::from("dump.json")));
    assert_eq!(opts.feed.column, None);
    assert_eq!(opts.parse.anchor, DEFAULT_ANCHOR);
    assert_eq!(opts.parse.lookahead, DEFAULT_LOOKAHEAD);
    assert!(opts.filter.is_identity());
    assert_eq!(opts.export.format, ExportFormat::Cards);
    assert_eq!(opts.export.out_path, None);
}

#[test]
fn flags_map_to_options() {
    let args = Args::try_parse_from([
        "register-scrape",
        "--url", "https://example.org/feed",
        "--column", "A",
        "--anchor", "JANE DOE",
        "--lookahead", "3",
        "--timeout", "2",
        "-s", "warren",
        "-l", "HIGH",
        "-f", "tsv",
        "--include-headers",
        "-o", "out/high.tsv",
    ])
    .unwrap();
    let opts = args.to_options();

    assert_eq!(opts.feed.source, FeedSource::Url("https://example.org/feed".into()));
    assert_eq!(opts.feed.column.as_deref(), Some("A"));
    assert_eq!(opts.feed.timeout.as_secs(), 2);
    assert_eq!(opts.parse.anchor, "JANE DOE");
    assert_eq!(opts.parse.lookahead, 3);
    assert_eq!((opts.filter.search.as_str(), opts.filter.level.as_str()), ("warren", "HIGH"));
    assert_eq!(opts.export.format, ExportFormat::Tsv);
    assert!(opts.export.include_headers);
    assert_eq!(opts.export.out_path, Some(PathBuf::from("out/high.tsv")));
}

#[test]
fn quiet_and_verbose_conflict() {
    assert!(Args::try_parse_from(["register-scrape", "-q", "-v"]).is_err());
    assert!(Args::try_parse_from(["register-scrape", "-f", "xml"]).is_err());
}

#[test]
fn run_filters_captured_dump_to_csv() {
    let input = tmp("run_input.json");
    fs::write(&input, BODY).unwrap();
    let out = tmp("run_out").join("high.csv");
    let _ = fs::remove_file(&out);

    let argv: Vec<String> = vec![
        "register-scrape".to_string(),
        "-q".to_string(),
        "-i".to_string(), input.display().to_string(),
        "-l".to_string(), "HIGH".to_string(),
        "-f".to_string(), "csv".to_string(),
        "-o".to_string(), out.display().to_string(),
    ];
    let args = Args::try_parse_from(argv).unwrap();
    cli::run(args).unwrap();

    let written = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("ELIZABETH WARREN,https://x.com/ewarren,"));
}

#[test]
fn run_reports_unreadable_input() {
    let missing = tmp("run_missing.json");
    let _ = fs::remove_file(&missing);
    let args = Args::try_parse_from([
        "register-scrape".to_string(),
        "-q".to_string(),
        "-i".to_string(),
        missing.display().to_string(),
    ])
    .unwrap();
    let err = cli::run(args).unwrap_err();
    assert_eq!(err.to_string(), "Failed to load data. Please try again later.");
}
