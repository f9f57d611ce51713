// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;
use crate::data::FilterState;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub feed: FeedOptions,
    pub parse: ParseOptions,
    pub filter: FilterState,
    pub export: ExportOptions,
}

/// Where the row dump comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FeedSource {
    Url(String),
    /// Captured JSON response on disk.
    File(PathBuf),
}

impl FeedSource {
    pub fn describe(&self) -> String {
        match self {
            FeedSource::Url(u) => u.clone(),
            FeedSource::File(p) => p.display().to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedOptions {
    pub source: FeedSource,
    /// Row key holding the cell value. `None` takes the first string value.
    pub column: Option<String>,
    pub timeout: Duration,
}

impl Default for FeedOptions {
    fn default() -> Self {
        Self {
            source: FeedSource::Url(s!(FEED_URL)),
            column: None,
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

/// Tunables for the record parser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    /// Exact token marking where real data starts.
    pub anchor: String,
    /// Lookahead window after each name.
    pub lookahead: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            anchor: s!(DEFAULT_ANCHOR),
            lookahead: DEFAULT_LOOKAHEAD,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Cards,
    Csv,
    Tsv,
    Json,
}

impl ExportFormat {
    /// Field separator for the delimited formats.
    pub fn delimiter(&self) -> Option<char> {
        match self {
            ExportFormat::Csv => Some(','),
            ExportFormat::Tsv => Some('\t'),
            ExportFormat::Cards | ExportFormat::Json => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    /// `None` writes to stdout.
    pub out_path: Option<PathBuf>,
}
