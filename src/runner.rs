// src/runner.rs
//
// One load cycle: fetch → decode → parse. Returns a brand-new RecordSet;
// the caller decides whether to install it in a RecordStore. A failure
// leaves nothing half-built behind.

use crate::config::options::{FeedOptions, ParseOptions};
use crate::core::net::FeedError;
use crate::feed;
use crate::progress::Progress;
use crate::specs::register::{self, ParseOutcome};
use crate::store::{RecordSet, RecordStore};

pub fn load(
    feed_opts: &FeedOptions,
    parse_opts: &ParseOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RecordSet, FeedError> {
    let source = feed_opts.source.describe();
    if let Some(p) = progress.as_deref_mut() {
        p.begin(&source);
        p.log("Fetching register…");
    }

    let result = fetch_and_parse(feed_opts, parse_opts, &source, &mut progress);

    if let Some(p) = progress.as_deref_mut() {
        if let Err(e) = &result {
            p.log(e.user_message());
        }
        p.finish();
    }
    result
}

fn fetch_and_parse(
    feed_opts: &FeedOptions,
    parse_opts: &ParseOptions,
    source: &str,
    progress: &mut Option<&mut dyn Progress>,
) -> Result<RecordSet, FeedError> {
    let rows = feed::fetch_rows(feed_opts).inspect_err(|e| {
        tracing::error!("Load: {}", e);
    })?;
    tracing::info!("Load: {} rows received", rows.len());

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Parsing {} rows…", rows.len()));
    }

    let tokens = feed::tokens(&rows);
    let records = match register::parse(&tokens, parse_opts) {
        ParseOutcome::Parsed { records, .. } => records,
        ParseOutcome::AnchorNotFound => {
            if let Some(p) = progress.as_deref_mut() {
                p.log("No entries found");
            }
            Vec::new()
        }
    };
    tracing::info!("Load: {} records parsed", records.len());

    Ok(RecordSet::new(records, source))
}

/// Load and, on success only, replace the store's contents.
/// Returns the new record count.
pub fn reload(
    store: &mut RecordStore,
    feed_opts: &FeedOptions,
    parse_opts: &ParseOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<usize, FeedError> {
    let set = load(feed_opts, parse_opts, progress)?;
    let n = set.len();
    store.replace(set);
    Ok(n)
}
