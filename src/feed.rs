// src/feed.rs
//
// Wire shape of the opensheet proxy: a JSON array with one object per sheet row.
// The sheet is a single-column cell dump, so each object carries at most one
// useful value under whatever key the proxy derived from the (missing) header.
// We keep only that value.

use std::fs;

use serde_json::Value;

use crate::config::options::{FeedOptions, FeedSource};
use crate::core::net::{self, FeedError};
use crate::core::sanitize::clean_token;

/// Key opensheet gives a column whose header cell is empty.
pub const BLANK_HEADER_KEY: &str = "undefined";

/// One sheet row reduced to its single cell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeedRow {
    pub value: Option<String>,
}

impl FeedRow {
    /// Pull the cell out of one row object.
    ///
    /// With `column` set, only that key is read. Otherwise the proxy's key for
    /// a header-less column wins when present; failing that, the first string
    /// value in alphabetical key order, then the first scalar.
    pub fn from_value(row: &Value, column: Option<&str>) -> Self {
        let Value::Object(map) = row else {
            return Self::default();
        };

        let picked = match column {
            Some(key) => map.get(key).and_then(scalar_text),
            None => map
                .get(BLANK_HEADER_KEY)
                .and_then(scalar_text)
                .or_else(|| map.values().find_map(|v| v.as_str().map(str::to_owned)))
                .or_else(|| map.values().find_map(scalar_text)),
        };

        Self { value: picked.as_deref().and_then(clean_token) }
    }

    pub fn token(&self) -> Option<&str> { self.value.as_deref() }
}

fn scalar_text(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Decode a feed body into rows. Anything other than a top-level array is an error;
/// odd rows inside the array are just empty.
pub fn decode_rows(body: &str, column: Option<&str>) -> Result<Vec<FeedRow>, FeedError> {
    let rows: Vec<Value> = serde_json::from_str(body)?;
    Ok(rows.iter().map(|r| FeedRow::from_value(r, column)).collect())
}

/// Fetch (or read) the raw body for the configured source.
pub fn fetch_body(opts: &FeedOptions) -> Result<String, FeedError> {
    match &opts.source {
        FeedSource::Url(url) => {
            tracing::info!("Feed: GET {}", url);
            net::http_get(url, opts.timeout)
        }
        FeedSource::File(path) => {
            tracing::info!("Feed: reading captured response {}", path.display());
            fs::read_to_string(path).map_err(|source| FeedError::Read {
                path: path.display().to_string(),
                source,
            })
        }
    }
}

/// Fetch and decode in one go.
pub fn fetch_rows(opts: &FeedOptions) -> Result<Vec<FeedRow>, FeedError> {
    let body = fetch_body(opts)?;
    tracing::debug!("Feed: received {} bytes", body.len());
    decode_rows(&body, opts.column.as_deref())
}

/// Tokens in row order, absent cells kept as `None` so positions line up.
pub fn tokens(rows: &[FeedRow]) -> Vec<Option<String>> {
    rows.iter().map(|r| r.value.clone()).collect()
}
