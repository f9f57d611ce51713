//! Record parser for the register sheet.
//!
//! Layout assumptions:
//! - Rows above the first real entry are title/header noise with no reliable
//!   marker, so parsing starts at a known anchor name.
//! - A record is its name followed, within a few cells, by profile link,
//!   offense link, screenshot marker and level. Blank or unexpected cells may
//!   sit in between and are skipped.
//! - Level is the last field of a record; finding it closes the window early.
//!
//! Overlap is resolved by scan position only: a cell consumed as a field can
//! still open a record of its own when the outer scan reaches it.

use crate::config::options::ParseOptions;
use crate::store::Record;

use super::classify::{
    is_category_tag, is_evidence_marker, is_person_name, is_social_url, is_status_url, is_web_url,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseOutcome {
    Parsed {
        /// Stream position of the anchor.
        anchor_index: usize,
        records: Vec<Record>,
    },
    /// Anchor missing: treated as "no data", not as a failure.
    AnchorNotFound,
}

impl ParseOutcome {
    pub fn records(&self) -> &[Record] {
        match self {
            ParseOutcome::Parsed { records, .. } => records,
            ParseOutcome::AnchorNotFound => &[],
        }
    }

    pub fn into_records(self) -> Vec<Record> {
        match self {
            ParseOutcome::Parsed { records, .. } => records,
            ParseOutcome::AnchorNotFound => Vec::new(),
        }
    }
}

fn token_at<T: AsRef<str>>(tokens: &[Option<T>], i: usize) -> Option<&str> {
    tokens.get(i)?
        .as_ref()
        .map(|t| t.as_ref().trim())
        .filter(|t| !t.is_empty())
}

/// Rebuild records from the ordered cell stream.
pub fn parse<T: AsRef<str>>(tokens: &[Option<T>], opts: &ParseOptions) -> ParseOutcome {
    let Some(anchor_index) = (0..tokens.len())
        .find(|&i| token_at(tokens, i) == Some(opts.anchor.as_str()))
    else {
        tracing::warn!("Register: anchor {:?} not found in {} rows", opts.anchor, tokens.len());
        return ParseOutcome::AnchorNotFound;
    };
    tracing::debug!("Register: parsing from row {}", anchor_index);

    let mut records = Vec::new();

    for i in anchor_index..tokens.len() {
        let Some(value) = token_at(tokens, i) else { continue };
        if !is_person_name(value) {
            tracing::trace!("Register: skip row {} {:?}", i, value);
            continue;
        }

        let mut record = Record::named(value);
        let window = (i + 1..tokens.len()).take(opts.lookahead);
        fill_fields(&mut record, window.filter_map(|j| token_at(tokens, j)));

        tracing::debug!("Register: row {} -> {:?}", i, record);
        records.push(record);
    }

    ParseOutcome::Parsed { anchor_index, records }
}

/// First match wins, in this order per cell. A status link always lands in
/// the citation, even if a plain link got there first.
fn fill_fields<'a>(record: &mut Record, window: impl Iterator<Item = &'a str>) {
    for value in window {
        if is_social_url(value) {
            if is_status_url(value) {
                record.citation_url = s!(value);
            } else {
                record.social_handle = s!(value);
            }
        } else if is_web_url(value) && record.citation_url.is_empty() {
            record.citation_url = s!(value);
        } else if is_evidence_marker(value) {
            record.evidence_marker = s!(value);
        } else if is_category_tag(value) {
            record.category_tags = s!(value);
            break;
        }
    }
}

/// Plain string tokens with default options. Blank strings count as absent.
pub fn parse_tokens<T: AsRef<str>>(tokens: &[T]) -> Vec<Record> {
    let wrapped: Vec<Option<&str>> = tokens.iter().map(|t| Some(t.as_ref())).collect();
    parse(&wrapped, &ParseOptions::default()).into_records()
}
