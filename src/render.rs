// src/render.rs
//
// Plain-text cards for terminal output.

use std::fmt::Write;

use crate::specs::classify::category_kind;
use crate::store::Record;

const NA: &str = "N/A";
const X_BASE: &str = "https://x.com/";

/// Profile link for display. Placeholder values count as missing;
/// a bare handle is turned into a profile URL.
pub fn profile_link(handle: &str) -> Option<String> {
    if handle.is_empty() || handle == NA || handle == "NO X ACCOUNT" {
        return None;
    }
    if handle.starts_with("http") {
        Some(s!(handle))
    } else {
        Some(join!(X_BASE, handle.trim_start_matches('@')))
    }
}

/// Offense column text.
pub fn offense_text(citation: &str) -> &str {
    if citation.is_empty() { NA } else { citation }
}

/// `TDS [tds], HIGH [high]`
pub fn level_badges(label: &str) -> String {
    crate::core::sanitize::split_tags(label)
        .map(|tag| format!("{} [{}]", tag, category_kind(tag).as_str()))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn card(r: &Record) -> String {
    let mut out = s!();
    let _ = writeln!(out, "== {} ==", r.name);
    let _ = writeln!(out, "  X:       {}", profile_link(&r.social_handle).as_deref().unwrap_or(NA));
    let _ = writeln!(out, "  Offense: {}", offense_text(&r.citation_url));
    if !r.evidence_marker.is_empty() {
        let _ = writeln!(out, "  Proof:   {}", r.evidence_marker);
    }
    if !r.category_tags.is_empty() {
        let _ = writeln!(out, "  Level:   {}", level_badges(&r.category_tags));
    }
    out
}

pub fn cards<'a>(records: impl IntoIterator<Item = &'a Record>) -> String {
    let body: Vec<String> = records.into_iter().map(card).collect();
    if body.is_empty() {
        return s!("No entries found matching your criteria.\n");
    }
    body.join("\n")
}
