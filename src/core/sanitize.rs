// src/core/sanitize.rs

/// Lookup key for a name: lowercase, every char outside `[a-z0-9]` becomes `-`.
/// No collapsing, so the key length tracks the name.
pub fn slug_id(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|ch| if ch.is_ascii_lowercase() || ch.is_ascii_digit() { ch } else { '-' })
        .collect()
}

/// Trim a raw cell. Blank cells are absent.
pub fn clean_token(raw: &str) -> Option<String> {
    let t = raw.trim();
    if t.is_empty() { None } else { Some(s!(t)) }
}

/// Split a comma-separated tag label into trimmed, non-empty parts.
pub fn split_tags(label: &str) -> impl Iterator<Item = &str> {
    label.split(',').map(str::trim).filter(|t| !t.is_empty())
}
