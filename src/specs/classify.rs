//! Token classifiers.
//!
//! All matching is on the uppercased token and substring based, so
//! `"TDS, HIGH"` and `"Extreme"` both count as level data.

/// Level vocabulary. Any token containing one of these is a level label.
pub const CATEGORY_KEYWORDS: [&str; 7] = [
    "TDS", "MDS", "EXTREME", "HIGH", "MILD", "MULTIPLE OFFENSES", "ON SPECTRUM",
];

/// Never part of a name: level words, sheet column headers, and literal
/// cell values that share the "short text" shape of a name.
pub const NAME_EXCLUSIONS: [&str; 15] = [
    "TDS", "MDS", "EXTREME", "HIGH", "MILD", "MULTIPLE OFFENSES",
    "ON SPECTRUM", "HERE", "VIDEO", "NAME", "X ACCOUNT", "OFFENSE",
    "SCREENSHOT", "RETARD LEVEL", "MURDERER",
];

pub const EVIDENCE_MARKERS: [&str; 2] = ["HERE", "VIDEO"];

pub const SOCIAL_PREFIXES: [&str; 2] = ["https://x.com/", "https://twitter.com/"];
pub const WEB_PREFIX: &str = "https://";
pub const STATUS_SEGMENT: &str = "/status/";

const NAME_MIN_LEN: usize = 2;
const NAME_MAX_LEN: usize = 50;

fn contains_any(token: &str, words: &[&str]) -> bool {
    let upper = token.to_uppercase();
    words.iter().any(|w| upper.contains(w))
}

/// Does this token plausibly name a person?
pub fn is_person_name(token: &str) -> bool {
    let len = token.chars().count();
    if !(NAME_MIN_LEN..=NAME_MAX_LEN).contains(&len) { return false; }

    if contains_any(token, &NAME_EXCLUSIONS) { return false; }

    // Single words are never names
    if !token.contains(' ') && !token.contains('-') { return false; }

    if token.starts_with(WEB_PREFIX) { return false; }

    // Mostly digits: ids, dates, phone numbers
    let digits = token.chars().filter(char::is_ascii_digit).count();
    digits * 2 <= len
}

pub fn is_category_tag(token: &str) -> bool {
    contains_any(token, &CATEGORY_KEYWORDS)
}

pub fn is_evidence_marker(token: &str) -> bool {
    EVIDENCE_MARKERS.contains(&token)
}

/// X / Twitter link, profile or status.
pub fn is_social_url(token: &str) -> bool {
    SOCIAL_PREFIXES.iter().any(|p| token.starts_with(p))
}

pub fn is_status_url(token: &str) -> bool {
    token.contains(STATUS_SEGMENT)
}

pub fn is_web_url(token: &str) -> bool {
    token.starts_with(WEB_PREFIX)
}

/// Badge family of a single level tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CategoryKind {
    Tds,
    Mds,
    Extreme,
    High,
    Mild,
    Spectrum,
    Multiple,
    Other,
}

impl CategoryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryKind::Tds => "tds",
            CategoryKind::Mds => "mds",
            CategoryKind::Extreme => "extreme",
            CategoryKind::High => "high",
            CategoryKind::Mild => "mild",
            CategoryKind::Spectrum => "spectrum",
            CategoryKind::Multiple => "multiple",
            CategoryKind::Other => "default",
        }
    }
}

/// First family whose keyword appears in the tag; order matters for
/// combined tags like "TDS EXTREME".
pub fn category_kind(tag: &str) -> CategoryKind {
    const ORDER: [(&str, CategoryKind); 7] = [
        ("tds", CategoryKind::Tds),
        ("mds", CategoryKind::Mds),
        ("extreme", CategoryKind::Extreme),
        ("high", CategoryKind::High),
        ("mild", CategoryKind::Mild),
        ("spectrum", CategoryKind::Spectrum),
        ("multiple", CategoryKind::Multiple),
    ];
    let lower = tag.to_lowercase();
    ORDER.iter()
        .find(|(kw, _)| lower.contains(kw))
        .map(|&(_, kind)| kind)
        .unwrap_or(CategoryKind::Other)
}
