// src/config/consts.rs

// Feed
pub const FEED_URL: &str =
    "https://opensheet.elk.sh/1KsybjmDwy1IxoPE9GDvdTkIy8Bi3GxHrfjZcN75lAr4/REGISTER";
pub const USER_AGENT: &str = concat!("register_scrape/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

// Parse
/// First real record in the sheet. Everything above it is header noise.
pub const DEFAULT_ANCHOR: &str = "ELIZABETH WARREN";
/// How many tokens after a name are searched for that record's fields.
/// Tuned against the sheet layout: name, profile, offense link, screenshot,
/// level, with a little slack for blank cells.
pub const DEFAULT_LOOKAHEAD: usize = 6;

// Filter
/// Level selector value that disables level filtering.
pub const ALL_LEVELS: &str = "all";

// Export
pub const EXPORT_HEADERS: [&str; 6] = ["Name", "X Account", "Offense", "Screenshot", "Level", "Id"];

// User-facing
pub const LOAD_FAILED_MSG: &str = "Failed to load data. Please try again later.";
