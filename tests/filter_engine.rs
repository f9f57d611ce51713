// tests/filter_engine.rs
//
// Filter engine and record store without any I/O.
//
use std::collections::BTreeSet;

use register_scrape::data::{FilterState, FilterView, Stats, apply_filters, distinct_category_tags};
use register_scrape::store::{Record, RecordSet, RecordStore};

fn rec(name: &str, handle: &str, citation: &str, tags: &str) -> Record {
    let mut r = Record::named(name);
    r.social_handle = handle.into();
    r.citation_url = citation.into();
    r.category_tags = tags.into();
    r
}

fn sample() -> Vec<Record> {
    vec![
        rec("ELIZABETH WARREN", "https://x.com/ewarren", "https://x.com/ewarren/status/1", "TDS, HIGH"),
        rec("JOHN SMITH", "", "https://news.example.com/js", "MILD"),
        rec("JANE DOE", "https://x.com/jdoe", "", "HIGH"),
        rec("MARY-ANN LEE", "", "", ""),
    ]
}

fn names(rs: &[Record]) -> Vec<&str> {
    rs.iter().map(|r| r.name.as_str()).collect()
}

#[test]
fn identity_filter_returns_everything() {
    let all = sample();
    assert_eq!(apply_filters(&all, "", "all"), all);
    assert!(FilterState::default().is_identity());
    assert_eq!(FilterState::cleared(), FilterState::default());
}

#[test]
fn search_is_case_insensitive_across_fields() {
    let all = sample();
    assert_eq!(names(&apply_filters(&all, "warren", "all")), ["ELIZABETH WARREN"]);
    assert_eq!(names(&apply_filters(&all, "news.EXAMPLE", "all")), ["JOHN SMITH"]);
    assert_eq!(names(&apply_filters(&all, "jdoe", "all")), ["JANE DOE"]);
    assert_eq!(names(&apply_filters(&all, "high", "all")), ["ELIZABETH WARREN", "JANE DOE"]);
    assert_eq!(names(&apply_filters(&all, "  mild ", "all")), ["JOHN SMITH"]);
    assert!(apply_filters(&all, "nobody", "all").is_empty());
}

#[test]
fn level_selector_is_substring_of_tags() {
    let all = sample();
    assert_eq!(names(&apply_filters(&all, "", "HIGH")), ["ELIZABETH WARREN", "JANE DOE"]);
    assert_eq!(names(&apply_filters(&all, "", "tds")), ["ELIZABETH WARREN"]);
    assert_eq!(names(&apply_filters(&all, "jane", "HIGH")), ["JANE DOE"]);
    assert!(apply_filters(&all, "john", "HIGH").is_empty());
}

#[test]
fn filtering_is_idempotent_and_stable() {
    let all = sample();
    let once = apply_filters(&all, "x.com", "HIGH");
    let twice = apply_filters(&all, "x.com", "HIGH");
    assert_eq!(once, twice);
    assert_eq!(apply_filters(&once, "x.com", "HIGH"), once);
    assert_eq!(names(&once), ["ELIZABETH WARREN", "JANE DOE"]);
}

#[test]
fn distinct_tags_sorted_and_deduped() {
    let all = vec![rec("A B", "", "", "TDS, HIGH"), rec("C D", "", "", "HIGH")];
    let tags = distinct_category_tags(&all);
    let expected: BTreeSet<String> = ["HIGH", "TDS"].iter().map(|s| s.to_string()).collect();
    assert_eq!(tags, expected);
    assert_eq!(tags.into_iter().collect::<Vec<_>>(), ["HIGH", "TDS"]);

    let messy = vec![rec("E F", "", "", " MILD ,, EXTREME,")];
    let tags: Vec<String> = distinct_category_tags(&messy).into_iter().collect();
    assert_eq!(tags, ["EXTREME", "MILD"]);
}

#[test]
fn view_matches_pure_filter_and_reverses_for_display() {
    let set = RecordSet::new(sample(), "test");
    let filter = FilterState::new("", "HIGH");
    let view = FilterView::from_set(&set, &filter);

    assert_eq!(view.to_owned_records(), apply_filters(set.records(), "", "HIGH"));
    assert_eq!(view.row_ix, vec![0, 2]);
    assert_eq!(view.get(1).map(|r| r.name.as_str()), Some("JANE DOE"));
    assert!(view.get(2).is_none());

    let shown: Vec<&str> = view.iter_display().map(|r| r.name.as_str()).collect();
    assert_eq!(shown, ["JANE DOE", "ELIZABETH WARREN"]);

    let full = FilterView::from_set(&set, &FilterState::default());
    assert_eq!(full.len(), set.len());
}

#[test]
fn stats_line() {
    let set = RecordSet::new(sample(), "test");

    let filter = FilterState::default();
    let view = FilterView::from_set(&set, &filter);
    assert_eq!(Stats::new(&view, &filter).to_string(), "Showing 4 of 4 entries");

    let filter = FilterState::new(" Jane ", "HIGH");
    let view = FilterView::from_set(&set, &filter);
    let stats = Stats::new(&view, &filter);
    assert_eq!((stats.total, stats.filtered), (4, 1));
    assert_eq!(stats.to_string(), "Showing 1 of 4 entries matching \"jane\" with level \"HIGH\"");
}

#[test]
fn store_replaces_wholesale() {
    let mut store = RecordStore::new();
    assert!(store.current().is_empty());
    assert_eq!(store.generation(), 0);

    store.replace(RecordSet::new(sample(), "first"));
    let old = store.replace(RecordSet::new(vec![rec("X Y", "", "", "")], "second"));

    assert_eq!(old.len(), 4);
    assert_eq!(store.generation(), 2);
    assert_eq!(store.current().source(), "second");
    assert_eq!(names(store.current().records()), ["X Y"]);
}

#[test]
fn record_tags_keep_duplicates() {
    let r = rec("A B", "", "", "HIGH, TDS, HIGH");
    assert_eq!(r.tags().collect::<Vec<_>>(), ["HIGH", "TDS", "HIGH"]);
}
