// src/data.rs
//
// Filter engine over the canonical record set.
//
// - FilterState: what the user asked for (search text + level selector).
// - apply_filters: pure function, full set in, stable subsequence out.
// - FilterView: same predicate, but as indices borrowed from a RecordSet
//               so the consumer can page/reverse without cloning records.
//
// Nothing in here mutates records. Every filter change recomputes from the
// full set.

use std::collections::BTreeSet;
use std::fmt;

use crate::config::consts::ALL_LEVELS;
use crate::store::{Record, RecordSet};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterState {
    pub search: String,
    /// A single level tag, or `"all"`.
    pub level: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self { search: s!(), level: s!(ALL_LEVELS) }
    }
}

impl FilterState {
    pub fn new(search: &str, level: &str) -> Self {
        Self { search: s!(search), level: s!(level) }
    }

    /// True when every record passes.
    pub fn is_identity(&self) -> bool {
        self.search.trim().is_empty() && self.all_levels()
    }

    pub fn all_levels(&self) -> bool {
        self.level == ALL_LEVELS
    }

    /// The "clear filters" state.
    pub fn cleared() -> Self { Self::default() }

    /// Lowercased once; `matches` is hot.
    fn prepared(&self) -> Prepared {
        Prepared {
            search: self.search.trim().to_lowercase(),
            level: (!self.all_levels()).then(|| self.level.to_lowercase()),
        }
    }

    pub fn matches(&self, record: &Record) -> bool {
        self.prepared().matches(record)
    }
}

struct Prepared {
    search: String,
    level: Option<String>,
}

impl Prepared {
    fn matches(&self, r: &Record) -> bool {
        let search_ok = self.search.is_empty()
            || [&r.name, &r.social_handle, &r.citation_url, &r.category_tags]
                .iter()
                .any(|field| field.to_lowercase().contains(&self.search));

        let level_ok = match &self.level {
            None => true,
            Some(level) => r.category_tags.to_lowercase().contains(level),
        };

        search_ok && level_ok
    }
}

/// Records passing both filters, in their original order.
pub fn apply_filters(all: &[Record], search: &str, level: &str) -> Vec<Record> {
    let p = FilterState::new(search, level).prepared();
    all.iter().filter(|r| p.matches(r)).cloned().collect()
}

/// Every distinct tag across `category_tags` labels, sorted.
pub fn distinct_category_tags(all: &[Record]) -> BTreeSet<String> {
    all.iter()
        .flat_map(Record::tags)
        .map(str::to_owned)
        .collect()
}

/// Zero-copy filtered view for display.
/// Holds positions into the RecordSet it was built from.
#[derive(Clone, Debug)]
pub struct FilterView<'a> {
    /// Positions of kept records in the full set
    pub row_ix: Vec<usize>,
    raw: &'a RecordSet,
}

impl<'a> FilterView<'a> {
    pub fn from_set(raw: &'a RecordSet, filter: &FilterState) -> Self {
        let records = raw.records();

        if filter.is_identity() {
            return Self { row_ix: (0..records.len()).collect(), raw };
        }

        let p = filter.prepared();
        let row_ix = records.iter()
            .enumerate()
            .filter(|(_, r)| p.matches(r))
            .map(|(i, _)| i)
            .collect();

        Self { row_ix, raw }
    }

    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }
    pub fn total(&self) -> usize { self.raw.len() }

    /// Borrow one record by projected index.
    pub fn get(&self, i: usize) -> Option<&'a Record> {
        self.row_ix.get(i).and_then(|&ix| self.raw.records().get(ix))
    }

    /// Kept records, full-set order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &'a Record> + '_ {
        let records = self.raw.records();
        self.row_ix.iter().map(move |&ix| &records[ix])
    }

    /// Kept records, latest first (how the register is shown).
    pub fn iter_display(&self) -> impl Iterator<Item = &'a Record> + '_ {
        self.iter().rev()
    }

    /// Materialize owned records (for export boundaries).
    pub fn to_owned_records(&self) -> Vec<Record> {
        self.iter().cloned().collect()
    }
}

/// Counts for the status line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub filtered: usize,
    pub search: String,
    pub level: String,
}

impl Stats {
    pub fn new(view: &FilterView<'_>, filter: &FilterState) -> Self {
        Self {
            total: view.total(),
            filtered: view.len(),
            search: filter.search.trim().to_lowercase(),
            level: filter.level.clone(),
        }
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Showing {} of {} entries", self.filtered, self.total)?;
        if !self.search.is_empty() {
            write!(f, " matching \"{}\"", self.search)?;
        }
        if self.level != ALL_LEVELS {
            write!(f, " with level \"{}\"", self.level)?;
        }
        Ok(())
    }
}
