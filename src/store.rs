// src/store.rs
//
// Canonical record data for one load cycle.
//
// - Record:      one reconstructed person entry. Immutable once parsed.
// - RecordSet:   every record from a single completed load, plus where it came from.
// - RecordStore: holds the latest completed RecordSet. Loads replace it wholesale;
//                nothing is merged and nothing is edited in place.

use serde::Serialize;

use crate::core::sanitize::{slug_id, split_tags};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Record {
    pub name: String,
    /// Profile URL, empty when absent.
    pub social_handle: String,
    /// Offense link (a status URL or other evidence page), empty when absent.
    pub citation_url: String,
    /// `HERE` / `VIDEO`, empty when absent.
    pub evidence_marker: String,
    /// Comma-separated level label, kept exactly as found.
    pub category_tags: String,
    pub id: String,
}

impl Record {
    /// Fresh record with only a name; the id is derived from it.
    pub fn named(name: &str) -> Self {
        Self {
            name: s!(name),
            social_handle: s!(),
            citation_url: s!(),
            evidence_marker: s!(),
            category_tags: s!(),
            id: slug_id(name),
        }
    }

    /// Individual tags of `category_tags`, in label order, duplicates kept.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        split_tags(&self.category_tags)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordSet {
    records: Vec<Record>,
    source: String,
}

impl RecordSet {
    pub fn new(records: Vec<Record>, source: impl Into<String>) -> Self {
        Self { records, source: source.into() }
    }

    pub fn records(&self) -> &[Record] { &self.records }
    pub fn source(&self) -> &str { &self.source }
    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    pub fn into_records(self) -> Vec<Record> { self.records }
}

/// Latest completed load. A failed load never reaches `replace`,
/// so the previous set survives it untouched.
#[derive(Debug, Default)]
pub struct RecordStore {
    current: RecordSet,
    generation: u64,
}

impl RecordStore {
    pub fn new() -> Self { Self::default() }

    pub fn current(&self) -> &RecordSet { &self.current }

    /// Number of completed loads so far.
    pub fn generation(&self) -> u64 { self.generation }

    /// Swap in a freshly parsed set. Returns the one it replaced.
    pub fn replace(&mut self, set: RecordSet) -> RecordSet {
        self.generation += 1;
        tracing::debug!(
            "Store: generation {} holds {} records from {}",
            self.generation, set.len(), set.source()
        );
        std::mem::replace(&mut self.current, set)
    }
}
