// src/lib.rs

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod specs;

pub mod csv;
pub mod data;
pub mod feed;
pub mod file;
pub mod log;
pub mod progress;
pub mod render;
pub mod runner;
pub mod store;

#[cfg(feature = "cli")]
pub mod cli;

pub use data::{FilterView, Stats, apply_filters, distinct_category_tags};
pub use specs::register::{ParseOutcome, parse, parse_tokens};
pub use store::{Record, RecordSet, RecordStore};
