//! # Register reading
//!
//! The source sheet is published as a single column of cells with no usable
//! headers, so this module works out structure from content shape alone.
//!
//! - `classify` decides what one token looks like (a name, a level tag, a link,
//!   an evidence marker). Pure, total, no state.
//! - `register` walks the token stream from the anchor, opens a record at every
//!   name and fills its fields from a short lookahead window.
//!
//! Neither does any I/O. Fetching lives in `feed`, holding results in `store`,
//! filtering in `data`.
//!
//! ```text
//! runner::load → feed::fetch_rows → register::parse → store::RecordSet
//! ```
pub mod classify;
pub mod register;
