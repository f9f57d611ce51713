// src/csv.rs
use std::io::{self, Write};

use crate::config::consts::EXPORT_HEADERS;
use crate::store::Record;

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Column order matches `EXPORT_HEADERS`.
pub fn record_row(r: &Record) -> [&str; 6] {
    [
        &r.name,
        &r.social_handle,
        &r.citation_url,
        &r.evidence_marker,
        &r.category_tags,
        &r.id,
    ]
}

/// Whole export as one string.
pub fn records_to_string<'a>(
    records: impl IntoIterator<Item = &'a Record>,
    include_headers: bool,
    sep: char,
) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if include_headers {
        let _ = write_row(&mut buf, &EXPORT_HEADERS, sep);
    }
    for r in records {
        let _ = write_row(&mut buf, &record_row(r), sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
