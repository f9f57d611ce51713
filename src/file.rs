// src/file.rs

use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use thiserror::Error;

use crate::config::options::{ExportFormat, ExportOptions};
use crate::csv::records_to_string;
use crate::render;
use crate::store::Record;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("could not write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("could not serialize records: {0}")]
    Json(#[from] serde_json::Error),
}

/// Render records in the requested format. `records` is already in output order.
pub fn render_records(export: &ExportOptions, records: &[&Record]) -> Result<String, ExportError> {
    let out = match export.format {
        ExportFormat::Cards => render::cards(records.iter().copied()),
        ExportFormat::Csv | ExportFormat::Tsv => {
            let sep = export.format.delimiter().unwrap_or(',');
            records_to_string(records.iter().copied(), export.include_headers, sep)
        }
        ExportFormat::Json => {
            let mut s = serde_json::to_string_pretty(records)?;
            s.push('\n');
            s
        }
    };
    Ok(out)
}

/// Write to `export.out_path`, or stdout when unset.
pub fn write_output(export: &ExportOptions, contents: &str) -> Result<(), ExportError> {
    match &export.out_path {
        Some(path) => write_file(path, contents),
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            lock.write_all(contents.as_bytes())
                .and_then(|_| lock.flush())
                .map_err(|source| ExportError::Io { path: s!("<stdout>"), source })
        }
    }
}

pub fn write_file(path: &Path, contents: &str) -> Result<(), ExportError> {
    let io_err = |source: io::Error| ExportError::Io { path: path.display().to_string(), source };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent).map_err(io_err)?;
        }
    }
    fs::write(path, contents).map_err(io_err)
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
