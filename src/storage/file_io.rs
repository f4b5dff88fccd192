//! File I/O helpers for the CSV ledger file
//!
//! Every helper opens the file, does one pass and drops the handle before
//! returning, including on error paths.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, Read, Write};
use std::path::Path;

use serde::Serialize;

use crate::error::LedgerError;

/// What is currently on disk at a ledger path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileState {
    /// No file at all
    Missing,
    /// File exists but holds nothing but whitespace
    Blank,
    /// File has content; `trailing_newline` tells whether the last byte is `\n`
    Content { trailing_newline: bool },
}

impl FileState {
    /// Missing and blank files both need a header before the first row
    pub fn needs_header(&self) -> bool {
        matches!(self, Self::Missing | Self::Blank)
    }
}

/// Inspect the file at `path`
pub fn inspect<P: AsRef<Path>>(path: P) -> Result<FileState, LedgerError> {
    let path = path.as_ref();

    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(FileState::Missing),
        Err(e) => {
            return Err(LedgerError::Storage(format!(
                "Failed to open {}: {}",
                path.display(),
                e
            )))
        }
    };

    let mut contents = Vec::new();
    file.read_to_end(&mut contents)
        .map_err(|e| LedgerError::Storage(format!("Failed to read {}: {}", path.display(), e)))?;

    if contents.iter().all(u8::is_ascii_whitespace) {
        return Ok(FileState::Blank);
    }

    Ok(FileState::Content {
        trailing_newline: contents.last() == Some(&b'\n'),
    })
}

/// Create `path` holding only the header row
///
/// Returns `false` without touching anything if the file already exists.
pub fn create_with_header<P: AsRef<Path>>(path: P, columns: &[&str]) -> Result<bool, LedgerError> {
    let path = path.as_ref();
    ensure_parent(path)?;

    let file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => return Ok(false),
        Err(e) => {
            return Err(LedgerError::Storage(format!(
                "Failed to create {}: {}",
                path.display(),
                e
            )))
        }
    };

    let mut writer = csv::Writer::from_writer(file);
    writer
        .write_record(columns)
        .map_err(|e| LedgerError::Storage(format!("Failed to write header: {}", e)))?;
    writer
        .flush()
        .map_err(|e| LedgerError::Storage(format!("Failed to flush {}: {}", path.display(), e)))?;

    Ok(true)
}

/// Append one serialized record to `path`, creating the file if needed
///
/// When `header` is given it is written first. A missing final newline
/// left by hand edits is repaired so the new row starts on its own line.
pub fn append_record<T, P>(
    path: P,
    record: &T,
    header: Option<&[&str]>,
    repair_newline: bool,
) -> Result<(), LedgerError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    ensure_parent(path)?;

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| LedgerError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    if repair_newline {
        file.write_all(b"\n").map_err(|e| {
            LedgerError::Storage(format!("Failed to write {}: {}", path.display(), e))
        })?;
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    if let Some(columns) = header {
        writer
            .write_record(columns)
            .map_err(|e| LedgerError::Storage(format!("Failed to write header: {}", e)))?;
    }

    writer
        .serialize(record)
        .map_err(|e| LedgerError::Storage(format!("Failed to write row: {}", e)))?;

    writer
        .flush()
        .map_err(|e| LedgerError::Storage(format!("Failed to flush {}: {}", path.display(), e)))?;

    Ok(())
}

/// Open `path` as a CSV reader; `None` if the file does not exist
pub fn open_reader<P: AsRef<Path>>(
    path: P,
) -> Result<Option<csv::Reader<BufReader<File>>>, LedgerError> {
    let path = path.as_ref();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(LedgerError::Storage(format!(
                "Failed to open {}: {}",
                path.display(),
                e
            )))
        }
    };
    let reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(BufReader::new(file));

    Ok(Some(reader))
}

/// Empty a whitespace-only file so the header lands on the first line
pub fn truncate<P: AsRef<Path>>(path: P) -> Result<(), LedgerError> {
    let path = path.as_ref();
    File::create(path)
        .map(drop)
        .map_err(|e| LedgerError::Storage(format!("Failed to truncate {}: {}", path.display(), e)))
}

fn ensure_parent(path: &Path) -> Result<(), LedgerError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            LedgerError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }
    Ok(())
}
