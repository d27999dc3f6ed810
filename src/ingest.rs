//! Input discovery and parsing.
//!
//! The input folder is scanned non-recursively for `*.json` files. Each file
//! holds either an array of prayer/psalm records or a single object, which is
//! a Bible book when its `type` is `"bible_book"` and an item otherwise.
//!
//! A file is decoded completely before anything is written, so a malformed
//! file never produces partial output.

use crate::types::{ContentRecord, Record};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected an array or an object at the top level, found {0}")]
    UnsupportedRoot(&'static str),
}

/// All `.json` files directly inside `dir`, sorted by path.
pub fn json_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.is_file()
                && p.extension()
                    .map(|e| e == "json")
                    .unwrap_or(false)
        })
        .collect();

    files.sort();
    Ok(files)
}

/// Read and classify every record in one input file.
pub fn load_file(path: &Path) -> Result<Vec<Record>, IngestError> {
    let content = fs::read_to_string(path)?;
    parse_records(&content)
}

/// Classify the records in a JSON document.
///
/// Array elements are always items, even if one carries a `bible_book` tag.
pub fn parse_records(content: &str) -> Result<Vec<Record>, IngestError> {
    let value: Value = serde_json::from_str(content)?;
    match value {
        Value::Array(_) => {
            let items: Vec<ContentRecord> = serde_json::from_value(value)?;
            Ok(items.into_iter().map(Record::Item).collect())
        }
        Value::Object(_) => Ok(vec![Record::from_object(value)?]),
        Value::Null => Err(IngestError::UnsupportedRoot("null")),
        Value::Bool(_) => Err(IngestError::UnsupportedRoot("a boolean")),
        Value::Number(_) => Err(IngestError::UnsupportedRoot("a number")),
        Value::String(_) => Err(IngestError::UnsupportedRoot("a string")),
    }
}
