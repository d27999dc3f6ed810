//! Writes rendered documents to disk.

use crate::frontmatter::Document;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("cannot create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Write `doc` to its path, creating parent directories as needed.
///
/// Any existing file is replaced outright.
pub fn write_document(doc: &Document) -> Result<(), WriteError> {
    if let Some(parent) = doc.path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| WriteError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(&doc.path, doc.render()).map_err(|source| WriteError::Write {
        path: doc.path.clone(),
        source,
    })?;
    tracing::debug!(path = %doc.path.display(), "wrote document");
    Ok(())
}
