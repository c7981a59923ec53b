//! File IO boundary.
//!
//! Synchronous and minimal: the engine only talks to a `Storage`, so hosts
//! can swap the filesystem for something else (tests use an in-memory store).
//! Loading re-applies the trailing newline invariant through
//! `Document::from_bytes`; saving writes the bytes verbatim.

use core_text::Document;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Side effect requested by a Leader command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoRequest {
    Load,
    Save,
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no file name")]
    NoFileName,
}

/// Filesystem collaborator used for load/save.
pub trait Storage {
    fn load(&self, path: &Path) -> Result<Document, StorageError>;
    fn save(&self, path: &Path, text: &Document) -> Result<(), StorageError>;
}

/// `Storage` over `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsStorage;

impl Storage for FsStorage {
    fn load(&self, path: &Path) -> Result<Document, StorageError> {
        let bytes = std::fs::read(path).map_err(|source| StorageError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(
            target: "io",
            file = %path.display(),
            size_bytes = bytes.len(),
            "file_read_ok"
        );
        Ok(Document::from_bytes(bytes))
    }

    fn save(&self, path: &Path, text: &Document) -> Result<(), StorageError> {
        std::fs::write(path, text.as_bytes()).map_err(|source| StorageError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(
            target: "io",
            file = %path.display(),
            size_bytes = text.len(),
            "file_write_ok"
        );
        Ok(())
    }
}
