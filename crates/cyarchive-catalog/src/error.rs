//! Catalog error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading the catalog.
///
/// Every variant is fatal: the loader never returns a partial catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A directory could not be listed.
    #[error("failed to read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A text file could not be read.
    #[error("failed to read file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CatalogError {
    /// Path of the entry that failed.
    pub fn path(&self) -> &PathBuf {
        match self {
            CatalogError::ReadDir { path, .. } | CatalogError::ReadFile { path, .. } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
