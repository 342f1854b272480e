//! ManifestRepository port - abstraction for metadata document updates
//!
//! The only field ever touched is `total_package_size`, and only when the
//! document already declares it.

use std::path::{Path, PathBuf};

use crate::error::LayoutError;

/// Result type for manifest operations
pub type ManifestResult<T> = Result<T, ManifestError>;

/// Manifest operation errors
#[derive(Debug)]
pub enum ManifestError {
    /// The document could not be read
    Read { path: PathBuf, message: String },
    /// The document is not a valid JSON object
    Parse { path: PathBuf, message: String },
    /// The updated document could not be written
    Write { path: PathBuf, message: String },
}

impl std::fmt::Display for ManifestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ManifestError::Read { path, message } => {
                write!(f, "cannot read {}: {}", path.display(), message)
            }
            ManifestError::Parse { path, message } => {
                write!(f, "invalid manifest {}: {}", path.display(), message)
            }
            ManifestError::Write { path, message } => {
                write!(f, "cannot write {}: {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for ManifestError {}

impl From<ManifestError> for LayoutError {
    fn from(err: ManifestError) -> Self {
        match err {
            ManifestError::Read { path, message } | ManifestError::Parse { path, message } => {
                LayoutError::ManifestRead { path, message }
            }
            ManifestError::Write { path, message } => LayoutError::ManifestWrite { path, message },
        }
    }
}

/// What an update did to the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestUpdate {
    /// `total_package_size` was rewritten
    Updated,
    /// The document has no `total_package_size` key; nothing was written
    NoSizeField,
}

/// Abstract repository for the package metadata document
pub trait ManifestRepository {
    /// Rewrite `total_package_size` with `total_size` if the key is present
    fn update_total_size(&self, path: &Path, total_size: u64) -> ManifestResult<ManifestUpdate>;
}
