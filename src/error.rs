//! Error types for layoutgen
//!
//! Hard failures are `LayoutError`. Expected outcomes of a run (missing root,
//! empty tree, existing layout) are reported through `RunStatus` instead and
//! only become errors at the fire-and-forget entry point.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// Result type alias for layoutgen operations
pub type LayoutResult<T> = Result<T, LayoutError>;

/// Expected validation outcomes that stop a run before anything is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationFailure {
    /// Root path is missing or not a directory
    RootNotFound,
    /// `manifest.json` is required but absent
    ManifestMissing,
    /// The scan found no files at all
    NoFilesFound,
    /// Every scanned file was excluded, too long or unreadable
    NoValidFiles,
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ValidationFailure::RootNotFound => "directory does not exist",
            ValidationFailure::ManifestMissing => "manifest.json not found",
            ValidationFailure::NoFilesFound => "no files found",
            ValidationFailure::NoValidFiles => "no valid files to include",
        };
        f.write_str(msg)
    }
}

/// Main error type for layoutgen operations
#[derive(Error, Debug)]
pub enum LayoutError {
    /// A validation failure surfaced by the fire-and-forget entry point
    #[error("{failure}: {path}")]
    Validation {
        failure: ValidationFailure,
        path: PathBuf,
    },

    /// A directory along the walk could not be listed
    #[error("failed to read directory {path}: {message}")]
    DirectoryRead { path: PathBuf, message: String },

    /// manifest.json could not be read or parsed
    #[error("failed to read manifest {path}: {message}")]
    ManifestRead { path: PathBuf, message: String },

    /// manifest.json could not be written
    #[error("failed to write manifest {path}: {message}")]
    ManifestWrite { path: PathBuf, message: String },

    /// layout.json could not be serialized or written
    #[error("failed to write layout {path}: {message}")]
    LayoutWrite { path: PathBuf, message: String },

    /// The filesystem notification backend could not be set up
    #[error("watch error: {message}")]
    Watch { message: String },

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    Config { file: PathBuf, message: String },
}

impl LayoutError {
    pub fn validation(failure: ValidationFailure, path: impl Into<PathBuf>) -> Self {
        LayoutError::Validation {
            failure,
            path: path.into(),
        }
    }

    /// Manifest failures happen after layout.json has already been written
    pub fn is_manifest_error(&self) -> bool {
        matches!(
            self,
            LayoutError::ManifestRead { .. } | LayoutError::ManifestWrite { .. }
        )
    }
}
