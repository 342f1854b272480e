//! JSON Manifest Repository
//!
//! Rewrites `total_package_size` in a package's `manifest.json`, leaving every
//! other key (and the key order) untouched.

use std::path::Path;

use serde_json::Value;

use crate::domain::entities::normalize_line_endings;
use crate::domain::ports::{
    FileSystem, ManifestError, ManifestRepository, ManifestUpdate,
};
use crate::domain::ports::manifest_repository::ManifestResult;
use crate::infrastructure::fs::LocalFs;

/// Key holding the installed size of the package
pub const TOTAL_SIZE_KEY: &str = "total_package_size";

/// The size is stored as a fixed-width, zero-padded decimal string
pub const TOTAL_SIZE_WIDTH: usize = 20;

/// Format a byte count the way manifest.json stores it
pub fn format_total_size(total_size: u64) -> String {
    format!("{:0width$}", total_size, width = TOTAL_SIZE_WIDTH)
}

/// Manifest repository backed by a `FileSystem`
pub struct JsonManifestRepository<FS: FileSystem = LocalFs> {
    fs: FS,
}

impl JsonManifestRepository<LocalFs> {
    pub fn new() -> Self {
        Self { fs: LocalFs::new() }
    }
}

impl Default for JsonManifestRepository<LocalFs> {
    fn default() -> Self {
        Self::new()
    }
}

impl<FS: FileSystem> JsonManifestRepository<FS> {
    pub fn with_fs(fs: FS) -> Self {
        Self { fs }
    }
}

impl<FS: FileSystem> ManifestRepository for JsonManifestRepository<FS> {
    fn update_total_size(&self, path: &Path, total_size: u64) -> ManifestResult<ManifestUpdate> {
        let content = self.fs.read(path).map_err(|e| ManifestError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let mut document: Value =
            serde_json::from_str(&content).map_err(|e| ManifestError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let Some(object) = document.as_object_mut() else {
            return Err(ManifestError::Parse {
                path: path.to_path_buf(),
                message: "expected a JSON object".to_string(),
            });
        };

        let Some(field) = object.get_mut(TOTAL_SIZE_KEY) else {
            return Ok(ManifestUpdate::NoSizeField);
        };
        *field = Value::String(format_total_size(total_size));

        let rendered = serde_json::to_string_pretty(&document).map_err(|e| ManifestError::Write {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        self.fs
            .write(path, &normalize_line_endings(&rendered))
            .map_err(|e| ManifestError::Write {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        Ok(ManifestUpdate::Updated)
    }
}
