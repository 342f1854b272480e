//! Package document locations

use std::path::{Path, PathBuf};

/// File name of the generated layout document
pub const LAYOUT_FILE_NAME: &str = "layout.json";

/// File name of the package metadata document
pub const MANIFEST_FILE_NAME: &str = "manifest.json";

/// Prefix of the temporary files used for atomic writes
pub const WRITE_TEMP_PREFIX: &str = ".layoutgen-";

/// Absolute paths longer than this are left out of the layout
pub const MAX_PATH_CHARS: usize = 259;

/// Locations of the two package documents for one root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackagePaths {
    root: PathBuf,
    layout: PathBuf,
    manifest: PathBuf,
}

impl PackagePaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            layout: root.join(LAYOUT_FILE_NAME),
            manifest: root.join(MANIFEST_FILE_NAME),
            root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn layout(&self) -> &Path {
        &self.layout
    }

    pub fn manifest(&self) -> &Path {
        &self.manifest
    }

    /// True for `layout.json` and `manifest.json` directly under the root.
    ///
    /// These are package documents, not package content.
    pub fn is_package_document(&self, path: &Path) -> bool {
        path == self.layout || path == self.manifest
    }

    /// True for files written by the atomic writer before they are renamed.
    pub fn is_write_temp(path: &Path) -> bool {
        path.file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.starts_with(WRITE_TEMP_PREFIX))
            .unwrap_or(false)
    }
}
