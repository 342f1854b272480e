//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::domain::ports::file_system::{
    DirEntry, EntryKind, FileStat, FileSystem, FsError, FsResult,
};
use crate::domain::value_objects::{FileTime, WRITE_TEMP_PREFIX};

/// Local file system implementation
///
/// Writes go to a temporary file in the destination directory which is then
/// renamed over the target, so readers never observe a partial document.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        fs::read_to_string(path).map_err(|e| FsError::from_io(path, e))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        let parent = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let mut tmp = tempfile::Builder::new()
            .prefix(WRITE_TEMP_PREFIX)
            .tempfile_in(parent)
            .map_err(|e| FsError::from_io(parent, e))?;

        tmp.write_all(content.as_bytes())
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|e| FsError::from_io(tmp.path(), e))?;

        // Keep the mode of the document being replaced; new files get the usual 0644.
        if let Some(permissions) = target_permissions(path) {
            tmp.as_file()
                .set_permissions(permissions)
                .map_err(|e| FsError::from_io(tmp.path(), e))?;
        }

        tmp.persist(path)
            .map_err(|e| FsError::from_io(path, e.error))?;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read_dir(&self, path: &Path) -> FsResult<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path).map_err(|e| FsError::from_io(path, e))? {
            let entry = entry.map_err(|e| FsError::from_io(path, e))?;
            let entry_path = entry.path();
            let file_type = entry
                .file_type()
                .map_err(|e| FsError::from_io(&entry_path, e))?;

            let kind = if file_type.is_symlink() {
                // Links are opaque: only a link to a regular file counts
                match fs::metadata(&entry_path) {
                    Ok(target) if target.is_file() => EntryKind::File,
                    _ => EntryKind::Other,
                }
            } else if file_type.is_dir() {
                EntryKind::Directory
            } else if file_type.is_file() {
                EntryKind::File
            } else {
                EntryKind::Other
            };

            entries.push(DirEntry {
                path: entry_path,
                kind,
            });
        }
        Ok(entries)
    }

    fn stat(&self, path: &Path) -> FsResult<FileStat> {
        let metadata = fs::metadata(path).map_err(|e| FsError::from_io(path, e))?;
        let modified = metadata
            .modified()
            .map_err(|e| FsError::from_io(path, e))?;
        Ok(FileStat {
            size: metadata.len(),
            modified: FileTime::from_system_time(modified),
        })
    }
}

fn target_permissions(path: &Path) -> Option<fs::Permissions> {
    match fs::metadata(path) {
        Ok(existing) => Some(existing.permissions()),
        #[cfg(unix)]
        Err(_) => {
            use std::os::unix::fs::PermissionsExt;
            Some(fs::Permissions::from_mode(0o644))
        }
        #[cfg(not(unix))]
        Err(_) => None,
    }
}
