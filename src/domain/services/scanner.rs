//! Directory scanner
//!
//! Depth-first walk that yields every regular file below a root. Links are
//! never descended (the `FileSystem` port reports directory links as
//! `EntryKind::Other`), so cycles cannot occur.

use std::path::{Path, PathBuf};

use crate::domain::ports::{EntryKind, FileSystem};
use crate::error::{LayoutError, LayoutResult};

/// Collect absolute paths of all files under `root`, in no particular order.
///
/// Fails with `DirectoryRead` naming the first directory that cannot be listed.
pub fn scan_files<FS>(fs: &FS, root: &Path) -> LayoutResult<Vec<PathBuf>>
where
    FS: FileSystem + ?Sized,
{
    let mut files = Vec::new();
    scan_recursive(fs, root, &mut files)?;
    Ok(files)
}

fn scan_recursive<FS>(fs: &FS, dir: &Path, files: &mut Vec<PathBuf>) -> LayoutResult<()>
where
    FS: FileSystem + ?Sized,
{
    let entries = fs.read_dir(dir).map_err(|e| LayoutError::DirectoryRead {
        path: dir.to_path_buf(),
        message: e.to_string(),
    })?;

    for entry in entries {
        match entry.kind {
            EntryKind::File => files.push(entry.path),
            EntryKind::Directory => scan_recursive(fs, &entry.path, files)?,
            EntryKind::Other => {}
        }
    }

    Ok(())
}
