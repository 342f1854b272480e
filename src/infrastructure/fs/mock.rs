//! In-memory file system for tests
//!
//! Uses `Arc<Mutex<>>` internally so it can be cloned and shared.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::ports::file_system::{
    DirEntry, EntryKind, FileStat, FileSystem, FsError, FsResult,
};
use crate::domain::value_objects::FileTime;

#[derive(Debug, Clone)]
struct MockFile {
    content: String,
    modified_ms: i64,
}

#[derive(Debug, Default)]
struct MockState {
    files: BTreeMap<PathBuf, MockFile>,
    dirs: BTreeSet<PathBuf>,
    unreadable_dirs: HashSet<PathBuf>,
    unstattable: HashSet<PathBuf>,
    writes: Vec<PathBuf>,
}

/// Mock file system for testing
///
/// `read_dir` lists children in reverse path order so callers cannot rely
/// on enumeration order.
#[derive(Clone, Default)]
pub struct MockFileSystem {
    state: Arc<Mutex<MockState>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let mut state = self.state.lock().unwrap();
        for ancestor in path.as_ref().ancestors() {
            state.dirs.insert(ancestor.to_path_buf());
        }
    }

    pub fn add_file(&self, path: impl AsRef<Path>, content: &str, modified_ms: i64) {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self.add_dir(parent);
        }
        self.state.lock().unwrap().files.insert(
            path.to_path_buf(),
            MockFile {
                content: content.to_string(),
                modified_ms,
            },
        );
    }

    /// Make `read_dir` fail for this directory
    pub fn deny_read_dir(&self, path: impl AsRef<Path>) {
        self.state
            .lock()
            .unwrap()
            .unreadable_dirs
            .insert(path.as_ref().to_path_buf());
    }

    /// Keep the file listed but make `stat` fail, as if it vanished mid-scan
    pub fn fail_stat(&self, path: impl AsRef<Path>) {
        self.state
            .lock()
            .unwrap()
            .unstattable
            .insert(path.as_ref().to_path_buf());
    }

    pub fn content(&self, path: impl AsRef<Path>) -> Option<String> {
        self.state
            .lock()
            .unwrap()
            .files
            .get(path.as_ref())
            .map(|f| f.content.clone())
    }

    /// Paths written through `FileSystem::write`, in order
    pub fn writes(&self) -> Vec<PathBuf> {
        self.state.lock().unwrap().writes.clone()
    }
}

impl FileSystem for MockFileSystem {
    fn read(&self, path: &Path) -> FsResult<String> {
        self.content(path)
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        let mut state = self.state.lock().unwrap();
        state.writes.push(path.to_path_buf());
        state.files.insert(
            path.to_path_buf(),
            MockFile {
                content: content.to_string(),
                modified_ms: 0,
            },
        );
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let state = self.state.lock().unwrap();
        state.files.contains_key(path) || state.dirs.contains(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.state.lock().unwrap().dirs.contains(path)
    }

    fn read_dir(&self, path: &Path) -> FsResult<Vec<DirEntry>> {
        let state = self.state.lock().unwrap();
        if state.unreadable_dirs.contains(path) {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        if !state.dirs.contains(path) {
            return Err(FsError::NotFound(path.to_path_buf()));
        }

        let dirs = state
            .dirs
            .iter()
            .filter(|d| d.parent() == Some(path))
            .map(|d| DirEntry {
                path: d.clone(),
                kind: EntryKind::Directory,
            });
        let files = state
            .files
            .keys()
            .filter(|f| f.parent() == Some(path))
            .map(|f| DirEntry {
                path: f.clone(),
                kind: EntryKind::File,
            });

        let mut entries: Vec<DirEntry> = dirs.chain(files).collect();
        entries.sort_by(|a, b| b.path.cmp(&a.path));
        Ok(entries)
    }

    fn stat(&self, path: &Path) -> FsResult<FileStat> {
        let state = self.state.lock().unwrap();
        if state.unstattable.contains(path) {
            return Err(FsError::NotFound(path.to_path_buf()));
        }
        state
            .files
            .get(path)
            .map(|f| FileStat {
                size: f.content.len() as u64,
                modified: FileTime::from_unix_millis(f.modified_ms),
            })
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }
}
