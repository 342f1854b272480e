//! FileSystem port - abstraction over file I/O operations
//!
//! Lets the domain walk and stat a package tree and write documents without
//! depending on a concrete implementation (local disk, in-memory mock).

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::value_objects::FileTime;

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug, Error)]
pub enum FsError {
    /// File not found
    #[error("not found: {}", .0.display())]
    NotFound(PathBuf),
    /// Permission denied
    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),
    /// I/O error
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Other error
    #[error("{0}")]
    Other(String),
}

impl FsError {
    /// Classify an I/O error, keeping the path that caused it
    pub fn from_io(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }
}

/// Kind of a directory entry, as seen without following links
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Regular file, or a link whose target is a regular file
    File,
    /// Real directory (never a link)
    Directory,
    /// Anything else: links to directories, dangling links, sockets, devices
    Other,
}

/// One entry returned by `FileSystem::read_dir`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// Size and modification time of a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStat {
    pub size: u64,
    pub modified: FileTime,
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O with atomic writes
/// - `MockFileSystem` - in-memory for testing
pub trait FileSystem {
    /// Read file content as string
    fn read(&self, path: &Path) -> FsResult<String>;

    /// Write content to file atomically, replacing any existing file
    fn write(&self, path: &Path, content: &str) -> FsResult<()>;

    /// Check if a file or directory exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// List the direct children of a directory (order unspecified)
    fn read_dir(&self, path: &Path) -> FsResult<Vec<DirEntry>>;

    /// Size and modification time of a file
    fn stat(&self, path: &Path) -> FsResult<FileStat>;
}
