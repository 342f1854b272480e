//! Layout builder
//!
//! Turns scanned file paths and their stats into a sorted `LayoutDocument`,
//! accumulating the package's total size along the way.
//!
//! Per file, in order:
//! 1. root-level `layout.json` / `manifest.json` are ignored entirely
//! 2. absolute paths over `MAX_PATH_CHARS` are dropped (no size, no entry)
//! 3. stat failures count as skipped
//! 4. the size is added to the total, excluded or not
//! 5. excluded files count as skipped
//! 6. everything else becomes a `ContentEntry`

use std::path::{Component, Path};

use crate::domain::entities::{ContentEntry, LayoutDocument};
use crate::domain::policies::ExclusionFilter;
use crate::domain::ports::{FileStat, FsResult};
use crate::domain::value_objects::{PackagePaths, MAX_PATH_CHARS};
use crate::error::ValidationFailure;

/// What happened to one scanned file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileDisposition {
    PackageDocument,
    TooLong,
    StatFailed(String),
    Excluded,
    Included,
}

/// A finished layout plus the counters collected while building it
#[derive(Debug, Clone)]
pub struct BuiltLayout {
    pub document: LayoutDocument,
    /// Files seen by the scan, package documents not counted
    pub scanned: usize,
    /// Sum of sizes of every stat'ed file within the path limit
    pub total_size: u64,
    pub skipped_files: usize,
    pub long_paths: usize,
}

/// Why a build produced no document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildRejected {
    pub failure: ValidationFailure,
    pub skipped_files: usize,
    pub long_paths: usize,
}

/// Incremental layout builder for one package root
pub struct LayoutBuilder<'a> {
    paths: &'a PackagePaths,
    filter: &'a ExclusionFilter,
    entries: Vec<ContentEntry>,
    scanned: usize,
    total_size: u64,
    skipped_files: usize,
    long_paths: usize,
}

impl<'a> LayoutBuilder<'a> {
    pub fn new(paths: &'a PackagePaths, filter: &'a ExclusionFilter) -> Self {
        Self {
            paths,
            filter,
            entries: Vec::new(),
            scanned: 0,
            total_size: 0,
            skipped_files: 0,
            long_paths: 0,
        }
    }

    /// Classify one absolute path, stat'ing it through `stat` when needed.
    pub fn add_file<F>(&mut self, path: &Path, stat: F) -> FileDisposition
    where
        F: FnOnce(&Path) -> FsResult<FileStat>,
    {
        if self.paths.is_package_document(path) {
            return FileDisposition::PackageDocument;
        }
        self.scanned += 1;

        if path.as_os_str().to_string_lossy().chars().count() > MAX_PATH_CHARS {
            self.long_paths += 1;
            return FileDisposition::TooLong;
        }

        let relative = relative_layout_path(self.paths.root(), path);

        let file_stat = match stat(path) {
            Ok(s) => s,
            Err(e) => {
                self.skipped_files += 1;
                return FileDisposition::StatFailed(e.to_string());
            }
        };

        self.total_size += file_stat.size;

        if self.filter.is_excluded(&relative) {
            self.skipped_files += 1;
            return FileDisposition::Excluded;
        }

        self.entries
            .push(ContentEntry::new(relative, file_stat.size, file_stat.modified));
        FileDisposition::Included
    }

    pub fn finish(self) -> Result<BuiltLayout, BuildRejected> {
        let failure = if self.scanned == 0 {
            Some(ValidationFailure::NoFilesFound)
        } else if self.entries.is_empty() {
            Some(ValidationFailure::NoValidFiles)
        } else {
            None
        };

        if let Some(failure) = failure {
            return Err(BuildRejected {
                failure,
                skipped_files: self.skipped_files,
                long_paths: self.long_paths,
            });
        }

        Ok(BuiltLayout {
            document: LayoutDocument::new(self.entries),
            scanned: self.scanned,
            total_size: self.total_size,
            skipped_files: self.skipped_files,
            long_paths: self.long_paths,
        })
    }
}

/// Path of `path` relative to `root`, joined with `/`.
pub fn relative_layout_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
