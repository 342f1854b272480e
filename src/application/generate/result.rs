//! Generate Result
//!
//! The terminal report of one generation run.

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::value_objects::PackagePaths;
use crate::error::ValidationFailure;

/// Which outcome a run ended in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    /// layout.json was written (and manifest.json updated where applicable)
    Generated,
    /// layout.json already existed and `force` was off; nothing was touched
    LayoutExists,
    /// A precondition failed before anything was written
    Invalid(ValidationFailure),
    /// A hard failure interrupted the run
    Failed,
}

/// Result of a generate operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessResult {
    pub success: bool,
    pub status: RunStatus,
    pub message: String,
    /// Number of entries in the written layout
    pub file_count: usize,
    pub skipped_files: usize,
    /// Files dropped because their absolute path exceeds the length limit
    pub long_paths: usize,
    /// Content bytes plus the byte length of layout.json
    pub total_size: u64,
    pub layout_path: PathBuf,
    pub manifest_path: PathBuf,
}

impl ProcessResult {
    fn base(paths: &PackagePaths, status: RunStatus, message: String) -> Self {
        Self {
            success: status == RunStatus::Generated,
            status,
            message,
            file_count: 0,
            skipped_files: 0,
            long_paths: 0,
            total_size: 0,
            layout_path: paths.layout().to_path_buf(),
            manifest_path: paths.manifest().to_path_buf(),
        }
    }

    pub fn generated(
        paths: &PackagePaths,
        file_count: usize,
        skipped_files: usize,
        total_size: u64,
    ) -> Self {
        Self {
            file_count,
            skipped_files,
            total_size,
            ..Self::base(
                paths,
                RunStatus::Generated,
                format!("generated layout.json with {} entries", file_count),
            )
        }
    }

    pub fn layout_exists(paths: &PackagePaths) -> Self {
        Self::base(
            paths,
            RunStatus::LayoutExists,
            "layout.json already exists; rerun with force to regenerate".to_string(),
        )
    }

    pub fn invalid(paths: &PackagePaths, failure: ValidationFailure, skipped_files: usize) -> Self {
        Self {
            skipped_files,
            ..Self::base(paths, RunStatus::Invalid(failure), failure.to_string())
        }
    }

    pub fn failed(paths: &PackagePaths, message: impl Into<String>) -> Self {
        Self::base(paths, RunStatus::Failed, message.into())
    }

    pub fn with_long_paths(mut self, long_paths: usize) -> Self {
        self.long_paths = long_paths;
        self
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    /// True when the run deliberately did nothing
    pub fn is_skip(&self) -> bool {
        self.status == RunStatus::LayoutExists
    }
}
