//! Watch event types and options

use std::path::PathBuf;
use std::time::Duration;

use crate::application::generate::{ProcessOptions, ProcessResult, RunStatus};

/// Default debounce window in milliseconds
pub const DEBOUNCE_MS: u64 = 300;

/// Watch options
#[derive(Debug, Clone)]
pub struct WatchOptions {
    /// Package root to watch
    pub root: PathBuf,
    /// Quiet period after the last change before regenerating
    pub debounce: Duration,
    /// Options for every regeneration (`force` is always applied on top)
    pub process: ProcessOptions,
}

impl WatchOptions {
    /// Create new watch options with the default debounce window
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            debounce: Duration::from_millis(DEBOUNCE_MS),
            process: ProcessOptions::default(),
        }
    }

    /// Set the debounce window
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Set the per-run options
    pub fn with_process_options(mut self, process: ProcessOptions) -> Self {
        self.process = process;
        self
    }
}

/// Watch event types for NDJSON output
#[derive(Debug, Clone, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WatchEvent {
    /// Watch started
    WatchStarted { root: String, debounce_ms: u64 },
    /// A settled change that triggered the next regeneration
    FileChanged { path: String },
    /// Regeneration started; `baseline` marks the initial run
    RegenerationStarted { baseline: bool },
    /// Regeneration finished
    RegenerationComplete {
        success: bool,
        status: RunStatus,
        file_count: usize,
        skipped_files: usize,
        /// Files dropped for exceeding the path length limit
        long_paths: usize,
        total_size: u64,
        message: String,
    },
    /// Error occurred; the session continues
    Error { message: String },
    /// Watch stopped
    Shutdown { regenerations: usize },
}

impl WatchEvent {
    pub fn regeneration_complete(result: &ProcessResult) -> Self {
        WatchEvent::RegenerationComplete {
            success: result.success,
            status: result.status,
            file_count: result.file_count,
            skipped_files: result.skipped_files,
            long_paths: result.long_paths,
            total_size: result.total_size,
            message: result.message.clone(),
        }
    }

    /// Convert to JSON string with "command": "watch" field included
    pub fn to_json(&self) -> String {
        let mut value =
            serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!({"event": "error"}));
        if let Some(obj) = value.as_object_mut() {
            obj.insert("command".to_string(), serde_json::json!("watch"));
        }
        serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string())
    }
}
