//! Layout Event Port
//!
//! Provides an observable interface for layout generation.
//! Enables console progress, JSON event streams, and debug diagnostics
//! without a process-wide logger.

use std::path::PathBuf;

/// Event emitted during a layout generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutEvent {
    /// Run started for a package root
    Started { root: PathBuf, force: bool },

    /// Directory walk finished
    Scanned { file_count: usize },

    /// A file was left out of the content list (debug detail)
    FileSkipped { path: PathBuf, reason: String },

    /// Files were dropped because their absolute path is too long
    LongPathsSkipped { count: usize, limit: usize },

    /// layout.json was written
    LayoutWritten {
        path: PathBuf,
        entries: usize,
        bytes: usize,
    },

    /// total_package_size was rewritten
    ManifestUpdated { path: PathBuf, total_size: u64 },

    /// manifest.json was left untouched
    ManifestSkipped { path: PathBuf, reason: String },

    /// Run finished successfully
    Completed {
        file_count: usize,
        skipped_files: usize,
        total_size: u64,
    },
}

/// Trait for receiving layout events
///
/// Implementations can be:
/// - ConsoleEventSink: Human-readable terminal output
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait LayoutEventSink: Send + Sync {
    /// Handle a layout event
    fn on_event(&self, event: LayoutEvent);

    /// Check if this sink wants per-file detail events
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl LayoutEventSink for NoopEventSink {
    fn on_event(&self, _event: LayoutEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
