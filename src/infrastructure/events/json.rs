//! JSON Event Sink
//!
//! Outputs layout events as NDJSON for CI/automation consumption.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{LayoutEvent, LayoutEventSink};

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl LayoutEventSink for JsonEventSink {
    fn on_event(&self, event: LayoutEvent) {
        let json = match event {
            LayoutEvent::Started { root, force } => serde_json::json!({
                "event": "start",
                "command": "generate",
                "root": root.display().to_string(),
                "force": force,
            }),

            LayoutEvent::Scanned { file_count } => serde_json::json!({
                "event": "scanned",
                "command": "generate",
                "file_count": file_count,
            }),

            LayoutEvent::FileSkipped { path, reason } => serde_json::json!({
                "event": "file_skipped",
                "command": "generate",
                "path": path.display().to_string(),
                "reason": reason,
            }),

            LayoutEvent::LongPathsSkipped { count, limit } => serde_json::json!({
                "event": "long_paths_skipped",
                "command": "generate",
                "count": count,
                "limit": limit,
            }),

            LayoutEvent::LayoutWritten {
                path,
                entries,
                bytes,
            } => serde_json::json!({
                "event": "layout_written",
                "command": "generate",
                "path": path.display().to_string(),
                "entries": entries,
                "bytes": bytes,
            }),

            LayoutEvent::ManifestUpdated { path, total_size } => serde_json::json!({
                "event": "manifest_updated",
                "command": "generate",
                "path": path.display().to_string(),
                "total_size": total_size,
            }),

            LayoutEvent::ManifestSkipped { path, reason } => serde_json::json!({
                "event": "manifest_skipped",
                "command": "generate",
                "path": path.display().to_string(),
                "reason": reason,
            }),

            LayoutEvent::Completed {
                file_count,
                skipped_files,
                total_size,
            } => serde_json::json!({
                "event": "complete",
                "command": "generate",
                "file_count": file_count,
                "skipped_files": skipped_files,
                "total_size": total_size,
            }),
        };

        self.write_event(json);
    }
}
