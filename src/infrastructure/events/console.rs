//! Console Event Sink
//!
//! Human-readable progress output. Informational lines go to stdout and are
//! suppressed in quiet mode; warnings go to stderr and are always shown.

use std::io::{self, Write};
use std::sync::Mutex;

use crossterm::style::Stylize;

use crate::domain::ports::{LayoutEvent, LayoutEventSink};

const ICON_OK: &str = "✓";
const ICON_WARN: &str = "⚠";
const ICON_DOT: &str = "·";

pub struct ConsoleEventSink {
    quiet: bool,
    color: bool,
    out: Mutex<Box<dyn Write + Send>>,
    err: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    pub fn stdio(quiet: bool, color: bool) -> Self {
        Self::with_writers(quiet, color, io::stdout(), io::stderr())
    }

    pub fn with_writers<O, E>(quiet: bool, color: bool, out: O, err: E) -> Self
    where
        O: Write + Send + 'static,
        E: Write + Send + 'static,
    {
        Self {
            quiet,
            color,
            out: Mutex::new(Box::new(out)),
            err: Mutex::new(Box::new(err)),
        }
    }

    fn info(&self, line: String) {
        if self.quiet {
            return;
        }
        if let Ok(mut out) = self.out.lock() {
            let _ = writeln!(out, "{line}");
        }
    }

    fn warn(&self, line: String) {
        if let Ok(mut err) = self.err.lock() {
            let _ = writeln!(err, "{line}");
        }
    }

    fn ok_icon(&self) -> String {
        if self.color {
            ICON_OK.green().to_string()
        } else {
            ICON_OK.to_string()
        }
    }

    fn warn_icon(&self) -> String {
        if self.color {
            ICON_WARN.yellow().to_string()
        } else {
            ICON_WARN.to_string()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.color {
            text.dark_grey().to_string()
        } else {
            text.to_string()
        }
    }
}

impl LayoutEventSink for ConsoleEventSink {
    fn on_event(&self, event: LayoutEvent) {
        match event {
            LayoutEvent::Started { root, force } => {
                let suffix = if force { " (force)" } else { "" };
                self.info(format!("Generating layout for {}{}", root.display(), suffix));
            }
            LayoutEvent::Scanned { file_count } => {
                self.info(format!("  {} Scanned {} files", self.dim(ICON_DOT), file_count));
            }
            LayoutEvent::FileSkipped { path, reason } => {
                self.info(self.dim(&format!("    skip {} ({})", path.display(), reason)));
            }
            LayoutEvent::LongPathsSkipped { count, limit } => {
                self.warn(format!(
                    "{} {} file(s) skipped: absolute path longer than {} characters",
                    self.warn_icon(),
                    count,
                    limit
                ));
            }
            LayoutEvent::LayoutWritten { path, entries, .. } => {
                self.info(format!(
                    "  {} Wrote {} ({} entries)",
                    self.ok_icon(),
                    path.display(),
                    entries
                ));
            }
            LayoutEvent::ManifestUpdated { path, total_size } => {
                self.info(format!(
                    "  {} Updated total_package_size in {} ({} bytes)",
                    self.ok_icon(),
                    path.display(),
                    total_size
                ));
            }
            LayoutEvent::ManifestSkipped { path, reason } => {
                self.info(format!(
                    "  {} {} not updated: {}",
                    self.dim(ICON_DOT),
                    path.display(),
                    reason
                ));
            }
            LayoutEvent::Completed {
                file_count,
                skipped_files,
                total_size,
            } => {
                self.info(format!(
                    "{} {} files listed, {} skipped, {} bytes total",
                    self.ok_icon(),
                    file_count,
                    skipped_files,
                    total_size
                ));
            }
        }
    }

    fn wants_detailed_events(&self) -> bool {
        !self.quiet
    }
}
