//! Line renderers for human output

use std::path::Path;

use crossterm::style::{StyledContent, Stylize};
use layoutgen::config::ConfigWarning;
use layoutgen::domain::value_objects::MAX_PATH_CHARS;
use layoutgen::{ProcessResult, RunStatus, WatchEvent};

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const SKIP: &str = "○";
    pub const WATCH: &str = "⟳";
    pub const CHANGE: &str = "↳";
}

fn paint(text: &str, color: bool, style: fn(&str) -> StyledContent<&str>) -> String {
    if color {
        style(text).to_string()
    } else {
        text.to_string()
    }
}

fn green(text: &str) -> StyledContent<&str> {
    text.green()
}

fn red(text: &str) -> StyledContent<&str> {
    text.red()
}

fn yellow(text: &str) -> StyledContent<&str> {
    text.yellow()
}

fn cyan(text: &str) -> StyledContent<&str> {
    text.cyan()
}

fn dim(text: &str) -> StyledContent<&str> {
    text.dark_grey()
}

pub fn render_config_warning(warning: &ConfigWarning, color: bool) -> String {
    let location = match warning.line {
        Some(line) => format!("{}:{}", warning.file.display(), line),
        None => warning.file.display().to_string(),
    };
    let mut text = format!(
        "{} unknown config key '{}' in {}",
        paint(icons::WARNING, color, yellow),
        warning.key,
        location
    );
    if let Some(suggestion) = &warning.suggestion {
        text.push_str(&format!(" (did you mean '{}'?)", suggestion));
    }
    text
}

/// Line for a generate outcome the event stream does not already cover.
///
/// Returns `(line, to_stderr)`; `None` for successful runs.
pub fn render_process_result(
    dir: &Path,
    result: &ProcessResult,
    color: bool,
) -> Option<(String, bool)> {
    match result.status {
        RunStatus::Generated => None,
        RunStatus::LayoutExists => Some((
            format!(
                "{} {}: {}",
                paint(icons::SKIP, color, dim),
                dir.display(),
                result.message
            ),
            false,
        )),
        RunStatus::Invalid(_) | RunStatus::Failed => Some((
            format!(
                "{} {}: {}",
                paint(icons::ERROR, color, red),
                dir.display(),
                result.message
            ),
            true,
        )),
    }
}

/// Line for a watch event. Returns `(line, to_stderr)`; `None` when the
/// event has nothing to show at this verbosity.
pub fn render_watch_event(
    timestamp: &str,
    event: &WatchEvent,
    color: bool,
    quiet: bool,
) -> Option<(String, bool)> {
    let stamp = paint(&format!("[{timestamp}]"), color, dim);

    match event {
        WatchEvent::WatchStarted { root, debounce_ms } => Some((
            format!(
                "{} Watching {} (debounce {} ms). Press Ctrl+C to stop.",
                paint(icons::WATCH, color, cyan),
                root,
                debounce_ms
            ),
            false,
        )),
        WatchEvent::FileChanged { path } if !quiet => Some((
            format!("{} {} {}", stamp, paint(icons::CHANGE, color, dim), path),
            false,
        )),
        WatchEvent::RegenerationStarted { baseline } if !quiet => {
            let what = if *baseline {
                "Generating baseline layout"
            } else {
                "Regenerating layout"
            };
            Some((format!("{} {}", stamp, what), false))
        }
        WatchEvent::RegenerationComplete {
            success: true,
            long_paths,
            ..
        } if quiet && *long_paths > 0 => Some((
            format!(
                "{} {} {} file(s) skipped: absolute path longer than {} characters",
                stamp,
                paint(icons::WARNING, color, yellow),
                long_paths,
                MAX_PATH_CHARS
            ),
            true,
        )),
        WatchEvent::RegenerationComplete {
            success: true,
            file_count,
            skipped_files,
            long_paths,
            total_size,
            ..
        } if !quiet => {
            let mut line = format!(
                "{} {} {} files listed, {} skipped, {} bytes total",
                stamp,
                paint(icons::SUCCESS, color, green),
                file_count,
                skipped_files,
                total_size
            );
            if *long_paths > 0 {
                line.push_str(&format!(
                    " {} {} over the {}-character path limit",
                    paint(icons::WARNING, color, yellow),
                    long_paths,
                    MAX_PATH_CHARS
                ));
            }
            Some((line, false))
        }
        WatchEvent::Error { message } => Some((
            format!("{} {} {}", stamp, paint(icons::ERROR, color, red), message),
            true,
        )),
        WatchEvent::Shutdown { regenerations } => Some((
            format!(
                "Stopped watching after {} regeneration{}",
                regenerations,
                if *regenerations == 1 { "" } else { "s" }
            ),
            false,
        )),
        _ => None,
    }
}
