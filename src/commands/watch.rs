use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use layoutgen::infrastructure::ConsoleEventSink;
use layoutgen::{Config, WatchHandle, WatchOptions, WatchUseCase};

use crate::cli::RunArgs;
use crate::ui::context::UiContext;
use crate::ui::views::render_watch_event;

pub fn cmd_watch(
    dir: &Path,
    debounce_ms: Option<u64>,
    run: &RunArgs,
    ui: &UiContext,
    config: &Config,
) -> Result<()> {
    let debounce = Duration::from_millis(debounce_ms.unwrap_or(config.watch.debounce_ms));
    let options = WatchOptions::new(dir)
        .with_debounce(debounce)
        .with_process_options(run.to_options());

    let mut use_case = WatchUseCase::new(options).with_filter(config.exclusion_filter());
    if run.debug && !ui.json {
        use_case = use_case.with_event_sink(Arc::new(ConsoleEventSink::stdio(run.quiet, ui.color)));
    }

    // Set up Ctrl+C handler
    let handle = WatchHandle::new();
    let stopper = handle.clone();
    ctrlc::set_handler(move || stopper.stop()).context("failed to install Ctrl+C handler")?;

    let json = ui.json;
    let color = ui.color;
    let quiet = run.quiet;
    use_case.start(&handle, |event| {
        if json {
            println!("{}", event.to_json());
            return;
        }

        let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
        if let Some((line, to_stderr)) = render_watch_event(&timestamp, &event, color, quiet) {
            if to_stderr {
                eprintln!("{line}");
            } else {
                println!("{line}");
            }
        }
    })?;

    Ok(())
}
