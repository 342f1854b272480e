use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use layoutgen::domain::ports::LayoutEventSink;
use layoutgen::infrastructure::{ConsoleEventSink, JsonEventSink};
use layoutgen::{Config, GenerateUseCase, ProcessResult};

use crate::cli::RunArgs;
use crate::ui::context::UiContext;
use crate::ui::views::render_process_result;

/// Generate each directory in turn. Returns false if any run failed;
/// an existing layout is a skip, not a failure.
pub fn cmd_generate(dirs: &[PathBuf], run: &RunArgs, ui: &UiContext, config: &Config) -> Result<bool> {
    let options = run.to_options();
    let mut all_ok = true;

    for dir in dirs {
        let sink: Arc<dyn LayoutEventSink> = if ui.json {
            Arc::new(JsonEventSink::stdout())
        } else {
            Arc::new(ConsoleEventSink::stdio(run.quiet, ui.color))
        };

        let use_case = GenerateUseCase::local()
            .with_filter(config.exclusion_filter())
            .with_event_sink(sink);
        let result = use_case.process(dir, &options);

        if ui.json {
            println!("{}", result_json(dir, &result));
        } else if let Some((line, to_stderr)) = render_process_result(dir, &result, ui.color) {
            if to_stderr {
                eprintln!("{line}");
            } else if !run.quiet {
                println!("{line}");
            }
        }

        all_ok &= result.success || result.is_skip();
    }

    Ok(all_ok)
}

/// Final NDJSON line for one directory
fn result_json(dir: &Path, result: &ProcessResult) -> String {
    let mut value = serde_json::to_value(result).unwrap_or_else(|_| serde_json::json!({}));
    if let Some(obj) = value.as_object_mut() {
        obj.insert("event".to_string(), serde_json::json!("result"));
        obj.insert("command".to_string(), serde_json::json!("generate"));
        obj.insert(
            "directory".to_string(),
            serde_json::json!(dir.display().to_string()),
        );
    }
    value.to_string()
}
