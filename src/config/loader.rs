//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{LayoutError, LayoutResult};

pub use crate::domain::value_objects::ConfigWarning;

use super::types::{ColorMode, Config};

/// Env var overriding `[watch] debounce_ms`
pub const ENV_DEBOUNCE_MS: &str = "LAYOUTGEN_DEBOUNCE_MS";
/// Env var overriding `[output] color`
pub const ENV_COLOR: &str = "LAYOUTGEN_COLOR";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> LayoutResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| LayoutError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| LayoutError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Explicit file if given (must load), else the user config if present.
pub fn load_layered(explicit: Option<&Path>) -> LayoutResult<(Config, Vec<ConfigWarning>)> {
    let source = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => user_config_path().filter(|p| p.is_file()),
    };

    let (config, warnings) = match source {
        Some(path) => load_with_warnings(&path)?,
        None => (Config::default(), Vec::new()),
    };

    Ok((with_env_overrides(config, |key| std::env::var(key).ok()), warnings))
}

/// Apply environment variable overrides (LAYOUTGEN_* prefix)
///
/// Unparseable values are ignored.
pub fn with_env_overrides(mut config: Config, get_env: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(ms) = get_env(ENV_DEBOUNCE_MS).and_then(|v| v.trim().parse::<u64>().ok()) {
        config.watch.debounce_ms = ms;
    }

    if let Some(color) = get_env(ENV_COLOR).and_then(|v| ColorMode::parse(&v)) {
        config.output.color = color;
    }

    config
}

pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("layoutgen").join("config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

pub(crate) fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["watch", "debounce_ms", "exclude", "names", "output", "color"];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
