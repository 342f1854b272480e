//! Config warning value object

use std::path::PathBuf;

/// A config key that was ignored while loading, e.g. `[watch] debounce = 10`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// Last segment of the ignored key, e.g. `debounce`
    pub key: String,
    pub file: PathBuf,
    /// 1-based line of the key, when it could be located
    pub line: Option<usize>,
    /// Closest known key
    pub suggestion: Option<String>,
}
