//! Exclusion policy
//!
//! Decides which files are left out of the layout content list. Excluded
//! files still count towards the package's total size.

/// Top-level directory reserved for transient conversion artifacts
pub const CONVERSION_DIR: &str = "_cvt_";

/// Platform housekeeping files, compared case-insensitively
pub const HOUSEKEEPING_FILES: &[&str] = &["thumbs.db", "ehthumbs.db", "desktop.ini", ".ds_store"];

/// Exclusion filter for root-relative, `/`-separated paths.
#[derive(Debug, Clone)]
pub struct ExclusionFilter {
    names: Vec<String>,
}

impl Default for ExclusionFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl ExclusionFilter {
    /// Filter with the built-in housekeeping set
    pub fn new() -> Self {
        Self {
            names: HOUSEKEEPING_FILES.iter().map(|n| n.to_string()).collect(),
        }
    }

    /// Add extra file names to exclude. The built-in set is always kept.
    pub fn with_extra_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            let folded = name.as_ref().trim().to_ascii_lowercase();
            if !folded.is_empty() && !self.names.contains(&folded) {
                self.names.push(folded);
            }
        }
        self
    }

    /// Returns true when `relative_path` must not appear in the content list.
    pub fn is_excluded(&self, relative_path: &str) -> bool {
        let mut segments = relative_path.split('/').filter(|s| !s.is_empty());

        let Some(first) = segments.next() else {
            return false;
        };
        if first.eq_ignore_ascii_case(CONVERSION_DIR) {
            return true;
        }

        let last = segments.last().unwrap_or(first).to_ascii_lowercase();
        self.names.iter().any(|n| *n == last)
    }
}
