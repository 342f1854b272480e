//! Generate Options
//!
//! Switches for a single layout generation run.

/// Options for the generate use case
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOptions {
    /// Regenerate even if layout.json already exists
    pub force: bool,
    /// Suppress informational output (honoured by the console sink)
    pub quiet: bool,
    /// Emit per-file diagnostics
    pub debug: bool,
    /// Fail when manifest.json is absent
    pub check_manifest: bool,
    /// Never touch manifest.json
    pub skip_manifest_update: bool,
}

impl ProcessOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_check_manifest(mut self, check: bool) -> Self {
        self.check_manifest = check;
        self
    }

    pub fn with_skip_manifest_update(mut self, skip: bool) -> Self {
        self.skip_manifest_update = skip;
        self
    }
}
