//! Configuration module for layoutgen
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (LAYOUTGEN_*)
//! 3. Explicit `--config` file
//! 4. User config (~/.config/layoutgen/config.toml)
//! 5. Built-in defaults (lowest priority)
//!
//! Configuration never lives inside a package directory; anything there
//! is package content.

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use types::{ColorMode, Config, ExcludeConfig, OutputConfig, WatchConfig};
