//! layoutgen - package layout generator
//!
//! Builds `layout.json` for a simulator package directory: every file's
//! path, size and modification time, sorted by path. Keeps the companion
//! `manifest.json` `total_package_size` field in sync, and can watch a
//! package and regenerate when its tree changes.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{
    generate_layout, process_directory, GenerateUseCase, ProcessOptions, ProcessResult, RunStatus,
    WatchEvent, WatchHandle, WatchOptions, WatchSummary, WatchUseCase,
};
pub use config::Config;
pub use domain::entities::{ContentEntry, LayoutDocument};
pub use domain::policies::ExclusionFilter;
pub use domain::value_objects::FileTime;
pub use error::{LayoutError, LayoutResult, ValidationFailure};
