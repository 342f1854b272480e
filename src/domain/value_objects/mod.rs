//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod config_warning;
mod file_time;
mod package_paths;

pub use config_warning::ConfigWarning;
pub use file_time::FileTime;
pub use package_paths::{
    PackagePaths, LAYOUT_FILE_NAME, MANIFEST_FILE_NAME, MAX_PATH_CHARS, WRITE_TEMP_PREFIX,
};
