//! Generate Module
//!
//! Produces `layout.json` for one package directory.
//!
//! ## Structure
//!
//! - `options` - Run switches (`ProcessOptions`)
//! - `result` - Run report (`ProcessResult`, `RunStatus`)
//! - `use_case` - Core use case logic (`GenerateUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use layoutgen::application::generate::{process_directory, ProcessOptions};
//!
//! let result = process_directory(root, &ProcessOptions::new().with_force(true));
//! ```

mod options;
mod result;
mod use_case;

use std::path::Path;

use crate::error::LayoutResult;

pub use options::ProcessOptions;
pub use result::{ProcessResult, RunStatus};
pub use use_case::GenerateUseCase;

/// Generate with default options, failing on anything but success or an existing layout.
pub fn generate_layout(root: impl AsRef<Path>) -> LayoutResult<()> {
    GenerateUseCase::local().run(root.as_ref(), &ProcessOptions::default())
}

/// Generate and describe the outcome; never fails.
pub fn process_directory(root: impl AsRef<Path>, options: &ProcessOptions) -> ProcessResult {
    GenerateUseCase::local().process(root.as_ref(), options)
}
