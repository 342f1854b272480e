//! Domain Policies
//!
//! Business rules that govern which files a layout lists.

mod exclusion;

pub use exclusion::{ExclusionFilter, CONVERSION_DIR, HOUSEKEEPING_FILES};
