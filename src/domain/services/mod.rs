//! Domain Services
//!
//! Layout logic that operates on domain entities through ports.

mod layout_builder;
mod scanner;

pub use layout_builder::{
    relative_layout_path, BuildRejected, BuiltLayout, FileDisposition, LayoutBuilder,
};
pub use scanner::scan_files;
