//! Domain Entities
//!
//! - `ContentEntry` - One file's path/size/date record
//! - `LayoutDocument` - The sorted list of entries written to layout.json

mod content_entry;
mod layout_document;

pub use content_entry::ContentEntry;
pub use layout_document::{normalize_line_endings, LayoutDocument};
