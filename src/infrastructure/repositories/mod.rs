//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod manifest;

pub use manifest::{format_total_size, JsonManifestRepository, TOTAL_SIZE_KEY, TOTAL_SIZE_WIDTH};
