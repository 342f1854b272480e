//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (local disk, in-memory mock)
//! - `repositories/` - Repository implementations (manifest.json)
//! - `events/` - Event sinks (console, NDJSON)

pub mod events;
pub mod fs;
pub mod repositories;

// Re-export for convenience
pub use events::{ConsoleEventSink, JsonEventSink};
pub use fs::LocalFs;
pub use repositories::JsonManifestRepository;
