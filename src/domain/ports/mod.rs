//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_system;
pub mod layout_events;
pub mod manifest_repository;

pub use file_system::{DirEntry, EntryKind, FileStat, FileSystem, FsError, FsResult};
pub use layout_events::{LayoutEvent, LayoutEventSink, NoopEventSink};
pub use manifest_repository::{ManifestError, ManifestRepository, ManifestUpdate};
