//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `GenerateUseCase` - Validates a package root, builds and writes layout.json, updates manifest.json
//! - `WatchUseCase` - Regenerates on settled filesystem changes

pub mod generate;
pub mod watch;

pub use generate::{
    generate_layout, process_directory, GenerateUseCase, ProcessOptions, ProcessResult, RunStatus,
};
pub use watch::{
    WatchEvent, WatchHandle, WatchOptions, WatchSummary, WatchUseCase, WatcherState, DEBOUNCE_MS,
};
