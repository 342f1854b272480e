//! Watch Use Case
//!
//! Keeps a package's layout.json current while its tree changes.
//! It orchestrates:
//! - File system monitoring (via `notify` crate)
//! - Debouncing (300ms default) with at most one regeneration in flight
//! - Forced regeneration through `GenerateUseCase`
//!
//! ## Architecture
//!
//! - `WatchUseCase` - Main orchestrator
//! - `WatcherState` - Idle / Debouncing / Running state machine
//! - `WatchEvent` - Events emitted during watch operation
//!
//! ## Usage
//!
//! ```ignore
//! let handle = WatchHandle::new();
//! let use_case = WatchUseCase::new(WatchOptions::new(root));
//! let summary = use_case.start(&handle, |event| println!("{}", event.to_json()))?;
//! ```

mod event;
mod state;
mod use_case;


pub use event::{WatchEvent, WatchOptions, DEBOUNCE_MS};
pub use state::{WatchPhase, WatcherState};
pub use use_case::{is_qualifying_change, WatchHandle, WatchSignal, WatchSummary, WatchUseCase};
