//! Event Sink Implementations
//!
//! Provides concrete implementations of LayoutEventSink:
//! - JsonEventSink: NDJSON output for CI/automation
//! - ConsoleEventSink: Human-readable progress

mod console;
pub(crate) mod json;

pub use console::ConsoleEventSink;
pub use json::JsonEventSink;
