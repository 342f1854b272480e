//! Common test utilities for layoutgen scenario and CLI tests.
//!
//! This module provides:
//! - `TestPackage`: a package directory in a temp dir
//! - `TestResult` and `run_layoutgen`: CLI execution helpers
//! - Fixtures: reusable file content

#![allow(dead_code)]

pub mod fixtures;

pub use env::*;
pub use fixtures::*;
