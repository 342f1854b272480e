//! Domain Layer
//!
//! Pure layout logic without direct I/O.
//!
//! ## Structure
//!
//! - `entities/` - Layout document and its content entries
//! - `value_objects/` - Immutable value types (FileTime, PackagePaths)
//! - `services/` - Domain services (LayoutBuilder, directory scan)
//! - `policies/` - Business rules (ExclusionFilter)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No direct I/O** - file access goes through the `FileSystem` port
//! 2. **Deterministic output** - the same tree always yields the same document
//! 3. **Ports & Adapters** - infrastructure supplies the concrete implementations

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
