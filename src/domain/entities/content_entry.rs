//! Content entry entity

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::FileTime;

/// One file in the layout document.
///
/// `path` is relative to the package root, uses `/` separators and never
/// starts with a slash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentEntry {
    path: String,
    size: u64,
    date: FileTime,
}

impl ContentEntry {
    pub fn new(path: impl Into<String>, size: u64, date: FileTime) -> Self {
        Self {
            path: path.into(),
            size,
            date,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn date(&self) -> FileTime {
        self.date
    }
}
