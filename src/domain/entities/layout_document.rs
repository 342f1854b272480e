//! Layout document entity

use serde::{Deserialize, Serialize};

use super::ContentEntry;

/// The full contents of `layout.json`.
///
/// Entries are always sorted ascending by path using ordinal (byte) order,
/// so the serialized document does not depend on directory enumeration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutDocument {
    content: Vec<ContentEntry>,
}

impl LayoutDocument {
    pub fn new(mut content: Vec<ContentEntry>) -> Self {
        content.sort_by(|a, b| a.path().cmp(b.path()));
        Self { content }
    }

    pub fn entries(&self) -> &[ContentEntry] {
        &self.content
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Serialize with two-space indentation and LF line endings.
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        let rendered = serde_json::to_string_pretty(self)?;
        Ok(normalize_line_endings(&rendered))
    }
}

/// Collapse CRLF and lone CR into LF.
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}
