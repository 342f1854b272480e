//! File Time Value Object
//!
//! Modification timestamps in the layout document are 100-nanosecond ticks
//! since 1601-01-01T00:00:00Z.

use std::fmt;
use std::time::SystemTime;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Milliseconds between 1601-01-01T00:00:00Z and 1970-01-01T00:00:00Z
pub const EPOCH_OFFSET_MS: i64 = 11_644_473_600_000;

/// Ticks per millisecond
const TICKS_PER_MS: i64 = 10_000;

/// A modification time encoded as 1601-epoch ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileTime(i64);

impl FileTime {
    /// Encode an instant given in milliseconds since the Unix epoch.
    pub fn from_unix_millis(unix_ms: i64) -> Self {
        Self(unix_ms.saturating_add(EPOCH_OFFSET_MS).saturating_mul(TICKS_PER_MS))
    }

    /// Encode a filesystem timestamp. Sub-millisecond precision is floored.
    pub fn from_system_time(time: SystemTime) -> Self {
        let utc: DateTime<Utc> = time.into();
        Self::from_unix_millis(utc.timestamp_millis())
    }

    /// Raw tick count
    pub fn ticks(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for FileTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
