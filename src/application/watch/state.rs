//! Debounce state machine
//!
//! `Idle -> Debouncing -> Running -> Idle`. Time is passed in explicitly so
//! the transitions can be driven without sleeping.

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchPhase {
    Idle,
    Debouncing { deadline: Instant },
    Running,
}

/// Watcher state for debouncing
#[derive(Debug)]
pub struct WatcherState {
    debounce: Duration,
    phase: WatchPhase,
    /// A change arrived while a run was in flight
    pending_rerun: bool,
    pending_changes: BTreeSet<PathBuf>,
}

impl WatcherState {
    pub fn new(debounce: Duration) -> Self {
        Self {
            debounce,
            phase: WatchPhase::Idle,
            pending_rerun: false,
            pending_changes: BTreeSet::new(),
        }
    }

    pub fn phase(&self) -> WatchPhase {
        self.phase
    }

    pub fn is_busy(&self) -> bool {
        self.phase == WatchPhase::Running
    }

    pub fn has_pending_rerun(&self) -> bool {
        self.pending_rerun
    }

    /// Record a qualifying change, (re)arming the debounce deadline.
    pub fn record_change(&mut self, path: PathBuf, now: Instant) {
        self.pending_changes.insert(path);
        match self.phase {
            WatchPhase::Running => self.pending_rerun = true,
            WatchPhase::Idle | WatchPhase::Debouncing { .. } => {
                self.phase = WatchPhase::Debouncing {
                    deadline: now + self.debounce,
                };
            }
        }
    }

    /// True once the window has elapsed with no further changes.
    pub fn poll(&self, now: Instant) -> bool {
        matches!(self.phase, WatchPhase::Debouncing { deadline } if now >= deadline)
    }

    /// Enter `Running`, handing back the changes the run covers.
    pub fn begin_run(&mut self) -> Vec<PathBuf> {
        self.phase = WatchPhase::Running;
        self.pending_rerun = false;
        std::mem::take(&mut self.pending_changes).into_iter().collect()
    }

    /// Leave `Running`; a pending rerun re-arms the window from `now`.
    pub fn finish_run(&mut self, now: Instant) {
        self.phase = if self.pending_rerun {
            WatchPhase::Debouncing {
                deadline: now + self.debounce,
            }
        } else {
            WatchPhase::Idle
        };
        self.pending_rerun = false;
    }

    /// How long the loop may block before the deadline needs checking.
    pub fn next_wakeup(&self, now: Instant, tick: Duration) -> Duration {
        match self.phase {
            WatchPhase::Debouncing { deadline } => deadline.saturating_duration_since(now).min(tick),
            WatchPhase::Idle | WatchPhase::Running => tick,
        }
    }

    /// Drop any armed deadline and pending changes. Returns whether anything was pending.
    pub fn cancel(&mut self) -> bool {
        let had_pending = !self.pending_changes.is_empty() || self.pending_rerun;
        self.phase = WatchPhase::Idle;
        self.pending_rerun = false;
        self.pending_changes.clear();
        had_pending
    }
}
