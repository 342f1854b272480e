//! Watch Use Case implementation

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError};
use std::sync::Arc;
use std::time::{Duration, Instant};

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::application::generate::GenerateUseCase;
use crate::domain::policies::ExclusionFilter;
use crate::domain::ports::LayoutEventSink;
use crate::domain::value_objects::PackagePaths;
use crate::error::{LayoutError, LayoutResult, ValidationFailure};
use crate::infrastructure::fs::LocalFs;
use crate::infrastructure::repositories::JsonManifestRepository;

use super::event::{WatchEvent, WatchOptions};
use super::state::WatcherState;

/// Upper bound on how long the loop blocks before re-checking the stop flag
const TICK: Duration = Duration::from_millis(50);

/// What the notification backend forwards into the loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchSignal {
    Changed(PathBuf),
    TransportError(String),
}

/// Stop switch shared between the watch loop and a signal handler
#[derive(Debug, Clone)]
pub struct WatchHandle {
    running: Arc<AtomicBool>,
}

impl Default for WatchHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl WatchHandle {
    pub fn new() -> Self {
        Self {
            running: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Ask the session to end; an in-flight regeneration still completes
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }
}

/// Outcome of a watch session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchSummary {
    /// Change-triggered regenerations, the baseline not included
    pub regenerations: usize,
}

/// Watch Use Case
///
/// Keeps one package root's layout.json current while the tree changes.
/// This is the main entry point for the `layoutgen watch` command.
pub struct WatchUseCase {
    options: WatchOptions,
    generator: GenerateUseCase<LocalFs, JsonManifestRepository<LocalFs>>,
}

impl WatchUseCase {
    pub fn new(options: WatchOptions) -> Self {
        Self {
            options,
            generator: GenerateUseCase::local(),
        }
    }

    pub fn with_filter(mut self, filter: ExclusionFilter) -> Self {
        self.generator = self.generator.with_filter(filter);
        self
    }

    /// Forward layout events of every regeneration to `events`
    pub fn with_event_sink(mut self, events: Arc<dyn LayoutEventSink>) -> Self {
        self.generator = self.generator.with_event_sink(events);
        self
    }

    /// Start watching (blocking)
    ///
    /// Runs a forced baseline generation, subscribes to the tree and
    /// regenerates on settled changes until `handle.stop()` is called.
    pub fn start<F>(&self, handle: &WatchHandle, on_event: F) -> LayoutResult<WatchSummary>
    where
        F: Fn(WatchEvent),
    {
        let root = self
            .options
            .root
            .canonicalize()
            .ok()
            .filter(|p| p.is_dir())
            .ok_or_else(|| {
                LayoutError::validation(ValidationFailure::RootNotFound, &self.options.root)
            })?;
        let paths = PackagePaths::new(&root);

        on_event(WatchEvent::WatchStarted {
            root: root.display().to_string(),
            debounce_ms: self.options.debounce.as_millis() as u64,
        });

        self.regenerate(&root, true, &on_event);

        let (tx, rx) = channel();
        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| {
                for signal in signals_from(res) {
                    let _ = tx.send(signal);
                }
            },
            Config::default(),
        )
        .map_err(|e| LayoutError::Watch {
            message: e.to_string(),
        })?;

        watcher
            .watch(&root, RecursiveMode::Recursive)
            .map_err(|e| LayoutError::Watch {
                message: e.to_string(),
            })?;

        let regenerations = run_loop(
            &rx,
            handle,
            &paths,
            self.options.debounce,
            || self.regenerate(&root, false, &on_event),
            &on_event,
        );

        drop(watcher);
        on_event(WatchEvent::Shutdown { regenerations });
        Ok(WatchSummary { regenerations })
    }

    fn regenerate(&self, root: &Path, baseline: bool, on_event: &impl Fn(WatchEvent)) {
        on_event(WatchEvent::RegenerationStarted { baseline });

        let options = self.options.process.clone().with_force(true);
        let result = self.generator.process(root, &options);
        if !result.success {
            on_event(WatchEvent::Error {
                message: result.message.clone(),
            });
        }
        on_event(WatchEvent::regeneration_complete(&result));
    }
}

/// Translate one backend notification into loop signals.
///
/// Pure reads (access events) never qualify.
pub(crate) fn signals_from(res: Result<Event, notify::Error>) -> Vec<WatchSignal> {
    match res {
        Ok(event) => {
            if matches!(event.kind, EventKind::Access(_)) {
                return Vec::new();
            }
            event.paths.into_iter().map(WatchSignal::Changed).collect()
        }
        Err(e) => vec![WatchSignal::TransportError(e.to_string())],
    }
}

/// True when a change at `path` should schedule a regeneration.
///
/// The package documents and the writer's temp files are our own output;
/// letting them through would regenerate forever.
pub fn is_qualifying_change(paths: &PackagePaths, path: &Path) -> bool {
    path != paths.root() && !paths.is_package_document(path) && !PackagePaths::is_write_temp(path)
}

/// Coalescing loop. Returns the number of regenerations performed.
pub(crate) fn run_loop<R, F>(
    rx: &Receiver<WatchSignal>,
    handle: &WatchHandle,
    paths: &PackagePaths,
    debounce: Duration,
    mut regenerate: R,
    on_event: &F,
) -> usize
where
    R: FnMut(),
    F: Fn(WatchEvent),
{
    let mut state = WatcherState::new(debounce);
    let mut regenerations = 0;

    while handle.is_running() {
        match rx.recv_timeout(state.next_wakeup(Instant::now(), TICK)) {
            Ok(signal) => handle_signal(signal, &mut state, paths, on_event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                on_event(WatchEvent::Error {
                    message: "file watcher disconnected".to_string(),
                });
                break;
            }
        }

        if !handle.is_running() || !state.poll(Instant::now()) {
            continue;
        }

        for path in state.begin_run() {
            on_event(WatchEvent::FileChanged {
                path: path.display().to_string(),
            });
        }
        regenerate();
        regenerations += 1;

        // Changes made while the run was busy schedule exactly one follow-up
        while let Ok(signal) = rx.try_recv() {
            handle_signal(signal, &mut state, paths, on_event);
        }
        state.finish_run(Instant::now());
    }

    state.cancel();
    regenerations
}

fn handle_signal<F>(signal: WatchSignal, state: &mut WatcherState, paths: &PackagePaths, on_event: &F)
where
    F: Fn(WatchEvent),
{
    match signal {
        WatchSignal::Changed(path) => {
            if is_qualifying_change(paths, &path) {
                state.record_change(path, Instant::now());
            }
        }
        WatchSignal::TransportError(message) => on_event(WatchEvent::Error { message }),
    }
}
