//! Scenario: Editing a package while it is watched
//!
//! Journey: A package author starts a watch session and saves a new file
//! twice in quick succession.
//!
//! Success Criteria:
//! - Both saves collapse into one regeneration
//! - The layout reflects the second save
//! - Stopping the session ends it cleanly

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use layoutgen::{WatchEvent, WatchHandle, WatchOptions, WatchUseCase};

use crate::common::*;

fn wait_for(
    events: &Arc<Mutex<Vec<WatchEvent>>>,
    timeout: Duration,
    pred: impl Fn(&[WatchEvent]) -> bool,
) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if pred(&events.lock().unwrap()) {
            return true;
        }
        thread::sleep(Duration::from_millis(20));
    }
    false
}

fn completions(events: &[WatchEvent]) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, WatchEvent::RegenerationComplete { .. }))
        .count()
}

/// SCENARIO: Create then modify within the debounce window
#[test]
fn scenario_rapid_saves_regenerate_once() {
    let pkg = TestPackage::new();
    pkg.write("manifest.json", MANIFEST_WITH_SIZE)
        .write("a.txt", TEN_BYTES);

    let events: Arc<Mutex<Vec<WatchEvent>>> = Arc::new(Mutex::new(Vec::new()));
    let handle = WatchHandle::new();

    let session = {
        let events = events.clone();
        let handle = handle.clone();
        let options = WatchOptions::new(pkg.root()).with_debounce(Duration::from_millis(300));
        thread::spawn(move || {
            WatchUseCase::new(options).start(&handle, |event: WatchEvent| {
                events.lock().unwrap().push(event);
            })
        })
    };

    // Baseline run, then give the backend time to subscribe
    assert!(wait_for(&events, Duration::from_secs(10), |e| completions(e) == 1));
    thread::sleep(Duration::from_millis(500));

    pkg.write("x.txt", "first");
    thread::sleep(Duration::from_millis(50));
    pkg.write("x.txt", "second save");

    assert!(wait_for(&events, Duration::from_secs(10), |e| completions(e) == 2));
    // Nothing further should be scheduled by our own writes
    thread::sleep(Duration::from_millis(1000));

    handle.stop();
    let summary = session.join().unwrap().unwrap();

    assert_eq!(summary.regenerations, 1);
    let events = events.lock().unwrap();
    assert_eq!(completions(&events), 2);
    assert!(matches!(
        events.last(),
        Some(WatchEvent::Shutdown { regenerations: 1 })
    ));

    let layout = pkg.layout();
    let x = layout["content"]
        .as_array()
        .unwrap()
        .iter()
        .find(|e| e["path"] == "x.txt")
        .expect("x.txt missing from layout");
    assert_eq!(x["size"], "second save".len() as u64);
}

/// SCENARIO: Stopping an idle session
#[test]
fn scenario_stop_ends_idle_session() {
    let pkg = TestPackage::new();
    pkg.write("a.txt", TEN_BYTES);

    let handle = WatchHandle::new();
    let session = {
        let handle = handle.clone();
        let options = WatchOptions::new(pkg.root());
        thread::spawn(move || {
            WatchUseCase::new(options).start(&handle, |_event: WatchEvent| {})
        })
    };

    thread::sleep(Duration::from_millis(300));
    handle.stop();

    let summary = session.join().unwrap().unwrap();
    assert_eq!(summary.regenerations, 0);
    assert!(pkg.exists("layout.json"));
}
