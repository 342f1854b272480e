//! Property tests for debounce coalescing.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use proptest::prelude::*;

use layoutgen::application::watch::WatcherState;

const DEBOUNCE: Duration = Duration::from_millis(300);

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A burst of changes spaced inside the window triggers exactly one run,
    /// one full window after the last change.
    #[test]
    fn property_burst_coalesces_into_one_run(
        gaps in proptest::collection::vec(0u64..300, 1..20),
    ) {
        let start = Instant::now();
        let mut state = WatcherState::new(DEBOUNCE);
        let mut now = start;
        let mut runs = 0;

        state.record_change(PathBuf::from("/pkg/f0"), now);
        for (i, gap) in gaps.iter().enumerate() {
            now += Duration::from_millis(*gap);
            if state.poll(now) {
                state.begin_run();
                runs += 1;
                state.finish_run(now);
            }
            state.record_change(PathBuf::from(format!("/pkg/f{}", i + 1)), now);
        }

        prop_assert_eq!(runs, 0);
        prop_assert!(!state.poll(now + DEBOUNCE - Duration::from_millis(1)));
        prop_assert!(state.poll(now + DEBOUNCE));

        let changed = state.begin_run();
        prop_assert!(!changed.is_empty());
        state.finish_run(now + DEBOUNCE);
        prop_assert!(!state.poll(now + DEBOUNCE * 10));
    }
}
