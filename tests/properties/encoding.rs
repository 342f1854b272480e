//! Property tests for timestamp and size encodings.

use proptest::prelude::*;

use layoutgen::infrastructure::repositories::format_total_size;
use layoutgen::FileTime;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Tick encoding is strictly monotonic, 10_000 ticks per millisecond.
    #[test]
    fn property_ticks_are_monotonic(
        a in -11_644_473_600_000i64..4_000_000_000_000,
        delta in 1i64..1_000_000,
    ) {
        let earlier = FileTime::from_unix_millis(a);
        let later = FileTime::from_unix_millis(a + delta);
        prop_assert!(earlier < later);
        prop_assert_eq!(later.ticks() - earlier.ticks(), delta * 10_000);
    }

    /// PROPERTY: Manifest sizes are always 20 digits and parse back.
    #[test]
    fn property_total_size_is_fixed_width(size in any::<u64>()) {
        let formatted = format_total_size(size);
        prop_assert_eq!(formatted.len(), 20);
        prop_assert!(formatted.bytes().all(|b| b.is_ascii_digit()));
        prop_assert_eq!(formatted.parse::<u64>().unwrap(), size);
    }
}
