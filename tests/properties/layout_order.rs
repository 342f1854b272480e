//! Property tests for layout document ordering.

use proptest::prelude::*;

use layoutgen::{ContentEntry, FileTime, LayoutDocument};

fn relative_path() -> impl Strategy<Value = String> {
    let segment = proptest::string::string_regex("[A-Za-z0-9._ -]{1,12}").unwrap();
    proptest::collection::vec(segment, 1..=4).prop_map(|segments| segments.join("/"))
}

/// Entries with unique paths, in arbitrary order
fn entries() -> impl Strategy<Value = Vec<ContentEntry>> {
    proptest::collection::btree_map(relative_path(), (0u64..1_000_000, 0i64..2_000_000_000_000), 0..32)
        .prop_map(|raw| {
            raw.into_iter()
                .map(|(path, (size, ms))| {
                    ContentEntry::new(path, size, FileTime::from_unix_millis(ms))
                })
                .collect::<Vec<_>>()
        })
        .prop_shuffle()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Content is sorted ascending by path, byte-wise.
    #[test]
    fn property_content_is_sorted(input in entries()) {
        let doc = LayoutDocument::new(input);
        for pair in doc.entries().windows(2) {
            prop_assert!(pair[0].path().as_bytes() <= pair[1].path().as_bytes());
        }
    }

    /// PROPERTY: Enumeration order never changes the rendered document.
    #[test]
    fn property_enumeration_order_is_irrelevant(input in entries()) {
        let mut reversed = input.clone();
        reversed.reverse();

        let forward = LayoutDocument::new(input).to_json_string().unwrap();
        let backward = LayoutDocument::new(reversed).to_json_string().unwrap();
        prop_assert_eq!(forward, backward);
    }

    /// PROPERTY: Rendered documents never contain carriage returns.
    #[test]
    fn property_rendered_layout_uses_lf(input in entries()) {
        let rendered = LayoutDocument::new(input).to_json_string().unwrap();
        prop_assert!(!rendered.contains('\r'));
    }
}
