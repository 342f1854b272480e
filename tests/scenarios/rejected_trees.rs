//! Scenario: Trees that cannot produce a layout
//!
//! Journey: A package author points the generator at a directory that is
//! empty, holds only junk, or does not exist.
//!
//! Success Criteria:
//! - The result explains what is wrong
//! - Nothing is written

use layoutgen::{
    generate_layout, process_directory, LayoutError, ProcessOptions, RunStatus, ValidationFailure,
};

use crate::common::*;

/// SCENARIO: Root holding only the manifest
#[test]
fn scenario_empty_root_reports_no_files() {
    let pkg = TestPackage::new();
    pkg.write("manifest.json", MANIFEST_WITH_SIZE);

    let result = process_directory(pkg.root(), &ProcessOptions::new());

    assert!(!result.success);
    assert_eq!(
        result.status,
        RunStatus::Invalid(ValidationFailure::NoFilesFound)
    );
    assert!(result.message.contains("no files found"));
    assert!(!pkg.exists("layout.json"));
    assert_eq!(pkg.read("manifest.json"), MANIFEST_WITH_SIZE);
}

/// SCENARIO: Root holding only excluded files
#[test]
fn scenario_only_excluded_files_reports_no_valid_files() {
    let pkg = TestPackage::new();
    pkg.write("Thumbs.db", FIVE_BYTES)
        .write("sub/desktop.ini", FIVE_BYTES)
        .write("_CVT_/cache.bin", TEN_BYTES);

    let result = process_directory(pkg.root(), &ProcessOptions::new());

    assert!(!result.success);
    assert_eq!(
        result.status,
        RunStatus::Invalid(ValidationFailure::NoValidFiles)
    );
    assert!(result.message.contains("no valid files to include"));
    assert_eq!(result.skipped_files, 3);
    assert!(!pkg.exists("layout.json"));
}

/// SCENARIO: Missing root through both entry points
#[test]
fn scenario_missing_root_is_rejected() {
    let pkg = TestPackage::new();
    let missing = pkg.path("does-not-exist");

    let result = process_directory(&missing, &ProcessOptions::new());
    assert_eq!(
        result.status,
        RunStatus::Invalid(ValidationFailure::RootNotFound)
    );

    match generate_layout(&missing) {
        Err(LayoutError::Validation { failure, .. }) => {
            assert_eq!(failure, ValidationFailure::RootNotFound)
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

/// SCENARIO: Manifest required but absent
#[test]
fn scenario_check_manifest_requires_manifest() {
    let pkg = TestPackage::new();
    pkg.write("a.txt", TEN_BYTES);

    let result = process_directory(pkg.root(), &ProcessOptions::new().with_check_manifest(true));

    assert_eq!(
        result.status,
        RunStatus::Invalid(ValidationFailure::ManifestMissing)
    );
    assert!(!pkg.exists("layout.json"));
}

/// SCENARIO: Malformed manifest fails after the layout is written
#[test]
fn scenario_malformed_manifest_fails_the_run() {
    let pkg = TestPackage::new();
    pkg.write("manifest.json", "{ not json")
        .write("a.txt", TEN_BYTES);

    let result = process_directory(pkg.root(), &ProcessOptions::new());

    assert!(!result.success);
    assert_eq!(result.status, RunStatus::Failed);
    assert!(result.message.contains("manifest.json was not updated"));
    assert!(pkg.exists("layout.json"));
    assert_eq!(pkg.read("manifest.json"), "{ not json");
}
