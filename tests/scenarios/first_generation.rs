//! Scenario: Packaging a fresh directory
//!
//! Journey: A package author generates layout.json for the first time,
//! then runs the generator again.
//!
//! Steps:
//! 1. Package has a manifest, two files and a housekeeping file
//! 2. First run writes a sorted layout and updates the manifest size
//! 3. Second run without force leaves everything untouched
//! 4. Forced run on the unchanged tree rewrites identical bytes

use layoutgen::{generate_layout, process_directory, ProcessOptions, RunStatus};

use crate::common::*;

fn sample_package() -> TestPackage {
    let pkg = TestPackage::new();
    pkg.write("manifest.json", MANIFEST_WITH_SIZE)
        .write("a.txt", TEN_BYTES)
        .write("sub/b.txt", TWENTY_BYTES)
        .write("Thumbs.db", FIVE_BYTES);
    pkg
}

/// SCENARIO: First generation lists files sorted and syncs the manifest
#[test]
fn scenario_first_generation_writes_sorted_layout() {
    let pkg = sample_package();

    let result = process_directory(pkg.root(), &ProcessOptions::new());

    assert!(result.success, "unexpected failure: {}", result.message);
    assert_eq!(result.status, RunStatus::Generated);
    assert_eq!(pkg.layout_paths(), vec!["a.txt", "sub/b.txt"]);
    assert_eq!(result.file_count, 2);
    assert_eq!(result.skipped_files, 1);

    let layout_bytes = pkg.read("layout.json").len() as u64;
    assert_eq!(result.total_size, 35 + layout_bytes);
    assert_eq!(
        pkg.manifest_size(),
        Some(format!("{:020}", result.total_size))
    );
}

/// SCENARIO: Second run without force is a no-op
#[test]
fn scenario_rerun_without_force_skips() {
    let pkg = sample_package();
    process_directory(pkg.root(), &ProcessOptions::new());
    let layout_before = pkg.read("layout.json");
    let manifest_before = pkg.read("manifest.json");

    let result = process_directory(pkg.root(), &ProcessOptions::new());

    assert!(!result.success);
    assert_eq!(result.status, RunStatus::LayoutExists);
    assert!(result.message.contains("already exists"));
    assert_eq!(pkg.read("layout.json"), layout_before);
    assert_eq!(pkg.read("manifest.json"), manifest_before);

    // The fire-and-forget entry point treats the same situation as success
    assert!(generate_layout(pkg.root()).is_ok());
}

/// SCENARIO: Forced regeneration of an unchanged tree is byte-identical
#[test]
fn scenario_forced_rerun_is_idempotent() {
    let pkg = sample_package();
    let force = ProcessOptions::new().with_force(true);

    let first = process_directory(pkg.root(), &force);
    let layout_first = pkg.read("layout.json");
    let manifest_first = pkg.read("manifest.json");

    let second = process_directory(pkg.root(), &force);

    assert!(first.success && second.success);
    assert_eq!(pkg.read("layout.json"), layout_first);
    assert_eq!(pkg.read("manifest.json"), manifest_first);
    assert_eq!(first.total_size, second.total_size);
}

/// SCENARIO: A manifest without a size field is left alone
#[test]
fn scenario_manifest_without_size_field_is_untouched() {
    let pkg = TestPackage::new();
    pkg.write("manifest.json", MANIFEST_WITHOUT_SIZE)
        .write("a.txt", TEN_BYTES);

    let result = process_directory(pkg.root(), &ProcessOptions::new());

    assert!(result.success);
    assert_eq!(pkg.read("manifest.json"), MANIFEST_WITHOUT_SIZE);
}

/// SCENARIO: Other manifest fields survive the size update
#[test]
fn scenario_manifest_other_fields_are_preserved() {
    let pkg = sample_package();

    process_directory(pkg.root(), &ProcessOptions::new());

    let manifest: serde_json::Value =
        serde_json::from_str(&pkg.read("manifest.json")).unwrap();
    assert_eq!(manifest["title"], "Test Scenery");
    assert_eq!(manifest["package_version"], "1.0.0");
}
