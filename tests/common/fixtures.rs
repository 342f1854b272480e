//! Reusable package content

/// Manifest with a zeroed size field
pub const MANIFEST_WITH_SIZE: &str = r#"{
  "title": "Test Scenery",
  "total_package_size": "00000000000000000000",
  "package_version": "1.0.0"
}
"#;

/// Manifest without a size field
pub const MANIFEST_WITHOUT_SIZE: &str = r#"{
  "title": "Test Scenery",
  "package_version": "1.0.0"
}
"#;

/// Ten bytes
pub const TEN_BYTES: &str = "0123456789";

/// Twenty bytes
pub const TWENTY_BYTES: &str = "01234567890123456789";

/// Five bytes, used for housekeeping files
pub const FIVE_BYTES: &str = "thumb";
