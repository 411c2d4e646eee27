//! Integration tests that exercise the catalog loader against an on-disk
//! fixture file.
//!
//! These complement the unit tests inside csv_loader.rs (which all use
//! inline string literals) by verifying the full read-from-disk path and the
//! merge into the built-in catalog.

use std::path::{Path, PathBuf};

use price_cli::csv_loader;
use price_core::models::Catalog;

/// Path to the sample CSV shipped with the test fixtures.
fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("extra_catalog.csv")
}

#[test]
fn test_load_fixture_file_succeeds() {
    let entries =
        csv_loader::load_from_file(&fixture_path()).expect("fixture file should load without error");

    // The fixture has exactly 3 rows.
    assert_eq!(entries.len(), 3);
}

#[test]
fn test_fixture_rows_keep_file_order() {
    let entries = csv_loader::load_from_file(&fixture_path()).unwrap();

    assert_eq!(entries[0].company, "Maruti");
    assert_eq!(entries[0].model, "Maruti Suzuki Swift");
    assert_eq!(entries[2].company, "Tata");
    assert_eq!(entries[2].model, "Tata Indigo eCS");
}

#[test]
fn test_fixture_merges_into_builtin_catalog() {
    let mut catalog = Catalog::builtin();
    for entry in csv_loader::load_from_file(&fixture_path()).unwrap() {
        catalog.add_entry(entry);
    }

    // Two new companies on top of the three built-in ones.
    assert_eq!(catalog.companies().len(), 5);
    assert_eq!(
        catalog.models_for("Maruti"),
        ["Maruti Suzuki Swift", "Maruti Suzuki Alto 800"]
    );
    assert_eq!(catalog.models_for("Tata"), ["Tata Indigo eCS"]);

    // Built-in derivations are untouched.
    assert_eq!(
        catalog.models_for("Hyundai"),
        ["Hyundai Santro Xing", "Hyundai Grand i10"]
    );
}

#[test]
fn test_load_nonexistent_file_returns_err() {
    let bad_path = Path::new("/this/path/does/not/exist.csv");
    let result = csv_loader::load_from_file(bad_path);
    assert!(matches!(result, Err(csv_loader::CsvLoadError::Io { .. })));
}
