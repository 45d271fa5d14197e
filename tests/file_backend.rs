//! End-to-end tests for the in-house reference table backend.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use tempfile::tempdir;

use chromcols::resolver::{
    BackendKind, ColumnList, ColumnResolver, FieldOverrides, ResolverConfig, ResolverError,
};

fn write_table(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

fn resolve_table(content: &str, config_fn: impl FnOnce(&mut ResolverConfig)) -> ColumnList {
    let dir = tempdir().unwrap();
    let path = write_table(dir.path(), "reference.tsv", content);

    let mut config = ResolverConfig::new(BackendKind::InHouse, path);
    config_fn(&mut config);

    ColumnResolver::new(config).resolve().unwrap()
}

#[test]
fn test_resolve_reference_table() {
    let table = "mz\trt\tcol\n\
                 84.9\t0.8\tZicPhilic\n\
                 85.2\t1.1\tUplcC8\n\
                 86.0\t0.9\tZicPhilic\n\
                 90.4\t2.3\tHsf5\n";

    let columns = resolve_table(table, |_| {});

    let labels: Vec<&str> = columns.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(labels, vec!["ZicPhilic", "UplcC8", "Hsf5"]);

    // Exactly one default, on the first entry
    assert!(columns[0].is_default);
    assert_eq!(columns.iter().filter(|c| c.is_default).count(), 1);

    // The table has no separate code space
    for col in &columns {
        assert_eq!(col.id, col.label);
    }
}

#[test]
fn test_resolve_with_field_override() {
    let table = "name\tcode\n\
                 Column A\tA1\n\
                 Column B\tB2\n\
                 Column C\tA1\n";

    let columns = resolve_table(table, |config| {
        config.fields = FieldOverrides::from_str("col=code").unwrap();
    });

    let ids: Vec<&str> = columns.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["A1", "B2"]);
}

#[test]
fn test_resolve_sorted_reassigns_default() {
    let table = "col\n\
                 ZicPhilic\n\
                 Hsf5\n\
                 UplcC8\n";

    let columns = resolve_table(table, |config| {
        config.sorted = true;
    });

    let labels: Vec<&str> = columns.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(labels, vec!["Hsf5", "UplcC8", "ZicPhilic"]);
    assert!(columns[0].is_default);
    assert_eq!(columns.iter().filter(|c| c.is_default).count(), 1);
}

#[test]
fn test_resolve_is_idempotent() {
    let table = "col\nZicPhilic\nUplcC8\n";

    let dir = tempdir().unwrap();
    let path = write_table(dir.path(), "reference.tsv", table);

    let config = ResolverConfig::new(BackendKind::InHouse, path);
    let resolver = ColumnResolver::new(config);

    let first = resolver.resolve().unwrap();
    let second = resolver.resolve().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_resolve_missing_header_fails() {
    let dir = tempdir().unwrap();
    let path = write_table(dir.path(), "reference.tsv", "name\tcode\nColumn A\tA1\n");

    let config = ResolverConfig::new(BackendKind::InHouse, path);
    let err = ColumnResolver::new(config).resolve().unwrap_err();

    assert!(matches!(err, ResolverError::FieldNotFound(ref f) if f == "col"));
}

#[test]
fn test_resolve_missing_file_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.tsv").to_string_lossy().into_owned();

    let config = ResolverConfig::new(BackendKind::InHouse, path);
    let err = ColumnResolver::new(config).resolve().unwrap_err();

    assert!(matches!(err, ResolverError::FileNotFound { .. }));
}

#[test]
fn test_column_list_serialization() {
    let table = "col\nZicPhilic\nUplcC8\n";
    let columns = resolve_table(table, |_| {});

    let json = serde_json::to_string(&columns).unwrap();
    assert_eq!(
        json,
        "[{\"label\":\"ZicPhilic\",\"id\":\"ZicPhilic\",\"isDefault\":true},\
         {\"label\":\"UplcC8\",\"id\":\"UplcC8\",\"isDefault\":false}]"
    );
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// For any rows, output ids are the distinct values in first-seen
        /// order, each id equals its label, and exactly one entry is the
        /// default when the list is non-empty.
        #[test]
        fn prop_dedup_preserves_first_seen_order(
            values in prop::collection::vec("[A-Za-z0-9][A-Za-z0-9 _-]{0,11}", 0..40)
        ) {
            let mut table = String::from("col\n");
            for value in &values {
                table.push_str(value);
                table.push('\n');
            }

            let columns = resolve_table(&table, |_| {});

            let mut expected: Vec<&str> = Vec::new();
            for value in &values {
                if !expected.contains(&value.as_str()) {
                    expected.push(value);
                }
            }

            let labels: Vec<&str> = columns.iter().map(|c| c.label.as_str()).collect();
            prop_assert_eq!(labels, expected);

            for col in &columns {
                prop_assert_eq!(&col.id, &col.label);
            }

            if columns.is_empty() {
                prop_assert!(values.is_empty());
            } else {
                prop_assert_eq!(columns.iter().filter(|c| c.is_default).count(), 1);
                prop_assert!(columns[0].is_default);
            }
        }
    }
}
