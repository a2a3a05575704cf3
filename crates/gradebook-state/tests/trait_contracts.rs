//! Trait contract tests for StudentStore.
//!
//! These tests verify the behavioral contract of the store trait using the
//! in-memory store. Any conforming implementation must pass these.

use std::collections::BTreeSet;

use gradebook_state::{Grade, MemoryStudentStore, StorageError, StudentRecord, StudentStore};

fn grades(values: &[i64]) -> Vec<Grade> {
    values
        .iter()
        .map(|v| Grade::try_from(*v).unwrap())
        .collect()
}

fn names(records: &[StudentRecord]) -> BTreeSet<String> {
    records.iter().map(|r| r.full_name().to_string()).collect()
}

fn seeded_store() -> MemoryStudentStore {
    let mut store = MemoryStudentStore::new();
    store.insert("Ivanov Ivan", grades(&[5, 4, 3])).unwrap();
    store.insert("Petrov Petr", grades(&[2, 2])).unwrap();
    store.insert("Sidorova Anna", grades(&[5, 5, 4])).unwrap();
    store
}

// ===========================================================================
// insert
// ===========================================================================

#[test]
fn store_starts_empty() {
    let store = MemoryStudentStore::new();

    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert!(store.all().is_empty());
}

#[test]
fn insert_stores_grades_in_order_with_average() {
    let mut store = MemoryStudentStore::new();
    let record = store.insert("Ivanov Ivan", grades(&[5, 4, 3])).unwrap();

    assert_eq!(record.average(), 4.0);
    let stored = store.get("Ivanov Ivan").unwrap();
    assert_eq!(stored.grades(), grades(&[5, 4, 3]).as_slice());
    assert_eq!(stored.average(), 4.0);
    assert_eq!(stored, record);
}

#[test]
fn insert_duplicate_is_rejected_without_mutation() {
    let mut store = MemoryStudentStore::new();
    store.insert("Petrov Petr", grades(&[2, 2])).unwrap();

    let err = store.insert("Petrov Petr", grades(&[5, 5, 5])).unwrap_err();

    assert_eq!(
        err,
        StorageError::AlreadyExists {
            name: "Petrov Petr".to_string()
        }
    );
    assert_eq!(store.len(), 1);
    let stored = store.get("Petrov Petr").unwrap();
    assert_eq!(stored.grades(), grades(&[2, 2]).as_slice());
    assert_eq!(stored.average(), 2.0);
}

#[test]
fn names_are_case_sensitive_keys() {
    let mut store = MemoryStudentStore::new();
    store.insert("Ivanov Ivan", grades(&[5])).unwrap();
    store.insert("ivanov ivan", grades(&[1])).unwrap();

    assert_eq!(store.len(), 2);
}

#[test]
fn contains_and_get_for_missing_name() {
    let store = seeded_store();

    assert!(store.contains("Petrov Petr"));
    assert!(!store.contains("Nobody"));
    assert!(store.get("Nobody").is_none());
}

// ===========================================================================
// all / filter_below
// ===========================================================================

#[test]
fn all_returns_every_student() {
    let store = seeded_store();

    let all = store.all();

    assert_eq!(all.len(), 3);
    assert_eq!(
        names(&all),
        ["Ivanov Ivan", "Petrov Petr", "Sidorova Anna"]
            .iter()
            .map(|s| s.to_string())
            .collect::<BTreeSet<String>>()
    );
}

#[test]
fn filter_below_is_strict() {
    let store = seeded_store();

    let below = store.filter_below(3.5);
    assert_eq!(names(&below), BTreeSet::from(["Petrov Petr".to_string()]));

    // 4.00 is not strictly below 4.0
    let below = store.filter_below(4.0);
    assert_eq!(names(&below), BTreeSet::from(["Petrov Petr".to_string()]));
}

#[test]
fn filter_below_zero_is_empty() {
    let store = seeded_store();

    assert!(store.filter_below(0.0).is_empty());
}

#[test]
fn filter_below_above_max_returns_all() {
    let store = seeded_store();

    assert_eq!(store.filter_below(6.0).len(), store.len());
}

#[test]
fn filter_below_nan_matches_nothing() {
    let store = seeded_store();

    assert!(store.filter_below(f64::NAN).is_empty());
}

#[test]
fn filter_below_matches_brute_force_subset() {
    let store = seeded_store();

    for threshold in [0.0, 1.0, 2.0, 2.01, 3.0, 4.0, 4.5, 4.67, 5.0, 6.0] {
        let expected: BTreeSet<String> = store
            .all()
            .iter()
            .filter(|r| r.average() < threshold)
            .map(|r| r.full_name().to_string())
            .collect();
        assert_eq!(names(&store.filter_below(threshold)), expected);
    }
}
