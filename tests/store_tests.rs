//! Tests for Store
//!
//! These tests verify:
//! - Unique ids on insert
//! - Remove/find/update semantics and not-found errors
//! - Insertion-ordered enumeration
//! - Sorted projections and their tie-breaking

use rollbook::{Grade, Record, RollbookError, SortOrder, Store, StudentId};

// =============================================================================
// Helper Functions
// =============================================================================

fn record(id: StudentId, name: &str, marks: Option<f64>) -> Record {
    Record::new(id, name, format!("{}@uni.edu", name.to_lowercase()), "CS", marks).unwrap()
}

fn store_with(records: Vec<Record>) -> Store {
    let mut store = Store::new();
    for r in records {
        store.insert(r).unwrap();
    }
    store
}

fn ids(records: &[&Record]) -> Vec<StudentId> {
    records.iter().map(|r| r.id()).collect()
}

/// Bob 85, Amy 85, Zed unrecorded
fn sample_store() -> Store {
    store_with(vec![
        record(1, "Bob", Some(85.0)),
        record(2, "Amy", Some(85.0)),
        record(3, "Zed", None),
    ])
}

// =============================================================================
// Insert Tests
// =============================================================================

#[test]
fn test_new_store_is_empty() {
    let store = Store::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert!(store.list_all(SortOrder::Unsorted).is_empty());
}

#[test]
fn test_insert_and_find() {
    let mut store = Store::new();
    store.insert(record(10, "Ada", Some(92.0))).unwrap();

    let found = store.find(10).unwrap();
    assert_eq!(found.name(), "Ada");
    assert_eq!(found.grade(), Grade::A);
    assert!(store.contains(10));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_insert_duplicate_keeps_first() {
    let mut store = Store::new();
    store.insert(record(5, "First", Some(40.0))).unwrap();

    let result = store.insert(record(5, "Second", Some(99.0)));
    assert!(matches!(result, Err(RollbookError::DuplicateId(5))));

    assert_eq!(store.len(), 1);
    assert_eq!(store.find(5).unwrap().name(), "First");
    assert_eq!(store.find(5).unwrap().marks(), Some(40.0));
}

#[test]
fn test_negative_and_zero_ids() {
    let store = store_with(vec![record(0, "Zero", None), record(-3, "Neg", None)]);
    assert!(store.find(0).is_some());
    assert!(store.find(-3).is_some());
}

// =============================================================================
// Remove / Find Tests
// =============================================================================

#[test]
fn test_remove_returns_record() {
    let mut store = sample_store();

    let removed = store.remove(2).unwrap();
    assert_eq!(removed.name(), "Amy");
    assert_eq!(store.len(), 2);
    assert!(store.find(2).is_none());
}

#[test]
fn test_remove_missing_is_not_found() {
    let mut store = sample_store();

    let result = store.remove(42);
    assert!(matches!(result, Err(RollbookError::NotFound(42))));
    assert_eq!(store.len(), 3);
    assert_eq!(ids(&store.list_all(SortOrder::Unsorted)), vec![1, 2, 3]);
}

#[test]
fn test_find_missing_is_none() {
    let store = sample_store();
    assert!(store.find(99).is_none());
}

#[test]
fn test_reinsert_after_remove_goes_last() {
    let mut store = sample_store();
    store.remove(1).unwrap();
    store.insert(record(1, "Bob", Some(10.0))).unwrap();

    assert_eq!(ids(&store.list_all(SortOrder::Unsorted)), vec![2, 3, 1]);
}

// =============================================================================
// Update Tests
// =============================================================================

#[test]
fn test_update_marks_recomputes_grade() {
    let mut store = sample_store();

    let updated = store.update_marks(3, Some(71.0)).unwrap();
    assert_eq!(updated.marks(), Some(71.0));
    assert_eq!(updated.grade(), Grade::C);

    assert_eq!(store.find(3).unwrap().grade(), Grade::C);
}

#[test]
fn test_update_marks_to_unrecorded() {
    let mut store = sample_store();

    let updated = store.update_marks(1, None).unwrap();
    assert_eq!(updated.marks(), None);
    assert_eq!(updated.grade(), Grade::Incomplete);
}

#[test]
fn test_update_marks_missing_is_not_found() {
    let mut store = sample_store();
    let result = store.update_marks(77, Some(50.0));
    assert!(matches!(result, Err(RollbookError::NotFound(77))));
}

#[test]
fn test_update_email() {
    let mut store = sample_store();
    store.update_email(2, "amy@new.edu").unwrap();
    assert_eq!(store.find(2).unwrap().email(), "amy@new.edu");

    assert!(store.update_email(8, "x@y.z").unwrap_err().is_not_found());
}

// =============================================================================
// Listing Tests
// =============================================================================

#[test]
fn test_unsorted_is_insertion_order() {
    let store = store_with(vec![
        record(30, "C", Some(1.0)),
        record(10, "A", Some(3.0)),
        record(20, "B", Some(2.0)),
    ]);

    assert_eq!(ids(&store.list_all(SortOrder::Unsorted)), vec![30, 10, 20]);
}

#[test]
fn test_by_marks_descending_ties_and_absent() {
    let store = sample_store();
    assert_eq!(ids(&store.list_all(SortOrder::ByMarksDescending)), vec![1, 2, 3]);
}

#[test]
fn test_by_name_ascending() {
    let store = sample_store();
    assert_eq!(ids(&store.list_all(SortOrder::ByNameAscending)), vec![2, 1, 3]);
}

#[test]
fn test_by_marks_descending_numeric_order() {
    let store = store_with(vec![
        record(1, "A", Some(9.5)),
        record(2, "B", None),
        record(3, "C", Some(100.0)),
        record(4, "D", Some(70.0)),
        record(5, "E", Some(9.5)),
    ]);

    assert_eq!(ids(&store.list_all(SortOrder::ByMarksDescending)), vec![3, 4, 1, 5, 2]);
}

#[test]
fn test_by_name_is_case_insensitive_and_stable() {
    let store = store_with(vec![
        record(1, "delta", None),
        record(2, "Alpha", None),
        record(3, "ALPHA", None),
        record(4, "charlie", None),
        record(5, "Bravo", None),
    ]);

    assert_eq!(ids(&store.list_all(SortOrder::ByNameAscending)), vec![2, 3, 5, 4, 1]);
}

#[test]
fn test_sorted_view_does_not_reorder_store() {
    let store = sample_store();

    let _ = store.list_all(SortOrder::ByNameAscending);
    let _ = store.list_all(SortOrder::ByMarksDescending);

    assert_eq!(ids(&store.list_all(SortOrder::Unsorted)), vec![1, 2, 3]);
}

#[test]
fn test_iter_matches_unsorted() {
    let store = sample_store();
    let iterated: Vec<StudentId> = store.iter().map(|r| r.id()).collect();
    assert_eq!(iterated, ids(&store.list_all(SortOrder::Unsorted)));
}

#[test]
fn test_default_sort_order_is_unsorted() {
    assert_eq!(SortOrder::default(), SortOrder::Unsorted);
}
