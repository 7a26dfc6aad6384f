//! Sorted projections
//!
//! Both orderings use stable sorts, so records that compare equal keep the
//! relative order they had in the input (insertion order).

use std::cmp::Ordering;

use super::SortOrder;
use crate::record::Record;

/// Sort a projection of records in place
pub(crate) fn sort_records(records: &mut [&Record], order: SortOrder) {
    match order {
        SortOrder::Unsorted => {}
        SortOrder::ByMarksDescending => records.sort_by(|a, b| by_marks_descending(a, b)),
        SortOrder::ByNameAscending => records.sort_by_cached_key(|r| r.name().to_lowercase()),
    }
}

/// Present marks before absent ones, higher marks first
fn by_marks_descending(a: &Record, b: &Record) -> Ordering {
    match (a.marks(), b.marks()) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i32, name: &str, marks: Option<f64>) -> Record {
        Record::new(id, name, "", "CS", marks).unwrap()
    }

    fn ids(records: &[&Record]) -> Vec<i32> {
        records.iter().map(|r| r.id()).collect()
    }

    #[test]
    fn test_unsorted_is_untouched() {
        let (a, b) = (record(2, "b", Some(1.0)), record(1, "a", Some(2.0)));
        let mut view = vec![&a, &b];
        sort_records(&mut view, SortOrder::Unsorted);
        assert_eq!(ids(&view), vec![2, 1]);
    }

    #[test]
    fn test_marks_descending_absent_last() {
        let a = record(1, "a", None);
        let b = record(2, "b", Some(50.0));
        let c = record(3, "c", Some(99.5));
        let d = record(4, "d", None);
        let mut view = vec![&a, &b, &c, &d];
        sort_records(&mut view, SortOrder::ByMarksDescending);
        assert_eq!(ids(&view), vec![3, 2, 1, 4]);
    }

    #[test]
    fn test_name_ascending_ignores_case() {
        let a = record(1, "bob", None);
        let b = record(2, "Alice", None);
        let c = record(3, "BOB", None);
        let d = record(4, "carl", None);
        let mut view = vec![&a, &b, &c, &d];
        sort_records(&mut view, SortOrder::ByNameAscending);
        assert_eq!(ids(&view), vec![2, 1, 3, 4]);
    }
}
