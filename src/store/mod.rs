//! Store Module
//!
//! In-memory index over all student records.
//!
//! ## Responsibilities
//! - Exclusive ownership of every Record in the session
//! - At most one Record per id
//! - Insertion-ordered enumeration for unsorted views and saves
//! - Sorted read-only projections on demand
//!
//! ## Data Structure Choice
//! - `HashMap<StudentId, Slot>`: source of truth for existence and lookup
//! - `BTreeMap<u64, StudentId>`: insertion sequence → id, so removal is
//!   O(log n) and unsorted enumeration stays in insertion order

mod index;
mod order;

use serde::{Deserialize, Serialize};

pub use index::Store;

/// Ordering for `Store::list_all`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Insertion order
    #[default]
    Unsorted,

    /// Highest marks first; unrecorded marks last; ties keep insertion order
    ByMarksDescending,

    /// Case-insensitive by name; ties keep insertion order
    ByNameAscending,
}
