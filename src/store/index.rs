//! Store implementation
//!
//! HashMap index plus an insertion-sequence map for ordered enumeration.

use std::collections::{BTreeMap, HashMap};

use super::order::sort_records;
use super::SortOrder;
use crate::error::{Result, RollbookError};
use crate::record::{Record, StudentId};

/// A record together with its insertion sequence number
#[derive(Debug, Clone)]
struct Slot {
    seq: u64,
    record: Record,
}

/// Owns every record in the session
///
/// ## Invariants
/// - `records` and `order` always describe the same set of ids
/// - Every failed operation leaves both maps untouched
#[derive(Debug, Clone, Default)]
pub struct Store {
    /// id → record (source of truth)
    records: HashMap<StudentId, Slot>,

    /// Insertion sequence → id, ascending = insertion order
    order: BTreeMap<u64, StudentId>,

    /// Next sequence number to hand out
    next_seq: u64,
}

impl Store {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new record
    ///
    /// Fails with `DuplicateId` if the id is already present; nothing changes.
    pub fn insert(&mut self, record: Record) -> Result<()> {
        let id = record.id();
        if self.records.contains_key(&id) {
            return Err(RollbookError::DuplicateId(id));
        }

        self.push(record);
        Ok(())
    }

    /// Insert or replace by id. A replaced record keeps its original
    /// position in insertion order.
    ///
    /// Returns `true` if an existing record was replaced.
    pub(crate) fn upsert(&mut self, record: Record) -> bool {
        match self.records.get_mut(&record.id()) {
            Some(slot) => {
                slot.record = record;
                true
            }
            None => {
                self.push(record);
                false
            }
        }
    }

    /// Remove a record, returning it
    pub fn remove(&mut self, id: StudentId) -> Result<Record> {
        let slot = self.records.remove(&id).ok_or(RollbookError::NotFound(id))?;
        self.order.remove(&slot.seq);
        Ok(slot.record)
    }

    /// Look up a record by id
    pub fn find(&self, id: StudentId) -> Option<&Record> {
        self.records.get(&id).map(|slot| &slot.record)
    }

    /// Replace a record's marks (grade is recomputed)
    pub fn update_marks(&mut self, id: StudentId, marks: Option<f64>) -> Result<&Record> {
        let record = self.find_mut(id)?;
        record.set_marks(marks);
        Ok(&*record)
    }

    /// Replace a record's email
    pub fn update_email(&mut self, id: StudentId, email: impl Into<String>) -> Result<&Record> {
        let record = self.find_mut(id)?;
        record.set_email(email);
        Ok(&*record)
    }

    /// All records in the requested order
    ///
    /// Read-only: the underlying insertion order is never changed.
    pub fn list_all(&self, order: SortOrder) -> Vec<&Record> {
        let mut view: Vec<&Record> = self.iter().collect();
        sort_records(&mut view, order);
        view
    }

    /// Iterate records in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Record> + '_ {
        self.order
            .values()
            .filter_map(move |id| self.records.get(id).map(|slot| &slot.record))
    }

    pub fn contains(&self, id: StudentId) -> bool {
        self.records.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn push(&mut self, record: Record) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.order.insert(seq, record.id());
        self.records.insert(record.id(), Slot { seq, record });
    }

    fn find_mut(&mut self, id: StudentId) -> Result<&mut Record> {
        self.records
            .get_mut(&id)
            .map(|slot| &mut slot.record)
            .ok_or(RollbookError::NotFound(id))
    }
}
