//! Manager Module
//!
//! The façade the menu talks to.
//!
//! ## Responsibilities
//! - Load the store from the record file on open
//! - Validate caller input and map failures to typed errors
//! - Route CRUD/search/list calls to the store
//! - Write everything back on `save_and_exit`

use std::path::Path;

use tracing::debug;

use crate::codec::{LoadReport, RecordFile};
use crate::config::Config;
use crate::error::{Result, RollbookError};
use crate::record::{validate_marks, Record, StudentId};
use crate::store::{SortOrder, Store};

/// One editing session over a record file
///
/// ## Lifecycle
/// - **Init**: `open` loads the store (never fails, see `LoadReport`)
/// - **Ready**: any operation, any number of times, one at a time
/// - **Closed**: `save_and_exit` consumes the manager, so no operation can
///   follow it, whether or not the save succeeded
pub struct Manager {
    /// Session configuration
    config: Config,

    /// Backing flat file
    file: RecordFile,

    /// Live records
    store: Store,

    /// What happened while loading
    load_report: LoadReport,
}

impl Manager {
    /// Open a session over the configured data file
    ///
    /// A missing or partly unreadable file is not an error: the store
    /// holds whatever could be loaded and `load_report` says why.
    pub fn open(config: Config) -> Self {
        let file = RecordFile::new(&config.data_file, config.atomic_save);
        let (store, load_report) = file.load();

        Self {
            config,
            file,
            store,
            load_report,
        }
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified data file
    pub fn open_path(path: &Path) -> Self {
        Self::open(Config::builder().data_file(path).build())
    }

    /// Add a record; fails with `DuplicateId` if its id is taken
    pub fn add(&mut self, record: Record) -> Result<()> {
        let id = record.id();
        self.store.insert(record)?;
        debug!(id, "student added");
        Ok(())
    }

    /// Validate fields, build the record and add it
    pub fn add_student(
        &mut self,
        id: StudentId,
        name: &str,
        email: &str,
        course: &str,
        marks: Option<f64>,
    ) -> Result<&Record> {
        let record = Record::new(id, name, email, course, marks)?;
        self.add(record)?;
        self.search(id)
    }

    /// Delete a record, returning it
    pub fn delete(&mut self, id: StudentId) -> Result<Record> {
        let removed = self.store.remove(id)?;
        debug!(id, "student deleted");
        Ok(removed)
    }

    /// Replace marks (and so the grade)
    ///
    /// Marks are checked before the id, so out-of-range marks report
    /// `Validation` even for an unknown id.
    pub fn update_marks(&mut self, id: StudentId, marks: Option<f64>) -> Result<&Record> {
        validate_marks(marks)?;
        let record = self.store.update_marks(id, marks)?;
        debug!(id, grade = %record.grade(), "marks updated");
        Ok(record)
    }

    /// Replace the email address
    pub fn update_email(&mut self, id: StudentId, email: &str) -> Result<&Record> {
        let record = self.store.update_email(id, email)?;
        debug!(id, "email updated");
        Ok(record)
    }

    /// Find a record by id
    pub fn search(&self, id: StudentId) -> Result<&Record> {
        self.store.find(id).ok_or(RollbookError::NotFound(id))
    }

    /// All records in the requested order
    pub fn list(&self, order: SortOrder) -> Vec<&Record> {
        self.store.list_all(order)
    }

    /// Write every record back and end the session
    ///
    /// Returns the number of records saved. On error the session is still
    /// over; the error tells the caller the file may be stale.
    pub fn save_and_exit(self) -> Result<usize> {
        self.file.save(&self.store)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the data file path
    pub fn data_file(&self) -> &Path {
        self.file.path()
    }

    /// Get the live store (read-only)
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Get what happened during the startup load
    pub fn load_report(&self) -> &LoadReport {
        &self.load_report
    }
}
