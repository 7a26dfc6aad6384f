//! Record file
//!
//! Whole-file load at startup and whole-file overwrite at shutdown.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::line::{decode_record, encode_record, MalformedLine};
use crate::error::Result;
use crate::store::Store;

/// A persisted line that was skipped during load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the file
    pub line_number: usize,

    /// Why the line was rejected
    pub reason: MalformedLine,
}

/// Result of a load operation
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    /// Number of records in the loaded store
    pub records_loaded: u64,

    /// Lines rejected as malformed (blank lines are ignored, not listed)
    pub skipped: Vec<SkippedLine>,

    /// Lines whose id repeated an earlier line (later line wins)
    pub duplicates_replaced: u64,

    /// The data file did not exist; the store starts empty
    pub file_missing: bool,

    /// Read failure that cut the load short; the store holds what was
    /// read before it
    pub read_error: Option<String>,
}

impl LoadReport {
    pub fn lines_skipped(&self) -> usize {
        self.skipped.len()
    }

    /// True when every line was read and accepted
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.read_error.is_none()
    }
}

/// The flat file backing a store
#[derive(Debug, Clone)]
pub struct RecordFile {
    /// Path to the data file
    path: PathBuf,

    /// Save through `<path>.tmp` + rename
    atomic: bool,
}

impl RecordFile {
    /// Suffix appended to the file name for write-then-rename saves
    const TEMP_SUFFIX: &'static str = ".tmp";

    /// Refer to a data file (nothing is opened yet)
    pub fn new(path: impl Into<PathBuf>, atomic: bool) -> Self {
        Self {
            path: path.into(),
            atomic,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every well-formed record
    ///
    /// Never fails:
    /// - missing file → empty store, `file_missing` set
    /// - malformed line → skipped with a warning, listed in the report
    /// - read error → warning, store keeps the records read so far
    pub fn load(&self) -> (Store, LoadReport) {
        let mut store = Store::new();
        let mut report = LoadReport::default();

        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "data file not found, starting empty");
                report.file_missing = true;
                return (store, report);
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "cannot open data file");
                report.read_error = Some(e.to_string());
                return (store, report);
            }
        };

        let reader = BufReader::new(file);
        for (index, raw) in reader.split(b'\n').enumerate() {
            let line_number = index + 1;

            let raw = match raw {
                Ok(raw) => raw,
                Err(e) => {
                    warn!(
                        path = %self.path.display(),
                        line = line_number,
                        error = %e,
                        "read failed, keeping records loaded so far"
                    );
                    report.read_error = Some(e.to_string());
                    break;
                }
            };

            let decoded = match std::str::from_utf8(&raw) {
                Ok(text) => {
                    let text = text.strip_suffix('\r').unwrap_or(text);
                    if text.trim().is_empty() {
                        debug!(line = line_number, "skipping blank line");
                        continue;
                    }
                    decode_record(text)
                }
                Err(_) => Err(MalformedLine::InvalidUtf8),
            };

            match decoded {
                Ok(record) => {
                    let id = record.id();
                    if store.upsert(record) {
                        debug!(line = line_number, id, "duplicate id, later line wins");
                        report.duplicates_replaced += 1;
                    }
                }
                Err(reason) => {
                    warn!(line = line_number, %reason, "skipping malformed record");
                    report.skipped.push(SkippedLine {
                        line_number,
                        reason,
                    });
                }
            }
        }

        report.records_loaded = store.len() as u64;
        info!(
            path = %self.path.display(),
            loaded = report.records_loaded,
            skipped = report.lines_skipped(),
            "loaded student records"
        );

        (store, report)
    }

    /// Overwrite the file with every record in insertion order
    ///
    /// Returns the number of records written.
    pub fn save(&self, store: &Store) -> Result<usize> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let written = if self.atomic {
            let temp = self.temp_path();
            let result = Self::write_all(&temp, store).and_then(|count| {
                fs::rename(&temp, &self.path)?;
                Ok(count)
            });
            if result.is_err() {
                let _ = fs::remove_file(&temp);
            }
            result
        } else {
            Self::write_all(&self.path, store)
        };

        match written {
            Ok(count) => {
                info!(path = %self.path.display(), saved = count, "saved student records");
                Ok(count)
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to save student records");
                Err(e.into())
            }
        }
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Sibling path used for write-then-rename saves
    /// "students.txt" → "students.txt.tmp"
    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(Self::TEMP_SUFFIX);
        self.path.with_file_name(name)
    }

    fn write_all(path: &Path, store: &Store) -> io::Result<usize> {
        let mut writer = BufWriter::new(File::create(path)?);

        let mut count = 0;
        for record in store.iter() {
            writeln!(writer, "{}", encode_record(record))?;
            count += 1;
        }

        let file = writer.into_inner().map_err(|e| e.into_error())?;
        file.sync_all()?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_path_is_sibling() {
        let file = RecordFile::new("/data/students.txt", true);
        assert_eq!(file.temp_path(), PathBuf::from("/data/students.txt.tmp"));
    }
}
