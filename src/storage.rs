//! File-backed attendance record storage.
//!
//! This module provides the [`AttendanceStore`], which persists attendance
//! records in yearly JSON files (`attendance_YYYY.json`) with atomic
//! writes. Each file holds an object mapping ISO date strings to status
//! values, with keys kept sorted for stable diffs.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate};

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, AttendanceStatus};

/// Date format used for file keys.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// File-based store of date → status attendance entries.
///
/// The store is the only mutable resource in the system; the compliance
/// core only ever reads from it. Writes are atomic: data is written to a
/// temporary file first and renamed into place, so an interrupted write
/// never corrupts an existing year file.
///
/// # Example
///
/// ```no_run
/// use attendance_engine::models::{AttendanceRecord, AttendanceStatus};
/// use attendance_engine::storage::AttendanceStore;
/// use chrono::NaiveDate;
///
/// let store = AttendanceStore::new("./data/attendance")?;
/// store.save_record(&AttendanceRecord {
///     date: NaiveDate::from_ymd_opt(2025, 8, 18).unwrap(),
///     status: AttendanceStatus::InOffice,
/// })?;
/// # Ok::<(), attendance_engine::error::EngineError>(())
/// ```
#[derive(Debug)]
pub struct AttendanceStore {
    data_dir: PathBuf,
}

impl AttendanceStore {
    /// Opens a store over the given data directory, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the directory cannot be created.
    pub fn new(data_dir: impl Into<PathBuf>) -> EngineResult<Self> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir).map_err(|e| EngineError::Storage {
            path: data_dir.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(Self { data_dir })
    }

    /// Path of the file holding a given year's records.
    fn year_file_path(&self, year: i32) -> PathBuf {
        self.data_dir.join(format!("attendance_{year}.json"))
    }

    /// Saves a record, overwriting any existing record for the same date.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the year file cannot be read, parsed,
    /// or atomically rewritten.
    pub fn save_record(&self, record: &AttendanceRecord) -> EngineResult<()> {
        let file_path = self.year_file_path(record.date.year());
        let mut year_data = self.read_year_file(&file_path)?;

        let date_key = record.date.format(DATE_FORMAT).to_string();
        year_data.insert(date_key, record.status.to_string());

        self.atomic_write(&file_path, &year_data)
    }

    /// Loads the raw date → status map for a year.
    ///
    /// A missing year file is an empty map, not an error.
    pub fn records_for_year(&self, year: i32) -> EngineResult<BTreeMap<String, String>> {
        self.read_year_file(&self.year_file_path(year))
    }

    /// Loads validated records in an inclusive date range, sorted by date.
    ///
    /// Every entry in the touched year files is validated: a date that
    /// does not parse or a status outside the closed two-value set aborts
    /// the load with a storage error rather than producing a partial
    /// result.
    pub fn load_records(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> EngineResult<Vec<AttendanceRecord>> {
        let mut records = Vec::new();

        for year in start_date.year()..=end_date.year() {
            let file_path = self.year_file_path(year);
            let year_data = self.read_year_file(&file_path)?;

            for (date_str, status_str) in &year_data {
                let date = NaiveDate::parse_from_str(date_str, DATE_FORMAT).map_err(|e| {
                    EngineError::Storage {
                        path: file_path.display().to_string(),
                        message: format!("invalid date key '{date_str}': {e}"),
                    }
                })?;
                let status: AttendanceStatus = status_str.parse()?;

                if date >= start_date && date <= end_date {
                    records.push(AttendanceRecord { date, status });
                }
            }
        }

        records.sort_by_key(|r| r.date);
        Ok(records)
    }

    /// Reads and parses a year file into a sorted map.
    fn read_year_file(&self, file_path: &Path) -> EngineResult<BTreeMap<String, String>> {
        if !file_path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(file_path).map_err(|e| EngineError::Storage {
            path: file_path.display().to_string(),
            message: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| EngineError::Storage {
            path: file_path.display().to_string(),
            message: format!("invalid JSON: {e}"),
        })
    }

    /// Atomically writes a year map: temp file first, then rename.
    fn atomic_write(
        &self,
        file_path: &Path,
        data: &BTreeMap<String, String>,
    ) -> EngineResult<()> {
        let tmp_path = file_path.with_extension("json.tmp");
        let storage_err = |message: String| EngineError::Storage {
            path: file_path.display().to_string(),
            message,
        };

        let content =
            serde_json::to_string_pretty(data).map_err(|e| storage_err(e.to_string()))?;

        fs::write(&tmp_path, content).map_err(|e| storage_err(e.to_string()))?;

        fs::rename(&tmp_path, file_path).map_err(|e| {
            // Best-effort cleanup of the temp file.
            let _ = fs::remove_file(&tmp_path);
            storage_err(e.to_string())
        })
    }
}
