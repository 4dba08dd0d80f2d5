//! Attendance record models.
//!
//! This module contains the [`AttendanceRecord`] and [`AttendanceStatus`]
//! types describing a single day's recorded attendance.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// The recorded status for a single day.
///
/// The status set is closed: persisted values outside `in-office` and
/// `remote` are rejected with a storage error when loaded.
///
/// # Example
///
/// ```
/// use attendance_engine::models::AttendanceStatus;
///
/// let status: AttendanceStatus = "in-office".parse().unwrap();
/// assert_eq!(status, AttendanceStatus::InOffice);
/// assert!("out-of-office".parse::<AttendanceStatus>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttendanceStatus {
    /// The day was spent in the office; counts toward the requirement.
    InOffice,
    /// The day was worked remotely; recorded but never counted.
    Remote,
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttendanceStatus::InOffice => write!(f, "in-office"),
            AttendanceStatus::Remote => write!(f, "remote"),
        }
    }
}

impl FromStr for AttendanceStatus {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in-office" => Ok(AttendanceStatus::InOffice),
            "remote" => Ok(AttendanceStatus::Remote),
            other => Err(EngineError::InvalidStatus {
                value: other.to_string(),
            }),
        }
    }
}

/// A single day's attendance record.
///
/// One record exists per date; saving a record for a date that already has
/// one overwrites it.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{AttendanceRecord, AttendanceStatus};
/// use chrono::NaiveDate;
///
/// let record = AttendanceRecord {
///     date: NaiveDate::from_ymd_opt(2025, 8, 18).unwrap(),
///     status: AttendanceStatus::InOffice,
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The date of the attendance record.
    pub date: NaiveDate,
    /// The recorded status for that date.
    pub status: AttendanceStatus,
}
