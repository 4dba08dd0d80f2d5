//! Configuration types for the attendance policy.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::NaiveDate;
use serde::Deserialize;

/// Attendance policy settings (`policy.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyConfig {
    /// Baseline minimum in-office days per reporting period.
    pub required_days_per_period: u32,
    /// Directory where attendance record files are stored.
    pub attendance_data_dir: String,
}

/// A reporting period definition as configured (`periods.yaml`).
///
/// The requirement and exclusion fields of the full
/// [`ReportingPeriod`](crate::models::ReportingPeriod) are derived from the
/// policy and holiday calendar, not configured per period.
#[derive(Debug, Clone, Deserialize)]
pub struct PeriodDefinition {
    /// Identifier for the period.
    pub period_number: u32,
    /// First day of the period (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the period (inclusive).
    pub end_date: NaiveDate,
    /// Date by which compliance must be reported.
    pub report_date: NaiveDate,
}

/// Reporting periods configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct PeriodsConfig {
    /// Ordered period definitions; configured order is lookup order.
    pub periods: Vec<PeriodDefinition>,
}

/// Holiday calendar file structure (`holidays.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayConfig {
    /// Exclusion dates (holidays and shutdowns).
    pub holidays: Vec<NaiveDate>,
}
