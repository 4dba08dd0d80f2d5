//! Reporting period model.
//!
//! This module contains the [`ReportingPeriod`] type used to define the
//! date ranges over which attendance compliance is evaluated.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A reporting period with its date range and requirement.
///
/// Periods are created from configuration at startup and never mutated
/// afterward; [`enrich_period`] on the period calculator produces derived
/// copies with the exclusion fields populated. Periods may overlap in
/// time, and their duration is whatever the configured dates say it is.
///
/// [`enrich_period`]: crate::calculation::ReportingPeriodCalculator::enrich_period
///
/// # Example
///
/// ```
/// use attendance_engine::models::ReportingPeriod;
/// use chrono::NaiveDate;
///
/// let period = ReportingPeriod {
///     period_number: 1,
///     start_date: NaiveDate::from_ymd_opt(2025, 8, 15).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 11, 14).unwrap(),
///     report_date: NaiveDate::from_ymd_opt(2025, 11, 21).unwrap(),
///     baseline_required_days: 20,
///     exclusion_days: vec![],
///     effective_required_days: 20,
/// };
///
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportingPeriod {
    /// Identifier for the period (positive; duplicates shadow in lookup order).
    pub period_number: u32,
    /// The first day of the period (inclusive).
    pub start_date: NaiveDate,
    /// The last day of the period (inclusive).
    pub end_date: NaiveDate,
    /// The date by which compliance must be reported.
    pub report_date: NaiveDate,
    /// Required in-office days from policy, before exclusion adjustment.
    pub baseline_required_days: u32,
    /// Weekday exclusion dates falling within the period, ascending.
    pub exclusion_days: Vec<NaiveDate>,
    /// Required days after subtracting weekday exclusions, floored at zero.
    pub effective_required_days: u32,
}

impl ReportingPeriod {
    /// Checks if a given date falls within this period.
    ///
    /// The check is inclusive of both the start and end dates.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::models::ReportingPeriod;
    /// use chrono::NaiveDate;
    ///
    /// let period = ReportingPeriod {
    ///     period_number: 1,
    ///     start_date: NaiveDate::from_ymd_opt(2025, 8, 15).unwrap(),
    ///     end_date: NaiveDate::from_ymd_opt(2025, 11, 14).unwrap(),
    ///     report_date: NaiveDate::from_ymd_opt(2025, 11, 21).unwrap(),
    ///     baseline_required_days: 20,
    ///     exclusion_days: vec![],
    ///     effective_required_days: 20,
    /// };
    ///
    /// assert!(period.contains_date(period.start_date));
    /// assert!(period.contains_date(period.end_date));
    /// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2025, 8, 14).unwrap()));
    /// ```
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}
