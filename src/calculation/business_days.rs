//! Business day calculations over a fixed exclusion calendar.
//!
//! This module provides the [`BusinessDayCalculator`] for identifying
//! weekends, checking exclusion days (holidays and shutdowns), counting
//! workdays in a range, and filtering exclusions within a period.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};

use crate::error::{EngineError, EngineResult};

/// Weekday indexes for Saturday and Sunday (Monday = 0 .. Sunday = 6).
const SATURDAY: u32 = 5;

/// Calculates business days excluding weekends and exclusion days.
///
/// The exclusion calendar is an immutable value owned by the calculator:
/// it is deduplicated into a set at construction and never mutated. A
/// change in the holiday calendar means constructing a new calculator.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::BusinessDayCalculator;
/// use chrono::NaiveDate;
///
/// let labor_day = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
/// let calc = BusinessDayCalculator::new(vec![labor_day]);
///
/// assert!(!calc.is_workday(labor_day));
/// // Fri Aug 29 to Tue Sep 2: Friday and Tuesday only
/// let start = NaiveDate::from_ymd_opt(2025, 8, 29).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 9, 2).unwrap();
/// assert_eq!(calc.count_workdays(start, end).unwrap(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct BusinessDayCalculator {
    exclusion_days: HashSet<NaiveDate>,
}

impl BusinessDayCalculator {
    /// Creates a calculator from a list of exclusion dates.
    ///
    /// Duplicate dates are collapsed; an empty list is valid. Exclusion
    /// dates that are never queried simply never matter.
    pub fn new(exclusion_days: Vec<NaiveDate>) -> Self {
        Self {
            exclusion_days: exclusion_days.into_iter().collect(),
        }
    }

    /// Checks if a date falls on a weekend (Saturday or Sunday).
    pub fn is_weekend(&self, date: NaiveDate) -> bool {
        date.weekday().num_days_from_monday() >= SATURDAY
    }

    /// Checks if a date is in the exclusion calendar, regardless of weekday.
    pub fn is_exclusion_day(&self, date: NaiveDate) -> bool {
        self.exclusion_days.contains(&date)
    }

    /// Checks if a date is a workday.
    ///
    /// A workday is neither a weekend day nor an exclusion day.
    pub fn is_workday(&self, date: NaiveDate) -> bool {
        !self.is_weekend(date) && !self.is_exclusion_day(date)
    }

    /// Counts workdays in an inclusive date range.
    ///
    /// The weekend count is derived arithmetically: complete 7-day weeks
    /// contribute two weekend days each, and the at-most-six remainder days
    /// are checked by weekday offset from the start date. Weekday
    /// exclusions in the range are then subtracted; exclusions falling on
    /// weekends never count because those days were not workdays anyway.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidDateRange`] if `start` is after `end`.
    /// A zero-length range (`start == end`) is one calendar day.
    pub fn count_workdays(&self, start: NaiveDate, end: NaiveDate) -> EngineResult<u32> {
        if start > end {
            return Err(EngineError::InvalidDateRange { start, end });
        }

        let total_days = (end - start).num_days() + 1;
        let start_weekday = i64::from(start.weekday().num_days_from_monday());

        let complete_weeks = total_days / 7;
        let remaining_days = total_days % 7;

        let mut weekend_days = complete_weeks * 2;
        for offset in 0..remaining_days {
            if (start_weekday + offset) % 7 >= i64::from(SATURDAY) {
                weekend_days += 1;
            }
        }

        // exclusions_in_range already filters to weekdays
        let exclusion_count = self.exclusions_in_range(start, end).len() as i64;

        Ok((total_days - weekend_days - exclusion_count) as u32)
    }

    /// Returns the weekday exclusion dates within an inclusive range,
    /// sorted ascending.
    ///
    /// Exclusions that land on a weekend are filtered out here, which makes
    /// them invisible to every other computation: they never reduce
    /// required-day counts.
    pub fn exclusions_in_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
        let mut exclusions: Vec<NaiveDate> = self
            .exclusion_days
            .iter()
            .copied()
            .filter(|&d| d >= start && d <= end && !self.is_weekend(d))
            .collect();
        exclusions.sort_unstable();
        exclusions
    }
}
