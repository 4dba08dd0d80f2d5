//! Reporting period resolution and requirement calculation.
//!
//! This module provides the [`ReportingPeriodCalculator`] for finding
//! reporting periods by date or number, calculating the exclusion-adjusted
//! requirement, and enriching period values with exclusion information.

use chrono::{Local, NaiveDate};

use crate::calculation::BusinessDayCalculator;
use crate::error::{EngineError, EngineResult};
use crate::models::ReportingPeriod;

/// Resolves dates to reporting periods and computes effective requirements.
///
/// Holds the configured period sequence in its configured order, which is
/// not necessarily chronological. Periods may overlap; the singular
/// lookups use first-match semantics, and the plural lookups expose every
/// match so overlap is never silently hidden.
///
/// Returned period references borrow from the calculator; only
/// [`enrich_period`](Self::enrich_period) allocates a new value.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::{BusinessDayCalculator, ReportingPeriodCalculator};
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
/// let business_days = BusinessDayCalculator::new(vec![
///     NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
/// ]);
/// let calc = ReportingPeriodCalculator::new(vec![period], business_days);
///
/// let found = calc.period_for_date(NaiveDate::from_ymd_opt(2025, 10, 1).unwrap()).unwrap();
/// assert_eq!(found.period_number, 1);
/// assert_eq!(calc.effective_required_days(found), 19);
/// ```
#[derive(Debug, Clone)]
pub struct ReportingPeriodCalculator {
    periods: Vec<ReportingPeriod>,
    business_days: BusinessDayCalculator,
}

impl ReportingPeriodCalculator {
    /// Creates a calculator over the configured periods.
    pub fn new(periods: Vec<ReportingPeriod>, business_days: BusinessDayCalculator) -> Self {
        Self {
            periods,
            business_days,
        }
    }

    /// Finds the first period (in configured order) containing a date.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::PeriodNotFound`] if no configured period
    /// contains the date.
    pub fn period_for_date(&self, date: NaiveDate) -> EngineResult<&ReportingPeriod> {
        self.periods
            .iter()
            .find(|p| p.contains_date(date))
            .ok_or(EngineError::PeriodNotFound { date })
    }

    /// Finds all periods containing a date, in configured order.
    ///
    /// Periods may overlap, so several can match; an empty result is not
    /// an error.
    pub fn periods_for_date(&self, date: NaiveDate) -> Vec<&ReportingPeriod> {
        self.periods
            .iter()
            .filter(|p| p.contains_date(date))
            .collect()
    }

    /// Finds the first period containing today's local date.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::PeriodNotFound`] if no period contains today.
    pub fn current_period(&self) -> EngineResult<&ReportingPeriod> {
        self.period_for_date(Local::now().date_naive())
    }

    /// Finds all periods containing today's local date.
    pub fn current_periods(&self) -> Vec<&ReportingPeriod> {
        self.periods_for_date(Local::now().date_naive())
    }

    /// Calculates the effective required days for a period.
    ///
    /// The baseline requirement is reduced by one for each weekday
    /// exclusion in the period's range, floored at zero. Exclusions on
    /// weekends never reduce the requirement.
    pub fn effective_required_days(&self, period: &ReportingPeriod) -> u32 {
        let exclusions = self
            .business_days
            .exclusions_in_range(period.start_date, period.end_date);
        period
            .baseline_required_days
            .saturating_sub(exclusions.len() as u32)
    }

    /// Produces a copy of a period with its exclusion fields populated.
    ///
    /// The returned value has `exclusion_days` set to the weekday
    /// exclusions in range and `effective_required_days` recalculated.
    /// The input is never mutated.
    pub fn enrich_period(&self, period: &ReportingPeriod) -> ReportingPeriod {
        let exclusions = self
            .business_days
            .exclusions_in_range(period.start_date, period.end_date);
        let effective_required = self.effective_required_days(period);

        ReportingPeriod {
            exclusion_days: exclusions,
            effective_required_days: effective_required,
            ..period.clone()
        }
    }

    /// Finds the first period with the given period number.
    ///
    /// Absence is not an error; duplicate numbers shadow in configured
    /// order.
    pub fn period_by_number(&self, period_number: u32) -> Option<&ReportingPeriod> {
        self.periods
            .iter()
            .find(|p| p.period_number == period_number)
    }

    /// Returns all configured periods in their configured order.
    ///
    /// The slice borrows from the calculator; ownership of the sequence
    /// stays here.
    pub fn all_periods(&self) -> &[ReportingPeriod] {
        &self.periods
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn make_period(number: u32, start: &str, end: &str, report: &str) -> ReportingPeriod {
        ReportingPeriod {
            period_number: number,
            start_date: make_date(start),
            end_date: make_date(end),
            report_date: make_date(report),
            baseline_required_days: 20,
            exclusion_days: vec![],
            effective_required_days: 20,
        }
    }

    fn sample_periods() -> Vec<ReportingPeriod> {
        vec![
            make_period(1, "2025-08-15", "2025-11-14", "2025-11-21"),
            make_period(2, "2025-11-15", "2026-02-13", "2026-02-20"),
            make_period(3, "2026-02-14", "2026-05-15", "2026-05-22"),
        ]
    }

    fn sample_calculator() -> ReportingPeriodCalculator {
        let business_days = BusinessDayCalculator::new(vec![
            make_date("2025-09-01"), // Labor Day (Mon)
            make_date("2025-11-11"), // Veterans Day (Tue)
            make_date("2025-12-25"), // Christmas (Thu)
            make_date("2026-01-01"), // New Year's Day (Thu)
        ]);
        ReportingPeriodCalculator::new(sample_periods(), business_days)
    }

    // ==========================================================================
    // period_for_date / periods_for_date
    // ==========================================================================
    #[test]
    fn test_find_period_by_boundary_dates() {
        let calc = sample_calculator();
        assert_eq!(
            calc.period_for_date(make_date("2025-08-15")).unwrap().period_number,
            1
        );
        assert_eq!(
            calc.period_for_date(make_date("2025-11-14")).unwrap().period_number,
            1
        );
        assert_eq!(
            calc.period_for_date(make_date("2025-11-15")).unwrap().period_number,
            2
        );
    }

    #[test]
    fn test_find_period_by_middle_date() {
        let calc = sample_calculator();
        assert_eq!(
            calc.period_for_date(make_date("2026-03-10")).unwrap().period_number,
            3
        );
    }

    #[test]
    fn test_date_outside_all_periods_is_error() {
        let calc = sample_calculator();
        let result = calc.period_for_date(make_date("2025-08-14"));
        assert!(matches!(result, Err(EngineError::PeriodNotFound { .. })));
    }

    #[test]
    fn test_overlapping_periods_first_match_wins() {
        let periods = vec![
            make_period(1, "2025-08-15", "2025-11-14", "2025-11-21"),
            make_period(2, "2025-10-01", "2025-12-31", "2026-01-07"),
        ];
        let calc =
            ReportingPeriodCalculator::new(periods, BusinessDayCalculator::new(vec![]));

        // Oct 15 is inside both; the first configured period wins.
        let found = calc.period_for_date(make_date("2025-10-15")).unwrap();
        assert_eq!(found.period_number, 1);
    }

    #[test]
    fn test_periods_for_date_returns_all_matches_in_order() {
        let periods = vec![
            make_period(2, "2025-10-01", "2025-12-31", "2026-01-07"),
            make_period(1, "2025-08-15", "2025-11-14", "2025-11-21"),
        ];
        let calc =
            ReportingPeriodCalculator::new(periods, BusinessDayCalculator::new(vec![]));

        let matches = calc.periods_for_date(make_date("2025-10-15"));
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].period_number, 2);
        assert_eq!(matches[1].period_number, 1);
    }

    #[test]
    fn test_periods_for_date_empty_when_no_match() {
        let calc = sample_calculator();
        assert!(calc.periods_for_date(make_date("2027-01-01")).is_empty());
    }

    // ==========================================================================
    // effective_required_days
    // ==========================================================================
    #[test]
    fn test_effective_days_without_exclusions() {
        let calc = sample_calculator();
        let period = make_period(9, "2025-10-01", "2025-10-31", "2025-11-07");
        assert_eq!(calc.effective_required_days(&period), 20);
    }

    #[test]
    fn test_effective_days_with_exclusions() {
        let calc = sample_calculator();
        // Period 1 contains Labor Day and Veterans Day.
        let period = calc.period_by_number(1).unwrap();
        assert_eq!(calc.effective_required_days(period), 18);
    }

    #[test]
    fn test_effective_days_three_holidays() {
        let business_days = BusinessDayCalculator::new(vec![
            make_date("2025-09-01"),
            make_date("2025-10-13"), // Columbus Day (Mon)
            make_date("2025-11-11"),
        ]);
        let calc = ReportingPeriodCalculator::new(sample_periods(), business_days);
        let period = calc.period_by_number(1).unwrap();
        assert_eq!(calc.effective_required_days(period), 17);
    }

    #[test]
    fn test_effective_days_floors_at_zero() {
        // A one-week period with more weekday holidays than baseline days.
        let mut period = make_period(9, "2025-12-22", "2025-12-26", "2026-01-02");
        period.baseline_required_days = 2;
        let business_days = BusinessDayCalculator::new(vec![
            make_date("2025-12-22"),
            make_date("2025-12-23"),
            make_date("2025-12-24"),
            make_date("2025-12-25"),
            make_date("2025-12-26"),
        ]);
        let calc = ReportingPeriodCalculator::new(vec![period.clone()], business_days);
        assert_eq!(calc.effective_required_days(&period), 0);
    }

    #[test]
    fn test_weekend_holiday_does_not_reduce_effective_days() {
        // July 4 2026 is a Saturday; the requirement is untouched.
        let period = make_period(9, "2026-06-15", "2026-07-15", "2026-07-22");
        let business_days = BusinessDayCalculator::new(vec![make_date("2026-07-04")]);
        let calc = ReportingPeriodCalculator::new(vec![period.clone()], business_days);
        assert_eq!(calc.effective_required_days(&period), 20);
    }

    // ==========================================================================
    // enrich_period
    // ==========================================================================
    #[test]
    fn test_enrich_populates_exclusions_and_effective_days() {
        let calc = sample_calculator();
        let period = calc.period_by_number(1).unwrap();
        let enriched = calc.enrich_period(period);

        assert_eq!(
            enriched.exclusion_days,
            vec![make_date("2025-09-01"), make_date("2025-11-11")]
        );
        assert_eq!(enriched.effective_required_days, 18);
    }

    #[test]
    fn test_enrich_preserves_other_fields() {
        let calc = sample_calculator();
        let period = calc.period_by_number(2).unwrap();
        let enriched = calc.enrich_period(period);

        assert_eq!(enriched.period_number, period.period_number);
        assert_eq!(enriched.start_date, period.start_date);
        assert_eq!(enriched.end_date, period.end_date);
        assert_eq!(enriched.report_date, period.report_date);
        assert_eq!(enriched.baseline_required_days, period.baseline_required_days);
    }

    #[test]
    fn test_enrich_does_not_mutate_input() {
        let calc = sample_calculator();
        let original = calc.period_by_number(1).unwrap().clone();
        let _enriched = calc.enrich_period(&original);

        assert!(original.exclusion_days.is_empty());
        assert_eq!(original.effective_required_days, 20);
    }

    // ==========================================================================
    // period_by_number / all_periods
    // ==========================================================================
    #[test]
    fn test_period_by_number_found() {
        let calc = sample_calculator();
        assert_eq!(calc.period_by_number(2).unwrap().period_number, 2);
        assert_eq!(calc.period_by_number(3).unwrap().period_number, 3);
    }

    #[test]
    fn test_period_by_number_missing_is_none() {
        let calc = sample_calculator();
        assert!(calc.period_by_number(99).is_none());
        assert!(calc.period_by_number(0).is_none());
    }

    #[test]
    fn test_duplicate_period_numbers_shadow_in_order() {
        let mut periods = sample_periods();
        let mut duplicate = make_period(1, "2026-06-01", "2026-08-31", "2026-09-07");
        duplicate.baseline_required_days = 10;
        periods.push(duplicate);
        let calc =
            ReportingPeriodCalculator::new(periods, BusinessDayCalculator::new(vec![]));

        // The first configured period numbered 1 shadows the later one.
        assert_eq!(calc.period_by_number(1).unwrap().baseline_required_days, 20);
    }

    #[test]
    fn test_all_periods_preserves_configured_order() {
        let calc = sample_calculator();
        let all = calc.all_periods();
        assert_eq!(all.len(), 3);
        let numbers: Vec<u32> = all.iter().map(|p| p.period_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }
}
