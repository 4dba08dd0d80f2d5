//! Compliance checking and risk classification.
//!
//! This module provides the [`ComplianceChecker`] for evaluating whether
//! attendance requirements are met, classifying how urgently the remaining
//! requirement can still be satisfied, and projecting compliance to the
//! end of a period from planned attendance.

use std::sync::Arc;

use chrono::{Duration, Local, NaiveDate};

use crate::calculation::{BusinessDayCalculator, ReportingPeriodCalculator};
use crate::error::EngineResult;
use crate::models::{AttendanceStatus, ComplianceStatus, ReportingPeriod, RiskLevel};
use crate::storage::AttendanceStore;

/// Buffer threshold (in spare workdays) below which compliance is at risk.
///
/// The classification rule is this absolute day count, not a percentage;
/// percentage figures shown to users are derived for display only.
pub const AT_RISK_BUFFER_DAYS: u32 = 5;

/// Classifies compliance risk from the remaining requirement and workdays.
///
/// The checks form a total ordering, so exactly one level applies:
///
/// 1. already compliant → [`RiskLevel::Achieved`]
/// 2. more days required than workdays remain → [`RiskLevel::Impossible`]
/// 3. zero spare workdays → [`RiskLevel::Critical`]
/// 4. fewer than [`AT_RISK_BUFFER_DAYS`] spare → [`RiskLevel::AtRisk`]
/// 5. otherwise → [`RiskLevel::Possible`]
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::classify_risk;
/// use attendance_engine::models::RiskLevel;
///
/// assert_eq!(classify_risk(12, 12, false), RiskLevel::Critical);
/// assert_eq!(classify_risk(3, 20, false), RiskLevel::Possible);
/// ```
pub fn classify_risk(
    remaining_required: u32,
    remaining_workdays: u32,
    is_compliant: bool,
) -> RiskLevel {
    if is_compliant {
        return RiskLevel::Achieved;
    }

    if remaining_required > remaining_workdays {
        return RiskLevel::Impossible;
    }

    let buffer_days = remaining_workdays - remaining_required;
    if buffer_days == 0 {
        RiskLevel::Critical
    } else if buffer_days < AT_RISK_BUFFER_DAYS {
        RiskLevel::AtRisk
    } else {
        RiskLevel::Possible
    }
}

/// Checks compliance with in-office attendance requirements.
///
/// Combines period data, business-day arithmetic, and stored attendance
/// records into a [`ComplianceStatus`]. Every query is a self-contained
/// read-compute cycle: the checker never writes to the store.
pub struct ComplianceChecker {
    period_calc: ReportingPeriodCalculator,
    business_days: BusinessDayCalculator,
    store: Arc<AttendanceStore>,
}

impl ComplianceChecker {
    /// Creates a checker over the given calculators and store handle.
    pub fn new(
        period_calc: ReportingPeriodCalculator,
        business_days: BusinessDayCalculator,
        store: Arc<AttendanceStore>,
    ) -> Self {
        Self {
            period_calc,
            business_days,
            store,
        }
    }

    /// Returns the period calculator this checker evaluates against.
    pub fn periods(&self) -> &ReportingPeriodCalculator {
        &self.period_calc
    }

    /// Calculates the compliance status for a period as of a date.
    ///
    /// Attendance records are loaded for the period up to the as-of date
    /// (or the period end, whichever comes first) and only `in-office`
    /// records count. Remaining workdays are counted from the day *after*
    /// the as-of date; once the as-of date reaches the period end there
    /// are none left.
    ///
    /// # Errors
    ///
    /// Propagates storage errors from the attendance store; no partial
    /// status is ever returned.
    pub fn compliance_status(
        &self,
        period: &ReportingPeriod,
        as_of_date: NaiveDate,
    ) -> EngineResult<ComplianceStatus> {
        let effective_required = self.period_calc.effective_required_days(period);

        let load_end = as_of_date.min(period.end_date);
        let records = self.store.load_records(period.start_date, load_end)?;

        let in_office_days = records
            .iter()
            .filter(|r| r.status == AttendanceStatus::InOffice)
            .count() as u32;

        let remaining_required = effective_required.saturating_sub(in_office_days);

        let remaining_workdays = if as_of_date >= period.end_date {
            0
        } else {
            self.business_days
                .count_workdays(as_of_date + Duration::days(1), period.end_date)?
        };

        let is_compliant = in_office_days >= effective_required;
        let is_achievable = remaining_required <= remaining_workdays;
        let risk_level = classify_risk(remaining_required, remaining_workdays, is_compliant);

        Ok(ComplianceStatus {
            period: period.clone(),
            as_of_date,
            in_office_days,
            effective_required_days: effective_required,
            remaining_required_days: remaining_required,
            remaining_workdays,
            risk_level,
            is_compliant,
            is_achievable,
        })
    }

    /// Calculates the compliance status as of today's local date.
    pub fn current_compliance_status(
        &self,
        period: &ReportingPeriod,
    ) -> EngineResult<ComplianceStatus> {
        self.compliance_status(period, Local::now().date_naive())
    }

    /// Returns how many more in-office days are needed as of a date.
    ///
    /// Thin accessor over [`compliance_status`](Self::compliance_status).
    pub fn remaining_required_days(
        &self,
        period: &ReportingPeriod,
        as_of_date: NaiveDate,
    ) -> EngineResult<u32> {
        Ok(self.compliance_status(period, as_of_date)?.remaining_required_days)
    }

    /// Returns whether the requirement can still be met as of a date.
    ///
    /// Thin accessor over [`compliance_status`](Self::compliance_status).
    pub fn is_achievable(
        &self,
        period: &ReportingPeriod,
        as_of_date: NaiveDate,
    ) -> EngineResult<bool> {
        Ok(self.compliance_status(period, as_of_date)?.is_achievable)
    }

    /// Projects compliance to the end of the period, assuming attendance
    /// on the given planned dates.
    ///
    /// Planned dates only count when they are strictly after the as-of
    /// date, inside the period, and workdays; everything else is silently
    /// ignored. The projection assumes the period runs to completion, so
    /// the returned status has `remaining_workdays = 0` and is anchored to
    /// the period end date. Stored attendance data is never modified.
    ///
    /// # Errors
    ///
    /// Propagates storage errors from loading the current records.
    pub fn predict_compliance(
        &self,
        period: &ReportingPeriod,
        planned_in_office_dates: &[NaiveDate],
        as_of_date: NaiveDate,
    ) -> EngineResult<ComplianceStatus> {
        let current = self.compliance_status(period, as_of_date)?;

        let additional_days = planned_in_office_dates
            .iter()
            .filter(|&&d| d > as_of_date && period.contains_date(d) && self.business_days.is_workday(d))
            .count() as u32;

        let projected_in_office = current.in_office_days + additional_days;
        let projected_remaining_required = current
            .effective_required_days
            .saturating_sub(projected_in_office);

        // The projection runs the period to completion.
        let projected_remaining_workdays = 0;

        let projected_is_compliant = projected_in_office >= current.effective_required_days;
        let projected_is_achievable = projected_remaining_required == 0;
        let risk_level = classify_risk(
            projected_remaining_required,
            projected_remaining_workdays,
            projected_is_compliant,
        );

        Ok(ComplianceStatus {
            period: period.clone(),
            as_of_date: period.end_date,
            in_office_days: projected_in_office,
            effective_required_days: current.effective_required_days,
            remaining_required_days: projected_remaining_required,
            remaining_workdays: projected_remaining_workdays,
            risk_level,
            is_compliant: projected_is_compliant,
            is_achievable: projected_is_achievable,
        })
    }
}
