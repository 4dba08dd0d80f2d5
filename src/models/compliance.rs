//! Compliance status models.
//!
//! This module contains the [`ComplianceStatus`] and [`RiskLevel`] types
//! produced by compliance evaluation. A status is derived and ephemeral:
//! it is recomputed on every query and never persisted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::ReportingPeriod;

/// Risk classification for achieving compliance within a period.
///
/// Exactly one level applies for any combination of remaining requirement,
/// remaining workdays, and current compliance; see
/// [`classify_risk`](crate::calculation::classify_risk) for the ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskLevel {
    /// The requirement is already met.
    Achieved,
    /// The requirement can be met with five or more spare workdays.
    Possible,
    /// The requirement can be met, but with fewer than five spare workdays.
    AtRisk,
    /// The requirement can only be met by attending every remaining workday.
    Critical,
    /// The requirement cannot be met even using every remaining workday.
    Impossible,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Achieved => write!(f, "achieved"),
            RiskLevel::Possible => write!(f, "possible"),
            RiskLevel::AtRisk => write!(f, "at-risk"),
            RiskLevel::Critical => write!(f, "critical"),
            RiskLevel::Impossible => write!(f, "impossible"),
        }
    }
}

/// The compliance evaluation for one (period, as-of date) pair.
///
/// All counts are whole days. `remaining_workdays` counts forward from the
/// day *after* `as_of_date` to the period end; the as-of date itself is
/// considered already resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceStatus {
    /// The reporting period this status was computed for.
    pub period: ReportingPeriod,
    /// The date the evaluation is anchored to. For projections this is the
    /// period end date regardless of the date the projection was made from.
    pub as_of_date: NaiveDate,
    /// In-office days recorded in the period up to the as-of date.
    pub in_office_days: u32,
    /// Required days after exclusion adjustment.
    pub effective_required_days: u32,
    /// Additional in-office days still needed (floored at zero).
    pub remaining_required_days: u32,
    /// Workdays left in the period after the as-of date.
    pub remaining_workdays: u32,
    /// Risk classification for meeting the requirement.
    pub risk_level: RiskLevel,
    /// Whether the requirement is currently met.
    pub is_compliant: bool,
    /// Whether the requirement can still be met.
    pub is_achievable: bool,
}
