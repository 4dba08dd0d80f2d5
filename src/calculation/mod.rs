//! Calculation logic for the Attendance Compliance Engine.
//!
//! This module contains the three calculation engines: business-day
//! arithmetic over a fixed exclusion calendar, reporting-period resolution
//! with exclusion-adjusted requirements, and compliance/risk scoring with
//! predictive projection.

mod business_days;
mod compliance;
mod reporting;

pub use business_days::BusinessDayCalculator;
pub use compliance::{AT_RISK_BUFFER_DAYS, ComplianceChecker, classify_risk};
pub use reporting::ReportingPeriodCalculator;
