//! Core data models for the Attendance Compliance Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod compliance;
mod reporting_period;

pub use attendance::{AttendanceRecord, AttendanceStatus};
pub use compliance::{ComplianceStatus, RiskLevel};
pub use reporting_period::ReportingPeriod;
