//! Application state for the Attendance Compliance Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calculation::{BusinessDayCalculator, ComplianceChecker, ReportingPeriodCalculator};
use crate::config::ConfigLoader;
use crate::storage::AttendanceStore;

/// Shared application state.
///
/// Contains the engine components assembled from loaded configuration:
/// the period calculator, the compliance checker, and the attendance
/// store the record endpoint writes through.
#[derive(Clone)]
pub struct AppState {
    periods: Arc<ReportingPeriodCalculator>,
    checker: Arc<ComplianceChecker>,
    store: Arc<AttendanceStore>,
}

impl AppState {
    /// Assembles the application state from configuration and a store.
    ///
    /// The store is taken separately from the configuration so callers
    /// (tests in particular) can point it anywhere.
    pub fn new(config: &ConfigLoader, store: AttendanceStore) -> Self {
        let store = Arc::new(store);
        let business_days = BusinessDayCalculator::new(config.exclusion_days().to_vec());
        let periods = Arc::new(ReportingPeriodCalculator::new(
            config.reporting_periods().to_vec(),
            business_days.clone(),
        ));
        let checker = Arc::new(ComplianceChecker::new(
            ReportingPeriodCalculator::new(config.reporting_periods().to_vec(), business_days.clone()),
            business_days,
            Arc::clone(&store),
        ));

        Self {
            periods,
            checker,
            store,
        }
    }

    /// Returns the reporting period calculator.
    pub fn periods(&self) -> &ReportingPeriodCalculator {
        &self.periods
    }

    /// Returns the compliance checker.
    pub fn checker(&self) -> &ComplianceChecker {
        &self.checker
    }

    /// Returns the attendance store.
    pub fn store(&self) -> &AttendanceStore {
        &self.store
    }
}
