//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the
//! attendance policy, reporting periods, and holiday calendar from YAML
//! files.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};
use crate::models::ReportingPeriod;

use super::types::{HolidayConfig, PeriodsConfig, PolicyConfig};

/// Loads and provides access to the attendance configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// hands out validated, immutable views of the policy, reporting periods,
/// and exclusion calendar. Validation is fail-fast: the loader refuses to
/// produce a partially-loaded configuration.
///
/// # Directory Structure
///
/// ```text
/// config/rto/
/// ├── policy.yaml    # Required days per period, data directory
/// ├── periods.yaml   # Reporting period definitions
/// └── holidays.yaml  # Holiday calendar (exclusion dates)
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::ConfigLoader;
///
/// let config = ConfigLoader::load("./config/rto")?;
/// for period in config.reporting_periods() {
///     println!("Period {}: {} to {}", period.period_number, period.start_date, period.end_date);
/// }
/// # Ok::<(), attendance_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    policy: PolicyConfig,
    reporting_periods: Vec<ReportingPeriod>,
    exclusion_days: Vec<NaiveDate>,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns an error if any required file is missing, contains invalid
    /// YAML, or fails validation: the baseline requirement and every
    /// period number must be positive, each period's end date must not
    /// precede its start date, and the period list must be non-empty.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let policy: PolicyConfig = Self::load_yaml(&path.join("policy.yaml"))?;
        let periods_config: PeriodsConfig = Self::load_yaml(&path.join("periods.yaml"))?;
        let holidays: HolidayConfig = Self::load_yaml(&path.join("holidays.yaml"))?;

        if policy.required_days_per_period == 0 {
            return Err(EngineError::InvalidConfig {
                message: "required_days_per_period must be greater than 0".to_string(),
            });
        }
        if periods_config.periods.is_empty() {
            return Err(EngineError::InvalidConfig {
                message: "periods.yaml must define at least one reporting period".to_string(),
            });
        }

        let mut reporting_periods = Vec::with_capacity(periods_config.periods.len());
        for definition in &periods_config.periods {
            if definition.period_number == 0 {
                return Err(EngineError::InvalidConfig {
                    message: "period_number must be greater than 0".to_string(),
                });
            }
            if definition.end_date < definition.start_date {
                return Err(EngineError::InvalidConfig {
                    message: format!(
                        "period {}: end_date {} is before start_date {}",
                        definition.period_number, definition.end_date, definition.start_date
                    ),
                });
            }

            // Exclusion enrichment belongs to the period calculator; the
            // loader materializes periods with the policy baseline only.
            reporting_periods.push(ReportingPeriod {
                period_number: definition.period_number,
                start_date: definition.start_date,
                end_date: definition.end_date,
                report_date: definition.report_date,
                baseline_required_days: policy.required_days_per_period,
                exclusion_days: vec![],
                effective_required_days: policy.required_days_per_period,
            });
        }

        Ok(Self {
            policy,
            reporting_periods,
            exclusion_days: holidays.holidays,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// The validated policy settings.
    pub fn policy(&self) -> &PolicyConfig {
        &self.policy
    }

    /// The configured reporting periods, in configured order.
    pub fn reporting_periods(&self) -> &[ReportingPeriod] {
        &self.reporting_periods
    }

    /// The configured exclusion dates.
    pub fn exclusion_days(&self) -> &[NaiveDate] {
        &self.exclusion_days
    }

    /// The directory attendance records are stored in.
    pub fn attendance_data_dir(&self) -> &str {
        &self.policy.attendance_data_dir
    }
}
