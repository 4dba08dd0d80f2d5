//! Configuration loading and management for the Attendance Compliance Engine.
//!
//! This module provides functionality to load the attendance policy,
//! reporting period definitions, and holiday calendar from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use attendance_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/rto").unwrap();
//! println!("Loaded {} reporting periods", config.reporting_periods().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{HolidayConfig, PeriodDefinition, PeriodsConfig, PolicyConfig};
