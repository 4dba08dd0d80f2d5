//! Attendance Compliance Engine for return-to-office policies.
//!
//! This crate tracks in-office attendance against a configured policy and
//! computes compliance and risk for reporting periods, including predictive
//! projection of compliance to the end of a period.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod storage;
