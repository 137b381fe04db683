//! Weekly payroll engine.
//!
//! This crate turns an employee roster and a daily attendance log into
//! weekly salary statements. Attendance is normalized against a fixed work
//! schedule, grouped into Monday-to-Sunday weeks, and priced with an hourly
//! rate, an overtime multiplier and four statutory deduction tables.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod records;
pub mod report;
