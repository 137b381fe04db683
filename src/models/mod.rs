//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod durations;
mod employee;
mod statement;

pub use attendance::{AttendanceEntry, AttendanceRecord};
pub use durations::{WeekBucket, WorkDurations, hours_of};
pub use employee::{EmployeeProfile, MAX_AMOUNT};
pub use statement::{AuditStep, Deductions, PayrollComputation, PayrollStatement};
