//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading records and
//! computing payroll.

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

/// The main error type for the payroll engine.
///
/// Errors are scoped to the row or employee that triggered them. Row level
/// variants ([`PayrollError::RowParse`] and [`PayrollError::InvalidTimeRange`])
/// are collected on the computation rather than returned, so a bad row never
/// stops the rest of the attendance log from being processed.
///
/// # Example
///
/// ```
/// use payroll_engine::error::PayrollError;
///
/// let error = PayrollError::EmployeeNotFound {
///     employee_id: "10099".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee with ID 10099 not found");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayrollError {
    /// A roster or attendance source could not be read, or a row was short.
    #[error("Failed to read data source '{source_name}': {message}")]
    DataSource {
        /// The path or name of the source.
        source_name: String,
        /// A description of what went wrong.
        message: String,
    },

    /// An attendance row held a date or time that could not be parsed.
    #[error("Failed to parse attendance for {employee_id} on '{date}' (line {line}): {message}")]
    RowParse {
        /// The employee the row belongs to.
        employee_id: String,
        /// The raw date text of the row.
        date: String,
        /// The 1-based line number in the source.
        line: usize,
        /// A description of the parse failure.
        message: String,
    },

    /// An attendance row logged out before it logged in.
    #[error("Invalid time record for {employee_id} on {date}: time out {time_out} is before time in {time_in}")]
    InvalidTimeRange {
        /// The employee the row belongs to.
        employee_id: String,
        /// The attendance date.
        date: NaiveDate,
        /// The recorded time in.
        time_in: NaiveTime,
        /// The recorded time out.
        time_out: NaiveTime,
    },

    /// The requested employee does not appear in the roster.
    #[error("Employee with ID {employee_id} not found")]
    EmployeeNotFound {
        /// The identifier that was looked up.
        employee_id: String,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or failed validation.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParse {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl PayrollError {
    /// Returns true for errors that only invalidate a single attendance row.
    pub fn is_row_error(&self) -> bool {
        matches!(
            self,
            PayrollError::RowParse { .. } | PayrollError::InvalidTimeRange { .. }
        )
    }
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
