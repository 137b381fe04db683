//! Loading of roster and attendance records.
//!
//! This module reads the tabular sources the payroll pipeline consumes and
//! turns raw attendance rows into typed entries.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::records::{load_attendance, load_employees};
//!
//! let employees = load_employees("./data/employees.csv")?;
//! let attendance = load_attendance("./data/attendance.csv")?;
//! println!("{} employees, {} attendance rows", employees.len(), attendance.len());
//! # Ok::<(), payroll_engine::error::PayrollError>(())
//! ```

mod loader;
mod parse;

pub use loader::{
    ATTENDANCE_MIN_FIELDS, BIRTH_DATE_FORMAT, EMPLOYEE_MIN_FIELDS, load_attendance,
    load_employees, read_attendance, read_employees,
};
pub use parse::{ATTENDANCE_DATE_FORMAT, ATTENDANCE_TIME_FORMAT, parse_attendance_record};
