//! Request types for the payroll API.
//!
//! This module defines the JSON request structure for the `/payroll` endpoint.

use serde::{Deserialize, Serialize};

use crate::models::{AttendanceRecord, EmployeeProfile};

/// Request body for the `/payroll` endpoint.
///
/// Attendance rows use the same text formats as the attendance log
/// (`MM/DD/YYYY` dates, `H:MM` times). A row's `line` may be omitted, in
/// which case its 1-based position in `attendance` is used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// The employee to run payroll for.
    pub employee: EmployeeProfile,
    /// The employee's raw attendance rows.
    #[serde(default)]
    pub attendance: Vec<AttendanceRecord>,
}

impl PayrollRequest {
    /// Numbers every row whose `line` was not supplied by its position.
    pub(crate) fn number_rows(&mut self) {
        for (index, record) in self.attendance.iter_mut().enumerate() {
            if record.line == 0 {
                record.line = index + 1;
            }
        }
    }
}
