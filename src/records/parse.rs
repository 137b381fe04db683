//! Parsing of raw attendance rows.

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};

use crate::error::{PayrollError, PayrollResult};
use crate::models::{AttendanceEntry, AttendanceRecord};

/// Date format used by the attendance log, e.g. `06/03/2024`.
pub const ATTENDANCE_DATE_FORMAT: &str = "%m/%d/%Y";

/// Time format used by the attendance log, e.g. `8:05` or `17:30`.
pub const ATTENDANCE_TIME_FORMAT: &str = "%H:%M";

/// Parses one raw attendance row into a typed entry.
///
/// Rows that never count are skipped before their cells are parsed:
///
/// 1. a blank time-in or time-out returns `Ok(None)` whatever the date says;
/// 2. the date is parsed, and a Saturday or Sunday returns `Ok(None)`
///    whatever the time cells say;
/// 3. the two times are parsed.
///
/// A cell that fails to parse is a `RowParse` error carrying the row's
/// employee, date text and line number.
///
/// # Examples
///
/// ```
/// use payroll_engine::models::AttendanceRecord;
/// use payroll_engine::records::parse_attendance_record;
/// use chrono::{NaiveDate, NaiveTime};
///
/// let record = AttendanceRecord {
///     employee_id: "10001".to_string(),
///     date: "06/03/2024".to_string(),
///     time_in: "8:05".to_string(),
///     time_out: "17:30".to_string(),
///     line: 2,
/// };
///
/// let entry = parse_attendance_record(&record).unwrap().unwrap();
/// assert_eq!(entry.date, NaiveDate::from_ymd_opt(2024, 6, 3).unwrap());
/// assert_eq!(entry.time_in, NaiveTime::from_hms_opt(8, 5, 0));
/// ```
pub fn parse_attendance_record(
    record: &AttendanceRecord,
) -> PayrollResult<Option<AttendanceEntry>> {
    let raw_in = record.time_in.trim();
    let raw_out = record.time_out.trim();
    if raw_in.is_empty() || raw_out.is_empty() {
        return Ok(None);
    }

    let row_error = |message: String| PayrollError::RowParse {
        employee_id: record.employee_id.trim().to_string(),
        date: record.date.trim().to_string(),
        line: record.line,
        message,
    };

    let date = NaiveDate::parse_from_str(record.date.trim(), ATTENDANCE_DATE_FORMAT)
        .map_err(|e| row_error(format!("invalid date: {}", e)))?;
    if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
        return Ok(None);
    }

    let time_in = NaiveTime::parse_from_str(raw_in, ATTENDANCE_TIME_FORMAT)
        .map_err(|e| row_error(format!("invalid time in '{}': {}", raw_in, e)))?;
    let time_out = NaiveTime::parse_from_str(raw_out, ATTENDANCE_TIME_FORMAT)
        .map_err(|e| row_error(format!("invalid time out '{}': {}", raw_out, e)))?;

    Ok(Some(AttendanceEntry {
        employee_id: record.employee_id.trim().to_string(),
        date,
        time_in: Some(time_in),
        time_out: Some(time_out),
    }))
}
