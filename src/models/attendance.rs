//! Attendance models.
//!
//! [`AttendanceRecord`] is a row as it appears in the attendance log, with
//! every field still text. [`AttendanceEntry`] is the typed form consumed by
//! the duration aggregator.

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// A raw attendance row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The employee number the row belongs to.
    pub employee_id: String,
    /// Attendance date, `MM/DD/YYYY`.
    pub date: String,
    /// Log-in time, `H:MM`; empty when not recorded.
    #[serde(default)]
    pub time_in: String,
    /// Log-out time, `H:MM`; empty when not recorded.
    #[serde(default)]
    pub time_out: String,
    /// 1-based line number in the source, 0 when not read from a file.
    #[serde(default)]
    pub line: usize,
}

/// A parsed attendance entry for one employee on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceEntry {
    /// The employee number the entry belongs to.
    pub employee_id: String,
    /// The calendar date worked.
    pub date: NaiveDate,
    /// Log-in time, if recorded.
    pub time_in: Option<NaiveTime>,
    /// Log-out time, if recorded.
    pub time_out: Option<NaiveTime>,
}

impl AttendanceEntry {
    /// Returns true if the entry falls on a Saturday or Sunday.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::AttendanceEntry;
    /// use chrono::NaiveDate;
    ///
    /// let entry = AttendanceEntry {
    ///     employee_id: "10001".to_string(),
    ///     date: NaiveDate::from_ymd_opt(2024, 6, 8).unwrap(), // Saturday
    ///     time_in: None,
    ///     time_out: None,
    /// };
    /// assert!(entry.is_weekend());
    /// ```
    pub fn is_weekend(&self) -> bool {
        matches!(self.date.weekday(), Weekday::Sat | Weekday::Sun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry_on(date: NaiveDate) -> AttendanceEntry {
        AttendanceEntry {
            employee_id: "10001".to_string(),
            date,
            time_in: NaiveTime::from_hms_opt(8, 0, 0),
            time_out: NaiveTime::from_hms_opt(17, 0, 0),
        }
    }

    #[test]
    fn test_weekdays_are_not_weekend() {
        // 2024-06-03 is a Monday
        for offset in 0..5 {
            let date = NaiveDate::from_ymd_opt(2024, 6, 3 + offset).unwrap();
            assert!(!entry_on(date).is_weekend(), "{} flagged as weekend", date);
        }
    }

    #[test]
    fn test_saturday_and_sunday_are_weekend() {
        assert!(entry_on(NaiveDate::from_ymd_opt(2024, 6, 8).unwrap()).is_weekend());
        assert!(entry_on(NaiveDate::from_ymd_opt(2024, 6, 9).unwrap()).is_weekend());
    }

    #[test]
    fn test_record_defaults_missing_times() {
        let json = r#"{"employee_id": "10001", "date": "06/03/2024"}"#;
        let record: AttendanceRecord = serde_json::from_str(json).unwrap();
        assert!(record.time_in.is_empty());
        assert!(record.time_out.is_empty());
        assert_eq!(record.line, 0);
    }
}
