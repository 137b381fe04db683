//! The attendance-to-payroll pipeline.
//!
//! Attendance rows flow through parsing, the duration aggregator and the
//! weekly bucketer, and each finalized week becomes one statement. Row
//! problems are collected on the [`PayrollComputation`] and logged; they
//! never stop the rest of the log from being processed.

use tracing::{debug, info, warn};

use crate::config::PayrollConfig;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{AttendanceEntry, AttendanceRecord, EmployeeProfile, PayrollComputation};
use crate::records::parse_attendance_record;

use super::{WeeklyBucketer, aggregate_daily_duration, calculate_weekly_payroll};

/// Computes weekly statements for one employee from typed attendance.
///
/// Entries belonging to other employees are ignored. The result holds one
/// statement per week with qualifying attendance, in ascending week order,
/// and is empty when there is none.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_payroll;
/// use payroll_engine::config::PayrollConfig;
/// use payroll_engine::models::{AttendanceEntry, EmployeeProfile};
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// let employee = EmployeeProfile {
///     id: "10001".to_string(),
///     last_name: "Garcia".to_string(),
///     first_name: "Manuel III".to_string(),
///     birth_date: NaiveDate::from_ymd_opt(1983, 10, 11).unwrap(),
///     hourly_rate: Decimal::from(100),
///     rice_subsidy: Decimal::ZERO,
///     phone_allowance: Decimal::ZERO,
///     clothing_allowance: Decimal::ZERO,
/// };
/// let entries = vec![AttendanceEntry {
///     employee_id: "10001".to_string(),
///     date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
///     time_in: NaiveTime::from_hms_opt(8, 0, 0),
///     time_out: NaiveTime::from_hms_opt(17, 0, 0),
/// }];
///
/// let computation = compute_payroll(&employee, &entries, &PayrollConfig::default());
/// assert_eq!(computation.statements.len(), 1);
/// assert_eq!(computation.statements[0].base_salary, Decimal::from(800));
/// ```
pub fn compute_payroll(
    employee: &EmployeeProfile,
    entries: &[AttendanceEntry],
    config: &PayrollConfig,
) -> PayrollComputation {
    let employee_id = employee.id.trim();
    let mut bucketer = WeeklyBucketer::new();
    let mut row_errors = Vec::new();

    for entry in entries.iter().filter(|e| e.employee_id == employee_id) {
        match aggregate_daily_duration(entry, &config.schedule) {
            Ok(Some(day)) => bucketer.add(day.date, day.durations),
            Ok(None) => debug!(employee_id, date = %entry.date, "Attendance entry skipped"),
            Err(error) => {
                warn!(employee_id, date = %entry.date, error = %error, "Invalid attendance entry");
                row_errors.push(error);
            }
        }
    }

    if bucketer.is_empty() {
        info!(employee_id, "No qualifying attendance");
    }
    let statements: Vec<_> = bucketer
        .finish()
        .iter()
        .map(|bucket| calculate_weekly_payroll(employee, bucket, config))
        .collect();
    debug!(employee_id, weeks = statements.len(), "Payroll computed");

    PayrollComputation {
        employee_id: employee_id.to_string(),
        employee_name: employee.display_name(),
        birth_date: employee.birth_date,
        statements,
        row_errors,
    }
}

/// Parses an employee's raw attendance rows and computes their payroll.
///
/// Rows with a blank time or a weekend date are skipped before their
/// remaining cells are parsed. Rows that fail to parse are reported ahead
/// of rows with an invalid time range.
pub fn run_payroll(
    employee: &EmployeeProfile,
    records: &[AttendanceRecord],
    config: &PayrollConfig,
) -> PayrollComputation {
    let employee_id = employee.id.trim();
    let mut entries = Vec::new();
    let mut parse_errors = Vec::new();

    for record in records.iter().filter(|r| r.employee_id.trim() == employee_id) {
        match parse_attendance_record(record) {
            Ok(Some(entry)) => entries.push(entry),
            Ok(None) => debug!(employee_id, line = record.line, "Attendance row skipped"),
            Err(error) => {
                warn!(employee_id, line = record.line, error = %error, "Unparsable attendance row");
                parse_errors.push(error);
            }
        }
    }

    let mut computation = compute_payroll(employee, &entries, config);
    parse_errors.append(&mut computation.row_errors);
    computation.row_errors = parse_errors;
    computation
}

/// Runs payroll for the roster entry with the given employee number.
///
/// # Errors
///
/// Returns `EmployeeNotFound` if no roster entry has that number.
pub fn process_employee(
    employee_id: &str,
    roster: &[EmployeeProfile],
    records: &[AttendanceRecord],
    config: &PayrollConfig,
) -> PayrollResult<PayrollComputation> {
    let employee_id = employee_id.trim();
    let employee = roster
        .iter()
        .find(|e| e.id.trim() == employee_id)
        .ok_or_else(|| PayrollError::EmployeeNotFound {
            employee_id: employee_id.to_string(),
        })?;

    Ok(run_payroll(employee, records, config))
}

/// Runs payroll for each requested employee number independently.
///
/// An unknown number yields an `EmployeeNotFound` entry in its position
/// and does not affect the others.
pub fn process_employees<'a, I>(
    employee_ids: I,
    roster: &[EmployeeProfile],
    records: &[AttendanceRecord],
    config: &PayrollConfig,
) -> Vec<PayrollResult<PayrollComputation>>
where
    I: IntoIterator<Item = &'a str>,
{
    employee_ids
        .into_iter()
        .map(|id| {
            let result = process_employee(id, roster, records, config);
            if let Err(error) = &result {
                warn!(employee_id = id, error = %error, "Payroll not computed");
            }
            result
        })
        .collect()
}

/// Runs payroll for every roster entry, in roster order.
pub fn process_all(
    roster: &[EmployeeProfile],
    records: &[AttendanceRecord],
    config: &PayrollConfig,
) -> Vec<PayrollComputation> {
    info!(employees = roster.len(), rows = records.len(), "Processing payroll for all employees");
    roster
        .iter()
        .map(|employee| run_payroll(employee, records, config))
        .collect()
}
