//! Plain-text rendering of payroll results.
//!
//! Amounts are rounded half away from zero to two decimals here and nowhere
//! else; deductions are printed with a leading minus sign.

use std::fmt::Write;

use chrono::TimeDelta;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{PayrollComputation, PayrollStatement};

const RULE: &str = "-------------------------------------------------";

/// Renders the employee header and every weekly statement of a computation.
///
/// An employee without qualifying attendance gets a single informational
/// line instead of statements. Skipped attendance rows are listed last.
pub fn format_computation(computation: &PayrollComputation) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "Employee Number: {}", computation.employee_id);
    let _ = writeln!(out, "Name: {}", computation.employee_name);
    let _ = writeln!(out, "Birthday: {}", computation.birth_date.format("%m/%d/%Y"));
    let _ = writeln!(out, "{}", RULE);

    if computation.has_no_attendance() {
        let _ = writeln!(
            out,
            "No attendance records found for {}.",
            computation.employee_name
        );
    } else {
        let _ = writeln!(out, "\nWeekly Salary Summary for {}:", computation.employee_name);
        let _ = writeln!(out, "{}", RULE);
        for statement in &computation.statements {
            out.push_str(&format_statement(statement));
        }
    }

    if !computation.row_errors.is_empty() {
        let _ = writeln!(out, "\nSkipped attendance rows:");
        for error in &computation.row_errors {
            let _ = writeln!(out, "  {}", error);
        }
    }

    out
}

/// Renders one weekly statement.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_weekly_payroll;
/// use payroll_engine::config::PayrollConfig;
/// use payroll_engine::models::{EmployeeProfile, WeekBucket, WorkDurations};
/// use payroll_engine::report::format_statement;
/// use chrono::{NaiveDate, TimeDelta};
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
/// let bucket = WeekBucket {
///     week_start: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
///     durations: WorkDurations::new(TimeDelta::hours(8), TimeDelta::minutes(30)),
/// };
///
/// let statement = calculate_weekly_payroll(&employee, &bucket, &PayrollConfig::default());
/// let text = format_statement(&statement);
/// assert!(text.contains("Total Hours Worked      : 8h 0m"));
/// assert!(text.contains("Base Salary             : PHP 800.00"));
/// ```
pub fn format_statement(statement: &PayrollStatement) -> String {
    let deductions = &statement.deductions;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Week Period             : {} - {}",
        statement.week_start, statement.week_end
    );
    let _ = writeln!(out, "Total Hours Worked      : {}", hours_and_minutes(statement.worked));
    let _ = writeln!(out, "Total Overtime          : {}", hours_and_minutes(statement.overtime));
    let _ = writeln!(out, "Base Salary             : PHP {}", money(statement.base_salary));
    let _ = writeln!(out, "Overtime Pay            : PHP {}", money(statement.overtime_pay));
    let _ = writeln!(out, "\nGross Salary            : PHP {}", money(statement.gross_salary));
    let _ = writeln!(out, "Social Insurance        : PHP -{}", money(deductions.social_insurance));
    let _ = writeln!(out, "Health Insurance        : PHP -{}", money(deductions.health_insurance));
    let _ = writeln!(out, "Housing Fund            : PHP -{}", money(deductions.housing_fund));
    let _ = writeln!(out, "Withholding Tax         : PHP -{}", money(deductions.withholding_tax));
    let _ = writeln!(out, "\nTotal Deductions        : PHP -{}", money(statement.total_deductions));
    let _ = writeln!(out, "\nAllowances              : PHP {}", money(statement.allowance_total));
    let _ = writeln!(out, "\nNet Salary              : PHP {}", money(statement.final_pay));
    let _ = writeln!(out, "{}-", RULE);
    out
}

/// Formats an amount to exactly two decimals, rounding half away from zero.
pub fn money(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

/// Formats a duration as whole hours and remaining minutes, e.g. `7h 45m`.
pub fn hours_and_minutes(duration: TimeDelta) -> String {
    let minutes = duration.num_minutes();
    format!("{}h {}m", minutes / 60, minutes % 60)
}
