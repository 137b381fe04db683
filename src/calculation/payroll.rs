//! Weekly payroll calculation.
//!
//! This module combines one finalized week bucket with an employee's hourly
//! rate and allowances to produce a [`PayrollStatement`], applying the four
//! statutory deductions to the gross salary.

use chrono::TimeDelta;
use rust_decimal::Decimal;

use crate::config::PayrollConfig;
use crate::models::{
    AuditStep, Deductions, EmployeeProfile, PayrollStatement, WeekBucket, hours_of,
};

use super::{
    WEEKS_PER_MONTH, calculate_health_insurance, calculate_housing_fund,
    calculate_social_insurance, calculate_withholding_tax,
};

/// Days from the Monday that starts a week to the Friday that ends it.
const WORKING_DAYS_AFTER_START: i64 = 4;

/// Calculates the payroll statement for one employee and one week.
///
/// - `base_salary = hours(regular) * hourly_rate`
/// - `overtime_pay = hours(overtime) * hourly_rate * overtime_multiplier`
/// - `gross_salary = base_salary + overtime_pay`
/// - `allowance_total = (rice + phone + clothing) / 4`
/// - `total_deductions = social + health + housing`
/// - `net_pay = gross_salary - total_deductions - withholding_tax`
/// - `final_pay = net_pay + allowance_total`
///
/// No amount is rounded, so `base_salary + overtime_pay == gross_salary`
/// holds exactly.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_weekly_payroll;
/// use payroll_engine::config::PayrollConfig;
/// use payroll_engine::models::{EmployeeProfile, WeekBucket, WorkDurations};
/// use chrono::{NaiveDate, TimeDelta};
/// use rust_decimal::Decimal;
///
/// let employee = EmployeeProfile {
///     id: "10001".to_string(),
///     last_name: "Garcia".to_string(),
///     first_name: "Manuel III".to_string(),
///     birth_date: NaiveDate::from_ymd_opt(1983, 10, 11).unwrap(),
///     hourly_rate: Decimal::from(100),
///     rice_subsidy: Decimal::from(1500),
///     phone_allowance: Decimal::from(2000),
///     clothing_allowance: Decimal::from(1000),
/// };
/// let bucket = WeekBucket {
///     week_start: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
///     durations: WorkDurations::new(TimeDelta::hours(40), TimeDelta::hours(2)),
/// };
///
/// let statement = calculate_weekly_payroll(&employee, &bucket, &PayrollConfig::default());
/// assert_eq!(statement.base_salary, Decimal::from(4000));
/// assert_eq!(statement.overtime_pay, Decimal::from(250));
/// assert_eq!(statement.gross_salary, Decimal::from(4250));
/// ```
pub fn calculate_weekly_payroll(
    employee: &EmployeeProfile,
    bucket: &WeekBucket,
    config: &PayrollConfig,
) -> PayrollStatement {
    let mut audit_trail = Vec::new();
    let rate = employee.hourly_rate;
    let worked = bucket.durations.regular;
    let overtime = bucket.durations.overtime;

    // Base salary
    let regular_hours = hours_of(worked);
    let base_salary = regular_hours * rate;
    audit_trail.push(audit_step(
        &audit_trail,
        "base_salary",
        "Base Salary",
        serde_json::json!({
            "worked_minutes": worked.num_minutes(),
            "hourly_rate": rate.to_string()
        }),
        serde_json::json!({ "base_salary": base_salary.to_string() }),
        format!(
            "{} regular hours at {} per hour",
            regular_hours.round_dp(4).normalize(),
            rate
        ),
    ));

    // Overtime pay
    let overtime_hours = hours_of(overtime);
    let overtime_pay = overtime_hours * rate * config.overtime_multiplier;
    audit_trail.push(audit_step(
        &audit_trail,
        "overtime_pay",
        "Overtime Pay",
        serde_json::json!({
            "overtime_minutes": overtime.num_minutes(),
            "hourly_rate": rate.to_string(),
            "multiplier": config.overtime_multiplier.to_string()
        }),
        serde_json::json!({ "overtime_pay": overtime_pay.to_string() }),
        overtime_reasoning(overtime, overtime_hours, config.overtime_multiplier),
    ));

    let gross_salary = base_salary + overtime_pay;

    // Statutory deductions
    let tables = &config.deductions;
    let deductions = Deductions {
        social_insurance: calculate_social_insurance(gross_salary, &tables.social_insurance),
        health_insurance: calculate_health_insurance(gross_salary, &tables.health_insurance),
        housing_fund: calculate_housing_fund(gross_salary, &tables.housing_fund),
        withholding_tax: calculate_withholding_tax(gross_salary, &tables.withholding_tax),
    };
    for (rule_id, rule_name, amount) in [
        ("social_insurance", "Social Insurance", deductions.social_insurance),
        ("health_insurance", "Health Insurance", deductions.health_insurance),
        ("housing_fund", "Housing Fund", deductions.housing_fund),
        ("withholding_tax", "Withholding Tax", deductions.withholding_tax),
    ] {
        audit_trail.push(audit_step(
            &audit_trail,
            rule_id,
            rule_name,
            serde_json::json!({ "gross_salary": gross_salary.to_string() }),
            serde_json::json!({ "amount": amount.to_string() }),
            format!("{} of {} on weekly gross {}", rule_name, amount, gross_salary),
        ));
    }

    // Allowances
    let allowance_total = employee.monthly_allowances() / WEEKS_PER_MONTH;
    audit_trail.push(audit_step(
        &audit_trail,
        "allowances",
        "Weekly Allowances",
        serde_json::json!({
            "rice_subsidy": employee.rice_subsidy.to_string(),
            "phone_allowance": employee.phone_allowance.to_string(),
            "clothing_allowance": employee.clothing_allowance.to_string()
        }),
        serde_json::json!({ "allowance_total": allowance_total.to_string() }),
        format!(
            "Monthly allowances of {} spread over {} weeks",
            employee.monthly_allowances(),
            WEEKS_PER_MONTH
        ),
    ));

    let total_deductions = deductions.contributions();
    let net_pay = gross_salary - total_deductions - deductions.withholding_tax;
    let final_pay = net_pay + allowance_total;

    PayrollStatement {
        employee_id: employee.id.clone(),
        week_start: bucket.week_start,
        week_end: bucket.week_start + TimeDelta::days(WORKING_DAYS_AFTER_START),
        worked,
        overtime,
        base_salary,
        overtime_pay,
        gross_salary,
        deductions,
        total_deductions,
        allowance_total,
        net_pay,
        final_pay,
        audit_trail,
    }
}

fn audit_step(
    trail: &[AuditStep],
    rule_id: &str,
    rule_name: &str,
    input: serde_json::Value,
    output: serde_json::Value,
    reasoning: String,
) -> AuditStep {
    AuditStep {
        step_number: trail.len() as u32 + 1,
        rule_id: rule_id.to_string(),
        rule_name: rule_name.to_string(),
        input,
        output,
        reasoning,
    }
}

fn overtime_reasoning(overtime: TimeDelta, hours: Decimal, multiplier: Decimal) -> String {
    if overtime.is_zero() {
        "No overtime worked this week".to_string()
    } else {
        format!(
            "{} overtime hours at {}x the hourly rate",
            hours.round_dp(4).normalize(),
            multiplier
        )
    }
}
