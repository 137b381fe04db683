//! Payroll statement models.
//!
//! This module contains the [`PayrollStatement`] type and its associated
//! structures that capture every output of a weekly payroll calculation,
//! including the statutory deductions and an audit trail.

use chrono::{NaiveDate, TimeDelta};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, Serializer};

use super::durations::as_minutes;
use crate::error::PayrollError;

/// A single step in the audit trail recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The four statutory deductions for one week.
///
/// # Example
///
/// ```
/// use payroll_engine::models::Deductions;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let deductions = Deductions {
///     social_insurance: Decimal::from_str("33.75").unwrap(),
///     health_insurance: Decimal::from_str("37.50").unwrap(),
///     housing_fund: Decimal::ZERO,
///     withholding_tax: Decimal::ZERO,
/// };
/// assert_eq!(deductions.contributions(), Decimal::from_str("71.25").unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deductions {
    /// Social-insurance contribution.
    pub social_insurance: Decimal,
    /// Health-insurance contribution (employee share).
    pub health_insurance: Decimal,
    /// Housing-fund contribution.
    pub housing_fund: Decimal,
    /// Withholding tax.
    pub withholding_tax: Decimal,
}

impl Deductions {
    /// Returns the sum of the three contributions, excluding withholding tax.
    pub fn contributions(&self) -> Decimal {
        self.social_insurance + self.health_insurance + self.housing_fund
    }
}

/// The salary breakdown for one employee for one week.
///
/// Amounts are kept at full precision; rounding to two decimals happens
/// only when a statement is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollStatement {
    /// The employee the statement belongs to.
    pub employee_id: String,
    /// The Monday that starts the week.
    pub week_start: NaiveDate,
    /// The Friday that ends the working week.
    pub week_end: NaiveDate,
    /// Regular time worked, net of breaks.
    #[serde(rename = "worked_minutes", with = "as_minutes")]
    pub worked: TimeDelta,
    /// Overtime worked.
    #[serde(rename = "overtime_minutes", with = "as_minutes")]
    pub overtime: TimeDelta,
    /// Pay for regular hours.
    pub base_salary: Decimal,
    /// Pay for overtime hours.
    pub overtime_pay: Decimal,
    /// Base salary plus overtime pay.
    pub gross_salary: Decimal,
    /// The four statutory deductions.
    pub deductions: Deductions,
    /// Social insurance, health insurance and housing fund combined.
    pub total_deductions: Decimal,
    /// Weekly share of the monthly allowances.
    pub allowance_total: Decimal,
    /// Gross salary less contributions and withholding tax.
    pub net_pay: Decimal,
    /// Net pay plus allowances.
    pub final_pay: Decimal,
    /// Every rule applied to produce this statement.
    pub audit_trail: Vec<AuditStep>,
}

/// The outcome of running payroll for one employee.
///
/// `statements` is empty when the employee had no qualifying attendance.
/// `row_errors` lists every attendance row that was skipped because it
/// could not be used: rows that failed to parse first, then rows whose
/// times were out of order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayrollComputation {
    /// The employee the computation belongs to.
    pub employee_id: String,
    /// The employee's display name.
    pub employee_name: String,
    /// The employee's date of birth.
    pub birth_date: NaiveDate,
    /// One statement per week, in ascending week order.
    pub statements: Vec<PayrollStatement>,
    /// Attendance rows that were skipped as invalid.
    #[serde(serialize_with = "errors_as_messages")]
    pub row_errors: Vec<PayrollError>,
}

impl PayrollComputation {
    /// Returns true if no week produced a statement.
    pub fn has_no_attendance(&self) -> bool {
        self.statements.is_empty()
    }
}

fn errors_as_messages<S: Serializer>(
    errors: &[PayrollError],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(errors.iter().map(ToString::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn statement() -> PayrollStatement {
        PayrollStatement {
            employee_id: "10001".to_string(),
            week_start: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            week_end: NaiveDate::from_ymd_opt(2024, 6, 7).unwrap(),
            worked: TimeDelta::minutes(2340),
            overtime: TimeDelta::minutes(30),
            base_salary: Decimal::from(3900),
            overtime_pay: Decimal::new(625, 1),
            gross_salary: Decimal::new(39625, 1),
            deductions: Deductions {
                social_insurance: Decimal::new(45, 0),
                health_insurance: Decimal::new(594375, 4),
                housing_fund: Decimal::from(25),
                withholding_tax: Decimal::ZERO,
            },
            total_deductions: Decimal::new(1294375, 4),
            allowance_total: Decimal::from(1125),
            net_pay: Decimal::new(38330625, 4),
            final_pay: Decimal::new(49580625, 4),
            audit_trail: vec![],
        }
    }

    #[test]
    fn test_statement_serializes_minutes_and_amounts() {
        let value = serde_json::to_value(statement()).unwrap();

        assert_eq!(value["worked_minutes"], json!(2340));
        assert_eq!(value["overtime_minutes"], json!(30));
        assert_eq!(value["week_start"], json!("2024-06-03"));
        assert_eq!(value["gross_salary"], json!("3962.5"));
        assert_eq!(value["deductions"]["housing_fund"], json!("25"));
    }

    #[test]
    fn test_statement_round_trips_through_json() {
        let original = statement();
        let text = serde_json::to_string(&original).unwrap();
        let parsed: PayrollStatement = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_computation_lists_row_errors_as_messages() {
        let computation = PayrollComputation {
            employee_id: "10001".to_string(),
            employee_name: "Garcia, Manuel III".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1983, 10, 11).unwrap(),
            statements: vec![],
            row_errors: vec![PayrollError::EmployeeNotFound {
                employee_id: "10099".to_string(),
            }],
        };

        let value = serde_json::to_value(&computation).unwrap();
        assert_eq!(
            value["row_errors"],
            json!(["Employee with ID 10099 not found"])
        );
        assert!(computation.has_no_attendance());
    }
}
