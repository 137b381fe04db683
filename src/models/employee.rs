//! Employee model.
//!
//! This module defines the [`EmployeeProfile`] struct for representing a
//! roster entry in the payroll system.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

/// Largest hourly rate or monthly allowance an employee may carry.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Represents one employee from the roster.
///
/// Allowances are fixed monthly amounts; the payroll calculator spreads them
/// evenly across four weeks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeProfile {
    /// Unique employee number.
    pub id: String,
    /// The employee's family name.
    pub last_name: String,
    /// The employee's given name.
    pub first_name: String,
    /// The employee's date of birth.
    pub birth_date: NaiveDate,
    /// Pay per regular hour worked.
    pub hourly_rate: Decimal,
    /// Monthly rice subsidy.
    pub rice_subsidy: Decimal,
    /// Monthly phone allowance.
    pub phone_allowance: Decimal,
    /// Monthly clothing allowance.
    pub clothing_allowance: Decimal,
}

impl EmployeeProfile {
    /// Returns the name as printed on statements, `"Last, First"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::EmployeeProfile;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = EmployeeProfile {
    ///     id: "10001".to_string(),
    ///     last_name: "Garcia".to_string(),
    ///     first_name: "Manuel III".to_string(),
    ///     birth_date: NaiveDate::from_ymd_opt(1983, 10, 11).unwrap(),
    ///     hourly_rate: Decimal::new(53571, 2),
    ///     rice_subsidy: Decimal::from(1500),
    ///     phone_allowance: Decimal::from(2000),
    ///     clothing_allowance: Decimal::from(1000),
    /// };
    /// assert_eq!(employee.display_name(), "Garcia, Manuel III");
    /// ```
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.last_name, self.first_name)
    }

    /// Returns the sum of the three monthly allowances.
    pub fn monthly_allowances(&self) -> Decimal {
        self.rice_subsidy + self.phone_allowance + self.clothing_allowance
    }

    /// Checks that the identifier is present and every amount lies between
    /// zero and [`MAX_AMOUNT`].
    pub fn validate(&self) -> PayrollResult<()> {
        if self.id.trim().is_empty() {
            return Err(PayrollError::InvalidEmployee {
                field: "id".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        let amounts = [
            ("hourly_rate", self.hourly_rate),
            ("rice_subsidy", self.rice_subsidy),
            ("phone_allowance", self.phone_allowance),
            ("clothing_allowance", self.clothing_allowance),
        ];
        for (field, amount) in amounts {
            if amount < Decimal::ZERO {
                return Err(PayrollError::InvalidEmployee {
                    field: field.to_string(),
                    message: format!("must not be negative, got {}", amount),
                });
            }
            if amount > MAX_AMOUNT {
                return Err(PayrollError::InvalidEmployee {
                    field: field.to_string(),
                    message: format!("must not exceed {}, got {}", MAX_AMOUNT, amount),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn create_test_employee() -> EmployeeProfile {
        EmployeeProfile {
            id: "10002".to_string(),
            last_name: "Lim".to_string(),
            first_name: "Antonio".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1988, 6, 19).unwrap(),
            hourly_rate: Decimal::from_str("357.14").unwrap(),
            rice_subsidy: Decimal::from(1500),
            phone_allowance: Decimal::from(2000),
            clothing_allowance: Decimal::from(1000),
        }
    }

    #[test]
    fn test_display_name() {
        assert_eq!(create_test_employee().display_name(), "Lim, Antonio");
    }

    #[test]
    fn test_monthly_allowances_sum() {
        assert_eq!(create_test_employee().monthly_allowances(), Decimal::from(4500));
    }

    #[test]
    fn test_validate_accepts_roster_entry() {
        assert!(create_test_employee().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_rate() {
        let mut employee = create_test_employee();
        employee.hourly_rate = Decimal::from(-1);

        match employee.validate() {
            Err(PayrollError::InvalidEmployee { field, .. }) => assert_eq!(field, "hourly_rate"),
            other => panic!("Expected InvalidEmployee, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_excessive_rate() {
        let mut employee = create_test_employee();
        employee.hourly_rate = Decimal::MAX;

        match employee.validate() {
            Err(PayrollError::InvalidEmployee { field, message }) => {
                assert_eq!(field, "hourly_rate");
                assert!(message.starts_with("must not exceed"), "{}", message);
            }
            other => panic!("Expected InvalidEmployee, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_accepts_amount_at_limit() {
        let mut employee = create_test_employee();
        employee.clothing_allowance = MAX_AMOUNT;
        assert!(employee.validate().is_ok());

        employee.clothing_allowance = MAX_AMOUNT + Decimal::ONE;
        assert!(employee.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_blank_id() {
        let mut employee = create_test_employee();
        employee.id = "  ".to_string();
        assert!(employee.validate().is_err());
    }

    #[test]
    fn test_deserialize_employee() {
        let json = r#"{
            "id": "10003",
            "last_name": "Aquino",
            "first_name": "Bianca Sofia",
            "birth_date": "1989-08-04",
            "hourly_rate": "255.80",
            "rice_subsidy": "1500",
            "phone_allowance": "1000",
            "clothing_allowance": "1000"
        }"#;

        let employee: EmployeeProfile = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, "10003");
        assert_eq!(employee.hourly_rate, Decimal::new(25580, 2));
        assert_eq!(
            employee.birth_date,
            NaiveDate::from_ymd_opt(1989, 8, 4).unwrap()
        );
    }

    #[test]
    fn test_serialize_employee() {
        let employee = create_test_employee();
        let json = serde_json::to_string(&employee).unwrap();

        let deserialized: EmployeeProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(employee, deserialized);
    }
}
