//! Social-insurance contribution lookup.
//!
//! The contribution schedule is a stepped bracket table of monthly amounts.
//! The weekly deduction is the monthly contribution of the first bracket
//! whose limit covers the weekly gross salary, divided by four.

use rust_decimal::Decimal;
use tracing::warn;

use crate::config::SocialInsuranceTable;

use super::WEEKS_PER_MONTH;

/// Calculates the weekly social-insurance contribution for a gross salary.
///
/// Brackets are scanned in ascending limit order and the first bracket
/// with `limit >= gross` applies. When no bracket covers the salary the
/// maximum contribution applies.
///
/// A matched bracket whose weekly contribution is exactly zero also falls
/// back to the maximum. No bracket in the standard schedule is zero, so this
/// only triggers on a custom table; it is logged when it does.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_social_insurance;
/// use payroll_engine::config::SocialInsuranceTable;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let table = SocialInsuranceTable::default();
/// let contribution = calculate_social_insurance(Decimal::from(3500), &table);
/// assert_eq!(contribution, Decimal::from_str("39.375").unwrap()); // 157.50 / 4
/// ```
pub fn calculate_social_insurance(gross: Decimal, table: &SocialInsuranceTable) -> Decimal {
    let maximum = table.maximum_monthly_contribution / WEEKS_PER_MONTH;

    match table.brackets.iter().find(|bracket| gross <= bracket.limit) {
        Some(bracket) => {
            let weekly = bracket.monthly_contribution / WEEKS_PER_MONTH;
            if weekly.is_zero() {
                warn!(
                    gross = %gross,
                    bracket_limit = %bracket.limit,
                    "Social-insurance bracket contribution is zero, applying maximum"
                );
                maximum
            } else {
                weekly
            }
        }
        None => maximum,
    }
}
