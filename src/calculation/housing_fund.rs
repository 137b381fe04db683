//! Housing-fund contribution calculation.

use rust_decimal::Decimal;

use crate::config::HousingFundTable;

use super::WEEKS_PER_MONTH;

/// Calculates the weekly housing-fund contribution.
///
/// The lower rate applies at or below `rate_threshold`, the upper rate
/// above it, and the result is capped at `monthly_cap / 4`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_housing_fund;
/// use payroll_engine::config::HousingFundTable;
/// use rust_decimal::Decimal;
///
/// let table = HousingFundTable::default();
/// assert_eq!(calculate_housing_fund(Decimal::from(1000), &table), Decimal::from(10));
/// assert_eq!(calculate_housing_fund(Decimal::from(9000), &table), Decimal::from(25));
/// ```
pub fn calculate_housing_fund(gross: Decimal, table: &HousingFundTable) -> Decimal {
    let rate = if gross <= table.rate_threshold {
        table.lower_rate
    } else {
        table.upper_rate
    };

    (gross * rate).min(table.monthly_cap / WEEKS_PER_MONTH)
}
