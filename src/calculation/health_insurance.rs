//! Health-insurance contribution calculation.
//!
//! Three tiers on weekly gross salary, with thresholds and flat premiums
//! derived from their monthly figures. The employee pays the configured
//! share of the premium.

use rust_decimal::Decimal;

use crate::config::HealthInsuranceTable;

use super::WEEKS_PER_MONTH;

/// Calculates the weekly employee share of the health-insurance premium.
///
/// - Gross at or below `monthly_floor / 4`: the minimum premium share.
/// - Gross at or below `monthly_ceiling / 4`: `gross * premium_rate * share`.
/// - Above: the maximum premium share.
///
/// With the standard table the tiers meet exactly at their thresholds, so
/// the contribution is continuous in gross salary.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_health_insurance;
/// use payroll_engine::config::HealthInsuranceTable;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let table = HealthInsuranceTable::default();
/// // 5,000 * 3% / 2
/// let contribution = calculate_health_insurance(Decimal::from(5000), &table);
/// assert_eq!(contribution, Decimal::from_str("75").unwrap());
/// ```
pub fn calculate_health_insurance(gross: Decimal, table: &HealthInsuranceTable) -> Decimal {
    let floor = table.monthly_floor / WEEKS_PER_MONTH;
    let ceiling = table.monthly_ceiling / WEEKS_PER_MONTH;

    if gross <= floor {
        table.minimum_monthly_premium * table.employee_share / WEEKS_PER_MONTH
    } else if gross <= ceiling {
        gross * table.premium_rate * table.employee_share
    } else {
        table.maximum_monthly_premium * table.employee_share / WEEKS_PER_MONTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn standard(gross: &str) -> Decimal {
        calculate_health_insurance(dec(gross), &HealthInsuranceTable::default())
    }

    #[test]
    fn test_zero_salary_pays_minimum() {
        assert_eq!(standard("0"), dec("37.50"));
    }

    #[test]
    fn test_at_floor_pays_minimum() {
        assert_eq!(standard("2500"), dec("37.50"));
    }

    #[test]
    fn test_middle_tier_is_half_of_three_percent() {
        assert_eq!(standard("2500.01"), dec("37.50015"));
        assert_eq!(standard("10000"), dec("150"));
    }

    #[test]
    fn test_at_ceiling_equals_maximum() {
        assert_eq!(standard("15000"), dec("225"));
    }

    #[test]
    fn test_above_ceiling_pays_maximum() {
        assert_eq!(standard("15000.01"), dec("225"));
        assert_eq!(standard("80000"), dec("225"));
    }

    #[test]
    fn test_custom_share() {
        let table = HealthInsuranceTable {
            employee_share: Decimal::ONE,
            ..HealthInsuranceTable::default()
        };
        assert_eq!(calculate_health_insurance(dec("0"), &table), dec("75"));
        assert_eq!(calculate_health_insurance(dec("10000"), &table), dec("300"));
    }
}
