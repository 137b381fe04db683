//! Withholding-tax calculation.
//!
//! A progressive schedule: each bracket owes a fixed base plus a marginal
//! rate on the excess over its floor. Brackets are scanned in ascending
//! order and the first whose ceiling covers the gross salary applies.
//!
//! The standard schedule mixes scales at the top: its last ceiling
//! (666,667) and top base (200,833.33) are the published monthly figures
//! while every lower row is weekly. Tax therefore drops when gross crosses
//! 666,667. This is kept until checked against the authoritative table.

use rust_decimal::Decimal;

use crate::config::{TaxBracket, WithholdingTaxTable};

/// Finds the bracket that applies to `gross`.
///
/// Falls back to the last bracket when every bracket has a ceiling below
/// the salary.
pub fn find_tax_bracket(gross: Decimal, table: &WithholdingTaxTable) -> Option<&TaxBracket> {
    table
        .brackets
        .iter()
        .find(|bracket| bracket.ceiling.is_none_or(|ceiling| gross <= ceiling))
        .or_else(|| table.brackets.last())
}

/// Calculates the weekly withholding tax on a gross salary.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_withholding_tax;
/// use payroll_engine::config::WithholdingTaxTable;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let table = WithholdingTaxTable::default();
/// assert_eq!(calculate_withholding_tax(Decimal::from(5000), &table), Decimal::ZERO);
/// // 625 + 25% of (10,000 - 8,333)
/// assert_eq!(
///     calculate_withholding_tax(Decimal::from(10000), &table),
///     Decimal::from_str("1041.75").unwrap()
/// );
/// ```
pub fn calculate_withholding_tax(gross: Decimal, table: &WithholdingTaxTable) -> Decimal {
    match find_tax_bracket(gross, table) {
        Some(bracket) => {
            let excess = (gross - bracket.floor).max(Decimal::ZERO);
            bracket.base + bracket.rate * excess
        }
        None => Decimal::ZERO,
    }
}
