//! Configuration types for payroll computation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every type carries a
//! `Default` holding the built-in schedule and statutory tables, so a
//! partially specified file only overrides what it names.

use chrono::{NaiveTime, TimeDelta};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The fixed work schedule applied to every attendance entry.
///
/// # Example
///
/// ```
/// use payroll_engine::config::SchedulePolicy;
/// use chrono::NaiveTime;
///
/// let policy = SchedulePolicy::default();
/// assert_eq!(policy.late_threshold(), NaiveTime::from_hms_opt(8, 10, 0).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulePolicy {
    /// Standard start of the working day.
    pub start: NaiveTime,
    /// Minutes after `start` during which an arrival is forgiven.
    pub grace_minutes: i64,
    /// Standard end of the working day; later departures may be overtime.
    pub end: NaiveTime,
    /// Unpaid break deducted from every worked day, in minutes.
    pub break_minutes: i64,
}

impl SchedulePolicy {
    /// Returns the last time-in that is not counted as late.
    pub fn late_threshold(&self) -> NaiveTime {
        self.start + TimeDelta::minutes(self.grace_minutes)
    }

    /// Returns the unpaid break as a duration.
    pub fn break_duration(&self) -> TimeDelta {
        TimeDelta::minutes(self.break_minutes)
    }
}

impl Default for SchedulePolicy {
    fn default() -> Self {
        Self {
            start: NaiveTime::from_hms_opt(8, 0, 0).unwrap_or_default(),
            grace_minutes: 10,
            end: NaiveTime::from_hms_opt(17, 0, 0).unwrap_or_default(),
            break_minutes: 60,
        }
    }
}

/// One row of the social-insurance contribution schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialInsuranceBracket {
    /// Highest gross salary covered by this bracket (inclusive).
    pub limit: Decimal,
    /// Employee contribution per month for this bracket.
    pub monthly_contribution: Decimal,
}

/// Social-insurance contribution schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialInsuranceTable {
    /// Brackets in ascending `limit` order.
    pub brackets: Vec<SocialInsuranceBracket>,
    /// Monthly contribution applied above the last bracket.
    pub maximum_monthly_contribution: Decimal,
}

impl Default for SocialInsuranceTable {
    fn default() -> Self {
        // 3250, 3750, ... 15250 paying 135.00, 157.50, ... 675.00
        let brackets = (0..25i64)
            .map(|step| SocialInsuranceBracket {
                limit: Decimal::from(3250 + step * 500),
                monthly_contribution: Decimal::new(13500 + step * 2250, 2),
            })
            .collect();

        Self {
            brackets,
            maximum_monthly_contribution: Decimal::new(69750, 2),
        }
    }
}

/// Health-insurance premium schedule, expressed in monthly figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthInsuranceTable {
    /// Premium rate applied to salary in the middle tier.
    pub premium_rate: Decimal,
    /// Portion of the premium paid by the employee.
    pub employee_share: Decimal,
    /// Monthly salary at or below which the minimum premium applies.
    pub monthly_floor: Decimal,
    /// Monthly salary above which the maximum premium applies.
    pub monthly_ceiling: Decimal,
    /// Total monthly premium in the lowest tier.
    pub minimum_monthly_premium: Decimal,
    /// Total monthly premium in the highest tier.
    pub maximum_monthly_premium: Decimal,
}

impl Default for HealthInsuranceTable {
    fn default() -> Self {
        Self {
            premium_rate: Decimal::new(3, 2),
            employee_share: Decimal::new(5, 1),
            monthly_floor: Decimal::from(10_000),
            monthly_ceiling: Decimal::from(60_000),
            minimum_monthly_premium: Decimal::from(300),
            maximum_monthly_premium: Decimal::from(1_800),
        }
    }
}

/// Housing-fund contribution schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HousingFundTable {
    /// Weekly gross salary at or below which the lower rate applies.
    pub rate_threshold: Decimal,
    /// Contribution rate at or below the threshold.
    pub lower_rate: Decimal,
    /// Contribution rate above the threshold.
    pub upper_rate: Decimal,
    /// Maximum contribution per month.
    pub monthly_cap: Decimal,
}

impl Default for HousingFundTable {
    fn default() -> Self {
        Self {
            rate_threshold: Decimal::from(1_500),
            lower_rate: Decimal::new(1, 2),
            upper_rate: Decimal::new(2, 2),
            monthly_cap: Decimal::from(100),
        }
    }
}

/// One bracket of the progressive withholding-tax schedule.
///
/// Tax within the bracket is `base + rate * (gross - floor)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Highest gross salary covered by this bracket; `None` for the top bracket.
    #[serde(default)]
    pub ceiling: Option<Decimal>,
    /// Gross salary from which the marginal rate is measured.
    pub floor: Decimal,
    /// Fixed tax owed at the floor.
    pub base: Decimal,
    /// Marginal rate applied to the excess over the floor.
    pub rate: Decimal,
}

/// Progressive withholding-tax schedule on weekly gross salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WithholdingTaxTable {
    /// Brackets in ascending `ceiling` order, open-ended bracket last.
    pub brackets: Vec<TaxBracket>,
}

impl Default for WithholdingTaxTable {
    fn default() -> Self {
        let bracket = |ceiling: Option<i64>, floor: i64, base: Decimal, rate: i64| TaxBracket {
            ceiling: ceiling.map(Decimal::from),
            floor: Decimal::from(floor),
            base,
            rate: Decimal::new(rate, 2),
        };

        // The last two rows keep the monthly 666667 threshold and the monthly
        // 200833.33 base as published; every other row is a weekly figure.
        Self {
            brackets: vec![
                bracket(Some(5_208), 0, Decimal::ZERO, 0),
                bracket(Some(8_333), 5_208, Decimal::ZERO, 20),
                bracket(Some(16_667), 8_333, Decimal::from(625), 25),
                bracket(Some(41_667), 16_667, Decimal::new(270825, 2), 30),
                bracket(Some(666_667), 41_667, Decimal::new(1020833, 2), 32),
                bracket(None, 666_667, Decimal::new(20083333, 2), 35),
            ],
        }
    }
}

/// The four statutory deduction schedules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeductionTables {
    /// Social-insurance schedule.
    pub social_insurance: SocialInsuranceTable,
    /// Health-insurance schedule.
    pub health_insurance: HealthInsuranceTable,
    /// Housing-fund schedule.
    pub housing_fund: HousingFundTable,
    /// Withholding-tax schedule.
    pub withholding_tax: WithholdingTaxTable,
}

/// The complete payroll configuration.
///
/// # Example
///
/// ```
/// use payroll_engine::config::PayrollConfig;
/// use rust_decimal::Decimal;
///
/// let config = PayrollConfig::default();
/// assert_eq!(config.overtime_multiplier, Decimal::new(125, 2));
/// assert_eq!(config.deductions.social_insurance.brackets.len(), 25);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayrollConfig {
    /// The work schedule.
    pub schedule: SchedulePolicy,
    /// Multiplier applied to the hourly rate for overtime hours.
    pub overtime_multiplier: Decimal,
    /// The statutory deduction schedules.
    pub deductions: DeductionTables,
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self {
            schedule: SchedulePolicy::default(),
            overtime_multiplier: Decimal::new(125, 2),
            deductions: DeductionTables::default(),
        }
    }
}
