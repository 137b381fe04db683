//! Calculation logic for the weekly payroll engine.
//!
//! This module contains the daily duration aggregator, the weekly bucketer,
//! the four statutory deduction calculators, the weekly payroll calculator
//! and the pipeline that chains them from attendance rows to statements.

use rust_decimal::Decimal;

mod attendance;
mod health_insurance;
mod housing_fund;
mod payroll;
mod pipeline;
mod social_insurance;
mod weekly;
mod withholding_tax;

/// Weeks per month used to turn monthly table figures into weekly amounts.
pub const WEEKS_PER_MONTH: Decimal = Decimal::from_parts(4, 0, 0, false, 0);

pub use attendance::{DailyDuration, aggregate_daily_duration};
pub use health_insurance::calculate_health_insurance;
pub use housing_fund::calculate_housing_fund;
pub use payroll::calculate_weekly_payroll;
pub use pipeline::{compute_payroll, process_all, process_employee, process_employees, run_payroll};
pub use social_insurance::calculate_social_insurance;
pub use weekly::{WeeklyBucketer, bucket_by_week, week_start};
pub use withholding_tax::{calculate_withholding_tax, find_tax_bracket};
