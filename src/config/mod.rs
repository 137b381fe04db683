//! Configuration loading and management for the payroll engine.
//!
//! This module provides the work schedule and the statutory deduction
//! tables, either built in or loaded from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/payroll.yaml").unwrap();
//! println!("Overtime multiplier: {}", loader.config().overtime_multiplier);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DeductionTables, HealthInsuranceTable, HousingFundTable, PayrollConfig, SchedulePolicy,
    SocialInsuranceBracket, SocialInsuranceTable, TaxBracket, WithholdingTaxTable,
};
