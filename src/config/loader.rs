//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the payroll
//! configuration from a YAML file and validating its bracket tables.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{PayrollError, PayrollResult};

use super::types::{PayrollConfig, SchedulePolicy};

/// Loads and provides access to the payroll configuration.
///
/// # File Layout
///
/// ```text
/// config/
/// └── payroll.yaml   # schedule, overtime multiplier, deduction tables
/// ```
///
/// Any section missing from the file falls back to the built-in default.
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payroll.yaml")?;
/// println!("Work starts at {}", loader.config().schedule.start);
/// # Ok::<(), payroll_engine::error::PayrollError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file is not valid YAML for [`PayrollConfig`] (`ConfigParse`)
    /// - A bracket table is not in ascending order, or the schedule ends
    ///   before it starts (`ConfigParse`)
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::from_yaml_str(&content).map_err(|message| PayrollError::ConfigParse {
            path: path_str.clone(),
            message,
        })?;

        debug!(path = %path_str, "Loaded payroll configuration");
        Ok(Self { config })
    }

    /// Wraps an already constructed configuration.
    pub fn from_config(config: PayrollConfig) -> Self {
        Self { config }
    }

    /// Returns the underlying payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    fn from_yaml_str(content: &str) -> Result<PayrollConfig, String> {
        let config: PayrollConfig = serde_yaml::from_str(content).map_err(|e| e.to_string())?;
        validate(&config)?;
        Ok(config)
    }
}

fn validate(config: &PayrollConfig) -> Result<(), String> {
    validate_schedule(&config.schedule)?;

    let social_limits: Vec<Decimal> = config
        .deductions
        .social_insurance
        .brackets
        .iter()
        .map(|b| b.limit)
        .collect();
    ensure_ascending("social_insurance.brackets", &social_limits)?;

    let tax_brackets = &config.deductions.withholding_tax.brackets;
    if tax_brackets.is_empty() {
        return Err("withholding_tax.brackets must not be empty".to_string());
    }
    if let Some(open) = tax_brackets.iter().position(|b| b.ceiling.is_none()) {
        if open != tax_brackets.len() - 1 {
            return Err("withholding_tax.brackets: only the last bracket may omit its ceiling".to_string());
        }
    }
    let tax_ceilings: Vec<Decimal> = tax_brackets.iter().filter_map(|b| b.ceiling).collect();
    ensure_ascending("withholding_tax.brackets", &tax_ceilings)?;

    let health = &config.deductions.health_insurance;
    if health.monthly_floor > health.monthly_ceiling {
        return Err("health_insurance.monthly_floor exceeds monthly_ceiling".to_string());
    }

    Ok(())
}

fn validate_schedule(schedule: &SchedulePolicy) -> Result<(), String> {
    if schedule.end <= schedule.start {
        return Err(format!(
            "schedule.end {} must be after schedule.start {}",
            schedule.end, schedule.start
        ));
    }
    if schedule.grace_minutes < 0 || schedule.break_minutes < 0 {
        return Err("schedule minutes must not be negative".to_string());
    }
    Ok(())
}

fn ensure_ascending(table: &str, limits: &[Decimal]) -> Result<(), String> {
    match limits.windows(2).find(|pair| pair[0] >= pair[1]) {
        Some(pair) => Err(format!(
            "{} must be in ascending order ({} is followed by {})",
            table, pair[0], pair[1]
        )),
        None => Ok(()),
    }
}
