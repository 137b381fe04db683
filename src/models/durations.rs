//! Worked-time models.
//!
//! This module contains [`WorkDurations`], the regular/overtime pair used
//! both for a single day and as the weekly accumulator, and [`WeekBucket`].

use std::ops::Add;

use chrono::{NaiveDate, TimeDelta};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Serializes a [`TimeDelta`] as a whole number of minutes.
pub(crate) mod as_minutes {
    use chrono::TimeDelta;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &TimeDelta, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(value.num_minutes())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<TimeDelta, D::Error> {
        i64::deserialize(deserializer).map(TimeDelta::minutes)
    }
}

/// Regular and overtime durations worked.
///
/// # Example
///
/// ```
/// use payroll_engine::models::WorkDurations;
/// use chrono::TimeDelta;
///
/// let monday = WorkDurations::new(TimeDelta::hours(8), TimeDelta::minutes(30));
/// let tuesday = WorkDurations::new(TimeDelta::hours(7), TimeDelta::zero());
/// let week = monday + tuesday;
///
/// assert_eq!(week.regular, TimeDelta::hours(15));
/// assert_eq!(week.overtime, TimeDelta::minutes(30));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkDurations {
    /// Time worked within the standard schedule, net of the unpaid break.
    #[serde(rename = "regular_minutes", with = "as_minutes")]
    pub regular: TimeDelta,
    /// Time worked after the standard end of day.
    #[serde(rename = "overtime_minutes", with = "as_minutes")]
    pub overtime: TimeDelta,
}

impl WorkDurations {
    /// Creates a new pair of durations.
    pub fn new(regular: TimeDelta, overtime: TimeDelta) -> Self {
        Self { regular, overtime }
    }

    /// Returns a pair with both durations zero.
    pub fn zero() -> Self {
        Self::new(TimeDelta::zero(), TimeDelta::zero())
    }
}

impl Default for WorkDurations {
    fn default() -> Self {
        Self::zero()
    }
}

/// Field-wise sum; regular and overtime never mix.
impl Add for WorkDurations {
    type Output = WorkDurations;

    fn add(self, other: WorkDurations) -> WorkDurations {
        WorkDurations {
            regular: self.regular + other.regular,
            overtime: self.overtime + other.overtime,
        }
    }
}

/// Accumulated durations for the week starting on `week_start` (a Monday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekBucket {
    /// The Monday that starts the week.
    pub week_start: NaiveDate,
    /// Durations accumulated over every qualifying day of the week.
    pub durations: WorkDurations,
}

/// Converts a duration to decimal hours at minute precision.
///
/// # Examples
///
/// ```
/// use payroll_engine::models::hours_of;
/// use chrono::TimeDelta;
/// use rust_decimal::Decimal;
///
/// assert_eq!(hours_of(TimeDelta::minutes(465)), Decimal::new(775, 2)); // 7.75
/// ```
pub fn hours_of(duration: TimeDelta) -> Decimal {
    Decimal::from(duration.num_minutes()) / Decimal::from(60)
}
