//! Daily duration aggregation.
//!
//! This module turns a single attendance entry into the regular and overtime
//! time it earns, applying the work schedule: the grace period on arrival,
//! the cap at the standard end of day, the unpaid break, and the rule that a
//! late arrival forfeits overtime for the day.

use chrono::{NaiveDate, NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::config::SchedulePolicy;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{AttendanceEntry, WorkDurations};

/// The time earned by one attendance entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyDuration {
    /// The date worked.
    pub date: NaiveDate,
    /// Regular and overtime time earned.
    pub durations: WorkDurations,
    /// Whether the arrival was after the grace period.
    pub is_late: bool,
    /// The time-in used for regular hours after grace forgiveness.
    pub effective_time_in: NaiveTime,
}

/// Computes the regular and overtime time earned by one attendance entry.
///
/// # Returns
///
/// - `Ok(None)` when the entry does not count: a missing time-in or
///   time-out, or a Saturday or Sunday date.
/// - `Ok(Some(..))` with the earned durations otherwise.
/// - `Err(InvalidTimeRange)` when time-out is before time-in.
///
/// # Rules
///
/// - An arrival at or before `start + grace` is not late. One that falls
///   after `start` inside the grace period counts from `start`; an earlier
///   arrival counts from its actual time.
/// - Regular time runs to `min(time_out, end)`, less the unpaid break,
///   and never goes below zero.
/// - Overtime is `time_out - end` when the employee was not late and left
///   after `end`. A late arrival earns no overtime that day.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::aggregate_daily_duration;
/// use payroll_engine::config::SchedulePolicy;
/// use payroll_engine::models::AttendanceEntry;
/// use chrono::{NaiveDate, NaiveTime, TimeDelta};
///
/// let entry = AttendanceEntry {
///     employee_id: "10001".to_string(),
///     date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(), // Monday
///     time_in: NaiveTime::from_hms_opt(8, 5, 0),
///     time_out: NaiveTime::from_hms_opt(17, 30, 0),
/// };
///
/// let day = aggregate_daily_duration(&entry, &SchedulePolicy::default())
///     .unwrap()
///     .unwrap();
/// assert_eq!(day.durations.regular, TimeDelta::hours(8));
/// assert_eq!(day.durations.overtime, TimeDelta::minutes(30));
/// ```
pub fn aggregate_daily_duration(
    entry: &AttendanceEntry,
    policy: &SchedulePolicy,
) -> PayrollResult<Option<DailyDuration>> {
    let (Some(time_in), Some(time_out)) = (entry.time_in, entry.time_out) else {
        return Ok(None);
    };

    if entry.is_weekend() {
        return Ok(None);
    }

    if time_out < time_in {
        return Err(PayrollError::InvalidTimeRange {
            employee_id: entry.employee_id.clone(),
            date: entry.date,
            time_in,
            time_out,
        });
    }

    let is_late = time_in > policy.late_threshold();
    let effective_time_in = if time_in > policy.start && !is_late {
        policy.start
    } else {
        time_in
    };
    let effective_time_out = time_out.min(policy.end);

    let regular = (effective_time_out - effective_time_in - policy.break_duration())
        .max(TimeDelta::zero());

    let overtime = if !is_late && time_out > policy.end {
        time_out - policy.end
    } else {
        TimeDelta::zero()
    };

    Ok(Some(DailyDuration {
        date: entry.date,
        durations: WorkDurations::new(regular, overtime),
        is_late,
        effective_time_in,
    }))
}
