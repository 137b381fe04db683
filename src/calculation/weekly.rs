//! Weekly bucketing of daily durations.
//!
//! Daily results are grouped by the Monday that starts their week and
//! accumulated separately for regular and overtime time.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, TimeDelta};

use crate::models::{WeekBucket, WorkDurations};

/// Returns the Monday on or before `date`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::week_start;
/// use chrono::NaiveDate;
///
/// let thursday = NaiveDate::from_ymd_opt(2024, 6, 6).unwrap();
/// assert_eq!(week_start(thursday), NaiveDate::from_ymd_opt(2024, 6, 3).unwrap());
/// ```
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - TimeDelta::days(i64::from(date.weekday().num_days_from_monday()))
}

/// Accumulates daily durations into week buckets.
///
/// Buckets come out in ascending week order regardless of the order in
/// which days were added.
#[derive(Debug, Clone, Default)]
pub struct WeeklyBucketer {
    buckets: BTreeMap<NaiveDate, WorkDurations>,
}

impl WeeklyBucketer {
    /// Creates an empty bucketer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one day's durations to the bucket for its week.
    pub fn add(&mut self, date: NaiveDate, durations: WorkDurations) {
        let bucket = self.buckets.entry(week_start(date)).or_default();
        *bucket = *bucket + durations;
    }

    /// Returns true if no day has been added.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Finalizes the buckets in ascending week-start order.
    pub fn finish(self) -> Vec<WeekBucket> {
        self.buckets
            .into_iter()
            .map(|(week_start, durations)| WeekBucket {
                week_start,
                durations,
            })
            .collect()
    }
}

/// Groups `(date, durations)` pairs into ordered week buckets.
pub fn bucket_by_week<I>(days: I) -> Vec<WeekBucket>
where
    I: IntoIterator<Item = (NaiveDate, WorkDurations)>,
{
    let mut bucketer = WeeklyBucketer::new();
    for (date, durations) in days {
        bucketer.add(date, durations);
    }
    bucketer.finish()
}
