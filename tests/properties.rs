//! Property tests for the duration aggregator, the weekly bucketer and the
//! deduction calculators.

use chrono::{Datelike, NaiveDate, NaiveTime, TimeDelta, Weekday};
use proptest::prelude::*;
use rust_decimal::Decimal;

use payroll_engine::calculation::{
    aggregate_daily_duration, bucket_by_week, calculate_health_insurance, calculate_housing_fund,
    calculate_social_insurance, calculate_weekly_payroll, calculate_withholding_tax,
    find_tax_bracket,
};
use payroll_engine::config::{PayrollConfig, SchedulePolicy};
use payroll_engine::models::{AttendanceEntry, EmployeeProfile, WeekBucket, WorkDurations};

fn time(minutes: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0).unwrap()
}

/// Any date in 2024, as an offset from the first Monday.
fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..364).prop_map(|offset| NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + TimeDelta::days(offset))
}

/// Any Saturday or Sunday in 2024.
fn weekend_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..52, 0i64..2).prop_map(|(week, day)| {
        NaiveDate::from_ymd_opt(2024, 1, 6).unwrap() + TimeDelta::days(week * 7 + day)
    })
}

fn weekday_strategy() -> impl Strategy<Value = NaiveDate> {
    date_strategy().prop_filter("weekday", |d| {
        !matches!(d.weekday(), Weekday::Sat | Weekday::Sun)
    })
}

fn entry(date: NaiveDate, time_in: u32, time_out: u32) -> AttendanceEntry {
    AttendanceEntry {
        employee_id: "10001".to_string(),
        date,
        time_in: Some(time(time_in)),
        time_out: Some(time(time_out)),
    }
}

fn gross_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

proptest! {
    #[test]
    fn regular_time_never_exceeds_eight_hours_within_grace(
        date in weekday_strategy(),
        time_in in (8 * 60u32)..=(8 * 60 + 10),
        extra in 0u32..(24 * 60),
    ) {
        let time_out = (time_in + extra).min(24 * 60 - 1);
        let day = aggregate_daily_duration(&entry(date, time_in, time_out), &SchedulePolicy::default())
            .unwrap()
            .unwrap();

        prop_assert!(!day.is_late);
        prop_assert!(day.durations.regular <= TimeDelta::hours(8));
        prop_assert!(day.durations.regular >= TimeDelta::zero());
    }

    #[test]
    fn early_arrival_earns_time_before_start(
        date in weekday_strategy(),
        time_in in 0u32..(8 * 60),
    ) {
        let day = aggregate_daily_duration(&entry(date, time_in, 17 * 60), &SchedulePolicy::default())
            .unwrap()
            .unwrap();

        let before_start = TimeDelta::minutes(i64::from(8 * 60 - time_in));
        prop_assert_eq!(day.durations.regular, TimeDelta::hours(8) + before_start);
        prop_assert_eq!(day.effective_time_in, time(time_in));
    }

    #[test]
    fn late_arrival_never_earns_overtime(
        date in weekday_strategy(),
        time_in in (8 * 60 + 11)..(23 * 60u32),
        extra in 0u32..(7 * 60),
    ) {
        let time_out = (time_in.max(17 * 60) + 1 + extra).min(24 * 60 - 1);
        let day = aggregate_daily_duration(&entry(date, time_in, time_out), &SchedulePolicy::default())
            .unwrap()
            .unwrap();

        prop_assert!(day.is_late);
        prop_assert_eq!(day.durations.overtime, TimeDelta::zero());
    }

    #[test]
    fn weekend_days_never_count(
        date in weekend_strategy(),
        time_in in 0u32..(12 * 60),
        time_out in (12 * 60)..(24 * 60u32),
    ) {
        let day = aggregate_daily_duration(&entry(date, time_in, time_out), &SchedulePolicy::default());
        prop_assert_eq!(day, Ok(None));
    }

    #[test]
    fn buckets_preserve_totals_and_start_on_monday(
        days in prop::collection::vec((date_strategy(), 0i64..600, 0i64..300), 0..40),
    ) {
        let input: Vec<(NaiveDate, WorkDurations)> = days
            .iter()
            .map(|(date, regular, overtime)| {
                (*date, WorkDurations::new(TimeDelta::minutes(*regular), TimeDelta::minutes(*overtime)))
            })
            .collect();
        let buckets = bucket_by_week(input.iter().copied());

        let expected = input.iter().fold(WorkDurations::zero(), |acc, (_, d)| acc + *d);
        let actual = buckets.iter().fold(WorkDurations::zero(), |acc, b| acc + b.durations);
        prop_assert_eq!(actual, expected);

        for pair in buckets.windows(2) {
            prop_assert!(pair[0].week_start < pair[1].week_start);
        }
        for bucket in &buckets {
            prop_assert_eq!(bucket.week_start.weekday(), Weekday::Mon);
        }
    }

    #[test]
    fn contributions_are_monotonic(a in gross_strategy(), b in gross_strategy()) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let tables = PayrollConfig::default().deductions;

        prop_assert!(
            calculate_social_insurance(low, &tables.social_insurance)
                <= calculate_social_insurance(high, &tables.social_insurance)
        );
        prop_assert!(
            calculate_health_insurance(low, &tables.health_insurance)
                <= calculate_health_insurance(high, &tables.health_insurance)
        );
        prop_assert!(
            calculate_housing_fund(low, &tables.housing_fund)
                <= calculate_housing_fund(high, &tables.housing_fund)
        );
    }

    #[test]
    fn withholding_tax_is_monotonic_within_a_bracket(
        low in gross_strategy(),
        delta_cents in 0i64..100_000,
    ) {
        let high = low + Decimal::new(delta_cents, 2);
        let table = PayrollConfig::default().deductions.withholding_tax;
        prop_assume!(find_tax_bracket(low, &table) == find_tax_bracket(high, &table));

        prop_assert!(calculate_withholding_tax(low, &table) <= calculate_withholding_tax(high, &table));
        prop_assert!(calculate_withholding_tax(low, &table) >= Decimal::ZERO);
    }

    #[test]
    fn gross_is_base_plus_overtime(
        regular in 0i64..3000,
        overtime in 0i64..1200,
        rate_cents in 0i64..200_000,
    ) {
        let employee = EmployeeProfile {
            id: "10001".to_string(),
            last_name: "Garcia".to_string(),
            first_name: "Manuel III".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1983, 10, 11).unwrap(),
            hourly_rate: Decimal::new(rate_cents, 2),
            rice_subsidy: Decimal::from(1500),
            phone_allowance: Decimal::from(2000),
            clothing_allowance: Decimal::from(1000),
        };
        let bucket = WeekBucket {
            week_start: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            durations: WorkDurations::new(TimeDelta::minutes(regular), TimeDelta::minutes(overtime)),
        };

        let statement = calculate_weekly_payroll(&employee, &bucket, &PayrollConfig::default());

        prop_assert_eq!(statement.base_salary + statement.overtime_pay, statement.gross_salary);
        prop_assert_eq!(statement.final_pay, statement.net_pay + statement.allowance_total);
    }
}
