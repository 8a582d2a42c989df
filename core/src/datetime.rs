// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

/// Milliseconds in one hour, the unit slot offsets are computed in.
const HOUR_MILLIS: i64 = 3_600_000;

/// The first instant (00:00:00) of the given date.
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    NaiveDateTime::new(date, NaiveTime::default())
}

/// The first day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - TimeDelta::days(i64::from(date.day0()))
}

/// The first day of the month following the one containing `date`.
pub fn first_of_next_month(date: NaiveDate) -> NaiveDate {
    first_of_month(date) + Months::new(1)
}

/// The last day of the month containing `date`.
pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    first_of_next_month(date) - TimeDelta::days(1)
}

/// January 1 of the year containing `date`.
pub fn first_of_year(date: NaiveDate) -> NaiveDate {
    first_of_month(date) - Months::new(date.month0())
}

/// Whole days from `start` to `end`, negative if `end` comes first.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

/// Offset from midnight of the `index`-th slot when each hour is split into
/// `subdivisions` equal parts.
///
/// Offsets are computed from the index rather than accumulated, so that the
/// last slot of a day always ends at exactly 24:00.
pub fn slot_offset(index: u32, subdivisions: u32) -> TimeDelta {
    let millis = i64::from(index) * HOUR_MILLIS / i64::from(subdivisions.max(1));
    TimeDelta::milliseconds(millis)
}

/// Iterates the dates of the half-open range `[start, end)`.
pub fn days_in(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |d| *d < end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn returns_start_of_day() {
        let dt = start_of_day(date(2025, 1, 15));
        assert_eq!(dt.date(), date(2025, 1, 15));
        assert_eq!(dt.time(), NaiveTime::from_hms_opt(0, 0, 0).unwrap());
    }

    #[test]
    fn computes_month_boundaries() {
        assert_eq!(first_of_month(date(2024, 2, 17)), date(2024, 2, 1));
        assert_eq!(first_of_next_month(date(2024, 2, 17)), date(2024, 3, 1));
        assert_eq!(last_of_month(date(2024, 2, 17)), date(2024, 2, 29));
        assert_eq!(last_of_month(date(2025, 2, 1)), date(2025, 2, 28));
        assert_eq!(first_of_next_month(date(2025, 12, 31)), date(2026, 1, 1));
    }

    #[test]
    fn computes_first_of_year() {
        assert_eq!(first_of_year(date(2025, 1, 1)), date(2025, 1, 1));
        assert_eq!(first_of_year(date(2025, 8, 31)), date(2025, 1, 1));
        assert_eq!(first_of_year(date(2024, 12, 31)), date(2024, 1, 1));
    }

    #[test]
    fn computes_slot_offsets() {
        assert_eq!(slot_offset(0, 4), TimeDelta::zero());
        assert_eq!(slot_offset(1, 4), TimeDelta::minutes(15));
        assert_eq!(slot_offset(96, 4), TimeDelta::hours(24));
        // 7 does not divide an hour, the last slot must still end at 24:00
        assert_eq!(slot_offset(24 * 7, 7), TimeDelta::hours(24));
        assert_eq!(slot_offset(3, 0), TimeDelta::hours(3));
    }

    #[test]
    fn iterates_half_open_day_range() {
        let days: Vec<_> = days_in(date(2025, 1, 30), date(2025, 2, 2)).collect();
        assert_eq!(days, vec![date(2025, 1, 30), date(2025, 1, 31), date(2025, 2, 1)]);
        assert_eq!(days_in(date(2025, 1, 2), date(2025, 1, 1)).count(), 0);
        assert_eq!(days_between(date(2025, 1, 1), date(2025, 1, 8)), 7);
    }
}
