// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use chrono::{NaiveDate, Weekday};
use timeslot_core::{Culture, SchedulerItem};

/// Shorthand for a valid calendar date.
#[must_use]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("test date must be valid")
}

/// Every day of `year`, in order.
pub fn days_of_year(year: i32) -> impl Iterator<Item = NaiveDate> {
    date(year, 1, 1)
        .iter_days()
        .take_while(move |d| *d < date(year + 1, 1, 1))
}

/// One culture per possible first day of week.
#[must_use]
pub fn all_cultures() -> Vec<Culture> {
    [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ]
    .into_iter()
    .map(|first| Culture::invariant().with_first_day_of_week(first))
    .collect()
}

/// Generates reproducible item sets from a seed, using a linear congruential generator.
#[derive(Debug, Clone)]
pub struct ItemGenerator {
    state: u64,
}

impl ItemGenerator {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.state >> 33
    }

    /// `count` items starting in `0..horizon`, each at most `max_len` long.
    pub fn items(
        &mut self,
        count: usize,
        horizon: i64,
        max_len: i64,
    ) -> Vec<SchedulerItem<usize, i64>> {
        (0..count)
            .map(|id| {
                let start = (self.next() % horizon as u64) as i64;
                let len = 1 + (self.next() % max_len as u64) as i64;
                SchedulerItem::new(start, start + len, id)
            })
            .collect()
    }
}
