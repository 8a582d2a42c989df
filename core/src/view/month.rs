// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{Datelike, NaiveDate, TimeDelta};

use crate::datetime::{days_between, days_in, first_of_month, last_of_month, start_of_day};
use crate::{Culture, Slot};

const DAYS_PER_WEEK: u32 = 7;

/// Whole weeks covering one month, one slot per day laid out in a seven-column grid.
///
/// Which month is "inside" the period is decided by the midpoint of the rendered range rather
/// than by the reference date, so the month contributing most of the days is the canonical one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonthView;

impl MonthView {
    /// The first day of week on or before the 1st of the reference month.
    pub fn start_date(&self, reference: NaiveDate, culture: &Culture) -> NaiveDate {
        culture.start_of_week(first_of_month(reference))
    }

    /// The first day of week strictly after the last day of the reference month, so that the
    /// trailing partial week is displayed in full.
    pub fn end_date(&self, reference: NaiveDate, culture: &Culture) -> NaiveDate {
        culture.start_of_week(last_of_month(reference)) + TimeDelta::days(i64::from(DAYS_PER_WEEK))
    }

    pub fn slots(&self, _culture: &Culture, start: NaiveDate, end: NaiveDate) -> Vec<Slot> {
        let midpoint = midpoint(start, end);
        let canonical = (midpoint.year(), midpoint.month());

        days_in(start, end)
            .zip(0u32..)
            .map(|(day, i)| {
                let outside = (day.year(), day.month()) != canonical;
                let (row, column) = (i / DAYS_PER_WEEK, i % DAYS_PER_WEEK);
                let next = day + TimeDelta::days(1);
                Slot::new(day.format("%d").to_string(), start_of_day(day), start_of_day(next))
                    .outside_period(outside)
                    .with_grid(Some(row), Some(column))
            })
            .collect()
    }
}

/// The date halfway through `[start, end)`, truncated to whole days.
///
/// A midpoint on the 1st of a month belongs to that month.
fn midpoint(start: NaiveDate, end: NaiveDate) -> NaiveDate {
    start + TimeDelta::days(days_between(start, end).max(0) / 2)
}
