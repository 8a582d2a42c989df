// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{Datelike, Months, NaiveDate};

use crate::datetime::{first_of_next_month, first_of_year, start_of_day};
use crate::{Culture, Slot};

/// The twelve months of the reference year, labeled with the culture's month names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct YearView;

impl YearView {
    pub fn start_date(&self, reference: NaiveDate, _culture: &Culture) -> NaiveDate {
        first_of_year(reference)
    }

    pub fn end_date(&self, reference: NaiveDate, culture: &Culture) -> NaiveDate {
        self.start_date(reference, culture) + Months::new(12)
    }

    /// One slot per month starting in `[start, end)`.
    pub fn slots(&self, culture: &Culture, start: NaiveDate, end: NaiveDate) -> Vec<Slot> {
        let mut slots = Vec::with_capacity(12);
        let mut month = match start.day() {
            1 => start,
            _ => first_of_next_month(start),
        };
        while month < end {
            let next = first_of_next_month(month);
            let label = culture.month_name(month.month());
            slots.push(Slot::new(label, start_of_day(month), start_of_day(next)));
            month = next;
        }
        slots
    }
}
