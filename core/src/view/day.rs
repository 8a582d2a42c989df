// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{NaiveDate, TimeDelta};

use crate::datetime::days_in;
use crate::view::{clamp_subdivisions, hour_slots};
use crate::{Culture, Slot};

/// A single day, each hour split into `subdivisions` slots labeled `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayView {
    subdivisions: u32,
}

impl DayView {
    pub fn new(subdivisions: u32) -> Self {
        Self {
            subdivisions: clamp_subdivisions(subdivisions),
        }
    }

    pub fn subdivisions(&self) -> u32 {
        self.subdivisions
    }

    pub fn start_date(&self, reference: NaiveDate, _culture: &Culture) -> NaiveDate {
        reference
    }

    pub fn end_date(&self, reference: NaiveDate, culture: &Culture) -> NaiveDate {
        self.start_date(reference, culture) + TimeDelta::days(1)
    }

    pub fn slots(&self, _culture: &Culture, start: NaiveDate, end: NaiveDate) -> Vec<Slot> {
        days_in(start, end)
            .flat_map(|day| hour_slots(day, self.subdivisions))
            .map(|s| Slot::new(s.start.format("%H:%M").to_string(), s.start, s.end))
            .collect()
    }
}
