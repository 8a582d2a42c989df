// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{NaiveDate, TimeDelta};

use crate::datetime::days_in;
use crate::view::{clamp_subdivisions, hour_slots};
use crate::{Culture, Slot};

/// A continuous time axis with the hour math of [`DayView`](crate::DayView).
///
/// Slots are unlabeled and carry a flat column index along the axis, without a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineView {
    subdivisions: u32,
}

impl TimelineView {
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
        let per_day = 24 * self.subdivisions;
        days_in(start, end)
            .zip(0u32..)
            .flat_map(|(day, nth)| {
                hour_slots(day, self.subdivisions).map(move |s| {
                    let column = nth.saturating_mul(per_day).saturating_add(s.index);
                    Slot::new("", s.start, s.end).with_grid(None, Some(column))
                })
            })
            .collect()
    }
}
