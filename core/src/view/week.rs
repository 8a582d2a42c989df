// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{NaiveDate, TimeDelta};

use crate::datetime::{days_between, days_in};
use crate::view::{clamp_subdivisions, hour_slots};
use crate::{Culture, Slot, SlotError};

const DAYS_PER_WEEK: i64 = 7;

/// Seven days starting on the culture's first day of week.
///
/// Slots are unlabeled, the day and hour axes are rendered by the caller. Each slot sits in
/// the column of its day (`0..7`) and the row `hour * subdivisions + sub`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekView {
    subdivisions: u32,
}

impl WeekView {
    pub fn new(subdivisions: u32) -> Self {
        Self {
            subdivisions: clamp_subdivisions(subdivisions),
        }
    }

    pub fn subdivisions(&self) -> u32 {
        self.subdivisions
    }

    pub fn start_date(&self, reference: NaiveDate, culture: &Culture) -> NaiveDate {
        culture.start_of_week(reference)
    }

    pub fn end_date(&self, reference: NaiveDate, culture: &Culture) -> NaiveDate {
        self.start_date(reference, culture) + TimeDelta::days(DAYS_PER_WEEK)
    }

    /// The slots of the week `[start, end)`.
    ///
    /// # Errors
    ///
    /// [`SlotError::InvalidRange`] if the range is not exactly seven days long.
    pub fn slots(
        &self,
        _culture: &Culture,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Slot>, SlotError> {
        let actual_days = days_between(start, end);
        if actual_days != DAYS_PER_WEEK {
            tracing::warn!(%start, %end, actual_days, "week view requires a range of 7 days");
            return Err(SlotError::InvalidRange {
                start,
                end,
                expected_days: DAYS_PER_WEEK,
                actual_days,
            });
        }

        let slots = days_in(start, end)
            .zip(0u32..)
            .flat_map(|(day, column)| {
                hour_slots(day, self.subdivisions).map(move |s| {
                    Slot::new("", s.start, s.end).with_grid(Some(s.index), Some(column))
                })
            })
            .collect();
        Ok(slots)
    }
}
