// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

use crate::datetime::start_of_day;

/// One labeled time or date cell of a view.
///
/// Slots are recomputed whenever the view or the reference date changes, they carry no identity.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Slot {
    /// Text shown in the cell, may be empty when the axis is rendered elsewhere.
    pub label: String,

    /// Start of the slot, inclusive.
    pub start: NaiveDateTime,

    /// End of the slot, exclusive.
    pub end: NaiveDateTime,

    /// Whether the slot lies outside the period the view is centered on,
    /// e.g. days of the neighbouring months in a month grid.
    pub is_outside_period: bool,

    /// Row in the view grid, if the view is a grid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row: Option<u32>,

    /// Column in the view grid, if the view is a grid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<u32>,
}

impl Slot {
    pub(crate) fn new(label: impl Into<String>, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            label: label.into(),
            start,
            end,
            is_outside_period: false,
            row: None,
            column: None,
        }
    }

    pub(crate) fn with_grid(mut self, row: Option<u32>, column: Option<u32>) -> Self {
        self.row = row;
        self.column = column;
        self
    }

    pub(crate) fn outside_period(mut self, outside: bool) -> Self {
        self.is_outside_period = outside;
        self
    }

    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Whether `t` falls inside the slot, the end being exclusive.
    pub fn contains(&self, t: NaiveDateTime) -> bool {
        self.start <= t && t < self.end
    }

    /// Whether the half-open interval `[start, end)` intersects the slot.
    pub fn overlaps(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        self.start < end && start < self.end
    }
}

/// The date range displayed by a view, `end` being exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Period {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Period {
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// The first instant of the period.
    pub fn start_datetime(&self) -> NaiveDateTime {
        start_of_day(self.start)
    }

    /// The first instant after the period.
    pub fn end_datetime(&self) -> NaiveDateTime {
        start_of_day(self.end)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }
}

/// A period together with the slots filling it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ViewGrid {
    pub period: Period,
    pub slots: Vec<Slot>,
}
