// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Slot builders, one per view mode.
//!
//! Every builder answers the same three questions for its view: where the displayed period
//! starts, where it ends, and which slots fill it. Builders are plain values, configured once
//! with their parameter and safe to share across threads.

mod agenda;
mod day;
mod month;
mod timeline;
mod week;
mod year;

use std::{fmt, str::FromStr};

use chrono::{NaiveDate, NaiveDateTime};

pub use agenda::AgendaView;
pub use day::DayView;
pub use month::MonthView;
pub use timeline::TimelineView;
pub use week::WeekView;
pub use year::YearView;

use crate::datetime::{slot_offset, start_of_day};
use crate::{Culture, Period, Slot, SlotError, ViewGrid};

/// The granularity a calendar is displayed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// A single day split into hour subdivisions.
    Day,

    /// Seven days starting on the culture's first day of week.
    Week,

    /// A grid of whole weeks covering one month.
    Month,

    /// The twelve months of a year.
    Year,

    /// A list of days, without a grid.
    Agenda,

    /// A single continuous time axis.
    Timeline,
}

impl ViewMode {
    pub const ALL: [ViewMode; 6] = [
        ViewMode::Day,
        ViewMode::Week,
        ViewMode::Month,
        ViewMode::Year,
        ViewMode::Agenda,
        ViewMode::Timeline,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Day => "day",
            ViewMode::Week => "week",
            ViewMode::Month => "month",
            ViewMode::Year => "year",
            ViewMode::Agenda => "agenda",
            ViewMode::Timeline => "timeline",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == lower)
            .ok_or_else(|| format!("Invalid view mode: {s}"))
    }
}

/// The per-view parameters a builder is constructed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ViewParams {
    /// Number of slots per hour for the day, week and timeline views,
    /// clamped to `1..=MAX_SUBDIVISIONS` by the builders.
    pub subdivisions: u32,

    /// Number of days listed by the agenda view.
    pub agenda_days: u32,
}

impl Default for ViewParams {
    fn default() -> Self {
        Self {
            subdivisions: 2,
            agenda_days: 7,
        }
    }
}

/// The slot builder of a view mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotBuilder {
    Day(DayView),
    Week(WeekView),
    Month(MonthView),
    Year(YearView),
    Agenda(AgendaView),
    Timeline(TimelineView),
}

impl SlotBuilder {
    /// Selects the builder for `mode`, configured from `params`.
    pub fn for_view(mode: ViewMode, params: &ViewParams) -> Self {
        match mode {
            ViewMode::Day => SlotBuilder::Day(DayView::new(params.subdivisions)),
            ViewMode::Week => SlotBuilder::Week(WeekView::new(params.subdivisions)),
            ViewMode::Month => SlotBuilder::Month(MonthView),
            ViewMode::Year => SlotBuilder::Year(YearView),
            ViewMode::Agenda => SlotBuilder::Agenda(AgendaView::new(params.agenda_days)),
            ViewMode::Timeline => SlotBuilder::Timeline(TimelineView::new(params.subdivisions)),
        }
    }

    pub fn mode(&self) -> ViewMode {
        match self {
            SlotBuilder::Day(_) => ViewMode::Day,
            SlotBuilder::Week(_) => ViewMode::Week,
            SlotBuilder::Month(_) => ViewMode::Month,
            SlotBuilder::Year(_) => ViewMode::Year,
            SlotBuilder::Agenda(_) => ViewMode::Agenda,
            SlotBuilder::Timeline(_) => ViewMode::Timeline,
        }
    }

    /// First day of the period displayed around `reference`.
    #[rustfmt::skip]
    pub fn start_date(&self, reference: NaiveDate, culture: &Culture) -> NaiveDate {
        match self {
            SlotBuilder::Day(a)      => a.start_date(reference, culture),
            SlotBuilder::Week(a)     => a.start_date(reference, culture),
            SlotBuilder::Month(a)    => a.start_date(reference, culture),
            SlotBuilder::Year(a)     => a.start_date(reference, culture),
            SlotBuilder::Agenda(a)   => a.start_date(reference, culture),
            SlotBuilder::Timeline(a) => a.start_date(reference, culture),
        }
    }

    /// First day after the period displayed around `reference`.
    #[rustfmt::skip]
    pub fn end_date(&self, reference: NaiveDate, culture: &Culture) -> NaiveDate {
        match self {
            SlotBuilder::Day(a)      => a.end_date(reference, culture),
            SlotBuilder::Week(a)     => a.end_date(reference, culture),
            SlotBuilder::Month(a)    => a.end_date(reference, culture),
            SlotBuilder::Year(a)     => a.end_date(reference, culture),
            SlotBuilder::Agenda(a)   => a.end_date(reference, culture),
            SlotBuilder::Timeline(a) => a.end_date(reference, culture),
        }
    }

    /// The slots filling `[start, end)`.
    ///
    /// Only the week view can fail, when the range is not exactly seven days long.
    #[rustfmt::skip]
    pub fn slots(
        &self,
        culture: &Culture,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Slot>, SlotError> {
        match self {
            SlotBuilder::Day(a)      => Ok(a.slots(culture, start, end)),
            SlotBuilder::Week(a)     => a.slots(culture, start, end),
            SlotBuilder::Month(a)    => Ok(a.slots(culture, start, end)),
            SlotBuilder::Year(a)     => Ok(a.slots(culture, start, end)),
            SlotBuilder::Agenda(a)   => Ok(a.slots(culture, start, end)),
            SlotBuilder::Timeline(a) => Ok(a.slots(culture, start, end)),
        }
    }

    pub fn period(&self, reference: NaiveDate, culture: &Culture) -> Period {
        Period {
            start: self.start_date(reference, culture),
            end: self.end_date(reference, culture),
        }
    }

    /// Computes the period around `reference` and the slots filling it.
    #[tracing::instrument(skip(culture))]
    pub fn build(&self, reference: NaiveDate, culture: &Culture) -> Result<ViewGrid, SlotError> {
        let period = self.period(reference, culture);
        let slots = self.slots(culture, period.start, period.end)?;
        tracing::debug!(
            start = %period.start,
            end = %period.end,
            count = slots.len(),
            "built view grid"
        );
        Ok(ViewGrid { period, slots })
    }
}

/// The finest split of an hour, one slot per minute.
pub const MAX_SUBDIVISIONS: u32 = 60;

/// Subdivision counts are kept within `1..=MAX_SUBDIVISIONS`.
fn clamp_subdivisions(subdivisions: u32) -> u32 {
    if subdivisions == 0 {
        tracing::warn!("subdivision count must be at least 1, using 1");
        1
    } else if subdivisions > MAX_SUBDIVISIONS {
        tracing::warn!(
            subdivisions,
            "subdivision count must be at most {MAX_SUBDIVISIONS}, using {MAX_SUBDIVISIONS}"
        );
        MAX_SUBDIVISIONS
    } else {
        subdivisions
    }
}

/// One time slot of a day split into hour subdivisions.
struct HourSlot {
    /// `hour * subdivisions + sub`, the position of the slot within its day.
    index: u32,
    start: NaiveDateTime,
    end: NaiveDateTime,
}

/// The `24 * subdivisions` contiguous slots covering `day`.
fn hour_slots(day: NaiveDate, subdivisions: u32) -> impl Iterator<Item = HourSlot> {
    let midnight = start_of_day(day);
    (0..24 * subdivisions).map(move |index| HourSlot {
        index,
        start: midnight + slot_offset(index, subdivisions),
        end: midnight + slot_offset(index + 1, subdivisions),
    })
}
