// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{NaiveDate, TimeDelta};

use crate::{Culture, Slot};

/// A list of `days` consecutive days starting at the reference date.
///
/// The agenda is not a grid: it only provides the period used to query items, and never
/// produces slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgendaView {
    days: u32,
}

impl AgendaView {
    pub fn new(days: u32) -> Self {
        if days == 0 {
            tracing::warn!("agenda must span at least 1 day, using 1");
        }
        Self { days: days.max(1) }
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    pub fn start_date(&self, reference: NaiveDate, _culture: &Culture) -> NaiveDate {
        reference
    }

    pub fn end_date(&self, reference: NaiveDate, culture: &Culture) -> NaiveDate {
        self.start_date(reference, culture) + TimeDelta::days(i64::from(self.days))
    }

    pub fn slots(&self, _culture: &Culture, _start: NaiveDate, _end: NaiveDate) -> Vec<Slot> {
        Vec::new()
    }
}
