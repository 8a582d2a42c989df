// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDateTime;

/// A caller-owned item occupying the half-open interval `[start, end)`.
///
/// The layout engine only reads items, the payload is opaque to it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SchedulerItem<T, Ts = NaiveDateTime> {
    /// Start of the item, inclusive.
    pub start: Ts,

    /// End of the item, exclusive.
    pub end: Ts,

    /// Arbitrary caller data.
    pub payload: T,
}

impl<T, Ts: Ord + Copy> SchedulerItem<T, Ts> {
    pub fn new(start: Ts, end: Ts, payload: T) -> Self {
        Self {
            start,
            end,
            payload,
        }
    }

    /// Whether the two items share at least one instant.
    ///
    /// Items that only touch at an endpoint do not overlap, and an empty item overlaps nothing.
    pub fn overlaps<U>(&self, other: &SchedulerItem<U, Ts>) -> bool {
        if self.is_degenerate() || other.is_degenerate() {
            return false;
        }
        self.start < other.end && other.start < self.end
    }

    /// Whether the item has zero or negative length.
    pub fn is_degenerate(&self) -> bool {
        self.start >= self.end
    }

    /// Whether the item intersects the half-open range `[start, end)`.
    pub fn intersects_range(&self, start: Ts, end: Ts) -> bool {
        self.start < end && start < self.end
    }
}
