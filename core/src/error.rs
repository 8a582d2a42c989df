// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDate;

/// Errors raised while computing the slots of a view.
///
/// The layout engine has no error kind: it is total over any set of intervals.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SlotError {
    /// The supplied range does not have the length the view requires.
    ///
    /// This indicates boundaries computed by a different view, or a stale value.
    #[error(
        "invalid range {start}..{end}: expected {expected_days} days, got {actual_days} days"
    )]
    InvalidRange {
        /// Start of the supplied range.
        start: NaiveDate,

        /// End of the supplied range (exclusive).
        end: NaiveDate,

        /// Number of days the view requires.
        expected_days: i64,

        /// Number of days actually supplied.
        actual_days: i64,
    },

    /// A culture table is malformed, e.g. the wrong number of month names.
    #[error("invalid culture: {0}")]
    InvalidCulture(String),
}
