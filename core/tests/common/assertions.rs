// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Custom assertion helpers for integration tests.

use chrono::NaiveDateTime;
use timeslot_core::Slot;

/// Asserts that every slot ends where the next one starts, and that no slot is empty.
pub fn assert_contiguous(slots: &[Slot]) {
    for slot in slots {
        assert!(slot.start < slot.end, "empty slot: {slot:?}");
    }
    for pair in slots.windows(2) {
        assert_eq!(pair[0].end, pair[1].start, "gap or overlap after {:?}", pair[0]);
    }
}

/// Asserts that the slots exactly cover `[start, end)`.
pub fn assert_covers(slots: &[Slot], start: NaiveDateTime, end: NaiveDateTime) {
    assert_contiguous(slots);
    let first = slots.first().expect("slots must not be empty");
    let last = slots.last().expect("slots must not be empty");
    assert_eq!(first.start, start);
    assert_eq!(last.end, end);
}
