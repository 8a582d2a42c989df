// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Properties every slot builder must hold over whole years of reference dates.

mod common;

use chrono::{Datelike, TimeDelta};
use timeslot_core::{Culture, SlotBuilder, SlotError, ViewMode, ViewParams};

use common::{all_cultures, assert_contiguous, assert_covers, date, days_of_year};

fn builder(mode: ViewMode, subdivisions: u32) -> SlotBuilder {
    let params = ViewParams {
        subdivisions,
        ..Default::default()
    };
    SlotBuilder::for_view(mode, &params)
}

#[test]
fn day_and_timeline_emit_24k_slots_covering_the_day() {
    let culture = Culture::invariant();
    let reference = date(2024, 2, 29);
    for mode in [ViewMode::Day, ViewMode::Timeline] {
        for k in 1..=7 {
            let grid = builder(mode, k).build(reference, &culture).unwrap();
            assert_eq!(grid.slots.len(), 24 * k as usize, "{mode} with {k} subdivisions");
            assert_covers(
                &grid.slots,
                reference.and_hms_opt(0, 0, 0).unwrap(),
                date(2024, 3, 1).and_hms_opt(0, 0, 0).unwrap(),
            );
        }
    }
}

#[test]
fn week_starts_on_first_day_of_week_all_year() {
    let week = builder(ViewMode::Week, 1);
    for culture in all_cultures() {
        for reference in days_of_year(2025) {
            let start = week.start_date(reference, &culture);
            let end = week.end_date(reference, &culture);
            assert_eq!(start.weekday(), culture.first_day_of_week, "{reference}");
            assert_eq!(end - start, TimeDelta::days(7));
            assert!(start <= reference && reference < end);
        }
    }
}

#[test]
fn week_slots_cover_seven_days() {
    let culture = Culture::iso();
    let grid = builder(ViewMode::Week, 4).build(date(2025, 10, 29), &culture).unwrap();
    assert_eq!(grid.slots.len(), 7 * 24 * 4);
    assert_covers(
        &grid.slots,
        grid.period.start_datetime(),
        grid.period.end_datetime(),
    );
    for (day, chunk) in grid.slots.chunks(96).enumerate() {
        assert!(chunk.iter().all(|s| s.column == Some(day as u32)));
        assert!(chunk.iter().enumerate().all(|(i, s)| s.row == Some(i as u32)));
    }
}

#[test]
fn week_rejects_boundaries_of_other_views() {
    let culture = Culture::invariant();
    let week = builder(ViewMode::Week, 2);
    let reference = date(2025, 3, 12);
    for mode in [ViewMode::Day, ViewMode::Month, ViewMode::Year, ViewMode::Timeline] {
        let period = builder(mode, 2).period(reference, &culture);
        let result = week.slots(&culture, period.start, period.end);
        assert!(
            matches!(result, Err(SlotError::InvalidRange { .. })),
            "{mode} boundaries must be rejected"
        );
    }
}

#[test]
fn month_grid_is_made_of_whole_weeks_around_the_month() {
    let month = builder(ViewMode::Month, 1);
    for culture in all_cultures() {
        for year in [2024, 2025, 2026] {
            for m in 1..=12 {
                let reference = date(year, m, 15);
                let grid = month.build(reference, &culture).unwrap();
                let slots = &grid.slots;
                assert_eq!(slots.len() % 7, 0, "{year}-{m}");
                assert_contiguous(slots);

                let first_of_month = date(year, m, 1);
                let last_of_month = first_of_month + chrono::Months::new(1) - TimeDelta::days(1);
                let first_week_end = slots[0].start.date() + TimeDelta::days(7);
                assert!(slots[0].start.date() <= first_of_month && first_of_month < first_week_end);

                let last_week_start = slots[slots.len() - 7].start.date();
                let last_day = slots[slots.len() - 1].start.date();
                assert!(last_week_start <= last_of_month && last_of_month <= last_day);
                assert_eq!(slots[0].start.weekday(), culture.first_day_of_week);
            }
        }
    }
}

#[test]
fn month_grid_marks_only_the_canonical_month_inside() {
    let culture = Culture::invariant();
    let month = builder(ViewMode::Month, 1);
    for m in 1..=12 {
        let grid = month.build(date(2025, m, 10), &culture).unwrap();
        for slot in &grid.slots {
            assert_eq!(slot.is_outside_period, slot.start.month() != m);
        }
    }
}

#[test]
fn year_emits_twelve_months_without_gaps() {
    let culture = Culture::invariant();
    let year = builder(ViewMode::Year, 1);
    for reference in [date(2023, 6, 1), date(2024, 2, 29), date(2025, 12, 31)] {
        let grid = year.build(reference, &culture).unwrap();
        assert_eq!(grid.slots.len(), 12);
        assert_covers(
            &grid.slots,
            date(reference.year(), 1, 1).and_hms_opt(0, 0, 0).unwrap(),
            date(reference.year() + 1, 1, 1).and_hms_opt(0, 0, 0).unwrap(),
        );
        for (i, slot) in grid.slots.iter().enumerate() {
            assert_eq!(slot.start.month() as usize, i + 1);
            assert_eq!(slot.start.day(), 1);
        }
    }
}

#[test]
fn agenda_only_computes_boundaries() {
    let culture = Culture::invariant();
    let params = ViewParams {
        agenda_days: 14,
        ..Default::default()
    };
    let agenda = SlotBuilder::for_view(ViewMode::Agenda, &params);
    let reference = date(2025, 12, 24);
    let grid = agenda.build(reference, &culture).unwrap();
    assert!(grid.slots.is_empty());
    assert_eq!(grid.period.start, reference);
    assert_eq!(grid.period.end, date(2026, 1, 7));
}

#[test]
fn builders_are_pure() {
    let culture = Culture::iso();
    let reference = date(2025, 8, 8);
    for mode in ViewMode::ALL {
        let builder = builder(mode, 3);
        let first = builder.build(reference, &culture).unwrap();
        let second = builder.build(reference, &culture).unwrap();
        assert_eq!(first, second, "{mode}");
    }
}
