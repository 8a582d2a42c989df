// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Time-slot partitioning and overlap layout for calendar views.
//!
//! A view is displayed by picking a [`SlotBuilder`] for its [`ViewMode`], which computes the
//! period around a reference date and the [`Slot`]s filling it. Items falling inside that period
//! are then passed to [`compute_layout`], which assigns each one a column so that overlapping
//! items can be rendered side by side.
//!
//! Everything here is synchronous and free of I/O.

mod culture;
mod datetime;
mod error;
mod item;
mod layout;
mod slot;
mod view;

pub use crate::culture::Culture;
pub use crate::error::SlotError;
pub use crate::item::SchedulerItem;
pub use crate::layout::{
    ColumnPlacement, SlotLayout, SlotLayoutResult, assign_columns, compute_layout,
    overlap_groups, sorted_order,
};
pub use crate::slot::{Period, Slot, ViewGrid};
pub use crate::view::{
    AgendaView, DayView, MAX_SUBDIVISIONS, MonthView, SlotBuilder, TimelineView, ViewMode,
    ViewParams, WeekView, YearView,
};

/// The name of the application.
pub const APP_NAME: &str = "timeslot";
