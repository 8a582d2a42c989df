// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::Color;
use timeslot_core::{SlotLayout, SlotLayoutResult};

use crate::table::{PaddingDirection, Table, TableColumn};
use crate::util::{OutputFormat, format_time_range};

/// Items of a layout are labeled by their summary.
pub type LayoutRow = SlotLayoutResult<String>;

const GROUP_COLORS: [Color; 6] = [
    Color::Cyan,
    Color::Magenta,
    Color::Yellow,
    Color::Blue,
    Color::Green,
    Color::Red,
];

#[derive(Debug)]
pub struct LayoutFormatter {
    columns: Vec<LayoutColumn>,
    format: OutputFormat,
}

impl LayoutFormatter {
    pub fn new() -> Self {
        Self {
            columns: vec![
                LayoutColumn::Index,
                LayoutColumn::Group,
                LayoutColumn::Column,
                LayoutColumn::TimeRange,
                LayoutColumn::Summary,
            ],
            format: OutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, layout: &'a SlotLayout<String>) -> Display<'a> {
        Display {
            layout,
            formatter: self,
        }
    }
}

impl Default for LayoutFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    layout: &'a SlotLayout<String>,
    formatter: &'a LayoutFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formatter.format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(self.layout.results())
                    .map_err(|_| fmt::Error)?;
                writeln!(f, "{json}")
            }
            OutputFormat::Table => {
                write!(
                    f,
                    "{}",
                    Table::new(&self.formatter.columns, self.layout.results())
                )?;
                writeln!(
                    f,
                    "{} items, {} groups, at most {} columns",
                    self.layout.len(),
                    self.layout.group_count(),
                    self.layout.max_column_count(),
                )
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum LayoutColumn {
    Index,
    Group,
    Column,
    TimeRange,
    Summary,
}

impl TableColumn<LayoutRow> for LayoutColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            LayoutColumn::Index => "#",
            LayoutColumn::Group => "Group",
            LayoutColumn::Column => "Column",
            LayoutColumn::TimeRange => "Time Range",
            LayoutColumn::Summary => "Summary",
        }
        .into()
    }

    fn format<'a>(&self, row: &'a LayoutRow) -> Cow<'a, str> {
        match self {
            LayoutColumn::Index => row.index.to_string().into(),
            LayoutColumn::Group => row.group.to_string().into(),
            LayoutColumn::Column => format!("{}/{}", row.column_index + 1, row.column_count).into(),
            LayoutColumn::TimeRange => format_time_range(row.item.start, row.item.end).into(),
            LayoutColumn::Summary => row.item.payload.as_str().into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            LayoutColumn::Index | LayoutColumn::Group | LayoutColumn::Column => {
                PaddingDirection::Right
            }
            _ => PaddingDirection::Left,
        }
    }

    fn color(&self, row: &LayoutRow) -> Option<Color> {
        match self {
            LayoutColumn::Group => Some(GROUP_COLORS[row.group % GROUP_COLORS.len()]),
            _ => None,
        }
    }
}
