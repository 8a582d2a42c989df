// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use chrono::Datelike;
use colored::{Color, Colorize};
use timeslot_core::{Culture, Slot, ViewGrid, ViewMode};

use crate::table::{PaddingDirection, Table, TableColumn};
use crate::util::OutputFormat;

#[derive(Debug)]
pub struct SlotFormatter {
    mode: ViewMode,
    culture: Culture,
    columns: Vec<SlotColumn>,
    format: OutputFormat,
}

impl SlotFormatter {
    pub fn new(mode: ViewMode, culture: Culture) -> Self {
        let columns = match mode {
            ViewMode::Day | ViewMode::Month | ViewMode::Year => vec![
                SlotColumn::Label,
                SlotColumn::Start,
                SlotColumn::End,
            ],
            ViewMode::Week => vec![
                SlotColumn::Row,
                SlotColumn::Column,
                SlotColumn::Start,
                SlotColumn::End,
            ],
            ViewMode::Agenda => vec![],
            ViewMode::Timeline => vec![SlotColumn::Column, SlotColumn::Start, SlotColumn::End],
        };
        Self {
            mode,
            culture,
            columns,
            format: OutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, grid: &'a ViewGrid) -> Display<'a> {
        Display {
            grid,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    grid: &'a ViewGrid,
    formatter: &'a SlotFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.formatter.format == OutputFormat::Json {
            let json = serde_json::to_string_pretty(self.grid).map_err(|_| fmt::Error)?;
            return writeln!(f, "{json}");
        }

        let period = &self.grid.period;
        writeln!(
            f,
            "{} {} ~ {} ({} days, {} slots)",
            self.formatter.mode.to_string().green().bold(),
            period.start,
            period.end,
            period.days(),
            self.grid.slots.len(),
        )?;

        match self.formatter.mode {
            ViewMode::Month => self.fmt_month(f),
            ViewMode::Agenda => self.fmt_agenda(f),
            _ => write!(
                f,
                "{}",
                Table::new(&self.formatter.columns, &self.grid.slots)
            ),
        }
    }
}

impl Display<'_> {
    /// Renders the month grid as a calendar, one week per line.
    fn fmt_month(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let culture = &self.formatter.culture;
        for weekday in culture.weekdays() {
            write!(f, "{}", format!("{:>4}", culture.day_name(weekday)).bold())?;
        }
        writeln!(f)?;

        for week in self.grid.slots.chunks(7) {
            for slot in week {
                let cell = format!("{:>4}", slot.label);
                match slot.is_outside_period {
                    true => write!(f, "{}", cell.dimmed())?,
                    false => write!(f, "{cell}")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }

    /// Lists the days of an agenda period, the view itself has no slots.
    fn fmt_agenda(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let culture = &self.formatter.culture;
        let period = &self.grid.period;
        for day in period.start.iter_days().take_while(|d| *d < period.end) {
            writeln!(f, "{} {}", culture.day_name(day.weekday()), day)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub enum SlotColumn {
    Label,
    Start,
    End,
    Row,
    Column,
}

impl TableColumn<Slot> for SlotColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            SlotColumn::Label => "Label",
            SlotColumn::Start => "Start",
            SlotColumn::End => "End",
            SlotColumn::Row => "Row",
            SlotColumn::Column => "Column",
        }
        .into()
    }

    fn format<'a>(&self, slot: &'a Slot) -> Cow<'a, str> {
        match self {
            SlotColumn::Label => slot.label.as_str().into(),
            SlotColumn::Start => slot.start.format("%Y-%m-%d %H:%M").to_string().into(),
            SlotColumn::End => slot.end.format("%Y-%m-%d %H:%M").to_string().into(),
            SlotColumn::Row => format_position(slot.row),
            SlotColumn::Column => format_position(slot.column),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            SlotColumn::Row | SlotColumn::Column => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn color(&self, slot: &Slot) -> Option<Color> {
        slot.is_outside_period.then_some(Color::BrightBlack)
    }
}

fn format_position(position: Option<u32>) -> Cow<'static, str> {
    match position {
        Some(p) => p.to_string().into(),
        None => "-".into(),
    }
}
