// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::{Color, Colorize};
use unicode_width::UnicodeWidthStr;

/// A column of a [`Table`] rendering rows of type `T`.
pub trait TableColumn<T> {
    fn name(&self) -> Cow<'_, str>;

    fn format<'a>(&self, data: &'a T) -> Cow<'a, str>;

    fn padding_direction(&self) -> PaddingDirection {
        PaddingDirection::Left
    }

    fn color(&self, _data: &T) -> Option<Color> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingDirection {
    Left,
    Right,
}

/// A plain text table with a bold header row and width-aligned cells.
#[derive(Debug)]
pub struct Table<'a, T, C: TableColumn<T>> {
    columns: &'a [C],
    data: &'a [T],
    separator: &'a str,
}

impl<'a, T, C: TableColumn<T>> Table<'a, T, C> {
    pub fn new(columns: &'a [C], data: &'a [T]) -> Self {
        Self {
            columns,
            data,
            separator: "  ",
        }
    }

    fn rows(&self) -> Vec<Vec<Cow<'a, str>>> {
        self.data
            .iter()
            .map(|row| self.columns.iter().map(|col| col.format(row)).collect())
            .collect()
    }
}

impl<T, C: TableColumn<T>> fmt::Display for Table<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header: Vec<Cow<'_, str>> = self.columns.iter().map(|col| col.name()).collect();
        let rows = self.rows();
        let widths = column_widths(&header, &rows);
        let last = self.columns.len().saturating_sub(1);

        for (i, (col, name)) in self.columns.iter().zip(&header).enumerate() {
            let cell = pad(name, widths[i], col.padding_direction(), i == last);
            write!(f, "{}", cell.bold())?;
            write_delimiter(f, i == last, self.separator)?;
        }

        for (row, cells) in self.data.iter().zip(rows) {
            for (i, (col, cell)) in self.columns.iter().zip(cells).enumerate() {
                let cell = pad(&cell, widths[i], col.padding_direction(), i == last);
                match col.color(row) {
                    Some(color) => write!(f, "{}", cell.color(color))?,
                    None => write!(f, "{cell}")?,
                }
                write_delimiter(f, i == last, self.separator)?;
            }
        }
        Ok(())
    }
}

fn write_delimiter(f: &mut fmt::Formatter<'_>, last: bool, separator: &str) -> fmt::Result {
    if last {
        writeln!(f)
    } else {
        write!(f, "{separator}")
    }
}

fn pad(cell: &str, width: usize, direction: PaddingDirection, last: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(cell.width()));
    match direction {
        // Last column does not need padding if it's left-aligned
        PaddingDirection::Left if last => cell.to_string(),
        PaddingDirection::Left => format!("{cell}{fill}"),
        PaddingDirection::Right => format!("{fill}{cell}"),
    }
}

fn column_widths(header: &[Cow<'_, str>], rows: &[Vec<Cow<'_, str>>]) -> Vec<usize> {
    let mut widths: Vec<usize> = header.iter().map(|name| name.width()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }
    widths
}
