// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

/// Parses a reference date, either a keyword relative to `today` or `YYYY-MM-DD`.
pub fn parse_date(today: NaiveDate, s: &str) -> Result<NaiveDate, String> {
    match s.trim().to_lowercase().as_str() {
        "" | "today" => Ok(today),
        "tomorrow" => Ok(today + TimeDelta::days(1)),
        "yesterday" => Ok(today - TimeDelta::days(1)),
        t => NaiveDate::parse_from_str(t, "%Y-%m-%d").map_err(|_| {
            format!("Invalid date: {s}. Expected YYYY-MM-DD, 'today', 'tomorrow' or 'yesterday'")
        }),
    }
}

/// Formats `[start, end)` compactly, dropping the second date when it is the same day or the
/// end falls exactly at the following midnight.
pub fn format_time_range(start: NaiveDateTime, end: NaiveDateTime) -> String {
    let same_day = start.date() == end.date();
    let ends_at_midnight = end.date() == start.date() + TimeDelta::days(1)
        && end.time() == NaiveDateTime::default().time();

    if same_day {
        format!(
            "{} {}~{}",
            start.format("%Y-%m-%d"),
            start.format("%H:%M"),
            end.format("%H:%M")
        )
    } else if ends_at_midnight {
        format!("{} {}~24:00", start.format("%Y-%m-%d"), start.format("%H:%M"))
    } else {
        format!("{}~{}", start.format("%Y-%m-%d %H:%M"), end.format("%Y-%m-%d %H:%M"))
    }
}
