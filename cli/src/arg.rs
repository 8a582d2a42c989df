// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use clap::{Arg, ArgMatches, ValueHint, arg, value_parser};
use timeslot_core::{MAX_SUBDIVISIONS, ViewMode};

use crate::util::OutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CommonArgs;

impl CommonArgs {
    pub fn output_format() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(OutputFormat))
            .default_value("table")
    }

    pub fn get_output_format(matches: &ArgMatches) -> OutputFormat {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(OutputFormat::Table)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ViewArgs;

impl ViewArgs {
    pub fn view() -> Arg {
        arg!([VIEW] "View mode, defaults to the configured one")
            .value_parser(value_parser!(ViewMode))
    }

    pub fn get_view(matches: &ArgMatches) -> Option<ViewMode> {
        matches.get_one("VIEW").copied()
    }

    pub fn date() -> Arg {
        arg!(-d --date <DATE> "Reference date (YYYY-MM-DD, 'today', 'tomorrow' or 'yesterday')")
    }

    pub fn get_date(matches: &ArgMatches) -> Option<String> {
        matches.get_one("date").cloned()
    }

    pub fn subdivisions() -> Arg {
        arg!(-s --subdivisions <N> "Slots per hour for the day, week and timeline views")
            .value_parser(value_parser!(u32).range(1..=i64::from(MAX_SUBDIVISIONS)))
    }

    pub fn get_subdivisions(matches: &ArgMatches) -> Option<u32> {
        matches.get_one("subdivisions").copied()
    }

    pub fn days() -> Arg {
        arg!(-n --days <DAYS> "Number of days listed by the agenda view")
            .value_parser(value_parser!(u32).range(1..))
    }

    pub fn get_days(matches: &ArgMatches) -> Option<u32> {
        matches.get_one("days").copied()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct LayoutArgs;

impl LayoutArgs {
    pub fn file() -> Arg {
        arg!(<FILE> "JSON file holding an array of items with start, end and summary")
            .value_parser(value_parser!(std::path::PathBuf))
            .value_hint(ValueHint::FilePath)
    }

    pub fn get_file(matches: &ArgMatches) -> std::path::PathBuf {
        matches
            .get_one::<std::path::PathBuf>("FILE")
            .expect("file is required")
            .clone()
    }
}
