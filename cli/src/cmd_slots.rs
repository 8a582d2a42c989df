// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use chrono::{Local, NaiveDate};
use clap::{ArgMatches, Command};
use timeslot_core::{SlotBuilder, ViewMode, ViewParams};

use crate::Config;
use crate::arg::{CommonArgs, ViewArgs};
use crate::slot_formatter::SlotFormatter;
use crate::util::{OutputFormat, parse_date};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdSlots {
    pub view: Option<ViewMode>,
    pub date: Option<String>,
    pub subdivisions: Option<u32>,
    pub days: Option<u32>,
    pub output_format: OutputFormat,
}

impl Default for CmdSlots {
    fn default() -> Self {
        Self {
            view: None,
            date: None,
            subdivisions: None,
            days: None,
            output_format: OutputFormat::Table,
        }
    }
}

impl CmdSlots {
    pub const NAME: &str = "slots";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("s")
            .about("Show the period and slots of a calendar view")
            .arg(ViewArgs::view())
            .arg(ViewArgs::date())
            .arg(ViewArgs::subdivisions())
            .arg(ViewArgs::days())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            view: ViewArgs::get_view(matches),
            date: ViewArgs::get_date(matches),
            subdivisions: ViewArgs::get_subdivisions(matches),
            days: ViewArgs::get_days(matches),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing view slots...");
        let today = Local::now().date_naive();
        print!("{}", self.render(config, today)?);
        Ok(())
    }

    /// Renders the view around the requested date, `today` anchoring relative dates.
    fn render(&self, config: &Config, today: NaiveDate) -> Result<String, Box<dyn Error>> {
        let mode = self.view.unwrap_or(config.default_view);
        let reference = match &self.date {
            Some(date) => parse_date(today, date)?,
            None => today,
        };
        let params = ViewParams {
            subdivisions: self.subdivisions.unwrap_or(config.params.subdivisions),
            agenda_days: self.days.unwrap_or(config.params.agenda_days),
        };

        let grid = SlotBuilder::for_view(mode, &params).build(reference, &config.culture)?;
        let formatter =
            SlotFormatter::new(mode, config.culture.clone()).with_output_format(self.output_format);
        Ok(formatter.format(&grid).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn parse(args: &[&str]) -> CmdSlots {
        let matches = CmdSlots::command()
            .try_get_matches_from(std::iter::once("slots").chain(args.iter().copied()))
            .unwrap();
        CmdSlots::from(&matches)
    }

    #[test]
    fn parses_arguments() {
        let cmd = parse(&["day", "-d", "2025-01-02", "-s", "4", "--output-format", "json"]);
        assert_eq!(cmd.view, Some(ViewMode::Day));
        assert_eq!(cmd.date.as_deref(), Some("2025-01-02"));
        assert_eq!(cmd.subdivisions, Some(4));
        assert_eq!(cmd.days, None);
        assert_eq!(cmd.output_format, OutputFormat::Json);
    }

    #[test]
    fn parses_defaults() {
        assert_eq!(parse(&[]), CmdSlots::default());
    }

    #[test]
    fn rejects_zero_subdivisions() {
        let result = CmdSlots::command().try_get_matches_from(["slots", "-s", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn uses_configured_view_and_params() {
        colored::control::set_override(false);
        let config = Config {
            default_view: ViewMode::Agenda,
            ..Config::default()
        };
        let cmd = CmdSlots {
            days: Some(3),
            ..CmdSlots::default()
        };

        let rendered = cmd.render(&config, date(2025, 3, 1)).unwrap();
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines[0], "agenda 2025-03-01 ~ 2025-03-04 (3 days, 0 slots)");
        assert_eq!(lines.len(), 1 + 3);
    }

    #[test]
    fn resolves_relative_dates() {
        colored::control::set_override(false);
        let cmd = CmdSlots {
            view: Some(ViewMode::Day),
            date: Some("tomorrow".to_string()),
            subdivisions: Some(1),
            ..CmdSlots::default()
        };

        let rendered = cmd.render(&Config::default(), date(2025, 3, 1)).unwrap();
        assert!(rendered.starts_with("day 2025-03-02 ~ 2025-03-03 (1 days, 24 slots)"));
    }

    #[test]
    fn clamps_configured_subdivisions() {
        colored::control::set_override(false);
        let mut config = Config::default();
        config.params.subdivisions = 4_000_000;
        let cmd = CmdSlots {
            view: Some(ViewMode::Day),
            ..CmdSlots::default()
        };

        let rendered = cmd.render(&config, date(2025, 3, 1)).unwrap();
        assert!(rendered.starts_with("day 2025-03-01 ~ 2025-03-02 (1 days, 1440 slots)"));
    }

    #[test]
    fn reports_invalid_dates() {
        let cmd = CmdSlots {
            date: Some("someday".to_string()),
            ..CmdSlots::default()
        };
        assert!(cmd.render(&Config::default(), date(2025, 3, 1)).is_err());
    }
}
