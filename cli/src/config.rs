// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, fmt, path::PathBuf, str::FromStr};

use chrono::Weekday;
use serde::de;
use timeslot_core::{APP_NAME, Culture, ViewMode, ViewParams};
use tokio::fs;

const TIMESLOT_CONFIG_ENV: &str = "TIMESLOT_CONFIG";

/// Loads the configuration.
///
/// The path is taken from the `--config` flag, then from the `TIMESLOT_CONFIG` environment
/// variable, then from the user config directory. Only a missing default file falls back to
/// the built-in defaults; an explicit path must exist.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(TIMESLOT_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            tracing::debug!(path = %config.display(), "no config found, using defaults");
            return Ok(Config::default());
        }
        config
    };

    let raw = fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<ConfigRaw>()?;
    Config::try_from(raw)
}

/// Configuration for the timeslot application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Week start and names used to build the views.
    pub culture: Culture,

    /// The view shown when none is given on the command line.
    pub default_view: ViewMode,

    /// Default view parameters.
    pub params: ViewParams,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            culture: Culture::invariant(),
            default_view: ViewMode::Week,
            params: ViewParams::default(),
        }
    }
}

impl TryFrom<ConfigRaw> for Config {
    type Error = Box<dyn Error>;

    fn try_from(raw: ConfigRaw) -> Result<Self, Self::Error> {
        let mut config = Config::default();

        if let Some(ConfigWeekday(first)) = raw.culture.first_day_of_week {
            config.culture = config.culture.with_first_day_of_week(first);
        }
        if let Some(names) = raw.culture.month_names {
            config.culture = config.culture.with_month_names(names)?;
        }
        if let Some(names) = raw.culture.day_names {
            config.culture = config.culture.with_day_names(names)?;
        }

        if let Some(view) = raw.view.default {
            config.default_view = view;
        }
        if let Some(subdivisions) = raw.view.subdivisions {
            config.params.subdivisions = subdivisions;
        }
        if let Some(days) = raw.view.agenda_days {
            config.params.agenda_days = days;
        }

        Ok(config)
    }
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigRaw {
    culture: CultureRaw,
    view: ViewRaw,
}

impl FromStr for ConfigRaw {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
struct CultureRaw {
    first_day_of_week: Option<ConfigWeekday>,
    month_names: Option<Vec<String>>,
    day_names: Option<Vec<String>>,
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ViewRaw {
    default: Option<ViewMode>,
    subdivisions: Option<u32>,
    agenda_days: Option<u32>,
}

#[derive(Debug, Clone, Copy)]
struct ConfigWeekday(Weekday);

impl<'de> serde::Deserialize<'de> for ConfigWeekday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct WeekdayVisitor;

        impl de::Visitor<'_> for WeekdayVisitor {
            type Value = ConfigWeekday;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str(r#"a weekday like "monday", "Mon" or "sun""#)
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                value
                    .trim()
                    .parse::<Weekday>()
                    .map(ConfigWeekday)
                    .map_err(|_| de::Error::custom(format!("Invalid weekday: {value}")))
            }
        }

        deserializer.deserialize_str(WeekdayVisitor)
    }
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific config directory not found".into())
}
