// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{Datelike, Month, NaiveDate, TimeDelta, Weekday};

use crate::SlotError;

const ENGLISH_DAY_NAMES: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Locale-dependent settings consumed by the slot builders.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Culture {
    /// The day a calendar week starts on.
    pub first_day_of_week: Weekday,

    /// Full month names, January first.
    pub month_names: [String; 12],

    /// Abbreviated day names, Monday first.
    pub abbreviated_day_names: [String; 7],
}

impl Default for Culture {
    fn default() -> Self {
        Self::invariant()
    }
}

impl Culture {
    /// English names with weeks starting on Sunday.
    pub fn invariant() -> Self {
        Self {
            first_day_of_week: Weekday::Sun,
            month_names: std::array::from_fn(|i| english_month_name(i).to_owned()),
            abbreviated_day_names: ENGLISH_DAY_NAMES.map(str::to_owned),
        }
    }

    /// English names with weeks starting on Monday, as in ISO 8601.
    pub fn iso() -> Self {
        Self::invariant().with_first_day_of_week(Weekday::Mon)
    }

    pub fn with_first_day_of_week(mut self, first_day_of_week: Weekday) -> Self {
        self.first_day_of_week = first_day_of_week;
        self
    }

    /// Replaces the month names, which must contain exactly twelve entries.
    pub fn with_month_names<I, S>(mut self, names: I) -> Result<Self, SlotError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let len = names.len();
        self.month_names = names
            .try_into()
            .map_err(|_| SlotError::InvalidCulture(format!("expected 12 month names, got {len}")))?;
        Ok(self)
    }

    /// Replaces the abbreviated day names, Monday first, which must contain exactly seven entries.
    pub fn with_day_names<I, S>(mut self, names: I) -> Result<Self, SlotError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let len = names.len();
        self.abbreviated_day_names = names
            .try_into()
            .map_err(|_| SlotError::InvalidCulture(format!("expected 7 day names, got {len}")))?;
        Ok(self)
    }

    /// The full name of a month, `month` being 1-based.
    pub fn month_name(&self, month: u32) -> &str {
        let index = (month.clamp(1, 12) - 1) as usize;
        &self.month_names[index]
    }

    pub fn day_name(&self, weekday: Weekday) -> &str {
        &self.abbreviated_day_names[weekday.num_days_from_monday() as usize]
    }

    /// Number of days between the start of the week and `date`, in `0..7`.
    pub fn days_from_week_start(&self, date: NaiveDate) -> u32 {
        let day = date.weekday().num_days_from_monday();
        let first = self.first_day_of_week.num_days_from_monday();
        (day + 7 - first) % 7
    }

    /// The most recent first day of the week on or before `date`.
    pub fn start_of_week(&self, date: NaiveDate) -> NaiveDate {
        date - TimeDelta::days(i64::from(self.days_from_week_start(date)))
    }

    /// The weekdays in display order, starting from the first day of the week.
    pub fn weekdays(&self) -> impl Iterator<Item = Weekday> {
        let first = self.first_day_of_week;
        (0..7).scan(first, |day, _| {
            let current = *day;
            *day = day.succ();
            Some(current)
        })
    }
}

#[expect(clippy::cast_possible_truncation)]
fn english_month_name(index: usize) -> &'static str {
    Month::try_from(index as u8 + 1).map_or("", |m| m.name())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn invariant_culture_starts_on_sunday() {
        let culture = Culture::invariant();
        assert_eq!(culture.first_day_of_week, Weekday::Sun);
        assert_eq!(culture.month_name(1), "January");
        assert_eq!(culture.month_name(12), "December");
        assert_eq!(culture.day_name(Weekday::Wed), "Wed");
    }

    #[test]
    fn start_of_week_respects_first_day() {
        // 2025-01-15 is a Wednesday
        let wed = date(2025, 1, 15);
        assert_eq!(Culture::invariant().start_of_week(wed), date(2025, 1, 12));
        assert_eq!(Culture::iso().start_of_week(wed), date(2025, 1, 13));

        let saturday_first = Culture::invariant().with_first_day_of_week(Weekday::Sat);
        assert_eq!(saturday_first.start_of_week(wed), date(2025, 1, 11));
        assert_eq!(saturday_first.start_of_week(date(2025, 1, 11)), date(2025, 1, 11));
    }

    #[test]
    fn rejects_month_table_of_wrong_size() {
        let err = Culture::invariant()
            .with_month_names(["Jan", "Feb"])
            .unwrap_err();
        assert!(matches!(err, SlotError::InvalidCulture(_)));
        assert!(err.to_string().contains("got 2"));
    }

    #[test]
    fn replaces_month_names() {
        let names = [
            "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août", "septembre",
            "octobre", "novembre", "décembre",
        ];
        let culture = Culture::iso().with_month_names(names).unwrap();
        assert_eq!(culture.month_name(8), "août");
    }

    #[test]
    fn lists_weekdays_in_display_order() {
        let days: Vec<_> = Culture::iso().weekdays().collect();
        assert_eq!(days.first(), Some(&Weekday::Mon));
        assert_eq!(days.last(), Some(&Weekday::Sun));

        let days: Vec<_> = Culture::invariant().weekdays().collect();
        assert_eq!(days[0], Weekday::Sun);
        assert_eq!(days[1], Weekday::Mon);
        assert_eq!(days.len(), 7);
    }
}
