//! Period arithmetic under the PMMG day-count convention.
//!
//! Unlike civil age arithmetic, administrative time is counted in fixed
//! 365-day years: every completed anniversary contributes 365 days and the
//! days after the last anniversary are added as a residual. Legacy variants of
//! the convention are kept as named [`DayCountPolicy`] values so a single
//! evaluation always applies one of them uniformly.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

pub const DAYS_PER_YEAR: i64 = 365;

/// Day-count convention applied to every date pair within one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayCountPolicy {
    /// Completed anniversaries times 365 plus the days after the last anniversary.
    #[default]
    Anniversary,
    /// As `Anniversary`, but the residual also counts the anniversary day itself.
    AnniversaryInclusive,
    /// Raw calendar difference counting both the first and the last day.
    CalendarInclusive,
    /// Raw calendar difference.
    CalendarExclusive,
}

impl DayCountPolicy {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Anniversary,
            Self::AnniversaryInclusive,
            Self::CalendarInclusive,
            Self::CalendarExclusive,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Anniversary => "anniversary",
            Self::AnniversaryInclusive => "anniversary_inclusive",
            Self::CalendarInclusive => "calendar_inclusive",
            Self::CalendarExclusive => "calendar_exclusive",
        }
    }
}

impl fmt::Display for DayCountPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for DayCountPolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace('-', "_");
        Self::ordered()
            .into_iter()
            .find(|policy| policy.key() == normalized)
            .ok_or_else(|| format!("unknown day count policy '{value}'"))
    }
}

/// Duration between two dates expressed in 365-day years and residual days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodResult {
    pub years: i64,
    pub residual_days: i64,
    pub total_days: i64,
    /// Anniversaries actually reached. Trails `years` by one when a leap year
    /// pushes the residual to a full 365-day block.
    pub completed_years: i64,
    pub label: String,
}

impl PeriodResult {
    pub fn zero() -> Self {
        Self::from_total(0)
    }

    /// Normalizes so that `residual_days` stays within a single 365-day year.
    fn from_parts(completed_years: i64, residual_days: i64) -> Self {
        let total_days = completed_years * DAYS_PER_YEAR + residual_days;
        let years = total_days.div_euclid(DAYS_PER_YEAR);
        let residual_days = total_days.rem_euclid(DAYS_PER_YEAR);
        Self {
            years,
            residual_days,
            total_days,
            completed_years,
            label: format_years_and_days(years, residual_days),
        }
    }

    fn from_total(total_days: i64) -> Self {
        Self::from_parts(
            total_days.div_euclid(DAYS_PER_YEAR),
            total_days.rem_euclid(DAYS_PER_YEAR),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("start date {start} is after end date {end}")]
pub struct InvalidRangeError {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Measures `start..=end` under the given policy.
pub fn period_between(
    start: NaiveDate,
    end: NaiveDate,
    policy: DayCountPolicy,
) -> Result<PeriodResult, InvalidRangeError> {
    if start > end {
        return Err(InvalidRangeError { start, end });
    }

    match policy {
        DayCountPolicy::Anniversary => anniversary_period(start, end, false),
        DayCountPolicy::AnniversaryInclusive => anniversary_period(start, end, true),
        DayCountPolicy::CalendarInclusive => {
            Ok(PeriodResult::from_total(calendar_days(start, end) + 1))
        }
        DayCountPolicy::CalendarExclusive => Ok(PeriodResult::from_total(calendar_days(start, end))),
    }
}

fn anniversary_period(
    start: NaiveDate,
    end: NaiveDate,
    count_anniversary_day: bool,
) -> Result<PeriodResult, InvalidRangeError> {
    let out_of_range = InvalidRangeError { start, end };

    let mut anniversary = anniversary_in(start, end.year()).ok_or(out_of_range)?;
    if anniversary > end {
        anniversary = anniversary_in(start, end.year() - 1).ok_or(out_of_range)?;
    }

    let years = i64::from(anniversary.year() - start.year());
    let mut residual_days = 0;
    if end > anniversary {
        // inclusive count from the day after the anniversary through `end`
        residual_days = calendar_days(anniversary, end);
        if count_anniversary_day {
            residual_days += 1;
        }
    }

    Ok(PeriodResult::from_parts(years, residual_days))
}

/// Anniversary of `start` in `year`; 29 February rolls over to 1 March.
fn anniversary_in(start: NaiveDate, year: i32) -> Option<NaiveDate> {
    start
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

/// Plain calendar difference, `end - start` in days.
pub fn calendar_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

fn format_years_and_days(years: i64, days: i64) -> String {
    format!("{years} anos e {days} dias")
}

/// Renders a day count as `"N anos e M dias"` with 365-day years.
pub fn format_days(total_days: i64) -> String {
    format_years_and_days(
        total_days.div_euclid(DAYS_PER_YEAR),
        total_days.rem_euclid(DAYS_PER_YEAR),
    )
}

/// Renders a date as `DD/MM/YYYY`.
pub fn format_date_br(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}
