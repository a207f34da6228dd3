use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use super::error::{Error, Result};
use super::util;

/// The unit of a [`shift`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateUnit {
    Day,
    /// Seven days
    Week,
    /// Keeps the day of the month, clamped to the length of the target month
    Month,
    /// Keeps month and day, clamping Feb 29 to Feb 28 in non-leap years
    Year,
}

impl DateUnit {
    /// Singular name (`day`, `week`, `month`, `year`).
    pub fn name(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }
}

impl fmt::Display for DateUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.name())
    }
}

impl FromStr for DateUnit {
    type Err = Error;

    /// Accepts singular and plural names, ignoring case.
    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_lowercase();
        match lower.strip_suffix('s').unwrap_or(&lower) {
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            _ => Err(Error::UnknownUnit(s.to_string())),
        }
    }
}

fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    let n = i64::from(date.num_days_from_ce()).checked_add(days)?;
    NaiveDate::from_num_days_from_ce_opt(i32::try_from(n).ok()?)
}

/// Move `date` by `amount` units. Negative amounts move backwards in time.
///
/// Month and year steps never overflow into the following month. If the day
/// does not exist in the target month, the last day of that month is used
/// instead, so Jan 31 plus one month is Feb 28 (or Feb 29).
pub fn shift(date: NaiveDate, amount: i64, unit: DateUnit) -> Result<NaiveDate> {
    let shifted = match unit {
        DateUnit::Day => add_days(date, amount),
        DateUnit::Week => amount.checked_mul(7).and_then(|days| add_days(date, days)),
        DateUnit::Month => util::add_months(date.year(), date.month(), amount)
            .and_then(|(year, month)| util::clamped_date(year, month, date.day())),
        DateUnit::Year => i64::from(date.year())
            .checked_add(amount)
            .and_then(|year| i32::try_from(year).ok())
            .and_then(|year| util::clamped_date(year, date.month(), date.day())),
    };
    shifted.ok_or(Error::OutOfRange { date, amount, unit })
}
