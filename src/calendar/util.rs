use chrono::{Datelike, IsoWeek, NaiveDate};

use super::error::{Error, Result};

const MONTH_LENGTHS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Length of a zero-based month. `month0` must be smaller than 12.
fn month0_length(year: i32, month0: usize) -> u32 {
    if month0 == 1 && is_leap_year(year) {
        29
    } else {
        MONTH_LENGTHS[month0]
    }
}

/// Number of days in a month, where `month` is in the range `1..=12`.
pub fn month_length(year: i32, month: u32) -> Result<u32> {
    match month {
        1..=12 => Ok(month0_length(year, month as usize - 1)),
        _ => Err(Error::InvalidMonth(month)),
    }
}

/// Number of days in the month `date` lies in.
pub fn days_in_month(date: NaiveDate) -> u32 {
    month0_length(date.year(), date.month0() as usize)
}

/// Move a year and month by `delta` months using a linear month index. The
/// resulting month is always in the range `1..=12`.
///
/// Returns `None` if the resulting year does not fit into an `i32`.
pub fn add_months(year: i32, month: u32, delta: i64) -> Option<(i32, u32)> {
    let month0 = i64::from(year) * 12 + i64::from(month) - 1;
    let month0 = month0.checked_add(delta)?;
    let year = i32::try_from(month0.div_euclid(12)).ok()?;
    let month = month0.rem_euclid(12) as u32 + 1;
    Some((year, month))
}

/// The date with the given year and month, and `day` clamped to the last day
/// of that month.
pub fn clamped_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    let length = month_length(year, month).ok()?;
    NaiveDate::from_ymd_opt(year, month, day.min(length))
}

pub fn quarter(date: NaiveDate) -> u32 {
    date.month0() / 3 + 1
}

/// ISO-8601 week. Weeks start on Monday and week 1 is the week containing the
/// year's first Thursday, so dates around new year may belong to a week of
/// the adjacent year.
pub fn iso_week(date: NaiveDate) -> IsoWeek {
    date.iso_week()
}

pub fn day_of_year(date: NaiveDate) -> u32 {
    date.ordinal()
}

/// Day of the week with 0 = Monday and 6 = Sunday.
pub fn weekday_index(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_monday()
}
