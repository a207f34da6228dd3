use std::fmt;

use chrono::{Datelike, IsoWeek, NaiveDate};

use super::util;
use super::weekday::Weekday;

/// Where a date lies relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relative {
    Today,
    Tomorrow,
    Yesterday,
    /// More than one day in the future
    InDays(i64),
    /// More than one day in the past
    DaysAgo(i64),
}

impl Relative {
    pub fn between(today: NaiveDate, date: NaiveDate) -> Self {
        match (date - today).num_days() {
            0 => Self::Today,
            1 => Self::Tomorrow,
            -1 => Self::Yesterday,
            delta if delta > 1 => Self::InDays(delta),
            delta => Self::DaysAgo(-delta),
        }
    }
}

impl fmt::Display for Relative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Today => write!(f, "today"),
            Self::Tomorrow => write!(f, "tomorrow"),
            Self::Yesterday => write!(f, "yesterday"),
            Self::InDays(days) => write!(f, "in {days} days"),
            Self::DaysAgo(days) => write!(f, "{days} days ago"),
        }
    }
}

/// Everything there is to know about a single date.
#[derive(Debug, Clone)]
pub struct DateInfo {
    pub date: NaiveDate,
    pub weekday: Weekday,
    pub iso_week: IsoWeek,
    pub quarter: u32,
    pub day_of_year: u32,
    pub days_in_month: u32,
    pub leap_year: bool,
    pub holiday: Option<String>,
    pub relative: Relative,
}

impl DateInfo {
    pub fn new(date: NaiveDate, today: NaiveDate) -> Self {
        Self {
            date,
            weekday: date.weekday().into(),
            iso_week: util::iso_week(date),
            quarter: util::quarter(date),
            day_of_year: util::day_of_year(date),
            days_in_month: util::days_in_month(date),
            leap_year: util::is_leap_year(date.year()),
            holiday: None,
            relative: Relative::between(today, date),
        }
    }

    pub fn with_holiday(mut self, holiday: Option<String>) -> Self {
        self.holiday = holiday;
        self
    }

    pub fn is_weekend(&self) -> bool {
        self.weekday.is_weekend()
    }

    /// Full month name (`January`, ...).
    pub fn month_name(&self) -> String {
        self.date.format("%B").to_string()
    }

    /// `Wednesday, January 29, 2025`
    pub fn formatted(&self) -> String {
        self.date.format("%A, %B %d, %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn relative_phrases() {
        let today = ymd(2025, 1, 29);
        let phrase = |date| Relative::between(today, date).to_string();
        assert_eq!(phrase(ymd(2025, 1, 29)), "today");
        assert_eq!(phrase(ymd(2025, 1, 30)), "tomorrow");
        assert_eq!(phrase(ymd(2025, 1, 28)), "yesterday");
        assert_eq!(phrase(ymd(2025, 2, 1)), "in 3 days");
        assert_eq!(phrase(ymd(2024, 1, 29)), "366 days ago");
    }

    #[test]
    fn info_for_a_wednesday() {
        let info = DateInfo::new(ymd(2025, 1, 29), ymd(2025, 1, 1));
        assert_eq!(info.weekday, Weekday::Wednesday);
        assert_eq!(util::weekday_index(info.date), 2);
        assert_eq!((info.iso_week.year(), info.iso_week.week()), (2025, 5));
        assert_eq!(info.quarter, 1);
        assert_eq!(info.day_of_year, 29);
        assert_eq!(info.days_in_month, 31);
        assert!(!info.leap_year);
        assert!(!info.is_weekend());
        assert_eq!(info.holiday, None);
        assert_eq!(info.relative, Relative::InDays(28));
        assert_eq!(info.month_name(), "January");
        assert_eq!(info.formatted(), "Wednesday, January 29, 2025");
    }

    #[test]
    fn info_for_a_leap_day() {
        let info = DateInfo::new(ymd(2024, 2, 29), ymd(2025, 1, 1))
            .with_holiday(Some("Leap Day".to_string()));
        assert_eq!(info.weekday, Weekday::Thursday);
        assert_eq!(info.days_in_month, 29);
        assert!(info.leap_year);
        assert_eq!(info.holiday.as_deref(), Some("Leap Day"));
        assert_eq!(info.relative, Relative::DaysAgo(307));
        assert_eq!(info.formatted(), "Thursday, February 29, 2024");
    }
}
