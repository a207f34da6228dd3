use std::result;

use chrono::NaiveDate;

use super::delta::DateUnit;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid month {0}, expected a value from 1 to 12")]
    InvalidMonth(u32),
    #[error("Unknown unit: {0}. Use day, week, month, or year.")]
    UnknownUnit(String),
    /// Shifting a date left the range of dates that can be represented.
    #[error("{date} {amount:+} {unit} is outside the supported range of dates")]
    OutOfRange {
        date: NaiveDate,
        amount: i64,
        unit: DateUnit,
    },
}

pub type Result<T> = result::Result<T, Error>;
