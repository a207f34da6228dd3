//! Holiday lookup.
//!
//! The rest of the crate only talks to a [`HolidayProvider`]. The provider
//! used by the command line is a [`Library`], backed by the holiday data of
//! the `holidays` crate.

use chrono::NaiveDate;

pub use self::error::{Error, Result};
pub use self::library::Library;

mod error;
mod library;

/// The country used when none is specified.
pub const DEFAULT_COUNTRY: &str = "TW";

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Holiday {
    pub date: NaiveDate,
    pub name: String,
}

/// A source of holiday data, keyed by country code.
///
/// Country codes are compared case-insensitively.
pub trait HolidayProvider {
    /// All holidays of a year in ascending order of their dates.
    fn holidays_for_year(&mut self, year: i32, country: &str) -> Result<Vec<Holiday>>;

    /// The name of the holiday on `date`, if any.
    fn is_holiday(&mut self, date: NaiveDate, country: &str) -> Result<Option<String>>;

    /// All supported country codes, sorted.
    fn countries(&mut self) -> Result<Vec<String>>;
}

impl<P: HolidayProvider + ?Sized> HolidayProvider for &mut P {
    fn holidays_for_year(&mut self, year: i32, country: &str) -> Result<Vec<Holiday>> {
        (**self).holidays_for_year(year, country)
    }

    fn is_holiday(&mut self, date: NaiveDate, country: &str) -> Result<Option<String>> {
        (**self).is_holiday(date, country)
    }

    fn countries(&mut self) -> Result<Vec<String>> {
        (**self).countries()
    }
}
