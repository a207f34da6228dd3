use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};

use super::error::{Error, Result};
use super::{Holiday, HolidayProvider};

/// Holidays of one year, by upper-case country code.
type YearData = HashMap<String, Vec<Holiday>>;

/// Holiday data compiled into the `holidays` crate.
///
/// Data is built one year at a time for all countries and kept for the
/// lifetime of the provider.
#[derive(Debug)]
pub struct Library {
    /// Year whose data decides which countries are listed
    reference_year: i32,
    years: HashMap<i32, YearData>,
}

fn build(year: i32) -> Result<YearData> {
    let data = match ::holidays::Builder::new().years(year..year + 1).build() {
        Ok(data) => data,
        Err(::holidays::Error::YearNotAvailable) => return Err(Error::YearUnavailable(year)),
        Err(error) => return Err(Error::ProviderUnavailable(error.to_string())),
    };

    let mut result = YearData::new();
    for (country, years) in data {
        let Some(days) = years.get(&year) else {
            continue;
        };
        let mut holidays = days
            .iter()
            .map(|(date, holiday)| Holiday {
                date: *date,
                name: holiday.name.to_string(),
            })
            .collect::<Vec<_>>();
        holidays.sort();
        result.insert(format!("{country:?}").to_ascii_uppercase(), holidays);
    }

    if result.is_empty() {
        return Err(Error::YearUnavailable(year));
    }
    Ok(result)
}

impl Library {
    pub fn new(reference_year: i32) -> Self {
        Self {
            reference_year,
            years: HashMap::new(),
        }
    }

    fn year(&mut self, year: i32) -> Result<&YearData> {
        if !self.years.contains_key(&year) {
            let data = build(year)?;
            self.years.insert(year, data);
        }
        Ok(&self.years[&year])
    }

    /// Whether the reference year has data for `country`.
    fn knows_country(&mut self, country: &str) -> Result<bool> {
        let reference_year = self.reference_year;
        Ok(self.year(reference_year)?.contains_key(country))
    }
}

impl HolidayProvider for Library {
    fn holidays_for_year(&mut self, year: i32, country: &str) -> Result<Vec<Holiday>> {
        let code = country.trim().to_ascii_uppercase();
        let unsupported = || Error::UnsupportedCountry(country.to_string());
        if code.is_empty() {
            return Err(unsupported());
        }

        match self.year(year) {
            Ok(data) => return data.get(&code).cloned().ok_or_else(unsupported),
            Err(Error::YearUnavailable(_)) => {}
            Err(error) => return Err(error),
        }
        // An unknown country is more useful to report than a missing year
        if self.knows_country(&code)? {
            Err(Error::YearUnavailable(year))
        } else {
            Err(unsupported())
        }
    }

    fn is_holiday(&mut self, date: NaiveDate, country: &str) -> Result<Option<String>> {
        let names = self
            .holidays_for_year(date.year(), country)?
            .into_iter()
            .filter(|holiday| holiday.date == date)
            .map(|holiday| holiday.name)
            .collect::<Vec<_>>();
        if names.is_empty() {
            Ok(None)
        } else {
            Ok(Some(names.join("; ")))
        }
    }

    fn countries(&mut self) -> Result<Vec<String>> {
        let reference_year = self.reference_year;
        let mut codes = self
            .year(reference_year)?
            .keys()
            .cloned()
            .collect::<Vec<_>>();
        codes.sort();
        Ok(codes)
    }
}
