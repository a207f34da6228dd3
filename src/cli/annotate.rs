use chrono::NaiveDate;

use crate::holidays::HolidayProvider;

use super::util;

/// Looks up holiday names for dates that are displayed anyway.
///
/// Holidays are only decoration here, so if the provider fails, a warning is
/// printed once and no further lookups are attempted.
pub struct Annotator<P> {
    provider: Option<P>,
    country: String,
}

impl<P: HolidayProvider> Annotator<P> {
    pub fn new(provider: P, country: &str) -> Self {
        Self {
            provider: Some(provider),
            country: country.to_string(),
        }
    }

    pub fn holiday(&mut self, date: NaiveDate) -> Option<String> {
        let provider = self.provider.as_mut()?;
        match provider.is_holiday(date, &self.country) {
            Ok(name) => name,
            Err(error) => {
                util::warn(format!("{error}, not showing holidays"));
                self.provider = None;
                None
            }
        }
    }
}
