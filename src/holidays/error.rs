use std::result;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// There is no data for this country. This is not fatal; callers
    /// usually treat it like a country without holidays.
    #[error("Country '{0}' not supported")]
    UnsupportedCountry(String),
    #[error("No holiday data for {0}")]
    YearUnavailable(i32),
    /// The holiday data could not be loaded at all.
    #[error("Holiday data unavailable: {0}")]
    ProviderUnavailable(String),
}

impl Error {
    pub fn is_unsupported_country(&self) -> bool {
        matches!(self, Self::UnsupportedCountry(_))
    }
}

pub type Result<T> = result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_missing_countries_are_unsupported() {
        assert!(Error::UnsupportedCountry("XX".to_string()).is_unsupported_country());
        assert!(!Error::YearUnavailable(1000).is_unsupported_country());
        assert!(!Error::ProviderUnavailable("broken".to_string()).is_unsupported_country());
    }

    #[test]
    fn messages() {
        assert_eq!(
            Error::UnsupportedCountry("XX".to_string()).to_string(),
            "Country 'XX' not supported"
        );
        assert_eq!(Error::YearUnavailable(1000).to_string(), "No holiday data for 1000");
    }
}
