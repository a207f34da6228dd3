use chrono::Datelike;

use crate::calendar::Weekday;
use crate::holidays::{Holiday, HolidayProvider};

use super::error::Result;
use super::util::{self, header};
use super::Env;

/// Passing this instead of a country code lists all countries.
const LIST: &str = "LIST";

const COUNTRIES_PER_ROW: usize = 8;

fn render_countries(countries: &[String]) -> String {
    let mut lines = vec![header(&format!(
        "Supported Countries ({} total)",
        countries.len()
    ))];
    for row in countries.chunks(COUNTRIES_PER_ROW) {
        lines.push(format!("  {}", row.join("  ")));
    }
    lines.join("\n")
}

fn render_holidays(country: &str, year: i32, holidays: &[Holiday]) -> String {
    let mut lines = vec![header(&format!("Holidays in {country} for {year}"))];
    for holiday in holidays {
        let weekday = Weekday::from(holiday.date.weekday());
        lines.push(format!(
            "  {} ({}): {}",
            holiday.date,
            weekday.name(),
            holiday.name
        ));
    }
    if holidays.is_empty() {
        lines.push(format!("  No holidays found for country code '{country}'"));
        lines.push("  Use 'holidays --country list' to see supported countries".to_string());
    }
    lines.join("\n")
}

fn list_holidays<P: HolidayProvider>(provider: &mut P, country: &str, year: i32) -> Result<String> {
    if country == LIST {
        let countries = provider.countries()?;
        return Ok(render_countries(&countries));
    }

    let holidays = match provider.holidays_for_year(year, country) {
        Ok(holidays) => holidays,
        Err(error) if error.is_unsupported_country() => {
            util::warn(&error);
            vec![]
        }
        Err(error) => return Err(error.into()),
    };
    Ok(render_holidays(country, year, &holidays))
}

pub fn holidays(env: &Env, year: Option<i32>) -> Result<()> {
    let year = year.unwrap_or_else(|| env.today.year());
    println!("{}", list_holidays(&mut env.holidays(), &env.country, year)?);
    Ok(())
}
