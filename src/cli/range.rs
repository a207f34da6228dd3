use chrono::{Datelike, NaiveDate};

use crate::calendar::{DateRange, Weekday};
use crate::holidays::HolidayProvider;

use super::annotate::Annotator;
use super::error::Result;
use super::util::header;
use super::Env;

/// `2025-01-25 (Sat) [holiday] [weekend]`
fn render_day(date: NaiveDate, holiday: Option<&str>) -> String {
    let weekday = Weekday::from(date.weekday());
    let mut line = format!("{date} ({})", weekday.name());
    if let Some(holiday) = holiday {
        line.push_str(&format!(" [{holiday}]"));
    }
    if weekday.is_weekend() {
        line.push_str(" [weekend]");
    }
    line
}

fn render_days<'a, P: HolidayProvider>(
    range: DateRange,
    annotator: &'a mut Annotator<P>,
) -> impl Iterator<Item = String> + 'a {
    range
        .days()
        .map(move |date| render_day(date, annotator.holiday(date).as_deref()))
}

pub fn range(env: &Env, start: &str, end: &str) -> Result<()> {
    let range = DateRange::new(env.parse_date(start)?, env.parse_date(end)?);
    let mut annotator = Annotator::new(env.holidays(), &env.country);

    println!(
        "{}",
        header(&format!(
            "Date Range: {} to {} ({} days)",
            range.from(),
            range.until(),
            range.num_days()
        ))
    );
    for line in render_days(range, &mut annotator) {
        println!("{line}");
    }
    Ok(())
}
