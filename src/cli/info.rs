use chrono::{Datelike, NaiveDate};

use crate::calendar::{util, DateInfo};

use super::annotate::Annotator;
use super::error::Result;
use super::util::{field, header};
use super::Env;

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

fn render(info: &DateInfo) -> String {
    let date = info.date;
    let mut lines = vec![
        header(&format!("Date Information for {}", date.format("%B %d, %Y"))),
        field("date", date),
        field("formatted", info.formatted()),
        field("day_of_week", info.weekday.full_name()),
        field("day_of_week_num", util::weekday_index(date)),
        field("day_of_month", date.day()),
        field("month", info.month_name()),
        field("month_num", date.month()),
        field("year", date.year()),
        field("quarter", info.quarter),
        field("week_number", info.iso_week.week()),
        field("week_year", info.iso_week.year()),
        field("day_of_year", info.day_of_year),
        field("days_in_month", info.days_in_month),
        field("is_leap_year", yes_no(info.leap_year)),
        field("is_weekend", yes_no(info.is_weekend())),
    ];
    if let Some(holiday) = &info.holiday {
        lines.push(field("holiday", holiday));
    }
    lines.push(field("relative", info.relative));
    lines.join("\n")
}

fn date_info(env: &Env, date: NaiveDate) -> DateInfo {
    let mut annotator = Annotator::new(env.holidays(), &env.country);
    DateInfo::new(date, env.today).with_holiday(annotator.holiday(date))
}

pub fn info(env: &Env, date: &str) -> Result<()> {
    let date = env.parse_date(date)?;
    println!("{}", render(&date_info(env, date)));
    Ok(())
}

pub fn relative(env: &Env, date: &str) -> Result<()> {
    let date = env.parse_date(date)?;
    let info = DateInfo::new(date, env.today);
    println!("{} is {}", info.formatted(), info.relative);
    Ok(())
}

pub fn weekday(env: &Env, date: &str) -> Result<()> {
    let date = env.parse_date(date)?;
    let info = DateInfo::new(date, env.today);
    println!("{date} is a {}", info.weekday.full_name());
    Ok(())
}
