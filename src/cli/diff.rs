use crate::calendar::Difference;

use super::error::Result;
use super::util::{field, header};
use super::Env;

fn render(diff: &Difference) -> String {
    let (first, second) = if diff.swapped {
        (diff.to, diff.from)
    } else {
        (diff.from, diff.to)
    };
    [
        header(&format!("Difference: {first} -> {second}")),
        field("total_days", diff.total_days),
        // Debug keeps the decimal point of whole numbers, like 52.0
        field("total_weeks", format!("{:?}", diff.total_weeks)),
        field("weeks_and_days", diff.weeks_and_days()),
        field("years_months_days", diff.years_months_days()),
        field("calendar_months", diff.calendar_months),
        field("from", diff.from),
        field("to", diff.to),
    ]
    .join("\n")
}

pub fn diff(env: &Env, date1: &str, date2: &str) -> Result<()> {
    let first = env.parse_date(date1)?;
    let second = env.parse_date(date2)?;
    println!("{}", render(&Difference::between(first, second)));
    Ok(())
}
