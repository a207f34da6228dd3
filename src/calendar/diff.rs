use chrono::{Datelike, Duration, NaiveDate};

/// The difference between two dates, broken down in several ways.
///
/// All fields except [`Self::total_days`] describe the distance between the
/// chronologically earlier and later date and are independent of argument
/// order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Difference {
    /// The earlier of the two dates
    pub from: NaiveDate,
    /// The later of the two dates
    pub to: NaiveDate,
    /// Whether the first date passed in was the later one
    pub swapped: bool,
    /// Days from the first to the second date passed in, negative if
    /// [`Self::swapped`]
    pub total_days: i64,
    /// Days divided by seven, rounded to two decimal places
    pub total_weeks: f64,
    pub weeks: i64,
    pub remainder_days: i64,
    pub years: i32,
    pub months: i32,
    pub days: i32,
    /// Whole calendar months, `years * 12 + months`
    pub calendar_months: i32,
}

impl Difference {
    pub fn between(first: NaiveDate, second: NaiveDate) -> Self {
        let (from, to, swapped) = if first > second {
            (second, first, true)
        } else {
            (first, second, false)
        };

        let total = (to - from).num_days();

        let mut years = to.year() - from.year();
        let mut months = to.month() as i32 - from.month() as i32;
        let mut days = to.day() as i32 - from.day() as i32;
        if days < 0 {
            // Borrow the length of the month before `to`. Stepping back by
            // `to.day()` days lands on its last day, which wraps from January
            // to December of the previous year.
            let prev_month_end = to - Duration::days(to.day().into());
            months -= 1;
            days += prev_month_end.day() as i32;
        }
        if months < 0 {
            years -= 1;
            months += 12;
        }

        Self {
            from,
            to,
            swapped,
            total_days: if swapped { -total } else { total },
            total_weeks: (total as f64 / 7.0 * 100.0).round() / 100.0,
            weeks: total.div_euclid(7),
            remainder_days: total.rem_euclid(7),
            years,
            months,
            days,
            calendar_months: years * 12 + months,
        }
    }

    /// `"W weeks, D days"`
    pub fn weeks_and_days(&self) -> String {
        format!("{} weeks, {} days", self.weeks, self.remainder_days)
    }

    /// `"Y years, M months, D days"`
    pub fn years_months_days(&self) -> String {
        format!(
            "{} years, {} months, {} days",
            self.years, self.months, self.days
        )
    }
}
