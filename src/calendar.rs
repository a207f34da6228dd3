//! The calendar arithmetic engine: facts about single dates, shifting dates
//! by calendar units, differences between dates and ranges of dates.
//!
//! Dates are plain [`chrono::NaiveDate`]s in the proleptic Gregorian
//! calendar. Nothing in here reads the clock; anything relative to "today"
//! takes it as an argument.

pub use self::delta::{shift, DateUnit};
pub use self::diff::Difference;
pub use self::error::Error;
pub use self::info::DateInfo;
pub use self::range::DateRange;
pub use self::weekday::Weekday;

mod delta;
mod diff;
mod error;
mod info;
mod range;
pub mod util;
mod weekday;
