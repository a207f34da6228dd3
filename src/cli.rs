use chrono::{Datelike, Local, NaiveDate};
use clap::Parser;

use crate::holidays::{Library, DEFAULT_COUNTRY};
use crate::parse;

use self::error::Result;

mod add;
mod annotate;
mod diff;
pub mod error;
mod holidays;
mod info;
mod range;
mod util;

/// Date and calendar calculations
#[derive(Debug, clap::Parser)]
#[command(version)]
pub struct Opt {
    /// Overwrite the current date (YYYY-MM-DD)
    #[arg(long, global = true, value_name = "DATE")]
    today: Option<NaiveDate>,
    /// Country code for holidays. Use 'list' with the holidays command to see
    /// all supported countries.
    #[arg(short, long, global = true, default_value = DEFAULT_COUNTRY)]
    country: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Get date information
    Info {
        /// Date (YYYY-MM-DD, MM/DD/YYYY, "Jan 29, 2025", today, tomorrow, ...)
        date: String,
    },
    /// Add time to a date
    Add {
        /// Start date
        date: String,
        /// Amount to add (negative to subtract)
        #[arg(allow_hyphen_values = true)]
        amount: i64,
        /// Unit (days, weeks, months or years)
        unit: String,
    },
    /// Difference between two dates
    Diff {
        /// First date
        date1: String,
        /// Second date
        date2: String,
    },
    /// List dates in a range
    Range {
        /// Start date
        start: String,
        /// End date
        end: String,
    },
    /// Describe a date relative to today
    Relative {
        /// Date to describe
        date: String,
    },
    /// List holidays for a year
    Holidays {
        /// Year [default: current year]
        year: Option<i32>,
    },
    /// Get the day of the week for a date
    Weekday {
        /// Date
        date: String,
    },
}

/// Everything commands need to know besides their own arguments.
#[derive(Debug)]
pub struct Env {
    pub today: NaiveDate,
    pub country: String,
}

impl Env {
    pub fn parse_date(&self, text: &str) -> Result<NaiveDate> {
        Ok(parse::parse_date(text, self.today)?)
    }

    pub fn holidays(&self) -> Library {
        Library::new(self.today.year())
    }
}

pub fn run() -> Result<()> {
    execute(Opt::parse())
}

fn execute(opt: Opt) -> Result<()> {
    let env = Env {
        today: opt.today.unwrap_or_else(|| Local::now().date_naive()),
        country: opt.country.trim().to_uppercase(),
    };

    match opt.command {
        Command::Info { date } => info::info(&env, &date),
        Command::Add { date, amount, unit } => add::add(&env, &date, amount, &unit),
        Command::Diff { date1, date2 } => diff::diff(&env, &date1, &date2),
        Command::Range { start, end } => range::range(&env, &start, &end),
        Command::Relative { date } => info::relative(&env, &date),
        Command::Holidays { year } => holidays::holidays(&env, year),
        Command::Weekday { date } => info::weekday(&env, &date),
    }
}
