use std::result;

use colored::Colorize;

use crate::parse::ParseError;
use crate::{calendar, holidays};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Parse(#[from] ParseError),
    #[error("{0}")]
    Calendar(#[from] calendar::Error),
    #[error("{0}")]
    Holidays(#[from] holidays::Error),
}

impl Error {
    pub fn eprint(&self) {
        match self {
            Self::Parse(error) => error.eprint(),
            _ => eprintln!("{} {}", "Error:".red().bold(), self),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
