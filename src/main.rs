use std::process;

mod calendar;
mod cli;
mod error;
mod holidays;
mod parse;

fn main() {
    if let Err(e) = cli::run() {
        e.eprint();
        process::exit(1);
    }
}
