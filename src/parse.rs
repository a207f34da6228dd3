//! Parsing of human-friendly date expressions.

use std::ops::Range;

use chrono::NaiveDate;
use codespan_reporting::diagnostic::{Diagnostic, Label};
use codespan_reporting::files::SimpleFile;
use pest::error::InputLocation;
use pest::iterators::Pair;
use pest::Parser;

use crate::error::Eprint;

#[derive(pest_derive::Parser)]
#[grammar = "parse/grammar.pest"]
struct DateParser;

const EXPECTED: &str =
    "expected today, tomorrow, yesterday, 2025-01-29, 01/29/2025, January 29, 2025 or 20250129";

#[derive(Debug, thiserror::Error)]
#[error("Unable to parse date: {input}")]
pub struct ParseError {
    /// The text exactly as it was passed in
    pub input: String,
    /// The part of `input` that could not be understood
    pub span: Range<usize>,
    pub reason: String,
}

impl Eprint<'_, SimpleFile<String, String>> for ParseError {
    fn diagnostic(&self) -> Diagnostic<()> {
        Diagnostic::error()
            .with_message(self.to_string())
            .with_labels(vec![Label::primary((), self.span.clone()).with_message(&self.reason)])
    }
}

impl ParseError {
    pub fn eprint(&self) {
        let files = SimpleFile::new("<date>".to_string(), self.input.clone());
        Eprint::eprint(self, &files);
    }
}

fn parse_number(p: Pair<'_, Rule>) -> u32 {
    assert!(matches!(
        p.as_rule(),
        Rule::year | Rule::number | Rule::two_digits
    ));
    // At most four digits, guaranteed by the grammar
    p.as_str().parse().unwrap()
}

fn parse_year(p: Pair<'_, Rule>) -> i32 {
    assert_eq!(p.as_rule(), Rule::year);
    parse_number(p) as i32
}

fn parse_month_name(p: Pair<'_, Rule>) -> u32 {
    assert_eq!(p.as_rule(), Rule::month_name);
    match &p.as_str()[..3].to_ascii_lowercase()[..] {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => unreachable!(),
    }
}

fn parse_keyword(p: Pair<'_, Rule>, today: NaiveDate) -> Option<NaiveDate> {
    assert_eq!(p.as_rule(), Rule::keyword);
    match &p.as_str().to_ascii_lowercase()[..] {
        "today" => Some(today),
        "yesterday" => today.pred_opt(),
        "tomorrow" => today.succ_opt(),
        _ => unreachable!(),
    }
}

fn parse_iso(p: Pair<'_, Rule>) -> Option<NaiveDate> {
    assert_eq!(p.as_rule(), Rule::iso);
    let mut p = p.into_inner();

    let year = parse_year(p.next().unwrap());
    let month = parse_number(p.next().unwrap());
    let day = parse_number(p.next().unwrap());

    assert_eq!(p.next(), None);

    NaiveDate::from_ymd_opt(year, month, day)
}

/// `MM/DD/YYYY`, falling back to `DD/MM/YYYY` if that is no valid date.
fn parse_slashed(p: Pair<'_, Rule>) -> Option<NaiveDate> {
    assert_eq!(p.as_rule(), Rule::slashed);
    let mut p = p.into_inner();

    let first = parse_number(p.next().unwrap());
    let second = parse_number(p.next().unwrap());
    let year = parse_year(p.next().unwrap());

    assert_eq!(p.next(), None);

    NaiveDate::from_ymd_opt(year, first, second)
        .or_else(|| NaiveDate::from_ymd_opt(year, second, first))
}

fn parse_named(p: Pair<'_, Rule>) -> Option<NaiveDate> {
    assert_eq!(p.as_rule(), Rule::named);
    let mut p = p.into_inner();

    let month = parse_month_name(p.next().unwrap());
    let day = parse_number(p.next().unwrap());
    let year = parse_year(p.next().unwrap());

    assert_eq!(p.next(), None);

    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_compact(p: Pair<'_, Rule>) -> Option<NaiveDate> {
    assert_eq!(p.as_rule(), Rule::compact);
    let mut p = p.into_inner();

    let year = parse_year(p.next().unwrap());
    let month = parse_number(p.next().unwrap());
    let day = parse_number(p.next().unwrap());

    assert_eq!(p.next(), None);

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Parse a date relative to `today`.
///
/// Accepted are the keywords `today`, `yesterday` and `tomorrow` and the
/// formats `YYYY-MM-DD`, `MM/DD/YYYY`, `DD/MM/YYYY`, `Month DD, YYYY`,
/// `Mon DD, YYYY` and `YYYYMMDD`, tried in that order. Case and surrounding
/// whitespace are ignored.
pub fn parse_date(text: &str, today: NaiveDate) -> Result<NaiveDate, ParseError> {
    let offset = text.len() - text.trim_start().len();
    let fail = |span: Range<usize>, reason: &str| ParseError {
        input: text.to_string(),
        span: span.start + offset..span.end + offset,
        reason: reason.to_string(),
    };

    let mut pairs = DateParser::parse(Rule::date, text.trim()).map_err(|error| {
        let span = match error.location {
            InputLocation::Pos(at) => at..at,
            InputLocation::Span((start, end)) => start..end,
        };
        fail(span, EXPECTED)
    })?;
    let p = pairs.next().unwrap().into_inner().next().unwrap();
    let span = p.as_span().start()..p.as_span().end();

    let date = match p.as_rule() {
        Rule::keyword => parse_keyword(p, today),
        Rule::iso => parse_iso(p),
        Rule::slashed => parse_slashed(p),
        Rule::named => parse_named(p),
        Rule::compact => parse_compact(p),
        _ => unreachable!(),
    };
    date.ok_or_else(|| fail(span, "no such date"))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn parse(text: &str) -> Result<NaiveDate, ParseError> {
        parse_date(text, ymd(2025, 1, 29))
    }

    #[test]
    fn keywords() {
        assert_eq!(parse("today").unwrap(), ymd(2025, 1, 29));
        assert_eq!(parse("  TODAY ").unwrap(), ymd(2025, 1, 29));
        assert_eq!(parse("Yesterday").unwrap(), ymd(2025, 1, 28));
        assert_eq!(parse("tomorrow").unwrap(), ymd(2025, 1, 30));
        assert_eq!(
            parse_date("tomorrow", ymd(2024, 12, 31)).unwrap(),
            ymd(2025, 1, 1)
        );
        assert!(parse_date("tomorrow", NaiveDate::MAX).is_err());
    }

    #[test]
    fn all_formats() {
        let expected = ymd(2025, 1, 29);
        assert_eq!(parse("2025-01-29").unwrap(), expected);
        assert_eq!(parse("2025-1-29").unwrap(), expected);
        assert_eq!(parse("01/29/2025").unwrap(), expected);
        assert_eq!(parse("29/01/2025").unwrap(), expected);
        assert_eq!(parse("January 29, 2025").unwrap(), expected);
        assert_eq!(parse("jAnUaRy 29, 2025").unwrap(), expected);
        assert_eq!(parse("Jan 29, 2025").unwrap(), expected);
        assert_eq!(parse("20250129").unwrap(), expected);
        assert_eq!(parse(" 2025-01-29\n").unwrap(), expected);
        assert_eq!(parse("May 5, 2025").unwrap(), ymd(2025, 5, 5));
    }

    #[test]
    fn ambiguous_dates_are_us_order() {
        assert_eq!(parse("01/02/2025").unwrap(), ymd(2025, 1, 2));
        assert_eq!(parse("13/02/2025").unwrap(), ymd(2025, 2, 13));
    }

    #[test]
    fn years_need_four_digits() {
        for text in [
            "1/2/25",
            "25-01-29",
            "Jan 5, 25",
            "+2025-01-29",
            "-2025-01-29",
            "1-1-1",
            "02025-01-29",
            "2025012",
        ] {
            assert!(parse(text).is_err(), "{text} should not parse");
        }
    }

    #[test]
    fn invalid_dates() {
        for text in ["", "soon", "2025-02-30", "2025-13-01", "32/01/2025", "Foo 1, 2025"] {
            let error = parse(text).unwrap_err();
            assert_eq!(error.input, text);
        }
        assert_eq!(
            parse("  Next Week ").unwrap_err().to_string(),
            "Unable to parse date:   Next Week "
        );
    }

    #[test]
    fn errors_point_into_the_input() {
        let error = parse("  2025-02-30").unwrap_err();
        assert_eq!(error.span, 2..12);
        assert_eq!(error.reason, "no such date");

        let error = parse("2025-01-29x").unwrap_err();
        assert_eq!(error.span, 10..10);
        assert_eq!(error.reason, EXPECTED);
    }

    #[test]
    fn leap_days() {
        assert_eq!(parse("2024-02-29").unwrap(), ymd(2024, 2, 29));
        assert!(parse("2023-02-29").is_err());
        assert_eq!(parse("February 29, 2000").unwrap(), ymd(2000, 2, 29));
    }

    proptest! {
        #[test]
        fn iso_dates_round_trip(n in 0i64..3_650_000) {
            let date = ymd(1, 1, 1) + chrono::Duration::days(n);
            let text = date.format("%Y-%m-%d").to_string();
            let parsed = parse(&text).unwrap();
            prop_assert_eq!(parsed.format("%Y-%m-%d").to_string(), text);
        }
    }
}
