use std::iter::FusedIterator;

use chrono::NaiveDate;

/// An inclusive range of dates. `from` is never later than `until`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    from: NaiveDate,
    until: NaiveDate,
}

impl DateRange {
    /// Create a range containing both dates, in whichever order they are
    /// passed.
    pub fn new(a: NaiveDate, b: NaiveDate) -> Self {
        if a <= b {
            Self { from: a, until: b }
        } else {
            Self { from: b, until: a }
        }
    }

    pub fn from(&self) -> NaiveDate {
        self.from
    }

    pub fn until(&self) -> NaiveDate {
        self.until
    }

    /// Number of days in the range, counting both ends.
    pub fn num_days(&self) -> u64 {
        (self.until - self.from).num_days().unsigned_abs() + 1
    }

    /// All days of the range in ascending order. The days are produced on
    /// demand; cloning the iterator (or calling this again) restarts it.
    pub fn days(&self) -> Days {
        Days {
            front: self.from,
            back: self.until,
            exhausted: false,
        }
    }
}

impl IntoIterator for DateRange {
    type Item = NaiveDate;
    type IntoIter = Days;

    fn into_iter(self) -> Days {
        self.days()
    }
}

/// Iterator over the days of a [`DateRange`].
#[derive(Debug, Clone)]
pub struct Days {
    front: NaiveDate,
    back: NaiveDate,
    exhausted: bool,
}

impl Iterator for Days {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        if self.exhausted {
            return None;
        }
        let date = self.front;
        match date.succ_opt() {
            Some(next) if date < self.back => self.front = next,
            _ => self.exhausted = true,
        }
        Some(date)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            return (0, Some(0));
        }
        let remaining = (self.back - self.front).num_days() as usize + 1;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Days {
    fn next_back(&mut self) -> Option<NaiveDate> {
        if self.exhausted {
            return None;
        }
        let date = self.back;
        match date.pred_opt() {
            Some(prev) if self.front < date => self.back = prev,
            _ => self.exhausted = true,
        }
        Some(date)
    }
}

impl ExactSizeIterator for Days {}

impl FusedIterator for Days {}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};

    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn first_week_of_2025() {
        let range = DateRange::new(ymd(2025, 1, 1), ymd(2025, 1, 7));
        let days = range.days().collect::<Vec<_>>();
        assert_eq!(days.len(), 7);
        assert_eq!(days.first(), Some(&ymd(2025, 1, 1)));
        assert_eq!(days.last(), Some(&ymd(2025, 1, 7)));
        for pair in days.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
        assert_eq!(range.num_days(), 7);
    }

    #[test]
    fn order_is_normalized() {
        let range = DateRange::new(ymd(2025, 1, 7), ymd(2025, 1, 1));
        assert_eq!(range.from(), ymd(2025, 1, 1));
        assert_eq!(range.until(), ymd(2025, 1, 7));
        assert_eq!(range, DateRange::new(ymd(2025, 1, 1), ymd(2025, 1, 7)));
    }

    #[test]
    fn single_day() {
        let date = ymd(2024, 2, 29);
        let range = DateRange::new(date, date);
        assert_eq!(range.days().collect::<Vec<_>>(), vec![date]);
        assert_eq!(range.num_days(), 1);
    }

    #[test]
    fn restartable_and_reversible() {
        let range = DateRange::new(ymd(2024, 12, 30), ymd(2025, 1, 2));
        let mut days = range.days();
        assert_eq!(days.next(), Some(ymd(2024, 12, 30)));
        let restarted = range.days();
        assert_eq!(restarted.len(), 4);
        assert_eq!(days.len(), 3);

        let reversed = range.days().rev().collect::<Vec<_>>();
        assert_eq!(
            reversed,
            vec![ymd(2025, 1, 2), ymd(2025, 1, 1), ymd(2024, 12, 31), ymd(2024, 12, 30)]
        );
    }

    #[test]
    fn meeting_in_the_middle() {
        let mut days = DateRange::new(ymd(2025, 3, 1), ymd(2025, 3, 3)).days();
        assert_eq!(days.next(), Some(ymd(2025, 3, 1)));
        assert_eq!(days.next_back(), Some(ymd(2025, 3, 3)));
        assert_eq!(days.next(), Some(ymd(2025, 3, 2)));
        assert_eq!(days.next_back(), None);
        assert_eq!(days.next(), None);
    }

    #[test]
    fn huge_ranges_are_lazy() {
        let range = DateRange::new(NaiveDate::MIN, NaiveDate::MAX);
        let mut days = range.days();
        assert_eq!(days.next(), Some(NaiveDate::MIN));
        assert_eq!(days.next_back(), Some(NaiveDate::MAX));
        assert!(range.num_days() > 100_000_000);
    }
}
