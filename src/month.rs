use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{CalendarDate, DATE_SEPARATOR, DAYS_PER_WEEK, Day, MIN_DAY, Month, ParseError, Year, prelude::*};

/// A calendar month, identified by year and month number.
///
/// Displays as `YYYY-MM`; [`YearMonth::label`] gives the header text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}", "year.get()", "month.get()")]
pub struct YearMonth {
    year:  Year,
    month: Month,
}

impl YearMonth {
    /// # Errors
    /// Returns `ParseError` if the year or month is out of range.
    pub fn new(year: u16, month: u8) -> Result<Self, ParseError> {
        Ok(Self {
            year:  Year::new(year)?,
            month: Month::new(month)?,
        })
    }

    pub const fn from_parts(year: Year, month: Month) -> Self {
        Self { year, month }
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Header text such as "June 2025"
    pub fn label(&self) -> String {
        format!("{} {}", self.month.name(), self.year)
    }

    pub const fn first_day(&self) -> CalendarDate {
        CalendarDate::from_parts(self.year, self.month, Day::FIRST)
    }

    pub fn last_day(&self) -> CalendarDate {
        CalendarDate::from_parts(self.year, self.month, Day::last_of(self.year, self.month))
    }

    pub fn len_days(&self) -> u8 {
        Day::last_of(self.year, self.month).get()
    }

    /// Blank cells before the 1st in a Sunday-first week (0..=6)
    pub fn leading_blanks(&self) -> u8 {
        self.first_day().weekday().num_days_from_sunday()
    }

    /// The following month, rolling December into the next year.
    /// `None` past December 9999.
    pub fn next(&self) -> Option<Self> {
        match self.month.succ() {
            (month, false) => Some(Self { month, ..*self }),
            (month, true) => self.year.succ().map(|year| Self { year, month }),
        }
    }

    /// The preceding month, rolling January back into the previous year.
    /// `None` before January of year 1.
    pub fn prev(&self) -> Option<Self> {
        match self.month.pred() {
            (month, false) => Some(Self { month, ..*self }),
            (month, true) => self.year.pred().map(|year| Self { year, month }),
        }
    }

    pub fn contains(&self, date: &CalendarDate) -> bool {
        date.year_month() == *self
    }
}

impl From<CalendarDate> for YearMonth {
    fn from(date: CalendarDate) -> Self {
        date.year_month()
    }
}

impl FromStr for YearMonth {
    type Err = ParseError;

    /// Accepts `YYYY-MM`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        let (year, month) = trimmed
            .split_once(DATE_SEPARATOR)
            .ok_or_else(|| ParseError::InvalidFormat(trimmed.to_owned()))?;
        // Reuse the full-date parser so both forms share one set of rules.
        let first = format!("{year}{DATE_SEPARATOR}{month}{DATE_SEPARATOR}{MIN_DAY:02}").parse::<CalendarDate>()?;
        Ok(first.year_month())
    }
}

impl Serialize for YearMonth {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for YearMonth {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// One cell of the seven-column calendar grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridCell {
    /// Placeholder that aligns the first week
    Blank,
    Day(CalendarDate),
}

impl GridCell {
    pub const fn date(&self) -> Option<CalendarDate> {
        match self {
            Self::Blank => None,
            Self::Day(date) => Some(*date),
        }
    }
}

/// Day grid for one displayed month.
///
/// Derived from `(year, month)` alone; it knows nothing about the minimum
/// date, which callers apply per day through the boundary policy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MonthView {
    month:          YearMonth,
    leading_blanks: u8,
    days:           Vec<CalendarDate>,
}

impl MonthView {
    pub fn build(month: YearMonth) -> Self {
        let (year, m) = (month.year, month.month);
        let days = (MIN_DAY..=month.len_days())
            .filter_map(|d| Day::new(d, year, m).ok())
            .map(|day| CalendarDate::from_parts(year, m, day))
            .collect();

        Self {
            month,
            leading_blanks: month.leading_blanks(),
            days,
        }
    }

    pub const fn month(&self) -> YearMonth {
        self.month
    }

    /// Weekday offset of the 1st, 0 = Sunday
    pub const fn leading_blanks(&self) -> u8 {
        self.leading_blanks
    }

    /// Every day of the month, in order
    pub fn days(&self) -> &[CalendarDate] {
        &self.days
    }

    /// Blanks after the last day that complete the final week
    pub fn trailing_blanks(&self) -> usize {
        let used = usize::from(self.leading_blanks) + self.days.len();
        (DAYS_PER_WEEK - used % DAYS_PER_WEEK) % DAYS_PER_WEEK
    }

    /// Leading blanks followed by the days, left to right, top to bottom
    pub fn cells(&self) -> impl Iterator<Item = GridCell> + '_ {
        std::iter::repeat_n(GridCell::Blank, usize::from(self.leading_blanks))
            .chain(self.days.iter().copied().map(GridCell::Day))
    }

    /// The grid split into full weeks; the last week is padded with blanks
    pub fn weeks(&self) -> Vec<Vec<GridCell>> {
        let cells: Vec<GridCell> = self
            .cells()
            .chain(std::iter::repeat_n(GridCell::Blank, self.trailing_blanks()))
            .collect();
        cells.chunks(DAYS_PER_WEEK).map(<[GridCell]>::to_vec).collect()
    }
}

/// Builds the grid for `year`/`month`.
///
/// # Errors
/// Returns `ParseError` if the year or month is out of range.
pub fn build_month(year: u16, month: u8) -> Result<MonthView, ParseError> {
    YearMonth::new(year, month).map(MonthView::build)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, ym};

    #[test]
    fn test_month_lengths() {
        struct TestCase {
            year:  u16,
            month: u8,
            days:  usize,
        }

        let cases = [
            TestCase { year: 2024, month: 2, days: 29 },
            TestCase { year: 2023, month: 2, days: 28 },
            TestCase { year: 2000, month: 2, days: 29 },
            TestCase { year: 1900, month: 2, days: 28 },
            TestCase { year: 2025, month: 1, days: 31 },
            TestCase { year: 2025, month: 4, days: 30 },
            TestCase { year: 2025, month: 12, days: 31 },
        ];

        for case in &cases {
            let view = build_month(case.year, case.month).unwrap();
            assert_eq!(
                view.days().len(),
                case.days,
                "{:04}-{:02} should have {} days",
                case.year,
                case.month,
                case.days
            );
        }
    }

    #[test]
    fn test_every_month_of_a_leap_cycle_is_contiguous() {
        for year in 2023..=2025 {
            for month in 1..=12 {
                let view = build_month(year, month).unwrap();
                let days = view.days();
                assert_eq!(days.first().copied(), Some(ym(year, month).first_day()));
                assert_eq!(days.last().copied(), Some(ym(year, month).last_day()));
                for pair in days.windows(2) {
                    assert_eq!(pair[0].succ(), Some(pair[1]));
                }
            }
        }
    }

    #[test]
    fn test_leading_blanks() {
        // Jan 1 2024 is a Monday
        assert_eq!(build_month(2024, 1).unwrap().leading_blanks(), 1);
        // Jun 1 2025 is a Sunday
        assert_eq!(build_month(2025, 6).unwrap().leading_blanks(), 0);
        // Feb 1 2025 is a Saturday
        assert_eq!(build_month(2025, 2).unwrap().leading_blanks(), 6);
    }

    #[test]
    fn test_build_is_idempotent() {
        assert_eq!(build_month(2024, 2).unwrap(), build_month(2024, 2).unwrap());
        assert_eq!(build_month(2025, 6).unwrap().days(), build_month(2025, 6).unwrap().days());
    }

    #[test]
    fn test_build_rejects_bad_month() {
        assert!(matches!(build_month(2025, 0), Err(ParseError::InvalidMonth(0))));
        assert!(matches!(build_month(2025, 13), Err(ParseError::InvalidMonth(13))));
        assert!(matches!(build_month(0, 1), Err(ParseError::InvalidYear(0))));
    }

    #[test]
    fn test_cells_and_weeks() {
        // February 2025: Saturday start, 28 days -> 6 blanks + 28 days = 34 cells, 5 weeks
        let view = build_month(2025, 2).unwrap();
        let cells: Vec<_> = view.cells().collect();
        assert_eq!(cells.len(), 34);
        assert!(cells[..6].iter().all(|c| *c == GridCell::Blank));
        assert_eq!(cells[6], GridCell::Day(date(2025, 2, 1)));
        assert_eq!(view.trailing_blanks(), 1);

        let weeks = view.weeks();
        assert_eq!(weeks.len(), 5);
        assert!(weeks.iter().all(|w| w.len() == DAYS_PER_WEEK));
        assert_eq!(weeks[4][5].date(), Some(date(2025, 2, 28)));
        assert_eq!(weeks[4][6], GridCell::Blank);
    }

    #[test]
    fn test_weeks_without_padding() {
        // February 2015 starts on Sunday and fills exactly four weeks
        let view = build_month(2015, 2).unwrap();
        assert_eq!(view.leading_blanks(), 0);
        assert_eq!(view.trailing_blanks(), 0);
        assert_eq!(view.weeks().len(), 4);
    }

    #[test]
    fn test_navigation_rolls_the_year() {
        assert_eq!(ym(2025, 12).next(), Some(ym(2026, 1)));
        assert_eq!(ym(2026, 1).prev(), Some(ym(2025, 12)));
        assert_eq!(ym(2025, 6).next(), Some(ym(2025, 7)));
        assert_eq!(ym(2025, 6).prev(), Some(ym(2025, 5)));
    }

    #[test]
    fn test_navigation_at_representable_limits() {
        assert_eq!(ym(9999, 12).next(), None);
        assert_eq!(ym(1, 1).prev(), None);
    }

    #[test]
    fn test_label_and_display() {
        assert_eq!(ym(2025, 6).label(), "June 2025");
        assert_eq!(ym(2025, 6).to_string(), "2025-06");
    }

    #[test]
    fn test_parse_year_month() {
        assert_eq!("2025-06".parse::<YearMonth>(), Ok(ym(2025, 6)));
        assert!(matches!("2025-6".parse::<YearMonth>(), Err(ParseError::InvalidFormat(_))));
        assert!(matches!("2025-13".parse::<YearMonth>(), Err(ParseError::InvalidMonth(13))));
        assert!(matches!("2025".parse::<YearMonth>(), Err(ParseError::InvalidFormat(_))));
        assert_eq!("".parse::<YearMonth>(), Err(ParseError::EmptyInput));
    }

    #[test]
    fn test_contains() {
        assert!(ym(2025, 6).contains(&date(2025, 6, 30)));
        assert!(!ym(2025, 6).contains(&date(2025, 7, 1)));
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&ym(2025, 6)).unwrap();
        assert_eq!(json, r#""2025-06""#);
        assert_eq!(serde_json::from_str::<YearMonth>(&json).unwrap(), ym(2025, 6));
    }
}
