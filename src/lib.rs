//! Calendar date-picker core for task due dates.
//!
//! The crate covers the parts of a due-date picker that are pure logic:
//! day-precision dates in `YYYY-MM-DD` form, month grids with week alignment,
//! the minimum-date boundary shared by the picker and the form validators,
//! and the small state machines that drive the picker and task modals.

mod boundary;
mod clock;
mod config;
mod consts;
mod form;
mod month;
mod picker;
mod prelude;
#[cfg(test)]
mod test_utils;
mod types;
mod validation;

pub use boundary::{BoundaryPolicy, can_navigate_to_prior_month, is_past_boundary};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ConfigError, MinimumDate, PickerConfig};
pub use consts::*;
pub use form::{FormErrors, ModalMode, NewTask, Role, TaskDraft, TaskForm, TaskPriority, TaskStatus};
pub use month::{GridCell, MonthView, YearMonth, build_month};
pub use picker::{DatePicker, DayCell, Popover};
pub use types::{Day, Month, Weekday, Year, days_in_month, is_leap_year};
pub use validation::{
    FieldError, validate_department, validate_due_date, validate_email, validate_phone,
    validate_required, validate_string, validate_task_description, validate_task_title,
};

use crate::prelude::*;
use std::str::FromStr;

/// A date truncated to day precision.
///
/// There is no time-of-day component, so two values compare exactly as their
/// local midnights would. Field order makes the derived ordering chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct CalendarDate {
    year:  Year,
    month: Month,
    day:   Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl CalendarDate {
    /// 0001-01-01
    pub const MIN: Self = Self::from_parts(Year::MIN, Month::JANUARY, Day::FIRST);

    /// Builds a date from raw components, validating each against the calendar.
    ///
    /// # Errors
    /// Returns the `ParseError` variant naming the first invalid component.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    /// Builds a date from components that were already validated together.
    pub const fn from_parts(year: Year, month: Month, day: Day) -> Self {
        Self { year, month, day }
    }

    /// 9999-12-31
    pub fn max_value() -> Self {
        Self::from_parts(Year::MAX, Month::DECEMBER, Day::last_of(Year::MAX, Month::DECEMBER))
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub fn weekday(&self) -> Weekday {
        // chrono covers every year a CalendarDate can hold
        types::weekday(self.year.get(), self.month.get(), self.day.get()).unwrap_or(Weekday::Sunday)
    }

    /// The month this date falls in
    pub const fn year_month(&self) -> YearMonth {
        YearMonth::from_parts(self.year, self.month)
    }

    /// The next calendar day, or `None` after 9999-12-31
    pub fn succ(&self) -> Option<Self> {
        if let Ok(day) = Day::new(self.day() + 1, self.year, self.month) {
            return Some(Self { day, ..*self });
        }
        self.year_month().next().map(|ym| ym.first_day())
    }

    /// The previous calendar day, or `None` before 0001-01-01
    pub fn pred(&self) -> Option<Self> {
        if let Ok(day) = Day::new(self.day() - 1, self.year, self.month) {
            return Some(Self { day, ..*self });
        }
        self.year_month().prev().map(|ym| ym.last_day())
    }

    /// `days` calendar days later, or `None` past 9999-12-31
    pub fn add_days(&self, days: u32) -> Option<Self> {
        (0..days).try_fold(*self, |date, _| date.succ())
    }

    /// Reads a date handed over from outside the picker.
    ///
    /// Absent, blank or unparsable text all mean "no date selected"; the
    /// caller reports that as a missing value rather than a parse failure.
    pub fn from_input(input: Option<&str>) -> Option<Self> {
        let text = input?;
        match text.parse() {
            Ok(date) => Some(date),
            Err(e) => {
                log::trace!("treating {text:?} as no date: {e}");
                None
            },
        }
    }

    fn parse_component(part: &str, width: usize) -> Result<u16, ParseError> {
        if part.len() != width || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidFormat(part.to_owned()));
        }
        part.parse::<u16>()
            .map_err(|_| ParseError::InvalidFormat(part.to_owned()))
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    /// Accepts only the zero-padded `YYYY-MM-DD` form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} component(s): {trimmed}",
                parts.len()
            )));
        };

        let year = Self::parse_component(year, consts::YEAR_DIGITS)?;
        let month = Self::parse_component(month, consts::MONTH_DIGITS)?;
        let day = Self::parse_component(day, consts::DAY_DIGITS)?;

        let month = u8::try_from(month).map_err(|_| ParseError::InvalidFormat(trimmed.to_owned()))?;
        let day = u8::try_from(day).map_err(|_| ParseError::InvalidFormat(trimmed.to_owned()))?;
        Self::new(year, month, day)
    }
}

impl TryFrom<chrono::NaiveDate> for CalendarDate {
    type Error = ParseError;

    fn try_from(date: chrono::NaiveDate) -> Result<Self, Self::Error> {
        use chrono::Datelike;

        let year = u16::try_from(date.year()).map_err(|_| ParseError::InvalidYear(0))?;
        // chrono guarantees month in 1..=12 and day in 1..=31
        let month = u8::try_from(date.month()).map_err(|_| ParseError::InvalidMonth(0))?;
        let day = u8::try_from(date.day()).map_err(|_| ParseError::InvalidDay { year, month, day: 0 })?;
        Self::new(year, month, day)
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
