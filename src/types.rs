use crate::ParseError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DECEMBER, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    LEAP_YEAR_CYCLE, MAX_MONTH, MAX_YEAR, MIN_YEAR, MONTH_NAMES, WEEKDAY_LABELS,
};
use crate::prelude::*;
use chrono::{Datelike, NaiveDate};
use std::num::{NonZeroU8, NonZeroU16};

/// A year in `MIN_YEAR..=MAX_YEAR` (1..=9999)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{}", _0)]
pub struct Year(NonZeroU16);

impl Year {
    pub const MIN: Self = Self(NonZeroU16::MIN);
    pub const MAX: Self = match NonZeroU16::new(MAX_YEAR) {
        Some(v) => Self(v),
        None => Self::MIN,
    };

    /// # Errors
    /// Returns `ParseError::InvalidYear` if the value is outside `1..=MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, ParseError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&value) {
            return Err(ParseError::InvalidYear(value));
        }
        NonZeroU16::new(value)
            .map(Self)
            .ok_or(ParseError::InvalidYear(value))
    }

    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    pub const fn is_leap(self) -> bool {
        is_leap_year(self.get())
    }

    /// The following year, or `None` past `MAX_YEAR`
    pub fn succ(self) -> Option<Self> {
        Self::new(self.get() + 1).ok()
    }

    /// The preceding year, or `None` before year 1
    pub fn pred(self) -> Option<Self> {
        Self::new(self.get() - 1).ok()
    }
}

impl TryFrom<u16> for Year {
    type Error = ParseError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.get()
    }
}

/// A month number in `1..=12`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{}", _0)]
pub struct Month(NonZeroU8);

impl Month {
    pub const JANUARY: Self = Self(NonZeroU8::MIN);
    pub const DECEMBER: Self = match NonZeroU8::new(DECEMBER) {
        Some(v) => Self(v),
        None => Self::JANUARY,
    };

    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        if value > MAX_MONTH {
            return Err(ParseError::InvalidMonth(value));
        }
        NonZeroU8::new(value)
            .map(Self)
            .ok_or(ParseError::InvalidMonth(value))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// English month name, e.g. "June"
    pub const fn name(self) -> &'static str {
        MONTH_NAMES[self.get() as usize]
    }

    /// Next month and whether the year rolled over
    pub fn succ(self) -> (Self, bool) {
        if self == Self::DECEMBER {
            (Self::JANUARY, true)
        } else {
            (Self(self.0.saturating_add(1)), false)
        }
    }

    /// Previous month and whether the year rolled back
    pub fn pred(self) -> (Self, bool) {
        match NonZeroU8::new(self.get() - 1) {
            Some(prev) => (Self(prev), false),
            None => (Self::DECEMBER, true),
        }
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.get()
    }
}

/// A day of month, valid for the year and month it was built against
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{}", _0)]
pub struct Day(NonZeroU8);

impl Day {
    pub const FIRST: Self = Self(NonZeroU8::MIN);

    /// # Errors
    /// Returns `ParseError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u8, year: Year, month: Month) -> Result<Self, ParseError> {
        let invalid = ParseError::InvalidDay {
            year: year.get(),
            month: month.get(),
            day: value,
        };
        if value > days_in_month(year.get(), month.get()) {
            return Err(invalid);
        }
        NonZeroU8::new(value).map(Self).ok_or(invalid)
    }

    /// Last day of the given month
    pub fn last_of(year: Year, month: Month) -> Self {
        NonZeroU8::new(days_in_month(year.get(), month.get())).map_or(Self::FIRST, Self)
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.get()
    }
}

/// Day of the week in Sunday-first order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    pub const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// 0 for Sunday through 6 for Saturday
    pub const fn num_days_from_sunday(self) -> u8 {
        self as u8
    }

    /// Two-letter column label
    pub const fn label(self) -> &'static str {
        WEEKDAY_LABELS[self as usize]
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(weekday: chrono::Weekday) -> Self {
        Self::ALL[weekday.num_days_from_sunday() as usize]
    }
}

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Weekday of a proleptic Gregorian date, or `None` if the date does not exist
pub fn weekday(year: u16, month: u8, day: u8) -> Option<Weekday> {
    NaiveDate::from_ymd_opt(i32::from(year), u32::from(month), u32::from(day)).map(|d| d.weekday().into())
}
