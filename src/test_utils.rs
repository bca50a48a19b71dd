//! Constructors for tests, panicking on invalid input.

use crate::{CalendarDate, YearMonth};

pub fn date(year: u16, month: u8, day: u8) -> CalendarDate {
    CalendarDate::new(year, month, day).unwrap_or_else(|e| panic!("bad test date: {e}"))
}

pub fn ym(year: u16, month: u8) -> YearMonth {
    YearMonth::new(year, month).unwrap_or_else(|e| panic!("bad test month: {e}"))
}
