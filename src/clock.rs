use chrono::Datelike;

use crate::CalendarDate;

/// Source of "today" as a local calendar date.
pub trait Clock {
    fn today(&self) -> CalendarDate;
}

/// Reads the local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> CalendarDate {
        let local = chrono::Local::now().date_naive();
        CalendarDate::try_from(local).unwrap_or_else(|e| {
            log::warn!("local date {local} is outside the supported range: {e}");
            if local.year() < 1 {
                CalendarDate::MIN
            } else {
                CalendarDate::max_value()
            }
        })
    }
}

/// Always returns the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(CalendarDate);

impl FixedClock {
    pub const fn new(today: CalendarDate) -> Self {
        Self(today)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> CalendarDate {
        self.0
    }
}
