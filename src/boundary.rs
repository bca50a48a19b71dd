use serde::{Deserialize, Serialize};

use crate::{CalendarDate, Clock, YearMonth};

/// True iff `date` falls strictly before `minimum`.
///
/// The minimum itself is selectable. This is the only comparison the picker
/// and the form validators use, so the two cannot disagree.
pub fn is_past_boundary(date: CalendarDate, minimum: CalendarDate) -> bool {
    date < minimum
}

/// True iff stepping back from `current` lands on a month that does not start
/// before the month containing `minimum`.
pub fn can_navigate_to_prior_month(current: YearMonth, minimum: CalendarDate) -> bool {
    current
        .prev()
        .is_some_and(|prior| prior >= minimum.year_month())
}

/// Which dates a picker or form accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoundaryPolicy {
    minimum_selectable_date: CalendarDate,
}

impl BoundaryPolicy {
    pub const fn new(minimum_selectable_date: CalendarDate) -> Self {
        Self {
            minimum_selectable_date,
        }
    }

    /// Today and later are selectable
    pub fn from_today(clock: &dyn Clock) -> Self {
        Self::new(clock.today())
    }

    /// Only dates after today are selectable
    pub fn from_tomorrow(clock: &dyn Clock) -> Self {
        let today = clock.today();
        Self::new(today.succ().unwrap_or(today))
    }

    pub const fn minimum(&self) -> CalendarDate {
        self.minimum_selectable_date
    }

    pub fn is_past(&self, date: CalendarDate) -> bool {
        is_past_boundary(date, self.minimum_selectable_date)
    }

    pub fn is_selectable(&self, date: CalendarDate) -> bool {
        !self.is_past(date)
    }

    pub fn can_navigate_to_prior_month(&self, current: YearMonth) -> bool {
        can_navigate_to_prior_month(current, self.minimum_selectable_date)
    }
}
