use crate::{BoundaryPolicy, CalendarDate, Clock, GridCell, MonthView, PickerConfig, YearMonth};

/// Whether the calendar popover is showing.
///
/// Owned by the form that hosts the picker. Outside-click handling lives in
/// the presentation layer and calls [`Popover::close`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Popover {
    #[default]
    Closed,
    Open,
}

impl Popover {
    pub fn open(&mut self) {
        *self = Self::Open;
    }

    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    pub fn toggle(&mut self) {
        *self = match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        };
    }

    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// Render state of one day button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayCell {
    pub date:        CalendarDate,
    pub is_selected: bool,
    pub is_today:    bool,
    /// Before the minimum date; shown greyed out and ignores clicks
    pub is_disabled: bool,
}

/// State of the date picker: which month is shown and which day is chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePicker {
    policy:    BoundaryPolicy,
    today:     CalendarDate,
    displayed: YearMonth,
    selected:  Option<CalendarDate>,
}

impl DatePicker {
    /// Opens on the selected date's month, or on today's month if nothing is
    /// selected. `minimum` defaults to today.
    pub fn new(selected: Option<CalendarDate>, minimum: Option<CalendarDate>, clock: &dyn Clock) -> Self {
        let today = clock.today();
        let policy = BoundaryPolicy::new(minimum.unwrap_or(today));
        Self::with_policy(policy, selected, today)
    }

    pub fn with_policy(policy: BoundaryPolicy, selected: Option<CalendarDate>, today: CalendarDate) -> Self {
        Self {
            policy,
            today,
            displayed: selected.unwrap_or(today).year_month(),
            selected,
        }
    }

    pub fn from_config(config: &PickerConfig, selected: Option<CalendarDate>, clock: &dyn Clock) -> Self {
        let today = clock.today();
        let mut picker = Self::with_policy(config.policy(today), selected, today);
        if let Some(month) = config.initial_month {
            picker.displayed = month;
        }
        picker
    }

    pub const fn policy(&self) -> &BoundaryPolicy {
        &self.policy
    }

    pub const fn displayed_month(&self) -> YearMonth {
        self.displayed
    }

    pub const fn selected_date(&self) -> Option<CalendarDate> {
        self.selected
    }

    pub const fn today(&self) -> CalendarDate {
        self.today
    }

    /// Grid for the displayed month, rebuilt on every call
    pub fn month_view(&self) -> MonthView {
        MonthView::build(self.displayed)
    }

    pub fn can_navigate_prev(&self) -> bool {
        self.policy.can_navigate_to_prior_month(self.displayed)
    }

    /// Steps back one month unless that month starts before the minimum's
    /// month. Returns whether the displayed month changed.
    pub fn navigate_prev(&mut self) -> bool {
        if !self.can_navigate_prev() {
            log::trace!("navigation before {} blocked by minimum {}", self.displayed, self.policy.minimum());
            return false;
        }
        self.step(self.displayed.prev())
    }

    /// Steps forward one month. Only fails past December 9999.
    pub fn navigate_next(&mut self) -> bool {
        self.step(self.displayed.next())
    }

    fn step(&mut self, target: Option<YearMonth>) -> bool {
        match target {
            Some(month) => {
                log::debug!("displayed month {} -> {month}", self.displayed);
                self.displayed = month;
                true
            },
            None => {
                log::trace!("no representable month next to {}", self.displayed);
                false
            },
        }
    }

    /// Selects `date` if the boundary allows it.
    ///
    /// Returns the `YYYY-MM-DD` text to hand to the caller's select handler,
    /// or `None` with the selection left untouched when `date` is before the
    /// minimum.
    pub fn select_date(&mut self, date: CalendarDate) -> Option<String> {
        if self.policy.is_past(date) {
            log::trace!("rejected selection {date}: before minimum {}", self.policy.minimum());
            return None;
        }
        log::debug!("selected {date}");
        self.selected = Some(date);
        Some(date.to_string())
    }

    /// Like [`DatePicker::select_date`] for text input; unparsable text is
    /// ignored.
    pub fn select_str(&mut self, input: &str) -> Option<String> {
        CalendarDate::from_input(Some(input)).and_then(|date| self.select_date(date))
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn day_cell(&self, date: CalendarDate) -> DayCell {
        DayCell {
            date,
            is_selected: self.selected == Some(date),
            is_today: date == self.today,
            is_disabled: self.policy.is_past(date),
        }
    }

    /// Grid cells of the displayed month with per-day render state;
    /// `None` marks an alignment blank.
    pub fn cells(&self) -> Vec<Option<DayCell>> {
        self.month_view()
            .cells()
            .map(|cell| match cell {
                GridCell::Blank => None,
                GridCell::Day(date) => Some(self.day_cell(date)),
            })
            .collect()
    }
}
