/// Smallest representable year
pub const MIN_YEAR: u16 = 1;

/// Largest representable year; `YYYY-MM-DD` has room for four year digits
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of every month
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days in each month of a common year, 1-indexed
pub const DAYS_IN_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
pub(crate) const CENTURY_CYCLE: u16 = 100;
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Number of columns in the calendar grid
pub const DAYS_PER_WEEK: usize = 7;

/// Column headers, Sunday first
pub const WEEKDAY_LABELS: [&str; DAYS_PER_WEEK] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// English month names, 1-indexed
pub const MONTH_NAMES: [&str; 13] = [
    "",
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Date component separator (`YYYY-MM-DD`)
pub const DATE_SEPARATOR: char = '-';

/// Digit widths of the `YYYY-MM-DD` components
pub(crate) const YEAR_DIGITS: usize = 4;
pub(crate) const MONTH_DIGITS: usize = 2;
pub(crate) const DAY_DIGITS: usize = 2;

/// Task title length bounds (trimmed, in characters)
pub const TASK_TITLE_MIN_LEN: usize = 3;
pub const TASK_TITLE_MAX_LEN: usize = 100;

/// Task description upper bound (trimmed, in characters)
pub const TASK_DESCRIPTION_MAX_LEN: usize = 500;

/// Minimum number of digits in a phone number
pub const PHONE_MIN_DIGITS: usize = 10;

/// Days between today and the due date a new task form starts with
pub const DEFAULT_DUE_IN_DAYS: u32 = 7;
