//! Field-level validators for the task and profile forms.
//!
//! Every validator takes the raw field value (`None` when the field was never
//! filled in) and returns the normalized value or a [`FieldError`] whose
//! `Display` text is shown inline under the field.

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    BoundaryPolicy, CalendarDate, PHONE_MIN_DIGITS, TASK_DESCRIPTION_MAX_LEN, TASK_TITLE_MAX_LEN,
    TASK_TITLE_MIN_LEN,
};

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s\-']+$").expect("name pattern is valid"));

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9\s+\-()]+$").expect("phone pattern is valid"));

static DEPARTMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9\s\-]+$").expect("department pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("{field} is required")]
    Required { field: String },

    #[error("{field} must be at least {min} character(s)")]
    TooShort { field: String, min: usize },

    #[error("Task title must be at least {0} characters")]
    TitleTooShort(usize),

    #[error("{field} must be less than {max} characters")]
    TooLong { field: String, max: usize },

    #[error("{field} can only contain letters, spaces, hyphens, and apostrophes")]
    InvalidName { field: String },

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Phone can only contain numbers, spaces, +, -, (, )")]
    InvalidPhoneCharacters,

    #[error("Phone number must have at least {0} digits")]
    PhoneTooShort(usize),

    #[error("Department can only contain letters, numbers, spaces, and hyphens")]
    InvalidDepartment,

    #[error("Please pick a date")]
    DateMissing,

    #[error("Due date cannot be in the past")]
    DateInPast,
}

impl FieldError {
    fn required(field: &str) -> Self {
        Self::Required {
            field: field.to_owned(),
        }
    }
}

/// `None` and `""` both count as "never filled in".
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Required text with trimmed length in `min..=max`.
///
/// Fields whose label mentions "name" are further limited to letters, spaces,
/// hyphens and apostrophes.
///
/// # Errors
/// `Required`, `TooShort`, `TooLong` or `InvalidName`.
pub fn validate_string(value: Option<&str>, field: &str, min: usize, max: usize) -> Result<String, FieldError> {
    let value = present(value).ok_or_else(|| FieldError::required(field))?;
    let trimmed = value.trim();
    let len = char_len(trimmed);

    if len < min {
        return Err(FieldError::TooShort {
            field: field.to_owned(),
            min,
        });
    }
    if len > max {
        return Err(FieldError::TooLong {
            field: field.to_owned(),
            max,
        });
    }
    if field.to_lowercase().contains("name") && !NAME_RE.is_match(trimmed) {
        return Err(FieldError::InvalidName {
            field: field.to_owned(),
        });
    }

    Ok(trimmed.to_owned())
}

/// Required address, returned trimmed and lowercased.
///
/// # Errors
/// `Required` or `InvalidEmail`.
pub fn validate_email(email: Option<&str>) -> Result<String, FieldError> {
    let email = present(email).ok_or_else(|| FieldError::required("Email"))?;
    let normalized = email.trim().to_lowercase();
    if !EMAIL_RE.is_match(&normalized) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(normalized)
}

/// Optional phone number; blank input yields an empty string.
///
/// # Errors
/// `InvalidPhoneCharacters` or `PhoneTooShort`.
pub fn validate_phone(phone: Option<&str>) -> Result<String, FieldError> {
    let trimmed = phone.map_or("", str::trim);
    if trimmed.is_empty() {
        return Ok(String::new());
    }
    if !PHONE_RE.is_match(trimmed) {
        return Err(FieldError::InvalidPhoneCharacters);
    }
    if trimmed.chars().filter(char::is_ascii_digit).count() < PHONE_MIN_DIGITS {
        return Err(FieldError::PhoneTooShort(PHONE_MIN_DIGITS));
    }
    Ok(trimmed.to_owned())
}

/// # Errors
/// `Required`, `TitleTooShort` or `TooLong`.
pub fn validate_task_title(title: Option<&str>) -> Result<String, FieldError> {
    let title = present(title).ok_or_else(|| FieldError::required("Task title"))?;
    let trimmed = title.trim();
    let len = char_len(trimmed);

    if len < TASK_TITLE_MIN_LEN {
        return Err(FieldError::TitleTooShort(TASK_TITLE_MIN_LEN));
    }
    if len > TASK_TITLE_MAX_LEN {
        return Err(FieldError::TooLong {
            field: "Task title".to_owned(),
            max:   TASK_TITLE_MAX_LEN,
        });
    }
    Ok(trimmed.to_owned())
}

/// Optional; blank input yields an empty string.
///
/// # Errors
/// `TooLong` past the description limit.
pub fn validate_task_description(description: Option<&str>) -> Result<String, FieldError> {
    let trimmed = description.map_or("", str::trim);
    if char_len(trimmed) > TASK_DESCRIPTION_MAX_LEN {
        return Err(FieldError::TooLong {
            field: "Description".to_owned(),
            max:   TASK_DESCRIPTION_MAX_LEN,
        });
    }
    Ok(trimmed.to_owned())
}

/// Any non-blank value; returned as given.
///
/// # Errors
/// `Required` for missing or whitespace-only input.
pub fn validate_required(value: Option<&str>, field: &str) -> Result<String, FieldError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.to_owned()),
        _ => Err(FieldError::required(field)),
    }
}

/// Optional; letters, digits, spaces and hyphens.
///
/// # Errors
/// `InvalidDepartment`.
pub fn validate_department(department: Option<&str>) -> Result<String, FieldError> {
    let trimmed = department.map_or("", str::trim);
    if trimmed.is_empty() {
        return Ok(String::new());
    }
    if !DEPARTMENT_RE.is_match(trimmed) {
        return Err(FieldError::InvalidDepartment);
    }
    Ok(trimmed.to_owned())
}

/// Submit-time check of a due date.
///
/// Runs the same boundary test as the picker, so a date the picker would
/// have greyed out is rejected here too. Text that is not a `YYYY-MM-DD`
/// date counts as no date at all.
///
/// # Errors
/// `DateMissing` or `DateInPast`.
pub fn validate_due_date(input: Option<&str>, policy: &BoundaryPolicy) -> Result<CalendarDate, FieldError> {
    let date = CalendarDate::from_input(input).ok_or(FieldError::DateMissing)?;
    if policy.is_past(date) {
        return Err(FieldError::DateInPast);
    }
    Ok(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_validate_string_cases() {
        struct TestCase {
            value:    Option<&'static str>,
            field:    &'static str,
            expected: Result<&'static str, &'static str>,
        }

        let cases = [
            TestCase {
                value:    None,
                field:    "Full Name",
                expected: Err("Full Name is required"),
            },
            TestCase {
                value:    Some(""),
                field:    "Full Name",
                expected: Err("Full Name is required"),
            },
            TestCase {
                value:    Some("  A "),
                field:    "Full Name",
                expected: Err("Full Name must be at least 2 character(s)"),
            },
            TestCase {
                value:    Some("Mary-Jane O'Neil"),
                field:    "Full Name",
                expected: Ok("Mary-Jane O'Neil"),
            },
            TestCase {
                value:    Some("R2-D2"),
                field:    "Full Name",
                expected: Err("Full Name can only contain letters, spaces, hyphens, and apostrophes"),
            },
            TestCase {
                value:    Some("R2-D2"),
                field:    "Nickname",
                expected: Err("Nickname can only contain letters, spaces, hyphens, and apostrophes"),
            },
            TestCase {
                value:    Some("  R2-D2 "),
                field:    "Team",
                expected: Ok("R2-D2"),
            },
        ];

        for case in &cases {
            let result = validate_string(case.value, case.field, 2, 50);
            match case.expected {
                Ok(expected) => assert_eq!(result.as_deref(), Ok(expected), "{:?}", case.value),
                Err(message) => assert_eq!(result.unwrap_err().to_string(), message, "{:?}", case.value),
            }
        }
    }

    #[test]
    fn test_validate_string_too_long() {
        let long = "a".repeat(51);
        let err = validate_string(Some(long.as_str()), "Full Name", 2, 50).unwrap_err();
        assert_eq!(err.to_string(), "Full Name must be less than 50 characters");
        assert!(validate_string(Some("a".repeat(50).as_str()), "Full Name", 2, 50).is_ok());
    }

    #[test]
    fn test_validate_email() {
        assert_eq!(validate_email(Some("  Ada@Example.COM ")), Ok("ada@example.com".to_owned()));
        assert_eq!(validate_email(None).unwrap_err().to_string(), "Email is required");
        assert_eq!(validate_email(Some("")).unwrap_err().to_string(), "Email is required");
        for bad in ["ada", "ada@example", "ada @example.com", "@example.com", "ada@@example.com"] {
            assert_eq!(validate_email(Some(bad)), Err(FieldError::InvalidEmail), "{bad}");
        }
    }

    #[test]
    fn test_validate_phone() {
        assert_eq!(validate_phone(None), Ok(String::new()));
        assert_eq!(validate_phone(Some("   ")), Ok(String::new()));
        assert_eq!(validate_phone(Some(" +1 (555) 123-4567 ")), Ok("+1 (555) 123-4567".to_owned()));
        assert_eq!(validate_phone(Some("555-CALL-NOW")), Err(FieldError::InvalidPhoneCharacters));
        assert_eq!(
            validate_phone(Some("555-1234")).unwrap_err().to_string(),
            "Phone number must have at least 10 digits"
        );
    }

    #[test]
    fn test_validate_phone_rejects_non_ascii_digits() {
        // Arabic-Indic and fullwidth digits
        assert_eq!(validate_phone(Some("٠١٢٣٤٥٦٧٨٩")), Err(FieldError::InvalidPhoneCharacters));
        assert_eq!(validate_phone(Some("５５５１２３４５６７")), Err(FieldError::InvalidPhoneCharacters));
    }

    #[test]
    fn test_validate_task_title() {
        assert_eq!(validate_task_title(Some("  Ship it ")), Ok("Ship it".to_owned()));
        assert_eq!(validate_task_title(None).unwrap_err().to_string(), "Task title is required");
        assert_eq!(
            validate_task_title(Some(" ab ")).unwrap_err().to_string(),
            "Task title must be at least 3 characters"
        );
        assert!(validate_task_title(Some("x".repeat(100).as_str())).is_ok());
        assert_eq!(
            validate_task_title(Some("x".repeat(101).as_str())).unwrap_err().to_string(),
            "Task title must be less than 100 characters"
        );
    }

    #[test]
    fn test_validate_task_description() {
        assert_eq!(validate_task_description(None), Ok(String::new()));
        assert_eq!(validate_task_description(Some("  notes ")), Ok("notes".to_owned()));
        assert!(validate_task_description(Some("d".repeat(500).as_str())).is_ok());
        assert_eq!(
            validate_task_description(Some("d".repeat(501).as_str())).unwrap_err().to_string(),
            "Description must be less than 500 characters"
        );
    }

    #[test]
    fn test_validate_required() {
        assert_eq!(validate_required(Some(" x "), "Assignee"), Ok(" x ".to_owned()));
        assert_eq!(validate_required(Some("  "), "Assignee").unwrap_err().to_string(), "Assignee is required");
        assert_eq!(validate_required(None, "Assignee").unwrap_err().to_string(), "Assignee is required");
    }

    #[test]
    fn test_validate_department() {
        assert_eq!(validate_department(None), Ok(String::new()));
        assert_eq!(validate_department(Some(" R&D ")), Err(FieldError::InvalidDepartment));
        assert_eq!(validate_department(Some(" Platform-2 ")), Ok("Platform-2".to_owned()));
    }

    #[test]
    fn test_validate_due_date() {
        let policy = BoundaryPolicy::new(date(2025, 6, 10));

        assert_eq!(validate_due_date(Some("2025-06-10"), &policy), Ok(date(2025, 6, 10)));
        assert_eq!(validate_due_date(Some("2025-06-09"), &policy), Err(FieldError::DateInPast));
        assert_eq!(validate_due_date(None, &policy), Err(FieldError::DateMissing));
        assert_eq!(validate_due_date(Some(""), &policy), Err(FieldError::DateMissing));
        assert_eq!(validate_due_date(Some("tomorrow"), &policy), Err(FieldError::DateMissing));
        assert_eq!(FieldError::DateMissing.to_string(), "Please pick a date");
        assert_eq!(FieldError::DateInPast.to_string(), "Due date cannot be in the past");
    }

    #[test]
    fn test_due_date_agrees_with_picker_boundary() {
        let policy = BoundaryPolicy::new(date(2025, 6, 10));
        let mut day = date(2025, 5, 1);
        while day <= date(2025, 7, 31) {
            let accepted = validate_due_date(Some(day.to_string().as_str()), &policy).is_ok();
            assert_eq!(accepted, policy.is_selectable(day), "{day}");
            day = day.succ().unwrap();
        }
    }
}
