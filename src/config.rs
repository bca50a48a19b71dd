use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{BoundaryPolicy, CalendarDate, YearMonth};

/// Error type for loading picker configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid picker config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Earliest selectable date, resolved against the clock when a picker opens.
///
/// Serialized as `"today"`, `"tomorrow"` or `{"fixed": "YYYY-MM-DD"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MinimumDate {
    #[default]
    Today,
    Tomorrow,
    Fixed(CalendarDate),
}

impl MinimumDate {
    pub fn resolve(self, today: CalendarDate) -> CalendarDate {
        match self {
            Self::Today => today,
            Self::Tomorrow => today.succ().unwrap_or(today),
            Self::Fixed(date) => date,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PickerConfig {
    #[serde(default)]
    pub minimum:       MinimumDate,
    /// Month to open on instead of the selected date's (or today's) month
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_month: Option<YearMonth>,
}

impl PickerConfig {
    /// New tasks are due tomorrow at the earliest
    pub const fn for_new_task() -> Self {
        Self {
            minimum:       MinimumDate::Tomorrow,
            initial_month: None,
        }
    }

    /// Existing tasks may be moved to today
    pub const fn for_task_edit() -> Self {
        Self {
            minimum:       MinimumDate::Today,
            initial_month: None,
        }
    }

    pub fn policy(&self, today: CalendarDate) -> BoundaryPolicy {
        BoundaryPolicy::new(self.minimum.resolve(today))
    }

    /// # Errors
    /// Returns `ConfigError::Json` on malformed JSON, unknown keys or invalid dates.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// # Errors
    /// Returns `ConfigError::Io` if the file cannot be read, otherwise as
    /// [`PickerConfig::from_json`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_json(&raw)?;
        log::debug!("loaded picker config from {}: {config:?}", path.display());
        Ok(config)
    }
}
