use serde::{Deserialize, Serialize};

use crate::{
    BoundaryPolicy, CalendarDate, Clock, DEFAULT_DUE_IN_DAYS, DatePicker, FieldError, PickerConfig, Popover,
    prelude::*, validate_due_date, validate_required, validate_task_description, validate_task_title,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    #[display(fmt = "To Do")]
    Todo,
    #[serde(rename = "in-progress")]
    #[display(fmt = "In Progress")]
    InProgress,
    #[serde(alias = "in-review")]
    #[display(fmt = "In Review")]
    Review,
    #[display(fmt = "Completed")]
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Manager,
    Member,
}

impl Role {
    pub const fn can_edit_tasks(self) -> bool {
        matches!(self, Self::Admin | Self::Manager)
    }
}

/// Whether the task modal shows details or the edit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalMode {
    #[default]
    Viewing,
    Editing,
}

impl ModalMode {
    /// Switches to editing if `role` may edit tasks. Returns whether the
    /// modal is now editing.
    pub fn begin_edit(&mut self, role: Role) -> bool {
        if role.can_edit_tasks() {
            *self = Self::Editing;
        } else {
            log::trace!("{role:?} may not edit tasks");
        }
        self.is_editing()
    }

    /// Back to viewing after a save or cancel
    pub fn finish_edit(&mut self) {
        *self = Self::Viewing;
    }

    pub const fn is_editing(self) -> bool {
        matches!(self, Self::Editing)
    }
}

/// Raw task form input, exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title:       String,
    pub description: String,
    pub status:      TaskStatus,
    pub priority:    TaskPriority,
    pub assignee_id: Option<String>,
    /// `YYYY-MM-DD` as chosen in the picker
    pub due_date:    Option<String>,
}

/// A validated task, ready to hand to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    pub title:       String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status:      TaskStatus,
    pub priority:    TaskPriority,
    pub assignee_id: String,
    pub due_date:    CalendarDate,
}

/// Per-field messages from a failed submit.
#[derive(Debug, Clone, PartialEq, Eq, Default, thiserror::Error)]
#[error("Please fix the errors in the form")]
pub struct FormErrors {
    pub title:       Option<FieldError>,
    pub description: Option<FieldError>,
    pub assignee:    Option<FieldError>,
    pub due_date:    Option<FieldError>,
}

impl FormErrors {
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.assignee.is_none() && self.due_date.is_none()
    }
}

impl TaskDraft {
    /// Blank draft due `DEFAULT_DUE_IN_DAYS` after `today`
    pub fn due_after(today: CalendarDate) -> Self {
        Self {
            due_date: today.add_days(DEFAULT_DUE_IN_DAYS).map(|d| d.to_string()),
            ..Self::default()
        }
    }

    /// Validates every field and collects one message per failing field.
    ///
    /// # Errors
    /// Returns `FormErrors` if any field fails.
    pub fn validate(&self, policy: &BoundaryPolicy) -> Result<NewTask, FormErrors> {
        let title = validate_task_title(Some(self.title.as_str()));
        let description = validate_task_description(Some(self.description.as_str()));
        let assignee = validate_required(self.assignee_id.as_deref(), "Assignee");
        let due_date = validate_due_date(self.due_date.as_deref(), policy);

        match (title, description, assignee, due_date) {
            (Ok(title), Ok(description), Ok(assignee_id), Ok(due_date)) => Ok(NewTask {
                title,
                description: Some(description).filter(|d| !d.is_empty()),
                status: self.status,
                priority: self.priority,
                assignee_id,
                due_date,
            }),
            (title, description, assignee, due_date) => Err(FormErrors {
                title:       title.err(),
                description: description.err(),
                assignee:    assignee.err(),
                due_date:    due_date.err(),
            }),
        }
    }
}

/// Create/edit task form with its due-date picker.
///
/// The picker's boundary policy is also the one used at submit, so the
/// calendar and the validator always agree.
#[derive(Debug, Clone)]
pub struct TaskForm {
    draft:   TaskDraft,
    picker:  DatePicker,
    popover: Popover,
    errors:  FormErrors,
}

impl TaskForm {
    /// Blank form for a new task, due a week from today. Due dates start
    /// tomorrow.
    pub fn create(clock: &dyn Clock) -> Self {
        Self::with_config(TaskDraft::due_after(clock.today()), &PickerConfig::for_new_task(), clock)
    }

    /// Form prefilled from an existing task; today is allowed.
    pub fn edit(draft: TaskDraft, clock: &dyn Clock) -> Self {
        Self::with_config(draft, &PickerConfig::for_task_edit(), clock)
    }

    pub fn with_config(draft: TaskDraft, config: &PickerConfig, clock: &dyn Clock) -> Self {
        let selected = CalendarDate::from_input(draft.due_date.as_deref());
        Self {
            picker: DatePicker::from_config(config, selected, clock),
            draft,
            popover: Popover::Closed,
            errors: FormErrors::default(),
        }
    }

    pub const fn draft(&self) -> &TaskDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut TaskDraft {
        &mut self.draft
    }

    pub const fn picker(&self) -> &DatePicker {
        &self.picker
    }

    pub fn picker_mut(&mut self) -> &mut DatePicker {
        &mut self.picker
    }

    pub const fn popover(&self) -> Popover {
        self.popover
    }

    pub const fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn toggle_calendar(&mut self) {
        self.popover.toggle();
    }

    /// Called by the presentation layer on an outside click or unmount
    pub fn close_calendar(&mut self) {
        self.popover.close();
    }

    /// Applies a click on a calendar day.
    ///
    /// An accepted date is written into the draft, closes the calendar and
    /// clears any due-date message. A date before the minimum changes
    /// nothing.
    pub fn choose_date(&mut self, date: CalendarDate) -> bool {
        let Some(text) = self.picker.select_date(date) else {
            return false;
        };
        self.draft.due_date = Some(text);
        self.popover.close();
        self.errors.due_date = None;
        true
    }

    /// Validates the draft against the picker's policy and keeps the
    /// resulting messages for display.
    ///
    /// # Errors
    /// Returns the collected `FormErrors`.
    pub fn submit(&mut self) -> Result<NewTask, FormErrors> {
        match self.draft.validate(self.picker.policy()) {
            Ok(task) => {
                self.errors = FormErrors::default();
                log::debug!("task form valid: {:?} due {}", task.title, task.due_date);
                Ok(task)
            },
            Err(errors) => {
                log::debug!("task form rejected: {errors:?}");
                self.errors = errors.clone();
                Err(errors)
            },
        }
    }

    /// Clears the form after the backend accepted the task. The due date
    /// goes back to a week from today.
    pub fn reset(&mut self) {
        self.draft = TaskDraft::due_after(self.picker.today());
        self.errors = FormErrors::default();
        self.picker.clear_selection();
        if let Some(due) = CalendarDate::from_input(self.draft.due_date.as_deref()) {
            self.picker.select_date(due);
        }
        self.popover.close();
    }
}
