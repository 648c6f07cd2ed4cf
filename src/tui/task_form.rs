//! Task creation form for the terminal user interface.

use crate::fields::{Department, Priority};
use crate::store::{default_due_date, parse_due_input};
use crate::task::TaskDraft;
use crate::tui::input::InputField;

/// Form fields in traversal order.
#[derive(Clone, Copy, PartialEq)]
pub enum FormField {
    Title,
    Description,
    Department,
    Priority,
    Due,
}

impl FormField {
    /// All fields in traversal order.
    pub const ALL: [FormField; 5] = [
        FormField::Title,
        FormField::Description,
        FormField::Department,
        FormField::Priority,
        FormField::Due,
    ];
}

/// State for the task creation form.
///
/// Department and priority are selectors cycled with Left/Right; the rest
/// are free-text fields. The due date is prefilled a week out, matching the
/// default the creation page has always offered.
pub struct TaskForm {
    pub title: InputField,
    pub description: InputField,
    pub due: InputField,
    pub department_idx: usize,
    pub priority_idx: usize,
    pub field: FormField,
}

impl TaskForm {
    /// Create an empty form with the default due date.
    pub fn new() -> Self {
        TaskForm {
            title: InputField::new(),
            description: InputField::new(),
            due: InputField::with_value(&default_due_date().format("%Y-%m-%d").to_string()),
            department_idx: 0,
            priority_idx: 0,
            field: FormField::Title,
        }
    }

    /// Currently selected department.
    pub fn department(&self) -> Department {
        Department::ALL[self.department_idx]
    }

    /// Currently selected priority.
    pub fn priority(&self) -> Priority {
        Priority::ALL[self.priority_idx]
    }

    /// Move to the next field, wrapping around.
    pub fn next_field(&mut self) {
        let idx = FormField::ALL.iter().position(|&f| f == self.field).unwrap_or(0);
        self.field = FormField::ALL[(idx + 1) % FormField::ALL.len()];
    }

    /// Move to the previous field, wrapping around.
    pub fn prev_field(&mut self) {
        let idx = FormField::ALL.iter().position(|&f| f == self.field).unwrap_or(0);
        self.field = FormField::ALL[(idx + FormField::ALL.len() - 1) % FormField::ALL.len()];
    }

    /// The active free-text input, if the active field is one.
    pub fn active_input_mut(&mut self) -> Option<&mut InputField> {
        match self.field {
            FormField::Title => Some(&mut self.title),
            FormField::Description => Some(&mut self.description),
            FormField::Due => Some(&mut self.due),
            FormField::Department | FormField::Priority => None,
        }
    }

    /// Step the active selector field by `step` positions, wrapping.
    pub fn cycle_selector(&mut self, step: isize) {
        match self.field {
            FormField::Department => {
                self.department_idx = step_index(self.department_idx, Department::ALL.len(), step);
            }
            FormField::Priority => {
                self.priority_idx = step_index(self.priority_idx, Priority::ALL.len(), step);
            }
            _ => {}
        }
    }

    /// Build a draft from the current values.
    ///
    /// An unparseable due date is an inline error; title validation is the
    /// store's job so empty-title rejection goes through the same path as
    /// any other caller.
    pub fn to_draft(&self) -> Result<TaskDraft, String> {
        let due_text = self.due.value.trim();
        let due = if due_text.is_empty() {
            None
        } else {
            match parse_due_input(due_text) {
                Some(d) => Some(d),
                None => {
                    return Err(format!(
                        "Unrecognised due date '{due_text}'. Use YYYY-MM-DD, 'today', 'tomorrow', or 'in Nd'."
                    ));
                }
            }
        };

        let description = self.description.value.trim();
        Ok(TaskDraft {
            title: self.title.value.clone(),
            description: (!description.is_empty()).then(|| self.description.value.clone()),
            department: self.department(),
            priority: self.priority(),
            due,
        })
    }
}

fn step_index(idx: usize, len: usize, step: isize) -> usize {
    (idx as isize + step).rem_euclid(len as isize) as usize
}
