//! Enumerations for TUI state management.

/// Top-level dashboard pages, in tab order.
#[derive(Clone, Copy, PartialEq)]
pub enum Page {
    Dashboard,
    Tasks,
    Assistant,
    Analytics,
    Settings,
}

impl Page {
    /// All pages in tab order.
    pub const ALL: [Page; 5] = [
        Page::Dashboard,
        Page::Tasks,
        Page::Assistant,
        Page::Analytics,
        Page::Settings,
    ];

    /// Tab label for this page.
    pub fn title(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Tasks => "Tasks",
            Page::Assistant => "Assistant",
            Page::Analytics => "Analytics",
            Page::Settings => "Settings",
        }
    }

    /// The page after this one, wrapping around.
    pub fn next(self) -> Page {
        let idx = Page::ALL.iter().position(|&p| p == self).unwrap_or(0);
        Page::ALL[(idx + 1) % Page::ALL.len()]
    }

    /// The page before this one, wrapping around.
    pub fn prev(self) -> Page {
        let idx = Page::ALL.iter().position(|&p| p == self).unwrap_or(0);
        Page::ALL[(idx + Page::ALL.len() - 1) % Page::ALL.len()]
    }
}

/// Application state for the terminal user interface.
#[derive(Clone, Copy, PartialEq)]
pub enum AppState {
    Browse,
    NewTask,
    Confirm,
    Help,
}

/// Input mode for text entry fields.
#[derive(Clone, Copy, PartialEq)]
pub enum InputMode {
    None,
    Text,
}

/// Destructive action awaiting confirmation.
#[derive(Clone, Copy, PartialEq)]
pub enum ConfirmAction {
    ResetTasks,
    ClearChat,
}

impl ConfirmAction {
    /// Question shown in the confirm dialog.
    pub fn prompt(self) -> &'static str {
        match self {
            ConfirmAction::ResetTasks => "Reset all tasks for this session?",
            ConfirmAction::ClearChat => "Clear the chat history?",
        }
    }
}

/// Advance an optional exact-match filter one step:
/// All -> first value -> ... -> last value -> All.
pub fn cycle_filter<T: Copy + PartialEq>(values: &[T], current: Option<T>) -> Option<T> {
    match current {
        None => values.first().copied(),
        Some(v) => match values.iter().position(|&x| x == v) {
            Some(i) if i + 1 < values.len() => Some(values[i + 1]),
            _ => None,
        },
    }
}
