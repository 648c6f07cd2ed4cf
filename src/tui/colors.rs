//! Color constants for the terminal user interface.

use ratatui::style::Color;

use crate::fields::{Priority, Status};

// Badge colors follow the priority/status legend used across the
// dashboard pages.

/// Header and accent blue.
pub const ACCENT_BLUE: Color = Color::Rgb(31, 119, 180);
/// Used for High priority badges.
pub const ORANGE: Color = Color::Rgb(255, 165, 0);

/// Badge color for a priority level.
pub fn priority_color(p: Priority) -> Color {
    match p {
        Priority::Low => Color::Green,
        Priority::Medium => Color::Yellow,
        Priority::High => ORANGE,
        Priority::Urgent => Color::Red,
    }
}

/// Badge color for a task status.
pub fn status_color(s: Status) -> Color {
    match s {
        Status::Pending => Color::Yellow,
        Status::InProgress => Color::Cyan,
        Status::Completed => Color::Green,
    }
}
