//! Task data structure and related functionality.
//!
//! This module defines the core `Task` struct representing a single unit of
//! departmental work, plus the `TaskDraft` input used to create one.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::fields::*;

/// A unit of work tracked by department, priority, and status.
///
/// The creation timestamp is set once and never changes; after creation the
/// only field the application mutates is `status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    pub department: Department,
    pub priority: Priority,
    pub status: Status,
    pub due: Option<NaiveDate>,
    pub created_at_utc: i64,
}

/// User-supplied values for creating a task.
///
/// Identifier, status, and creation timestamp are assigned by the store.
#[derive(Debug, Clone)]
pub struct TaskDraft {
    pub title: String,
    pub description: Option<String>,
    pub department: Department,
    pub priority: Priority,
    pub due: Option<NaiveDate>,
}
