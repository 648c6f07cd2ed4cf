//! Session task store and utility functions.
//!
//! This module provides the `TaskStore` struct holding the authoritative
//! ordered collection of tasks for one session, along with the filtering and
//! aggregation queries the dashboard is built on, and various helpers for
//! date parsing, formatting, and table output.
//!
//! The store owns its records exclusively: queries hand out shared
//! references or copies, and the only mutations are `create`, `complete`,
//! and `reset_all`.

use std::collections::BTreeMap;

use chrono::{Duration, Local, NaiveDate, TimeZone, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::fields::*;
use crate::task::{Task, TaskDraft};

/// Errors surfaced by store mutations. Both are non-fatal: the store is
/// left unchanged whenever one is returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("task title must not be empty")]
    EmptyTitle,

    #[error("no task with id {0}")]
    NotFound(u64),
}

/// Per-department aggregate counts. `pending` counts everything that is not
/// Completed, so In Progress tasks land there.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct DeptCounts {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

impl DeptCounts {
    /// Completion rate as a percentage, rounded to one decimal place.
    pub fn completion_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let rate = self.completed as f64 / self.total as f64 * 100.0;
        (rate * 10.0).round() / 10.0
    }
}

/// In-memory store for one session's tasks.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Create an empty store.
    pub fn new() -> Self {
        TaskStore::default()
    }

    /// Create a store seeded with the sample records every session starts
    /// with. Creation times are backdated so the recency ordering is visible
    /// out of the box.
    pub fn with_sample_tasks() -> Self {
        let now = Utc::now();
        let samples = [
            (
                "Review Q3 commission reports",
                Department::Commissions,
                Priority::High,
                Status::Pending,
                Duration::days(2),
            ),
            (
                "Process cancellation request #789",
                Department::Cancellations,
                Priority::Medium,
                Status::InProgress,
                Duration::days(1),
            ),
            (
                "Update contract templates",
                Department::ContractAdmin,
                Priority::Low,
                Status::Pending,
                Duration::hours(6),
            ),
            (
                "Investigate claim #45678",
                Department::Claims,
                Priority::Urgent,
                Status::InProgress,
                Duration::hours(3),
            ),
            (
                "Schedule team training session",
                Department::ContractAdmin,
                Priority::Medium,
                Status::Pending,
                Duration::hours(1),
            ),
        ];

        let mut store = TaskStore::default();
        for (title, department, priority, status, age) in samples {
            let id = store.next_id();
            store.tasks.push(Task {
                id,
                title: title.to_string(),
                description: None,
                department,
                priority,
                status,
                due: None,
                created_at_utc: (now - age).timestamp(),
            });
        }
        store
    }

    /// All tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of tasks in the store.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the store holds no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Get a task by ID.
    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Generate the next available task ID.
    fn next_id(&self) -> u64 {
        self.tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1
    }

    /// Create a task from a draft and append it to the collection.
    ///
    /// Rejects drafts whose title trims to empty without touching the store.
    /// New tasks start Pending with the current time as their creation
    /// stamp. Returns a copy of the stored record.
    pub fn create(&mut self, draft: TaskDraft) -> Result<Task, StoreError> {
        if draft.title.trim().is_empty() {
            return Err(StoreError::EmptyTitle);
        }
        let task = Task {
            id: self.next_id(),
            title: draft.title,
            description: draft.description.filter(|d| !d.trim().is_empty()),
            department: draft.department,
            priority: draft.priority,
            status: Status::Pending,
            due: draft.due,
            created_at_utc: Utc::now().timestamp(),
        };
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Mark a task Completed in place and return a copy of it.
    ///
    /// Idempotent: completing an already-Completed task leaves it Completed.
    pub fn complete(&mut self, id: u64) -> Result<Task, StoreError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;
        task.status = Status::Completed;
        Ok(task.clone())
    }

    /// Tasks matching every provided filter, in insertion order.
    ///
    /// Omitted filters impose no restriction, so `filter(None, None, None)`
    /// returns everything.
    pub fn filter(
        &self,
        department: Option<Department>,
        priority: Option<Priority>,
        status: Option<Status>,
    ) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| {
                if let Some(d) = department {
                    if t.department != d {
                        return false;
                    }
                }
                if let Some(p) = priority {
                    if t.priority != p {
                        return false;
                    }
                }
                if let Some(s) = status {
                    if t.status != s {
                        return false;
                    }
                }
                true
            })
            .collect()
    }

    /// The `n` most recently created tasks, newest first. Tasks created in
    /// the same second order by higher ID first, which matches insertion
    /// recency since IDs are monotonic.
    pub fn recent(&self, n: usize) -> Vec<&Task> {
        let mut tasks: Vec<&Task> = self.tasks.iter().collect();
        tasks.sort_by_key(|t| std::cmp::Reverse((t.created_at_utc, t.id)));
        tasks.truncate(n);
        tasks
    }

    /// Task count per status, including zero entries.
    pub fn counts_by_status(&self) -> BTreeMap<Status, usize> {
        let mut counts = BTreeMap::new();
        for status in Status::ALL {
            counts.insert(status, 0);
        }
        for t in &self.tasks {
            *counts.entry(t.status).or_insert(0) += 1;
        }
        counts
    }

    /// Task count per priority, including zero entries.
    pub fn counts_by_priority(&self) -> BTreeMap<Priority, usize> {
        let mut counts = BTreeMap::new();
        for priority in Priority::ALL {
            counts.insert(priority, 0);
        }
        for t in &self.tasks {
            *counts.entry(t.priority).or_insert(0) += 1;
        }
        counts
    }

    /// Aggregate counts for every department that has at least one task.
    ///
    /// Departments without tasks are omitted so completion rates never
    /// divide by zero.
    pub fn department_summary(&self) -> BTreeMap<Department, DeptCounts> {
        let mut summary: BTreeMap<Department, DeptCounts> = BTreeMap::new();
        for t in &self.tasks {
            let counts = summary.entry(t.department).or_default();
            counts.total += 1;
            if t.status == Status::Completed {
                counts.completed += 1;
            } else {
                counts.pending += 1;
            }
        }
        summary
    }

    /// Remove every task. Irreversible within the session.
    pub fn reset_all(&mut self) {
        self.tasks.clear();
    }
}

/// Parse human-readable due date input.
///
/// Supports "today", "tomorrow", "in Nd", "in Nw", and "YYYY-MM-DD".
pub fn parse_due_input(s: &str) -> Option<NaiveDate> {
    let s = s.trim().to_lowercase();
    let today = Local::now().date_naive();

    match s.as_str() {
        "today" => return Some(today),
        "tomorrow" => return Some(today + Duration::days(1)),
        "next week" => return Some(today + Duration::weeks(1)),
        _ => {}
    }

    if let Some(rest) = s.strip_prefix("in ") {
        if let Some(n) = rest.strip_suffix('d') {
            if let Ok(days) = n.trim().parse::<i64>() {
                return Some(today + Duration::days(days));
            }
        }
        if let Some(n) = rest.strip_suffix('w') {
            if let Ok(weeks) = n.trim().parse::<i64>() {
                return Some(today + Duration::weeks(weeks));
            }
        }
    }

    NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok()
}

/// Default due date offered by the creation form: a week from today.
pub fn default_due_date() -> NaiveDate {
    Local::now().date_naive() + Duration::days(7)
}

/// Format a due date relative to today ("today", "tomorrow", "in 3d", "2d late").
pub fn format_due_relative(due: Option<NaiveDate>, today: NaiveDate) -> String {
    let Some(d) = due else {
        return "-".into();
    };
    match (d - today).num_days() {
        0 => "today".into(),
        1 => "tomorrow".into(),
        n if n > 1 => format!("in {n}d"),
        n => format!("{}d late", -n),
    }
}

/// Format a creation timestamp for display.
pub fn format_created(created_at_utc: i64) -> String {
    Utc.timestamp_opt(created_at_utc, 0)
        .single()
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".into())
}

/// Format a department for display.
pub fn format_department(d: Department) -> &'static str {
    match d {
        Department::Claims => "Claims",
        Department::Commissions => "Commissions",
        Department::ContractAdmin => "Contract Admin",
        Department::Cancellations => "Cancellations",
    }
}

/// Format a priority level for display.
pub fn format_priority(p: Priority) -> &'static str {
    match p {
        Priority::Low => "Low",
        Priority::Medium => "Medium",
        Priority::High => "High",
        Priority::Urgent => "Urgent",
    }
}

/// Format a task status for display.
pub fn format_status(s: Status) -> &'static str {
    match s {
        Status::Pending => "Pending",
        Status::InProgress => "In Progress",
        Status::Completed => "Completed",
    }
}

/// Print tasks in a formatted table.
pub fn print_table(tasks: &[&Task]) {
    // Header.
    println!(
        "{:<4} {:<15} {:<8} {:<12} {:<10} {:<17} {}",
        "ID", "Department", "Pri", "Status", "Due", "Created", "Title"
    );
    let today = Local::now().date_naive();
    for t in tasks {
        println!(
            "{:<4} {:<15} {:<8} {:<12} {:<10} {:<17} {}",
            t.id,
            format_department(t.department),
            format_priority(t.priority),
            format_status(t.status),
            format_due_relative(t.due, today),
            format_created(t.created_at_utc),
            t.title
        );
    }
}

/// Truncate a string to a maximum width, adding ellipsis if needed.
pub fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= width {
            out.push('…');
            break;
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, department: Department, priority: Priority) -> TaskDraft {
        TaskDraft {
            title: title.to_string(),
            description: None,
            department,
            priority,
            due: None,
        }
    }

    #[test]
    fn create_appends_and_assigns_next_id() {
        let mut store = TaskStore::with_sample_tasks();
        let before = store.len();

        let task = store
            .create(draft("File audit paperwork", Department::Claims, Priority::Low))
            .unwrap();

        assert_eq!(store.len(), before + 1);
        assert_eq!(task.id, 6);
        assert_eq!(task.status, Status::Pending);
        assert_eq!(store.tasks().last().unwrap().id, task.id);
    }

    #[test]
    fn create_on_empty_store_starts_at_one() {
        let mut store = TaskStore::new();
        let task = store
            .create(draft("First", Department::Commissions, Priority::Medium))
            .unwrap();
        assert_eq!(task.id, 1);
    }

    #[test]
    fn create_rejects_empty_title() {
        let mut store = TaskStore::with_sample_tasks();
        let before = store.len();

        let err = store
            .create(draft("", Department::Claims, Priority::High))
            .unwrap_err();
        assert_eq!(err, StoreError::EmptyTitle);

        let err = store
            .create(draft("   ", Department::Claims, Priority::High))
            .unwrap_err();
        assert_eq!(err, StoreError::EmptyTitle);

        assert_eq!(store.len(), before);
    }

    #[test]
    fn create_drops_blank_description() {
        let mut store = TaskStore::new();
        let task = store
            .create(TaskDraft {
                title: "Check ledger".to_string(),
                description: Some("  ".to_string()),
                department: Department::Commissions,
                priority: Priority::Low,
                due: None,
            })
            .unwrap();
        assert_eq!(task.description, None);
    }

    #[test]
    fn complete_is_idempotent() {
        let mut store = TaskStore::with_sample_tasks();

        let once = store.complete(1).unwrap();
        assert_eq!(once.status, Status::Completed);

        let twice = store.complete(1).unwrap();
        assert_eq!(twice.status, Status::Completed);
        assert_eq!(store.get(1).unwrap().status, Status::Completed);
    }

    #[test]
    fn complete_unknown_id_leaves_store_unchanged() {
        let mut store = TaskStore::with_sample_tasks();
        let before: Vec<(u64, Status)> = store.tasks().iter().map(|t| (t.id, t.status)).collect();

        let err = store.complete(999).unwrap_err();
        assert_eq!(err, StoreError::NotFound(999));

        let after: Vec<(u64, Status)> = store.tasks().iter().map(|t| (t.id, t.status)).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn filter_without_arguments_returns_all_in_insertion_order() {
        let store = TaskStore::with_sample_tasks();
        let all = store.filter(None, None, None);
        let ids: Vec<u64> = all.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn filter_by_department_preserves_order() {
        let store = TaskStore::with_sample_tasks();
        let admin = store.filter(Some(Department::ContractAdmin), None, None);
        let ids: Vec<u64> = admin.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 5]);
        assert!(admin.iter().all(|t| t.department == Department::ContractAdmin));
    }

    #[test]
    fn filter_combines_restrictions() {
        let store = TaskStore::with_sample_tasks();
        let hits = store.filter(
            Some(Department::ContractAdmin),
            Some(Priority::Medium),
            Some(Status::Pending),
        );
        let ids: Vec<u64> = hits.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![5]);
    }

    #[test]
    fn status_counts_cover_all_values_and_sum_to_total() {
        let store = TaskStore::with_sample_tasks();
        let counts = store.counts_by_status();
        assert_eq!(counts.len(), Status::ALL.len());
        assert_eq!(counts[&Status::Completed], 0);
        assert_eq!(counts.values().sum::<usize>(), store.len());
    }

    #[test]
    fn priority_counts_cover_all_values_and_sum_to_total() {
        let store = TaskStore::with_sample_tasks();
        let counts = store.counts_by_priority();
        assert_eq!(counts.len(), Priority::ALL.len());
        assert_eq!(counts[&Priority::Medium], 2);
        assert_eq!(counts.values().sum::<usize>(), store.len());
    }

    #[test]
    fn department_summary_parts_sum_to_totals() {
        let mut store = TaskStore::with_sample_tasks();
        store.complete(3).unwrap();

        let summary = store.department_summary();
        for counts in summary.values() {
            assert_eq!(counts.completed + counts.pending, counts.total);
        }
        let admin = summary[&Department::ContractAdmin];
        assert_eq!(admin.total, 2);
        assert_eq!(admin.completed, 1);
    }

    #[test]
    fn department_summary_omits_empty_departments() {
        let mut store = TaskStore::new();
        store
            .create(draft("Lone claim", Department::Claims, Priority::High))
            .unwrap();

        let summary = store.department_summary();
        assert_eq!(summary.len(), 1);
        assert!(summary.contains_key(&Department::Claims));
    }

    #[test]
    fn completion_rate_rounds_to_one_decimal() {
        let counts = DeptCounts {
            total: 3,
            completed: 1,
            pending: 2,
        };
        assert_eq!(counts.completion_rate(), 33.3);

        let done = DeptCounts {
            total: 2,
            completed: 2,
            pending: 0,
        };
        assert_eq!(done.completion_rate(), 100.0);
    }

    #[test]
    fn recent_orders_by_creation_time_then_id() {
        let mut store = TaskStore::with_sample_tasks();
        // Two tasks created in the same second: the higher ID wins.
        store
            .create(draft("Newer A", Department::Claims, Priority::Low))
            .unwrap();
        store
            .create(draft("Newer B", Department::Claims, Priority::Low))
            .unwrap();

        let recent = store.recent(3);
        let ids: Vec<u64> = recent.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![7, 6, 5]);
    }

    #[test]
    fn recent_caps_at_store_size() {
        let store = TaskStore::with_sample_tasks();
        assert_eq!(store.recent(50).len(), 5);
    }

    #[test]
    fn reset_all_empties_the_store() {
        let mut store = TaskStore::with_sample_tasks();
        store.reset_all();
        assert!(store.is_empty());
        assert!(store.recent(5).is_empty());
    }

    #[test]
    fn id_restarts_after_reset() {
        let mut store = TaskStore::with_sample_tasks();
        store.reset_all();
        let task = store
            .create(draft("Fresh start", Department::Claims, Priority::Low))
            .unwrap();
        assert_eq!(task.id, 1);
    }

    #[test]
    fn parse_due_input_accepts_supported_forms() {
        let today = Local::now().date_naive();
        assert_eq!(parse_due_input("today"), Some(today));
        assert_eq!(parse_due_input("Tomorrow"), Some(today + Duration::days(1)));
        assert_eq!(parse_due_input("in 3d"), Some(today + Duration::days(3)));
        assert_eq!(parse_due_input("in 2w"), Some(today + Duration::weeks(2)));
        assert_eq!(
            parse_due_input("2030-01-15"),
            NaiveDate::from_ymd_opt(2030, 1, 15)
        );
        assert_eq!(parse_due_input("soonish"), None);
    }
}
