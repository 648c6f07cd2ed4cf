//! Command implementations for the CLI interface.
//!
//! This module contains the command handlers behind the subcommands: the
//! interactive dashboard, the one-shot overview report, the one-shot
//! assistant query, and shell completion generation.

use std::collections::BTreeMap;

use clap::Subcommand;
use clap_complete::{generate, Shell};
use serde::Serialize;

use crate::assistant::respond;
use crate::fields::*;
use crate::store::*;
use crate::task::Task;
use crate::tui::run::run_tui;

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive dashboard interface.
    Ui,

    /// Print an overview of a freshly seeded session.
    Overview {
        /// Emit the report as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List the sample session's tasks with optional filters.
    Tasks {
        /// Filter by department.
        #[arg(long, value_enum)]
        department: Option<Department>,
        /// Filter by priority.
        #[arg(long, value_enum)]
        priority: Option<Priority>,
        /// Filter by status.
        #[arg(long, value_enum)]
        status: Option<Status>,
        /// Print only the N most recently created tasks (ignores filters).
        #[arg(long)]
        recent: Option<usize>,
    },

    /// Ask the scripted assistant a process question.
    Ask {
        /// The question text. Multiple words are joined with spaces.
        #[arg(required = true)]
        question: Vec<String>,
        /// Emit the exchange as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completion scripts.
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Launch the terminal user interface.
pub fn cmd_ui() {
    if let Err(e) = run_tui() {
        eprintln!("UI error: {e}");
        std::process::exit(1);
    }
}

/// Per-department row of the overview report.
#[derive(Serialize)]
struct DeptReport {
    total: usize,
    completed: usize,
    pending: usize,
    completion_rate: f64,
}

/// Machine-readable session overview.
#[derive(Serialize)]
struct OverviewReport<'a> {
    total_tasks: usize,
    completed: usize,
    pending: usize,
    urgent: usize,
    by_status: Vec<(&'static str, usize)>,
    by_priority: Vec<(&'static str, usize)>,
    departments: BTreeMap<&'static str, DeptReport>,
    recent: Vec<&'a Task>,
}

/// Print headline metrics, distributions, department performance, and the
/// most recent tasks for a freshly seeded session.
pub fn cmd_overview(json: bool) {
    let store = TaskStore::with_sample_tasks();

    let by_status = store.counts_by_status();
    let by_priority = store.counts_by_priority();
    let summary = store.department_summary();
    let recent = store.recent(5);

    let completed = by_status[&Status::Completed];
    let pending = by_status[&Status::Pending];
    let urgent = by_priority[&Priority::Urgent];

    if json {
        let report = OverviewReport {
            total_tasks: store.len(),
            completed,
            pending,
            urgent,
            by_status: by_status
                .iter()
                .map(|(s, n)| (format_status(*s), *n))
                .collect(),
            by_priority: by_priority
                .iter()
                .map(|(p, n)| (format_priority(*p), *n))
                .collect(),
            departments: summary
                .iter()
                .map(|(dept, counts)| {
                    (
                        format_department(*dept),
                        DeptReport {
                            total: counts.total,
                            completed: counts.completed,
                            pending: counts.pending,
                            completion_rate: counts.completion_rate(),
                        },
                    )
                })
                .collect(),
            recent,
        };
        println!("{}", serde_json::to_string_pretty(&report).unwrap());
        return;
    }

    println!("Session overview (sample data)");
    println!();
    println!(
        "Total tasks: {}   Completed: {}   Pending: {}   Urgent: {}",
        store.len(),
        completed,
        pending,
        urgent
    );
    println!();

    let status_line: Vec<String> = by_status
        .iter()
        .map(|(s, n)| format!("{} {}", format_status(*s), n))
        .collect();
    println!("Status:    {}", status_line.join(" | "));
    let priority_line: Vec<String> = by_priority
        .iter()
        .map(|(p, n)| format!("{} {}", format_priority(*p), n))
        .collect();
    println!("Priority:  {}", priority_line.join(" | "));
    println!();

    println!("Department performance:");
    println!(
        "{:<16} {:>6} {:>10} {:>8} {:>13}",
        "Department", "Total", "Completed", "Pending", "Completion %"
    );
    for (dept, counts) in &summary {
        println!(
            "{:<16} {:>6} {:>10} {:>8} {:>13.1}",
            format_department(*dept),
            counts.total,
            counts.completed,
            counts.pending,
            counts.completion_rate()
        );
    }
    println!();

    println!("Recent tasks:");
    print_table(&recent);
}

/// List tasks from a freshly seeded session with optional filtering.
pub fn cmd_tasks(
    department: Option<Department>,
    priority: Option<Priority>,
    status: Option<Status>,
    recent: Option<usize>,
) {
    let store = TaskStore::with_sample_tasks();
    if let Some(n) = recent {
        print_table(&store.recent(n));
        return;
    }
    print_table(&store.filter(department, priority, status));
}

/// Run one question through the dispatcher and print the response.
pub fn cmd_ask(question: Vec<String>, json: bool) {
    let question = question.join(" ");
    let response = respond(&question);
    if json {
        let exchange = serde_json::json!({
            "question": question,
            "response": response,
        });
        println!("{}", serde_json::to_string_pretty(&exchange).unwrap());
    } else {
        println!("{response}");
    }
}

/// Generate shell completion scripts for the given shell.
pub fn cmd_completions(shell: Shell) {
    use clap::CommandFactory;

    use crate::cli::Cli;

    let mut app = Cli::command();
    let app_name = app.get_name().to_string();
    generate(shell, &mut app, app_name, &mut std::io::stdout());
}
