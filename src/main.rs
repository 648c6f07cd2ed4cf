//! # BM - Business Management Dashboard
//!
//! A terminal dashboard for tracking business tasks across four departments
//! (Claims, Commissions, Contract Admin, Cancellations), with a scripted
//! assistant answering common process questions from a fixed keyword table.
//!
//! ## Key Features
//!
//! - **Departmental Task Tracking**: priority, status, and due dates per
//!   task, with department/priority/status filtering
//! - **Session Memory Only**: state is built once per session from seeded
//!   sample data and dropped on exit; nothing touches disk
//! - **Multiple Interfaces**: interactive TUI dashboard + one-shot CLI
//!   reports for scripting
//! - **Scripted Assistant**: keyword-matched canned answers for contract,
//!   commission, claim, and cancellation questions, plus quick actions
//! - **Analytics**: status/priority distributions and per-department
//!   completion rates
//!
//! ## Quick Start
//!
//! ```bash
//! # Launch the interactive dashboard
//! bm ui
//!
//! # One-shot session overview
//! bm overview
//!
//! # Machine-readable overview
//! bm overview --json
//!
//! # List tasks with filters
//! bm tasks --department claims --status pending
//!
//! # Ask the assistant a question
//! bm ask what is the commission rate?
//! ```
//!
//! ## Dashboard Pages
//!
//! - **Dashboard** - headline metrics, status and priority charts, recent
//!   tasks
//! - **Tasks** - create, filter, and complete tasks
//! - **Assistant** - chat transcript with quick actions
//! - **Analytics** - department performance and completion rates
//! - **Settings** - clear chat history, reset all tasks
//!
//! Press `Tab` to switch pages and `h` for the key reference. All state is
//! per-session by design; restart the binary and you are back at the seeded
//! sample data.

use clap::Parser;

pub mod assistant;
pub mod cli;
pub mod cmd;
pub mod fields;
pub mod store;
pub mod task;
pub mod tui {
    pub mod app;
    pub mod colors;
    pub mod enums;
    pub mod input;
    pub mod run;
    pub mod task_form;
    pub mod utils;
}

use cli::Cli;
use cmd::*;

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ui => cmd_ui(),
        Commands::Overview { json } => cmd_overview(json),
        Commands::Tasks { department, priority, status, recent } =>
            cmd_tasks(department, priority, status, recent),
        Commands::Ask { question, json } => cmd_ask(question, json),
        Commands::Completions { shell } => cmd_completions(shell),
    }
}
