//! Main application logic for the terminal user interface.
//!
//! This module contains the `App` struct which manages the TUI state,
//! handles user input, renders the five dashboard pages, and coordinates
//! the task store, the chat log, and the overlay dialogs.

use std::io;
use std::time::Duration;

use chrono::Local;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        BarChart, Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Tabs, Wrap,
    },
    Frame, Terminal,
};

use crate::assistant::{ChatLog, Role, QUICK_ACTIONS};
use crate::fields::{Department, Priority, Status};
use crate::store::{
    format_created, format_department, format_due_relative, format_priority, format_status,
    truncate, TaskStore,
};
use crate::tui::{
    colors::{priority_color, status_color, ACCENT_BLUE, ORANGE},
    enums::{cycle_filter, AppState, ConfirmAction, InputMode, Page},
    input::InputField,
    task_form::{FormField, TaskForm},
    utils::centered_rect,
};

/// Main application state for the terminal user interface.
///
/// Holds the session stores (tasks and chat transcript) along with all
/// view state: active page, filters, form contents, and pending dialogs.
pub struct App {
    store: TaskStore,
    chat: ChatLog,
    page: Page,
    state: AppState,
    input_mode: InputMode,
    task_list_state: TableState,
    filtered_tasks: Vec<u64>,
    filter_department: Option<Department>,
    filter_priority: Option<Priority>,
    filter_status: Option<Status>,
    form: TaskForm,
    chat_input: InputField,
    chat_scroll: u16,
    chat_follow: bool,
    confirm_action: Option<ConfirmAction>,
    status_message: String,
}

impl App {
    /// Create a new App instance with a freshly seeded session.
    pub fn new() -> Self {
        let mut app = App {
            store: TaskStore::with_sample_tasks(),
            chat: ChatLog::new(),
            page: Page::Dashboard,
            state: AppState::Browse,
            input_mode: InputMode::None,
            task_list_state: TableState::default(),
            filtered_tasks: Vec::new(),
            filter_department: None,
            filter_priority: None,
            filter_status: None,
            form: TaskForm::new(),
            chat_input: InputField::new(),
            chat_scroll: 0,
            chat_follow: true,
            confirm_action: None,
            status_message: String::new(),
        };
        app.update_filtered_tasks();
        app
    }

    /// Update the filtered task list from the current filter selections.
    ///
    /// Attempts to preserve the selected row when possible, otherwise
    /// falls back to the first row.
    fn update_filtered_tasks(&mut self) {
        let old_selected_id = self
            .task_list_state
            .selected()
            .and_then(|idx| self.filtered_tasks.get(idx))
            .copied();

        self.filtered_tasks = self
            .store
            .filter(
                self.filter_department,
                self.filter_priority,
                self.filter_status,
            )
            .iter()
            .map(|t| t.id)
            .collect();

        if let Some(old_id) = old_selected_id {
            if let Some(new_idx) = self.filtered_tasks.iter().position(|&id| id == old_id) {
                self.task_list_state.select(Some(new_idx));
                return;
            }
        }
        if self.filtered_tasks.is_empty() {
            self.task_list_state.select(None);
        } else {
            self.task_list_state.select(Some(0));
        }
    }

    /// The task ID of the highlighted table row, if any.
    fn selected_task_id(&self) -> Option<u64> {
        self.task_list_state
            .selected()
            .and_then(|idx| self.filtered_tasks.get(idx))
            .copied()
    }

    fn select_next_task(&mut self) {
        if self.filtered_tasks.is_empty() {
            return;
        }
        let i = match self.task_list_state.selected() {
            Some(i) if i + 1 < self.filtered_tasks.len() => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.task_list_state.select(Some(i));
    }

    fn select_previous_task(&mut self) {
        if self.filtered_tasks.is_empty() {
            return;
        }
        let i = match self.task_list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => 0,
        };
        self.task_list_state.select(Some(i));
    }

    /// Mark the highlighted task Completed.
    fn complete_selected_task(&mut self) {
        let Some(id) = self.selected_task_id() else {
            self.status_message = "No task selected.".into();
            return;
        };
        match self.store.complete(id) {
            Ok(task) => {
                self.status_message = format!("Task '{}' completed!", task.title);
                self.update_filtered_tasks();
            }
            Err(e) => self.status_message = e.to_string(),
        }
    }

    /// Submit the creation form to the store.
    fn submit_form(&mut self) {
        match self.form.to_draft() {
            Ok(draft) => match self.store.create(draft) {
                Ok(task) => {
                    self.status_message = format!("Task '{}' created successfully!", task.title);
                    self.state = AppState::Browse;
                    self.input_mode = InputMode::None;
                    self.update_filtered_tasks();
                }
                // Rejected draft: stay in the form so the user can fix it.
                Err(e) => self.status_message = format!("{e}."),
            },
            Err(msg) => self.status_message = msg,
        }
    }

    /// Poll for and handle keyboard events based on current application state.
    ///
    /// Returns true if the application should quit.
    fn handle_input(&mut self) -> io::Result<bool> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                self.status_message.clear();

                let should_quit = match self.state {
                    AppState::Browse => self.handle_browse_input(key.code, key.modifiers),
                    AppState::NewTask => self.handle_form_input(key.code),
                    AppState::Confirm => self.handle_confirm_input(key.code),
                    AppState::Help => {
                        self.state = AppState::Browse;
                        false
                    }
                };
                if should_quit {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }

    fn handle_browse_input(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        // While the chat input has focus it captures everything except Esc.
        if self.page == Page::Assistant && self.input_mode == InputMode::Text {
            self.handle_chat_input(code);
            return false;
        }

        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return true,
            KeyCode::Tab => self.page = self.page.next(),
            KeyCode::BackTab => self.page = self.page.prev(),
            KeyCode::Char('h') => self.state = AppState::Help,
            _ => match self.page {
                Page::Tasks => self.handle_tasks_keys(code),
                Page::Assistant => self.handle_assistant_keys(code),
                Page::Settings => self.handle_settings_keys(code),
                Page::Dashboard | Page::Analytics => {}
            },
        }
        false
    }

    fn handle_tasks_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Down | KeyCode::Char('j') => self.select_next_task(),
            KeyCode::Up | KeyCode::Char('k') => self.select_previous_task(),
            KeyCode::Char('n') => {
                self.form = TaskForm::new();
                self.state = AppState::NewTask;
                self.input_mode = InputMode::Text;
            }
            KeyCode::Char('c') => self.complete_selected_task(),
            KeyCode::Char('d') => {
                self.filter_department =
                    cycle_filter(&Department::ALL, self.filter_department);
                self.update_filtered_tasks();
            }
            KeyCode::Char('p') => {
                self.filter_priority = cycle_filter(&Priority::ALL, self.filter_priority);
                self.update_filtered_tasks();
            }
            KeyCode::Char('s') => {
                self.filter_status = cycle_filter(&Status::ALL, self.filter_status);
                self.update_filtered_tasks();
            }
            KeyCode::Char('x') => {
                self.filter_department = None;
                self.filter_priority = None;
                self.filter_status = None;
                self.update_filtered_tasks();
            }
            _ => {}
        }
    }

    fn handle_assistant_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('i') => self.input_mode = InputMode::Text,
            KeyCode::Up => {
                self.chat_follow = false;
                self.chat_scroll = self.chat_scroll.saturating_sub(1);
            }
            KeyCode::Down => self.chat_scroll = self.chat_scroll.saturating_add(1),
            KeyCode::Char(c @ '1'..='3') => {
                let idx = c as usize - '1' as usize;
                if let Some(action) = QUICK_ACTIONS.get(idx) {
                    self.chat.push_exchange(action.label, action.response);
                    self.chat_follow = true;
                }
            }
            _ => {}
        }
    }

    fn handle_chat_input(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.input_mode = InputMode::None,
            KeyCode::Enter => {
                let question = self.chat_input.take();
                if !question.trim().is_empty() {
                    self.chat.ask(&question);
                    self.chat_follow = true;
                }
            }
            KeyCode::Backspace => self.chat_input.handle_backspace(),
            KeyCode::Left => self.chat_input.move_cursor_left(),
            KeyCode::Right => self.chat_input.move_cursor_right(),
            KeyCode::Char(c) => self.chat_input.handle_char(c),
            _ => {}
        }
    }

    fn handle_settings_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('r') => {
                self.confirm_action = Some(ConfirmAction::ResetTasks);
                self.state = AppState::Confirm;
            }
            KeyCode::Char('c') => {
                self.confirm_action = Some(ConfirmAction::ClearChat);
                self.state = AppState::Confirm;
            }
            _ => {}
        }
    }

    fn handle_confirm_input(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                match self.confirm_action {
                    Some(ConfirmAction::ResetTasks) => {
                        self.store.reset_all();
                        self.update_filtered_tasks();
                        self.status_message = "All tasks reset!".into();
                    }
                    Some(ConfirmAction::ClearChat) => {
                        self.chat.clear();
                        self.chat_scroll = 0;
                        self.chat_follow = true;
                        self.status_message = "Chat history cleared!".into();
                    }
                    None => {}
                }
                self.confirm_action = None;
                self.state = AppState::Browse;
            }
            KeyCode::Char('n') | KeyCode::Esc => {
                self.confirm_action = None;
                self.state = AppState::Browse;
            }
            _ => {}
        }
        false
    }

    fn handle_form_input(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Esc => {
                self.state = AppState::Browse;
                self.input_mode = InputMode::None;
            }
            KeyCode::Enter => self.submit_form(),
            KeyCode::Tab | KeyCode::Down => self.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.form.prev_field(),
            KeyCode::Left => match self.form.active_input_mut() {
                Some(input) => input.move_cursor_left(),
                None => self.form.cycle_selector(-1),
            },
            KeyCode::Right => match self.form.active_input_mut() {
                Some(input) => input.move_cursor_right(),
                None => self.form.cycle_selector(1),
            },
            KeyCode::Backspace => {
                if let Some(input) = self.form.active_input_mut() {
                    input.handle_backspace();
                }
            }
            KeyCode::Char(c) => {
                if let Some(input) = self.form.active_input_mut() {
                    input.handle_char(c);
                }
            }
            _ => {}
        }
        false
    }

    /// Render the page tab bar.
    fn render_tabs(&self, f: &mut Frame, area: Rect) {
        let titles: Vec<Line> = Page::ALL.iter().map(|p| Line::from(p.title())).collect();
        let selected = Page::ALL.iter().position(|&p| p == self.page).unwrap_or(0);
        let tabs = Tabs::new(titles)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Business Management Dashboard"),
            )
            .select(selected)
            .highlight_style(
                Style::default()
                    .fg(ACCENT_BLUE)
                    .add_modifier(Modifier::BOLD),
            );
        f.render_widget(tabs, area);
    }

    /// Render the dashboard overview page.
    fn render_dashboard(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(10),
                Constraint::Min(0),
            ])
            .split(area);

        self.render_metrics(f, chunks[0]);

        let charts = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);
        self.render_status_chart(f, charts[0]);
        self.render_priority_chart(f, charts[1]);

        self.render_recent_tasks(f, chunks[2]);
    }

    /// Render the four headline metric tiles.
    fn render_metrics(&self, f: &mut Frame, area: Rect) {
        let by_status = self.store.counts_by_status();
        let by_priority = self.store.counts_by_priority();
        let metrics = [
            ("Total Tasks", self.store.len(), ACCENT_BLUE),
            ("Completed", by_status[&Status::Completed], Color::Green),
            ("Pending", by_status[&Status::Pending], Color::Yellow),
            ("Urgent", by_priority[&Priority::Urgent], Color::Red),
        ];

        let tiles = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(25); 4])
            .split(area);
        for (i, (label, value, color)) in metrics.iter().enumerate() {
            let tile = Paragraph::new(value.to_string())
                .style(Style::default().fg(*color).add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title(*label));
            f.render_widget(tile, tiles[i]);
        }
    }

    fn render_status_chart(&self, f: &mut Frame, area: Rect) {
        let counts = self.store.counts_by_status();
        let data: Vec<(&str, u64)> = Status::ALL
            .iter()
            .map(|s| (format_status(*s), counts[s] as u64))
            .collect();
        let chart = BarChart::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Task Status Distribution"),
            )
            .data(&data)
            .bar_width(12)
            .bar_gap(2)
            .bar_style(Style::default().fg(ACCENT_BLUE))
            .value_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));
        f.render_widget(chart, area);
    }

    fn render_priority_chart(&self, f: &mut Frame, area: Rect) {
        let counts = self.store.counts_by_priority();
        let data: Vec<(&str, u64)> = Priority::ALL
            .iter()
            .map(|p| (format_priority(*p), counts[p] as u64))
            .collect();
        let chart = BarChart::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Priority Breakdown"),
            )
            .data(&data)
            .bar_width(8)
            .bar_gap(2)
            .bar_style(Style::default().fg(ORANGE))
            .value_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));
        f.render_widget(chart, area);
    }

    /// Render the five most recently created tasks.
    fn render_recent_tasks(&self, f: &mut Frame, area: Rect) {
        let recent = self.store.recent(5);

        let header = Row::new(
            ["Title", "Department", "Priority", "Status", "Created"]
                .iter()
                .map(|h| Cell::from(*h).style(Style::default().add_modifier(Modifier::BOLD))),
        )
        .style(Style::default().bg(ACCENT_BLUE).fg(Color::White))
        .height(1);

        let rows: Vec<Row> = recent
            .iter()
            .map(|task| {
                Row::new(vec![
                    Cell::from(truncate(&task.title, 40)),
                    Cell::from(format_department(task.department)),
                    Cell::from(Span::styled(
                        format_priority(task.priority),
                        Style::default().fg(priority_color(task.priority)),
                    )),
                    Cell::from(Span::styled(
                        format_status(task.status),
                        Style::default().fg(status_color(task.status)),
                    )),
                    Cell::from(format_created(task.created_at_utc)),
                ])
            })
            .collect();

        let widths = [
            Constraint::Min(25),
            Constraint::Length(15),
            Constraint::Length(10),
            Constraint::Length(12),
            Constraint::Length(17),
        ];
        let table = Table::new(rows, widths)
            .header(header)
            .block(Block::default().borders(Borders::ALL).title("Recent Tasks"));
        f.render_widget(table, area);
    }

    /// Render the task management page: filters plus the task table.
    fn render_tasks(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        let dept = self.filter_department.map(format_department).unwrap_or("All");
        let priority = self.filter_priority.map(format_priority).unwrap_or("All");
        let status = self.filter_status.map(format_status).unwrap_or("All");
        let filter_line = Line::from(vec![
            Span::styled("[d] Department: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(dept),
            Span::raw("   "),
            Span::styled("[p] Priority: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(priority),
            Span::raw("   "),
            Span::styled("[s] Status: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(status),
            Span::raw("   "),
            Span::styled("[x] clear", Style::default().fg(Color::DarkGray)),
        ]);
        let filters = Paragraph::new(filter_line)
            .block(Block::default().borders(Borders::ALL).title("Filters"));
        f.render_widget(filters, chunks[0]);

        let title = format!(
            "Tasks ({}/{})",
            self.filtered_tasks.len(),
            self.store.len()
        );

        if self.filtered_tasks.is_empty() {
            let empty = Paragraph::new("No tasks match the selected filters.")
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title(title));
            f.render_widget(empty, chunks[1]);
            return;
        }

        let header = Row::new(
            ["ID", "Title", "Department", "Priority", "Status", "Due", "Created"]
                .iter()
                .map(|h| Cell::from(*h).style(Style::default().add_modifier(Modifier::BOLD))),
        )
        .style(Style::default().bg(ACCENT_BLUE).fg(Color::White))
        .height(1);

        let today = Local::now().date_naive();
        let rows: Vec<Row> = self
            .filtered_tasks
            .iter()
            .filter_map(|&id| self.store.get(id))
            .map(|task| {
                let style = match task.status {
                    Status::Completed => Style::default().fg(Color::DarkGray),
                    Status::InProgress => Style::default().add_modifier(Modifier::BOLD),
                    Status::Pending => Style::default(),
                };
                Row::new(vec![
                    Cell::from(task.id.to_string()),
                    Cell::from(truncate(&task.title, 40)),
                    Cell::from(format_department(task.department)),
                    Cell::from(Span::styled(
                        format_priority(task.priority),
                        Style::default().fg(priority_color(task.priority)),
                    )),
                    Cell::from(Span::styled(
                        format_status(task.status),
                        Style::default().fg(status_color(task.status)),
                    )),
                    Cell::from(format_due_relative(task.due, today)),
                    Cell::from(format_created(task.created_at_utc)),
                ])
                .style(style)
            })
            .collect();

        let widths = [
            Constraint::Length(4),
            Constraint::Min(25),
            Constraint::Length(15),
            Constraint::Length(10),
            Constraint::Length(12),
            Constraint::Length(10),
            Constraint::Length(17),
        ];
        let table = Table::new(rows, widths)
            .header(header)
            .block(Block::default().borders(Borders::ALL).title(title))
            .row_highlight_style(Style::default().bg(Color::Gray).fg(Color::Black))
            .highlight_symbol(">> ");
        f.render_stateful_widget(table, chunks[1], &mut self.task_list_state);
    }

    /// Render the assistant page: transcript, input line, quick actions.
    fn render_assistant(&mut self, f: &mut Frame, area: Rect) {
        let quick_height = QUICK_ACTIONS.len() as u16 + 2;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(3),
                Constraint::Length(quick_height),
            ])
            .split(area);

        let mut lines: Vec<Line> = Vec::new();
        if self.chat.is_empty() {
            lines.push(Line::from(Span::styled(
                "Ask me anything about your business processes, contracts, or policies!",
                Style::default().fg(Color::DarkGray),
            )));
        }
        for msg in self.chat.messages() {
            match msg.role {
                Role::User => lines.push(Line::from(Span::styled(
                    format!("You: {}", msg.content),
                    Style::default().fg(ACCENT_BLUE).add_modifier(Modifier::BOLD),
                ))),
                Role::Assistant => {
                    for content_line in msg.content.lines() {
                        lines.push(Line::from(content_line.to_string()));
                    }
                }
            }
            lines.push(Line::from(""));
        }

        // Stick to the newest message unless the user scrolled away.
        let inner_height = chunks[0].height.saturating_sub(2);
        let max_scroll = (lines.len() as u16).saturating_sub(inner_height);
        if self.chat_follow {
            self.chat_scroll = max_scroll;
        } else {
            self.chat_scroll = self.chat_scroll.min(max_scroll);
        }

        let transcript = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Assistant"))
            .wrap(Wrap { trim: false })
            .scroll((self.chat_scroll, 0));
        f.render_widget(transcript, chunks[0]);

        let (input_style, input_title) = if self.input_mode == InputMode::Text {
            (Style::default(), "Ask me anything... (Enter sends, Esc leaves)")
        } else {
            (Style::default().fg(Color::DarkGray), "Press 'i' to ask a question")
        };
        let input = Paragraph::new(self.chat_input.value.as_str())
            .style(input_style)
            .block(Block::default().borders(Borders::ALL).title(input_title));
        f.render_widget(input, chunks[1]);
        if self.input_mode == InputMode::Text {
            f.set_cursor_position((
                chunks[1].x + 1 + self.chat_input.cursor as u16,
                chunks[1].y + 1,
            ));
        }

        let action_lines: Vec<Line> = QUICK_ACTIONS
            .iter()
            .enumerate()
            .map(|(i, action)| {
                Line::from(vec![
                    Span::styled(
                        format!("[{}] ", i + 1),
                        Style::default().fg(ACCENT_BLUE).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(action.label),
                ])
            })
            .collect();
        let quick = Paragraph::new(action_lines)
            .block(Block::default().borders(Borders::ALL).title("Quick Actions"));
        f.render_widget(quick, chunks[2]);
    }

    /// Render the analytics page: department performance and rates.
    fn render_analytics(&self, f: &mut Frame, area: Rect) {
        let summary = self.store.department_summary();

        if summary.is_empty() {
            let empty = Paragraph::new("No tasks yet. Create some to see department performance.")
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title("Department Performance"),
                );
            f.render_widget(empty, area);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(summary.len() as u16 + 3),
                Constraint::Min(0),
            ])
            .split(area);

        let header = Row::new(
            ["Department", "Total", "Completed", "Pending", "Completion %"]
                .iter()
                .map(|h| Cell::from(*h).style(Style::default().add_modifier(Modifier::BOLD))),
        )
        .style(Style::default().bg(ACCENT_BLUE).fg(Color::White))
        .height(1);

        let rows: Vec<Row> = summary
            .iter()
            .map(|(dept, counts)| {
                Row::new(vec![
                    Cell::from(format_department(*dept)),
                    Cell::from(counts.total.to_string()),
                    Cell::from(counts.completed.to_string()),
                    Cell::from(counts.pending.to_string()),
                    Cell::from(format!("{:.1}", counts.completion_rate())),
                ])
            })
            .collect();

        let widths = [
            Constraint::Length(16),
            Constraint::Length(7),
            Constraint::Length(11),
            Constraint::Length(9),
            Constraint::Length(13),
        ];
        let table = Table::new(rows, widths)
            .header(header)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Department Performance"),
            );
        f.render_widget(table, chunks[0]);

        let data: Vec<(&str, u64)> = summary
            .iter()
            .map(|(dept, counts)| {
                (
                    format_department(*dept),
                    counts.completion_rate().round() as u64,
                )
            })
            .collect();
        let chart = BarChart::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Completion Rates by Department (%)"),
            )
            .data(&data)
            .bar_width(14)
            .bar_gap(2)
            .bar_style(Style::default().fg(Color::Green))
            .value_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));
        f.render_widget(chart, chunks[1]);
    }

    /// Render the settings page.
    fn render_settings(&self, f: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                "Data Management",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("  [c] Clear chat history"),
            Line::from("  [r] Reset all tasks"),
            Line::from(""),
            Line::from(Span::styled(
                "Appearance",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("  Theme: terminal default"),
            Line::from("  Items per page: fits the window"),
            Line::from(""),
            Line::from(Span::styled(
                "State lives in this session only; nothing is stored on disk.",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let settings = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Settings"));
        f.render_widget(settings, area);
    }

    /// Render the task creation form as an overlay dialog.
    fn render_task_form(&self, f: &mut Frame) {
        let area = centered_rect(60, 55, f.area());
        f.render_widget(Clear, area);

        let lines = vec![
            form_line("Title", &self.form.title.value, self.form.field == FormField::Title),
            form_line(
                "Description",
                &self.form.description.value,
                self.form.field == FormField::Description,
            ),
            form_line(
                "Department",
                format_department(self.form.department()),
                self.form.field == FormField::Department,
            ),
            form_line(
                "Priority",
                format_priority(self.form.priority()),
                self.form.field == FormField::Priority,
            ),
            form_line("Due date", &self.form.due.value, self.form.field == FormField::Due),
            Line::from(""),
            Line::from(Span::styled(
                "Tab next field | Left/Right cycle values | Enter create | Esc cancel",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let dialog = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Create New Task")
                .border_style(Style::default().fg(ACCENT_BLUE)),
        );
        f.render_widget(dialog, area);
    }

    /// Render the confirm dialog for destructive actions.
    fn render_confirm(&self, f: &mut Frame) {
        let Some(action) = self.confirm_action else {
            return;
        };
        let area = centered_rect(50, 20, f.area());
        f.render_widget(Clear, area);

        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                action.prompt(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("This action cannot be undone."),
            Line::from(""),
            Line::from("Press 'y' to confirm, 'n' to cancel"),
        ];
        let dialog = Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Confirm Action")
                    .border_style(Style::default().fg(Color::Red)),
            );
        f.render_widget(dialog, area);
    }

    /// Render the key reference overlay.
    fn render_help(&self, f: &mut Frame) {
        let area = centered_rect(60, 70, f.area());
        f.render_widget(Clear, area);

        let lines = vec![
            Line::from(Span::styled("Global", Style::default().add_modifier(Modifier::BOLD))),
            Line::from("  Tab / Shift+Tab   switch page"),
            Line::from("  h                 this help"),
            Line::from("  q / Ctrl+C        quit"),
            Line::from(""),
            Line::from(Span::styled("Tasks", Style::default().add_modifier(Modifier::BOLD))),
            Line::from("  Up/Down or j/k    select task"),
            Line::from("  n                 create a task"),
            Line::from("  c                 complete selected task"),
            Line::from("  d / p / s         cycle department / priority / status filter"),
            Line::from("  x                 clear all filters"),
            Line::from(""),
            Line::from(Span::styled("Assistant", Style::default().add_modifier(Modifier::BOLD))),
            Line::from("  i                 focus the question input"),
            Line::from("  1-3               quick actions"),
            Line::from("  Up/Down           scroll the transcript"),
            Line::from(""),
            Line::from(Span::styled("Settings", Style::default().add_modifier(Modifier::BOLD))),
            Line::from("  c                 clear chat history"),
            Line::from("  r                 reset all tasks"),
            Line::from(""),
            Line::from(Span::styled(
                "Press any key to close",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let help = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Help")
                .border_style(Style::default().fg(ACCENT_BLUE)),
        );
        f.render_widget(help, area);
    }

    /// Render the status bar at the bottom of the screen.
    fn render_status_bar(&self, f: &mut Frame, area: Rect) {
        let status_text = if !self.status_message.is_empty() {
            self.status_message.clone()
        } else {
            match self.page {
                Page::Tasks => format!(
                    "Tasks: {} | n new, c complete, d/p/s filter | Press 'h' for help",
                    self.filtered_tasks.len()
                ),
                Page::Assistant => {
                    "i ask a question, 1-3 quick actions | Press 'h' for help".to_string()
                }
                Page::Settings => "c clear chat, r reset tasks | Press 'h' for help".to_string(),
                Page::Dashboard | Page::Analytics => {
                    "Tab to switch page | Press 'h' for help".to_string()
                }
            }
        };
        let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));
        f.render_widget(status, area);
    }

    /// Main render function that dispatches to appropriate view renderers.
    fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(f.area());

        self.render_tabs(f, chunks[0]);

        match self.page {
            Page::Dashboard => self.render_dashboard(f, chunks[1]),
            Page::Tasks => self.render_tasks(f, chunks[1]),
            Page::Assistant => self.render_assistant(f, chunks[1]),
            Page::Analytics => self.render_analytics(f, chunks[1]),
            Page::Settings => self.render_settings(f, chunks[1]),
        }

        self.render_status_bar(f, chunks[2]);

        match self.state {
            AppState::NewTask => self.render_task_form(f),
            AppState::Confirm => self.render_confirm(f),
            AppState::Help => self.render_help(f),
            AppState::Browse => {}
        }
    }

    /// Main event loop for the TUI application.
    ///
    /// Handles rendering and input processing until the user exits.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.handle_input()? {
                break;
            }
        }
        Ok(())
    }
}

fn form_line<'a>(label: &'a str, value: &'a str, active: bool) -> Line<'a> {
    let marker = if active { "> " } else { "  " };
    let label_style = if active {
        Style::default().fg(ACCENT_BLUE).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    Line::from(vec![
        Span::styled(format!("{marker}{label:<13}"), label_style),
        Span::raw(value),
    ])
}
