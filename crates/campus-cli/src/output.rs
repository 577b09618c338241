// Rust guideline compliant 2026-02-06

//! Output formatting module for the Campus CLI.
//!
//! This module provides functionality for formatting task data in various
//! output formats (JSON, table, plain text).

use campus_core::Task;
use serde::Serialize;
use serde_json::json;
use std::io::Write;
use tabled::{builder::Builder, settings::Style};
use termcolor::{Buffer, Color, ColorSpec, WriteColor};

/// One task together with its resolved assignee, ready for display.
#[derive(Debug, Clone, Serialize)]
pub struct TaskRow {
    /// Task id.
    pub id: String,
    /// Task title.
    pub title: String,
    /// Task category.
    pub category: String,
    /// Current status.
    pub status: campus_core::Status,
    /// Priority level.
    pub priority: campus_core::Priority,
    /// Optional due date, ISO formatted.
    pub deadline: Option<String>,
    /// Creator identity id.
    pub created_by: String,
    /// Parent task id, if nested.
    pub parent_id: Option<String>,
    /// Assigned student id, if any.
    pub assignee: Option<String>,
}

impl TaskRow {
    /// Builds a display row from a task and its assignee.
    pub fn new(task: &Task, assignee: Option<&str>) -> Self {
        Self {
            id: task.id.clone(),
            title: task.title.clone(),
            category: task.category.clone(),
            status: task.status,
            priority: task.priority,
            deadline: task.deadline.map(|d| d.to_string()),
            created_by: task.created_by.clone(),
            parent_id: task.parent_id.clone(),
            assignee: assignee.map(|id| id.to_string()),
        }
    }
}

/// Output formatter trait.
///
/// Defines the interface for formatting task data in different output
/// formats.
pub trait OutputFormatter {
    /// Formats a single task for display.
    ///
    /// # Arguments
    /// * `row` - The task row to format
    ///
    /// # Returns
    /// A formatted string representation of the task
    fn format_task(&self, row: &TaskRow) -> String;

    /// Formats a list of tasks for display.
    ///
    /// # Arguments
    /// * `rows` - The task rows to format
    ///
    /// # Returns
    /// A formatted string representation of the task list
    fn format_task_list(&self, rows: &[TaskRow]) -> String;

    /// Formats an error message for display.
    ///
    /// # Arguments
    /// * `error` - The error message to format
    ///
    /// # Returns
    /// A formatted error string
    fn format_error(&self, error: &str) -> String;
}

/// JSON output formatter.
///
/// Formats tasks as valid JSON for machine consumption.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_task(&self, row: &TaskRow) -> String {
        serde_json::to_string_pretty(row)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize task" }).to_string())
    }

    fn format_task_list(&self, rows: &[TaskRow]) -> String {
        let output = json!({
            "tasks": rows,
            "total": rows.len(),
        });
        serde_json::to_string_pretty(&output)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize task list" }).to_string())
    }

    fn format_error(&self, error: &str) -> String {
        json!({ "error": error }).to_string()
    }
}

/// Table output formatter.
///
/// Formats tasks as human-readable tables with optional color.
pub struct TableFormatter {
    use_color: bool,
}

impl TableFormatter {
    /// Creates a new table formatter.
    ///
    /// # Arguments
    /// * `use_color` - Whether to use colored output
    ///
    /// # Returns
    /// A new TableFormatter instance
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }
}

impl OutputFormatter for TableFormatter {
    fn format_task(&self, row: &TaskRow) -> String {
        let mut output = String::new();

        output.push_str(&format!("ID:        {}\n", row.id));
        output.push_str(&format!("Title:     {}\n", row.title));
        output.push_str(&format!("Category:  {}\n", row.category));
        output.push_str(&format!("Status:    {:?}\n", row.status));
        output.push_str(&format!("Priority:  {:?}\n", row.priority));
        output.push_str(&format!("Creator:   {}\n", row.created_by));

        if let Some(deadline) = &row.deadline {
            output.push_str(&format!("Deadline:  {}\n", deadline));
        }
        if let Some(parent_id) = &row.parent_id {
            output.push_str(&format!("Parent:    {}\n", parent_id));
        }
        if let Some(assignee) = &row.assignee {
            output.push_str(&format!("Assignee:  {}\n", assignee));
        }

        output
    }

    fn format_task_list(&self, rows: &[TaskRow]) -> String {
        if rows.is_empty() {
            return "No tasks found.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec![
            "ID", "Status", "Priority", "Category", "Title", "Assignee",
        ]);

        for row in rows {
            builder.push_record(vec![
                row.id.clone(),
                format!("{:?}", row.status),
                format!("{:?}", row.priority),
                row.category.clone(),
                row.title.clone(),
                row.assignee.clone().unwrap_or_default(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());

        table.to_string()
    }

    fn format_error(&self, error: &str) -> String {
        if self.use_color {
            let mut buffer = Buffer::ansi();
            let _ = buffer.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
            let _ = write!(buffer, "Error: ");
            let _ = buffer.reset();
            let _ = write!(buffer, "{}", error);
            String::from_utf8_lossy(buffer.as_slice()).to_string()
        } else {
            format!("Error: {}", error)
        }
    }
}

/// Plain text output formatter.
///
/// Formats tasks as simple plain text without tables.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_task(&self, row: &TaskRow) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n", row.id));
        output.push_str(&format!("{}\n", row.title));
        output.push_str(&format!("{}\n", row.category));
        output.push_str(&format!("{:?}\n", row.status));
        if let Some(assignee) = &row.assignee {
            output.push_str(&format!("{}\n", assignee));
        }

        output
    }

    fn format_task_list(&self, rows: &[TaskRow]) -> String {
        if rows.is_empty() {
            return "No tasks found.".to_string();
        }

        let mut output = String::new();
        for row in rows {
            output.push_str(&format!(
                "{} {:?} {:?} {} {}\n",
                row.id, row.status, row.priority, row.category, row.title
            ));
        }
        output
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The desired output format ("json", "table", or "plain")
/// * `use_color` - Whether to use colored output (ignored for JSON)
///
/// # Returns
/// A boxed OutputFormatter instance
pub fn create_formatter(format: &str, use_color: bool) -> Box<dyn OutputFormatter> {
    match format {
        "json" => Box::new(JsonFormatter),
        "plain" => Box::new(PlainFormatter),
        _ => Box::new(TableFormatter::new(use_color)),
    }
}
