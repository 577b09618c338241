// Rust guideline compliant 2026-02-09

//! Listing and filtering helpers for tasks.

use crate::error::{AppError, Result};
use campus_core::{Priority, Status, Task};

/// List options for filtering and sorting tasks.
#[derive(Debug, Clone, Default)]
pub struct TaskListOptions {
    /// Filter by status.
    pub status: Option<Status>,
    /// Filter by category (case-insensitive).
    pub category: Option<String>,
    /// Filter by creator identity id.
    pub created_by: Option<String>,
    /// Filter by priority.
    pub priority: Option<Priority>,
    /// Sort field override.
    pub sort: Option<String>,
}

/// Parses a status string into a `Status` value.
///
/// # Errors
///
/// Returns an error if the status is invalid.
pub fn parse_status(value: &str) -> Result<Status> {
    match value.to_lowercase().as_str() {
        "open" => Ok(Status::Open),
        "in_progress" | "in-progress" => Ok(Status::InProgress),
        "done" => Ok(Status::Done),
        "cancelled" => Ok(Status::Cancelled),
        _ => Err(AppError::InvalidInput(format!(
            "Invalid status filter: {}",
            value
        ))),
    }
}

/// Parses a priority string into a `Priority` value.
///
/// # Errors
///
/// Returns an error if the priority is invalid.
pub fn parse_priority(value: &str) -> Result<Priority> {
    match value.to_lowercase().as_str() {
        "low" => Ok(Priority::Low),
        "medium" => Ok(Priority::Medium),
        "high" => Ok(Priority::High),
        _ => Err(AppError::InvalidInput(format!(
            "Invalid priority: {}",
            value
        ))),
    }
}

/// Filters and sorts a list of tasks based on `TaskListOptions`.
///
/// The default order is by id; `sort` accepts `title`, `priority`,
/// `deadline`, `created_at`, and `updated_at` (timestamps newest first).
pub fn list_tasks(mut tasks: Vec<Task>, options: &TaskListOptions) -> Vec<Task> {
    if let Some(status) = options.status {
        tasks.retain(|task| task.status == status);
    }

    if let Some(category) = &options.category {
        let needle = category.to_lowercase();
        tasks.retain(|task| task.category.to_lowercase() == needle);
    }

    if let Some(created_by) = &options.created_by {
        tasks.retain(|task| &task.created_by == created_by);
    }

    if let Some(priority) = options.priority {
        tasks.retain(|task| task.priority == priority);
    }

    match options.sort.as_deref() {
        Some("title") => tasks.sort_by(|a, b| a.title.cmp(&b.title)),
        Some("priority") => tasks.sort_by(|a, b| b.priority.cmp(&a.priority)),
        Some("deadline") => tasks.sort_by(|a, b| a.deadline.cmp(&b.deadline)),
        Some("created_at") => tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        Some("updated_at") => tasks.sort_by(|a, b| b.updated_at.cmp(&a.updated_at)),
        _ => tasks.sort_by(|a, b| a.id.cmp(&b.id)),
    }

    tasks
}
