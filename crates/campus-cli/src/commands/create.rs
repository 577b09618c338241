// Rust guideline compliant 2026-02-06

//! Implementation of the `campus task create` command.
//!
//! Creates a new task, optionally nested under a parent, optionally assigned
//! to a student. The task is persisted before the assignment so a failure
//! between the two writes leaves at most an unassigned task.

use crate::commands::resolve_task_id;
use crate::output_mode::is_json_output;
use crate::terminal;
use anyhow::Result;
use campus_app::{AppError, CampusContext, Session, SuccessEnvelope};
use campus_core::Task;
use chrono::{Local, NaiveDate};
use serde_json::json;

/// Arguments for task creation.
#[derive(Debug, Clone)]
pub struct CreateArgs {
    /// Task title.
    pub title: String,
    /// Category; defaults to the configured value.
    pub category: Option<String>,
    /// Priority (low/medium/high); defaults to the configured value.
    pub priority: Option<String>,
    /// Due date in YYYY-MM-DD form.
    pub deadline: Option<String>,
    /// Parent task id, full or partial.
    pub parent: Option<String>,
    /// Student to assign after creation.
    pub assign: Option<String>,
}

/// Creates a new task.
///
/// # Errors
///
/// Returns an error if:
/// - The caller may not create tasks
/// - The deadline is malformed or in the past
/// - The parent id does not resolve
/// - The assignee is unknown, deactivated, or not a student
pub fn execute(ctx: &CampusContext, session: &Session, args: CreateArgs) -> Result<()> {
    let caller = session.caller();
    let config = ctx.load_config()?;

    let category = args.category.unwrap_or(config.default_category);
    let priority = match &args.priority {
        Some(value) => campus_app::parse_priority(value)?,
        None => config.default_priority,
    };
    let deadline = parse_deadline(args.deadline.as_deref())?;

    let (task_id, assignee) = ctx.with_exclusive(|| {
        let roster = ctx.load_roster()?;
        let mut graph = ctx.load_graph()?;

        let parent_id = match &args.parent {
            Some(partial) => Some(resolve_task_id(&graph, partial)?),
            None => None,
        };

        let mut task = Task::new(args.title.clone(), category.clone(), caller.id.clone());
        task.priority = priority;
        task.deadline = deadline;
        task.parent_id = parent_id;
        task.validate_deadline(Local::now().date_naive())?;

        let task_id = graph.create_task(&caller, task)?;
        ctx.save_graph(&graph)?;

        let mut assignee = None;
        if let Some(student_id) = &args.assign {
            graph.assign(&caller, &task_id, student_id, &roster)?;
            ctx.save_graph(&graph)?;
            assignee = Some(student_id.clone());
        }

        Ok((task_id, assignee))
    })?;

    if is_json_output() {
        let envelope = SuccessEnvelope::new(json!({
            "id": task_id,
            "assignee": assignee,
        }));
        println!("{}", serde_json::to_string_pretty(&envelope)?);
        return Ok(());
    }

    terminal::print_success(&format!("Created task {}", task_id));
    if let Some(student_id) = assignee {
        println!("  Assigned to: {}", student_id);
    }
    Ok(())
}

fn parse_deadline(value: Option<&str>) -> Result<Option<NaiveDate>, AppError> {
    match value {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| {
                AppError::InvalidInput(format!("Invalid deadline '{}'. Use YYYY-MM-DD", raw))
            }),
        None => Ok(None),
    }
}
