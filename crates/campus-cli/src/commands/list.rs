// Rust guideline compliant 2026-02-06

//! Implementation of the `campus task list` command.

use crate::output::{OutputFormatter, TaskRow};
use anyhow::Result;
use campus_app::{AppError, CampusContext, Session, TaskListOptions};
use campus_core::{access, Capability, Role, Task};

/// Arguments for task listing.
#[derive(Debug, Clone, Default)]
pub struct ListArgs {
    /// Filter by status.
    pub status: Option<String>,
    /// Filter by category.
    pub category: Option<String>,
    /// List tasks assigned to this student.
    pub student: Option<String>,
    /// List tasks assigned to the caller.
    pub mine: bool,
    /// Sort field.
    pub sort: Option<String>,
}

/// Lists tasks visible to the caller.
///
/// Students see their own assigned tasks; faculty and admin see everything
/// unless a student filter narrows the listing.
///
/// # Errors
///
/// Returns an error if a filter fails to parse or the caller may not read
/// the requested listing.
pub fn execute(
    ctx: &CampusContext,
    session: &Session,
    args: ListArgs,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let caller = session.caller();
    let graph = ctx.load_graph()?;

    let student_filter = if args.mine {
        Some(caller.id.clone())
    } else {
        args.student.clone()
    };

    let tasks: Vec<Task> = match &student_filter {
        Some(student_id) => {
            if *student_id == caller.id {
                access::require(&caller, Capability::ViewOwnRecords).map_err(AppError::from)?;
            } else {
                access::require(&caller, Capability::ViewAllRecords).map_err(AppError::from)?;
            }
            graph.list_for_student(student_id).cloned().collect()
        }
        None if caller.role == Role::Student => {
            access::require(&caller, Capability::ViewOwnRecords).map_err(AppError::from)?;
            graph.list_for_student(&caller.id).cloned().collect()
        }
        None => {
            access::require(&caller, Capability::ViewAllRecords).map_err(AppError::from)?;
            graph.tasks().cloned().collect()
        }
    };

    let options = TaskListOptions {
        status: args
            .status
            .as_deref()
            .map(campus_app::parse_status)
            .transpose()?,
        category: args.category.clone(),
        created_by: None,
        priority: None,
        sort: args.sort.clone(),
    };

    let listed = campus_app::list_tasks(tasks, &options);
    let rows: Vec<TaskRow> = listed
        .iter()
        .map(|task| {
            TaskRow::new(
                task,
                graph.assignment(&task.id).map(|a| a.student_id.as_str()),
            )
        })
        .collect();

    println!("{}", formatter.format_task_list(&rows));
    Ok(())
}
