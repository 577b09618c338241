// Rust guideline compliant 2026-02-06

//! Implementation of the `campus task show` command.

use crate::commands::resolve_task_id;
use crate::output::{OutputFormatter, TaskRow};
use anyhow::Result;
use campus_app::{AppError, CampusContext, Session};
use campus_core::{access, Capability, Error, Role};

/// Shows the details of a task.
///
/// Students may only show tasks they are assigned to.
///
/// # Errors
///
/// Returns an error if the task id does not resolve or the caller may not
/// read the task.
pub fn execute(
    ctx: &CampusContext,
    session: &Session,
    id: String,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let caller = session.caller();
    let graph = ctx.load_graph()?;

    let task_id = resolve_task_id(&graph, &id).map_err(AppError::from)?;
    let assignment = graph.assignment(&task_id);

    if caller.role == Role::Student {
        let own = assignment.is_some_and(|assignment| assignment.student_id == caller.id);
        if own {
            access::require(&caller, Capability::ViewOwnRecords).map_err(AppError::from)?;
        } else {
            access::require(&caller, Capability::ViewAllRecords).map_err(AppError::from)?;
        }
    }

    let task = graph
        .get(&task_id)
        .ok_or_else(|| AppError::from(Error::NotFound(task_id.clone())))?;
    let row = TaskRow::new(task, assignment.map(|a| a.student_id.as_str()));
    println!("{}", formatter.format_task(&row));
    Ok(())
}
