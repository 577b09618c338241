// Rust guideline compliant 2026-02-06

//! Implementation of the `campus task assign` command.
//!
//! Assigns a task to a student, replacing any existing assignment.

use crate::commands::resolve_task_id;
use crate::output_mode::is_json_output;
use crate::terminal;
use anyhow::Result;
use campus_app::{CampusContext, Session, SuccessEnvelope};
use serde_json::json;

/// Assigns a task to a student.
///
/// # Errors
///
/// Returns an error if the caller may not assign tasks, the task id does not
/// resolve, or the student is unknown, deactivated, or not a student.
pub fn execute(
    ctx: &CampusContext,
    session: &Session,
    id: String,
    student_id: String,
) -> Result<()> {
    let caller = session.caller();

    let task_id = ctx.with_exclusive(|| {
        let roster = ctx.load_roster()?;
        let mut graph = ctx.load_graph()?;
        let task_id = resolve_task_id(&graph, &id)?;
        graph.assign(&caller, &task_id, &student_id, &roster)?;
        ctx.save_graph(&graph)?;
        Ok(task_id)
    })?;

    if is_json_output() {
        let envelope = SuccessEnvelope::new(json!({
            "id": task_id,
            "assignee": student_id,
        }));
        println!("{}", serde_json::to_string_pretty(&envelope)?);
    } else {
        terminal::print_success(&format!("Assigned {} to {}", task_id, student_id));
    }
    Ok(())
}
