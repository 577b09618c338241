// Rust guideline compliant 2026-02-06

//! Implementation of the `campus task transition` command.

use crate::commands::resolve_task_id;
use crate::output_mode::is_json_output;
use crate::terminal;
use anyhow::Result;
use campus_app::{CampusContext, Session, SuccessEnvelope};
use serde_json::json;

/// Transitions a task's status.
///
/// # Errors
///
/// Returns an error if the status is unknown, the task id does not resolve,
/// the caller is neither owner nor assignee, or the transition violates the
/// FSM rules.
pub fn execute(ctx: &CampusContext, session: &Session, id: String, status: String) -> Result<()> {
    let caller = session.caller();
    let new_status = campus_app::parse_status(&status)?;

    let task_id = ctx.with_exclusive(|| {
        let mut graph = ctx.load_graph()?;
        let task_id = resolve_task_id(&graph, &id)?;
        graph.transition(&caller, &task_id, new_status)?;
        ctx.save_graph(&graph)?;
        Ok(task_id)
    })?;

    if is_json_output() {
        let envelope = SuccessEnvelope::new(json!({
            "id": task_id,
            "status": new_status,
        }));
        println!("{}", serde_json::to_string_pretty(&envelope)?);
    } else {
        terminal::print_success(&format!("Task {} is now {:?}", task_id, new_status));
    }
    Ok(())
}
