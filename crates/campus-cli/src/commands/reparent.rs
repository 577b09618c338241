// Rust guideline compliant 2026-02-06

//! Implementation of the `campus task reparent` command.
//!
//! Moves a task under a new parent, or to the root when no parent is given.

use crate::commands::resolve_task_id;
use crate::output_mode::is_json_output;
use crate::terminal;
use anyhow::Result;
use campus_app::{CampusContext, Session, SuccessEnvelope};
use serde_json::json;

/// Reparents a task.
///
/// # Errors
///
/// Returns an error if the caller may not modify the task, an id does not
/// resolve, or the move would make the task its own ancestor.
pub fn execute(
    ctx: &CampusContext,
    session: &Session,
    id: String,
    parent: Option<String>,
) -> Result<()> {
    let caller = session.caller();

    let (task_id, parent_id) = ctx.with_exclusive(|| {
        let mut graph = ctx.load_graph()?;
        let task_id = resolve_task_id(&graph, &id)?;
        let parent_id = match &parent {
            Some(partial) => Some(resolve_task_id(&graph, partial)?),
            None => None,
        };
        graph.reparent(&caller, &task_id, parent_id.as_deref())?;
        ctx.save_graph(&graph)?;
        Ok((task_id, parent_id))
    })?;

    if is_json_output() {
        let envelope = SuccessEnvelope::new(json!({
            "id": task_id,
            "parent": parent_id,
        }));
        println!("{}", serde_json::to_string_pretty(&envelope)?);
    } else {
        match parent_id {
            Some(parent_id) => {
                terminal::print_success(&format!("Moved {} under {}", task_id, parent_id))
            }
            None => terminal::print_success(&format!("Moved {} to the root", task_id)),
        }
    }
    Ok(())
}
