// Rust guideline compliant 2026-02-06

//! Implementation of the `campus task delete` command.
//!
//! Deletes a task and cascades to every descendant subtask and their
//! assignments.

use crate::commands::resolve_task_id;
use crate::output_mode::is_json_output;
use crate::terminal;
use anyhow::Result;
use campus_app::{CampusContext, Session, SuccessEnvelope};
use serde_json::json;

/// Deletes a task and its subtree.
///
/// # Errors
///
/// Returns an error if the caller may not delete the task or the id does not
/// resolve.
pub fn execute(ctx: &CampusContext, session: &Session, id: String) -> Result<()> {
    let caller = session.caller();

    let removed = ctx.with_exclusive(|| {
        let mut graph = ctx.load_graph()?;
        let task_id = resolve_task_id(&graph, &id)?;
        let removed = graph.delete_task(&caller, &task_id)?;
        ctx.save_graph(&graph)?;
        Ok(removed)
    })?;

    if is_json_output() {
        let envelope = SuccessEnvelope::new(json!({
            "removed": removed,
            "count": removed.len(),
        }));
        println!("{}", serde_json::to_string_pretty(&envelope)?);
    } else {
        terminal::print_success(&format!(
            "Deleted {} task(s): {}",
            removed.len(),
            removed.join(", ")
        ));
    }
    Ok(())
}
