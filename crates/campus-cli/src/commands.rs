// Rust guideline compliant 2026-02-06

//! Command implementations for the Campus CLI.

pub mod assign;
pub mod attendance;
pub mod create;
pub mod deactivate;
pub mod delete;
pub mod grade;
pub mod init;
pub mod list;
pub mod passwd;
pub mod register;
pub mod reparent;
pub mod report;
pub mod show;
pub mod transition;
pub mod whoami;

use campus_core::TaskGraph;

/// Resolves a partial task id against the graph's current tasks.
pub(crate) fn resolve_task_id(graph: &TaskGraph, partial: &str) -> campus_core::Result<String> {
    campus_core::ids::resolve_partial_id(partial, &graph.task_records())
}
