// Rust guideline compliant 2026-02-06

//! Query and report facade.
//!
//! Pure read projections combining the roster, task graph, and ledger into
//! structured records. Rendering to a document format is the renderer's
//! business; the core knows nothing about output formats or file paths.

use crate::access::{self, Caller, Capability};
use crate::graph::TaskGraph;
use crate::ledger::Ledger;
use crate::models::{Identity, Priority, Role, Status, StudentSummary};
use crate::roster::Roster;
use crate::{Error, Result};
use chrono::NaiveDate;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// One assigned task as it appears in a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskLine {
    /// Task id.
    pub id: String,
    /// Task title.
    pub title: String,
    /// Task category.
    pub category: String,
    /// Current status.
    pub status: Status,
    /// Priority level.
    pub priority: Priority,
    /// Optional due date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
}

/// Structured per-student report record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentReport {
    /// Student id.
    pub student_id: String,
    /// Student display name.
    pub display_name: String,
    /// Whether the identity is still active.
    pub active: bool,
    /// Ledger summary.
    pub summary: StudentSummary,
    /// Tasks currently assigned to the student, sorted by id.
    pub tasks: Vec<TaskLine>,
}

/// Structured report record covering every student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstitutionReport {
    /// Per-student reports, sorted by student id.
    pub students: Vec<StudentReport>,
}

/// Renderer contract consumed by the external report layer.
///
/// Implementations turn the structured records into documents (CSV, JSON,
/// tables); the facade itself never renders.
pub trait ReportRenderer {
    /// Renders a single-student report to a document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be produced.
    fn render_student(&self, report: &StudentReport) -> Result<String>;

    /// Renders the all-students report to a document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be produced.
    fn render_institution(&self, report: &InstitutionReport) -> Result<String>;
}

const PARALLEL_THRESHOLD: usize = 1_000;

/// Builds the report record for one student.
///
/// Students may read their own record; `ViewAllRecords` holders may read
/// anyone's. The access check runs before any state is read.
///
/// # Errors
///
/// Returns an error if the caller is not allowed to read the record, the id
/// is unknown, or the id does not belong to a student.
pub fn student_report(
    caller: &Caller,
    roster: &Roster,
    graph: &TaskGraph,
    ledger: &Ledger,
    student_id: &str,
) -> Result<StudentReport> {
    if caller.id == student_id {
        access::require(caller, Capability::ViewOwnRecords)?;
    } else {
        access::require(caller, Capability::ViewAllRecords)?;
    }

    let identity = roster
        .get(student_id)
        .ok_or_else(|| Error::NotFound(student_id.to_string()))?;
    if identity.role != Role::Student {
        return Err(Error::Validation(format!(
            "{} is not a student",
            student_id
        )));
    }

    Ok(build_student_report(identity, graph, ledger))
}

/// Builds the report record covering every student, sorted by id.
///
/// # Errors
///
/// Returns an error if the caller lacks `ViewAllRecords`.
pub fn institution_report(
    caller: &Caller,
    roster: &Roster,
    graph: &TaskGraph,
    ledger: &Ledger,
) -> Result<InstitutionReport> {
    access::require(caller, Capability::ViewAllRecords)?;

    let mut students: Vec<&Identity> = roster.students().collect();
    students.sort_by(|a, b| a.id.cmp(&b.id));

    let reports: Vec<StudentReport> = if students.len() >= PARALLEL_THRESHOLD {
        students
            .par_iter()
            .map(|identity| build_student_report(identity, graph, ledger))
            .collect()
    } else {
        students
            .iter()
            .map(|identity| build_student_report(identity, graph, ledger))
            .collect()
    };

    Ok(InstitutionReport { students: reports })
}

fn build_student_report(identity: &Identity, graph: &TaskGraph, ledger: &Ledger) -> StudentReport {
    let mut tasks: Vec<TaskLine> = graph
        .list_for_student(&identity.id)
        .map(|task| TaskLine {
            id: task.id.clone(),
            title: task.title.clone(),
            category: task.category.clone(),
            status: task.status,
            priority: task.priority,
            deadline: task.deadline,
        })
        .collect();
    tasks.sort_by(|a, b| a.id.cmp(&b.id));

    StudentReport {
        student_id: identity.id.clone(),
        display_name: identity.display_name.clone(),
        active: identity.active,
        summary: ledger.summary(&identity.id),
        tasks,
    }
}
