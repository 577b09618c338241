// Rust guideline compliant 2026-02-06

//! Role-scoped access control.
//!
//! A single static table maps each role to its capability set. Every mutating
//! operation takes the caller as an explicit value and calls [`require`]
//! before reading any state, so a denied call never observes or touches data.

use crate::models::Role;
use crate::{Error, Result};
use serde::Serialize;
use std::fmt;

/// A named permission checked before an operation proceeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Register a new identity of any role.
    RegisterIdentity,
    /// Deactivate an identity.
    DeactivateIdentity,
    /// Reset an identity's credential.
    ResetCredential,
    /// Create a task or subtask.
    CreateTask,
    /// Assign a task to a student.
    AssignTask,
    /// Modify a task (status, parent) as its owner.
    ModifyTask,
    /// Transition a task the caller is assigned to.
    TransitionAssignedTask,
    /// Delete a task and its subtree.
    DeleteTask,
    /// Record or remove a grade.
    RecordGrade,
    /// Record or remove an attendance entry.
    RecordAttendance,
    /// Read records and reports for any student.
    ViewAllRecords,
    /// Read the caller's own records and reports.
    ViewOwnRecords,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Capability::RegisterIdentity => "register identity",
            Capability::DeactivateIdentity => "deactivate identity",
            Capability::ResetCredential => "reset credential",
            Capability::CreateTask => "create task",
            Capability::AssignTask => "assign task",
            Capability::ModifyTask => "modify task",
            Capability::TransitionAssignedTask => "transition assigned task",
            Capability::DeleteTask => "delete task",
            Capability::RecordGrade => "record grade",
            Capability::RecordAttendance => "record attendance",
            Capability::ViewAllRecords => "view all records",
            Capability::ViewOwnRecords => "view own records",
        };
        f.write_str(name)
    }
}

/// The authenticated identity and role on whose behalf an operation runs.
///
/// Threaded explicitly into every task graph and ledger call; there is no
/// ambient "current user" state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    /// Identity id of the caller.
    pub id: String,
    /// Role resolved at authentication.
    pub role: Role,
}

impl Caller {
    /// Creates a caller value.
    pub fn new(id: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            role,
        }
    }
}

const ADMIN_CAPABILITIES: &[Capability] = &[
    Capability::RegisterIdentity,
    Capability::DeactivateIdentity,
    Capability::ResetCredential,
    Capability::CreateTask,
    Capability::AssignTask,
    Capability::ModifyTask,
    Capability::TransitionAssignedTask,
    Capability::DeleteTask,
    Capability::RecordGrade,
    Capability::RecordAttendance,
    Capability::ViewAllRecords,
    Capability::ViewOwnRecords,
];

const FACULTY_CAPABILITIES: &[Capability] = &[
    Capability::CreateTask,
    Capability::AssignTask,
    Capability::ModifyTask,
    Capability::DeleteTask,
    Capability::RecordGrade,
    Capability::RecordAttendance,
    Capability::ViewAllRecords,
    Capability::ViewOwnRecords,
];

const STUDENT_CAPABILITIES: &[Capability] = &[
    Capability::TransitionAssignedTask,
    Capability::ViewOwnRecords,
];

/// Returns the fixed capability set carried by a role.
pub fn permissions_for(role: Role) -> &'static [Capability] {
    match role {
        Role::Admin => ADMIN_CAPABILITIES,
        Role::Faculty => FACULTY_CAPABILITIES,
        Role::Student => STUDENT_CAPABILITIES,
    }
}

/// Returns whether a role carries a capability.
pub fn has_capability(role: Role, capability: Capability) -> bool {
    permissions_for(role).contains(&capability)
}

/// Rejects the call unless the caller's role carries the capability.
///
/// # Errors
///
/// Returns `PermissionDenied` naming the role and the missing capability.
pub fn require(caller: &Caller, capability: Capability) -> Result<()> {
    if has_capability(caller.role, capability) {
        return Ok(());
    }
    Err(Error::PermissionDenied(format!(
        "{:?} cannot {}",
        caller.role, capability
    )))
}
