// Rust guideline compliant 2026-02-06

//! Finite State Machine module for task status transitions.
//!
//! The FSM enforces the following transitions:
//!
//! - Open → InProgress (assignee or owner)
//! - InProgress → Done (assignee or owner)
//! - Open → Cancelled (owner only)
//! - InProgress → Cancelled (owner only)
//!
//! Done and Cancelled are terminal: no role may leave them. "Owner" means the
//! task creator, a faculty member whose own-created subtree contains the
//! task, or an admin.

use crate::{Error, Result, Status, Task};

/// Who is driving a status transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionActor {
    /// The student currently assigned to the task.
    Assignee,
    /// The task creator, a subtree-owning faculty member, or an admin.
    Owner,
}

impl Status {
    /// Returns true for states with no outgoing transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Status::Done | Status::Cancelled)
    }

    /// Checks if a transition to the target status is valid for the actor.
    ///
    /// # Arguments
    ///
    /// * `target` - The target status to transition to
    /// * `actor` - Who is driving the transition
    ///
    /// # Errors
    ///
    /// Returns `InvalidTransition` when the edge is absent from the machine,
    /// including every edge out of a terminal state, and `PermissionDenied`
    /// when the edge exists but is reserved to the owner.
    pub fn can_transition_to(&self, target: Status, actor: TransitionActor) -> Result<()> {
        let invalid = || Error::InvalidTransition {
            from: *self,
            to: target,
        };

        if self.is_terminal() {
            return Err(invalid());
        }

        match (*self, target) {
            (Status::Open, Status::InProgress) | (Status::InProgress, Status::Done) => Ok(()),
            (Status::Open, Status::Cancelled) | (Status::InProgress, Status::Cancelled) => {
                match actor {
                    TransitionActor::Owner => Ok(()),
                    TransitionActor::Assignee => Err(Error::PermissionDenied(
                        "only the task creator or an admin can cancel a task".to_string(),
                    )),
                }
            }
            _ => Err(invalid()),
        }
    }

    /// Returns the list of valid target states for the current status.
    ///
    /// # Arguments
    ///
    /// * `actor` - Who is driving the transition
    pub fn valid_transitions(&self, actor: TransitionActor) -> Vec<Status> {
        let mut transitions = Vec::new();

        match self {
            Status::Open => {
                transitions.push(Status::InProgress);
                if actor == TransitionActor::Owner {
                    transitions.push(Status::Cancelled);
                }
            }
            Status::InProgress => {
                transitions.push(Status::Done);
                if actor == TransitionActor::Owner {
                    transitions.push(Status::Cancelled);
                }
            }
            Status::Done | Status::Cancelled => {}
        }

        transitions
    }
}

/// Validates a status transition for a task.
///
/// # Arguments
///
/// * `task` - The task to transition
/// * `new_status` - The target status
/// * `actor` - Who is driving the transition
///
/// # Errors
///
/// Returns an error if the transition violates the FSM rules or is reserved
/// to the owner.
pub fn validate_transition(task: &Task, new_status: Status, actor: TransitionActor) -> Result<()> {
    task.status.can_transition_to(new_status, actor)
}
