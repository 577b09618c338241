// Rust guideline compliant 2026-02-06

//! Unit tests for the task graph module.
//!
//! These tests validate specific examples, edge cases, and error conditions
//! for the task tree, assignments, cascading deletes, and transitions.

use campus_core::{
    Assignment, Caller, Error, Identity, Role, Roster, Status, Task, TaskGraph,
};

const S1: &str = "AB12CD34EF56";
const S2: &str = "GH78IJ90KL12";

fn admin() -> Caller {
    Caller::new("admin", Role::Admin)
}

fn faculty(id: &str) -> Caller {
    Caller::new(id, Role::Faculty)
}

fn student(id: &str) -> Caller {
    Caller::new(id, Role::Student)
}

fn roster() -> Roster {
    let admin = admin();
    let mut roster = Roster::new();
    roster
        .register(
            &admin,
            Identity::student(S1.to_string(), "Alice".to_string(), "student@123"),
        )
        .expect("register S1");
    roster
        .register(
            &admin,
            Identity::student(S2.to_string(), "Bob".to_string(), "student@123"),
        )
        .expect("register S2");
    roster
        .register(
            &admin,
            Identity::faculty(
                "prof1".to_string(),
                "Fran".to_string(),
                "Writing".to_string(),
                "teacher@123",
            ),
        )
        .expect("register faculty");
    roster
}

fn new_task(title: &str, creator: &str) -> Task {
    Task::new(title.to_string(), "work".to_string(), creator.to_string())
}

/// Manually keyed task for graph reconstruction tests.
fn raw_task(id: &str, parent: Option<&str>) -> Task {
    Task {
        id: id.to_string(),
        title: format!("Task {}", id),
        category: "work".to_string(),
        priority: campus_core::Priority::Low,
        deadline: None,
        created_by: "prof1".to_string(),
        status: Status::Open,
        parent_id: parent.map(|p| p.to_string()),
        created_at: 1000,
        updated_at: 1000,
    }
}

#[test]
fn test_create_task_by_faculty() {
    let mut graph = TaskGraph::new();
    let id = graph
        .create_task(&faculty("prof1"), new_task("Essay", "prof1"))
        .expect("faculty should create tasks");
    assert!(graph.get(&id).is_some());
    assert_eq!(graph.get(&id).map(|t| t.status), Some(Status::Open));
}

#[test]
fn test_create_task_missing_parent() {
    let mut graph = TaskGraph::new();
    let mut task = new_task("Essay", "prof1");
    task.parent_id = Some("tsk-ffffff".to_string());
    let result = graph.create_task(&faculty("prof1"), task);
    assert!(matches!(result, Err(Error::NotFound(_))));
}

#[test]
fn test_create_subtask_under_foreign_parent_denied() {
    let mut graph = TaskGraph::new();
    let parent_id = graph
        .create_task(&faculty("prof1"), new_task("Course plan", "prof1"))
        .expect("create parent");

    let mut subtask = new_task("Stolen subtask", "prof2");
    subtask.parent_id = Some(parent_id);
    let result = graph.create_task(&faculty("prof2"), subtask);
    assert!(
        matches!(result, Err(Error::PermissionDenied(_))),
        "Faculty may only nest under their own subtree"
    );
}

#[test]
fn test_create_task_rejects_empty_title() {
    let mut graph = TaskGraph::new();
    let result = graph.create_task(&faculty("prof1"), new_task("  ", "prof1"));
    assert!(matches!(result, Err(Error::Validation(_))));
}

#[test]
fn test_assign_and_replace() {
    let roster = roster();
    let mut graph = TaskGraph::new();
    let id = graph
        .create_task(&faculty("prof1"), new_task("Essay", "prof1"))
        .expect("create task");

    graph
        .assign(&faculty("prof1"), &id, S1, &roster)
        .expect("assign S1");
    assert_eq!(
        graph.assignment(&id).map(|a| a.student_id.as_str()),
        Some(S1)
    );
    assert_eq!(graph.list_for_student(S1).count(), 1);

    // Reassignment replaces, never appends.
    graph
        .assign(&faculty("prof1"), &id, S2, &roster)
        .expect("reassign S2");
    assert_eq!(
        graph.assignment(&id).map(|a| a.student_id.as_str()),
        Some(S2)
    );
    assert_eq!(graph.list_for_student(S1).count(), 0);
    assert_eq!(graph.list_for_student(S2).count(), 1);
    assert_eq!(graph.assignments().count(), 1);
}

#[test]
fn test_assign_unknown_student() {
    let roster = roster();
    let mut graph = TaskGraph::new();
    let id = graph
        .create_task(&faculty("prof1"), new_task("Essay", "prof1"))
        .expect("create task");

    let result = graph.assign(&faculty("prof1"), &id, "ZZ99ZZ99ZZ99", &roster);
    assert!(matches!(result, Err(Error::NotFound(_))));
}

#[test]
fn test_assign_non_student_identity() {
    let roster = roster();
    let mut graph = TaskGraph::new();
    let id = graph
        .create_task(&faculty("prof1"), new_task("Essay", "prof1"))
        .expect("create task");

    let result = graph.assign(&faculty("prof1"), &id, "prof1", &roster);
    assert!(matches!(result, Err(Error::Validation(_))));
}

#[test]
fn test_assign_deactivated_student() {
    let mut roster = roster();
    roster.deactivate(&admin(), S1).expect("deactivate S1");

    let mut graph = TaskGraph::new();
    let id = graph
        .create_task(&faculty("prof1"), new_task("Essay", "prof1"))
        .expect("create task");

    let result = graph.assign(&faculty("prof1"), &id, S1, &roster);
    assert!(matches!(result, Err(Error::Deactivated(_))));
}

#[test]
fn test_assignee_transition_flow() {
    let roster = roster();
    let mut graph = TaskGraph::new();
    let id = graph
        .create_task(&faculty("prof1"), new_task("Essay", "prof1"))
        .expect("create task");
    graph
        .assign(&faculty("prof1"), &id, S1, &roster)
        .expect("assign");

    graph
        .transition(&student(S1), &id, Status::InProgress)
        .expect("assignee starts the task");
    graph
        .transition(&student(S1), &id, Status::Done)
        .expect("assignee finishes the task");
    assert_eq!(graph.get(&id).map(|t| t.status), Some(Status::Done));
}

#[test]
fn test_unassigned_student_cannot_transition() {
    let roster = roster();
    let mut graph = TaskGraph::new();
    let id = graph
        .create_task(&faculty("prof1"), new_task("Essay", "prof1"))
        .expect("create task");
    graph
        .assign(&faculty("prof1"), &id, S1, &roster)
        .expect("assign");

    let result = graph.transition(&student(S2), &id, Status::InProgress);
    assert!(matches!(result, Err(Error::PermissionDenied(_))));
    assert_eq!(graph.get(&id).map(|t| t.status), Some(Status::Open));
}

#[test]
fn test_assignee_cannot_cancel_creator_can() {
    let roster = roster();
    let mut graph = TaskGraph::new();
    let id = graph
        .create_task(&faculty("prof1"), new_task("Essay", "prof1"))
        .expect("create task");
    graph
        .assign(&faculty("prof1"), &id, S1, &roster)
        .expect("assign");

    let result = graph.transition(&student(S1), &id, Status::Cancelled);
    assert!(matches!(result, Err(Error::PermissionDenied(_))));

    graph
        .transition(&faculty("prof1"), &id, Status::Cancelled)
        .expect("creator cancels");
    assert_eq!(graph.get(&id).map(|t| t.status), Some(Status::Cancelled));
}

#[test]
fn test_done_is_terminal_for_every_role() {
    let roster = roster();
    let mut graph = TaskGraph::new();
    let id = graph
        .create_task(&faculty("prof1"), new_task("Essay", "prof1"))
        .expect("create task");
    graph
        .assign(&faculty("prof1"), &id, S1, &roster)
        .expect("assign");
    graph
        .transition(&faculty("prof1"), &id, Status::InProgress)
        .expect("start");
    graph
        .transition(&faculty("prof1"), &id, Status::Done)
        .expect("finish");

    for caller in [admin(), faculty("prof1"), student(S1)] {
        for target in [Status::Open, Status::InProgress, Status::Cancelled] {
            let result = graph.transition(&caller, &id, target);
            assert!(
                matches!(result, Err(Error::InvalidTransition { .. })),
                "Done → {:?} should fail for {:?}",
                target,
                caller.role
            );
        }
    }
}

#[test]
fn test_foreign_faculty_cannot_transition() {
    let mut graph = TaskGraph::new();
    let id = graph
        .create_task(&faculty("prof1"), new_task("Essay", "prof1"))
        .expect("create task");

    let result = graph.transition(&faculty("prof2"), &id, Status::InProgress);
    assert!(matches!(result, Err(Error::PermissionDenied(_))));
}

#[test]
fn test_delete_cascades_to_descendants() {
    let roster = roster();
    let mut graph = TaskGraph::new();
    let root = graph
        .create_task(&faculty("prof1"), new_task("Course plan", "prof1"))
        .expect("create root");

    let mut child_a = new_task("Unit one", "prof1");
    child_a.parent_id = Some(root.clone());
    let child_a = graph
        .create_task(&faculty("prof1"), child_a)
        .expect("create child a");

    let mut child_b = new_task("Unit two", "prof1");
    child_b.parent_id = Some(root.clone());
    let child_b = graph
        .create_task(&faculty("prof1"), child_b)
        .expect("create child b");

    let mut grandchild = new_task("Essay", "prof1");
    grandchild.parent_id = Some(child_a.clone());
    let grandchild = graph
        .create_task(&faculty("prof1"), grandchild)
        .expect("create grandchild");

    graph
        .assign(&faculty("prof1"), &grandchild, S1, &roster)
        .expect("assign grandchild");

    // Deleting a task with N descendants removes exactly N + 1 records.
    let removed = graph.delete_task(&admin(), &root).expect("cascade delete");
    assert_eq!(removed.len(), 4);
    for id in [&root, &child_a, &child_b, &grandchild] {
        assert!(graph.get(id).is_none(), "{} should be gone", id);
        assert!(
            graph.assignment(id).is_none(),
            "assignment for {} should be gone",
            id
        );
    }
    assert!(graph.is_empty());
    assert_eq!(graph.assignments().count(), 0);
}

#[test]
fn test_delete_by_foreign_faculty_denied() {
    let mut graph = TaskGraph::new();
    let id = graph
        .create_task(&faculty("prof1"), new_task("Essay", "prof1"))
        .expect("create task");

    let result = graph.delete_task(&faculty("prof2"), &id);
    assert!(matches!(result, Err(Error::PermissionDenied(_))));
    assert_eq!(graph.len(), 1);
}

#[test]
fn test_reparent_rejects_cycles() {
    let mut graph = TaskGraph::new();
    let parent = graph
        .create_task(&faculty("prof1"), new_task("Parent", "prof1"))
        .expect("create parent");

    let mut child = new_task("Child", "prof1");
    child.parent_id = Some(parent.clone());
    let child = graph
        .create_task(&faculty("prof1"), child)
        .expect("create child");

    let result = graph.reparent(&faculty("prof1"), &parent, Some(&child));
    assert!(matches!(result, Err(Error::CycleDetected(_))));

    let self_loop = graph.reparent(&faculty("prof1"), &parent, Some(&parent));
    assert!(matches!(self_loop, Err(Error::CycleDetected(_))));
}

#[test]
fn test_reparent_to_root() {
    let mut graph = TaskGraph::new();
    let parent = graph
        .create_task(&faculty("prof1"), new_task("Parent", "prof1"))
        .expect("create parent");

    let mut child = new_task("Child", "prof1");
    child.parent_id = Some(parent.clone());
    let child = graph
        .create_task(&faculty("prof1"), child)
        .expect("create child");

    graph
        .reparent(&faculty("prof1"), &child, None)
        .expect("move to root");
    assert_eq!(graph.get(&child).and_then(|t| t.parent_id.clone()), None);
}

#[test]
fn test_from_records_rejects_cycle() {
    let tasks = vec![
        raw_task("tsk-aaaaaa", Some("tsk-bbbbbb")),
        raw_task("tsk-bbbbbb", Some("tsk-aaaaaa")),
    ];
    let result = TaskGraph::from_records(tasks, Vec::new());
    assert!(matches!(result, Err(Error::CycleDetected(_))));
}

#[test]
fn test_from_records_rejects_missing_parent() {
    let tasks = vec![raw_task("tsk-aaaaaa", Some("tsk-ffffff"))];
    let result = TaskGraph::from_records(tasks, Vec::new());
    assert!(matches!(result, Err(Error::Validation(_))));
}

#[test]
fn test_from_records_rejects_orphan_assignment() {
    let tasks = vec![raw_task("tsk-aaaaaa", None)];
    let assignments = vec![Assignment {
        task_id: "tsk-ffffff".to_string(),
        student_id: S1.to_string(),
        assigned_at: 1000,
    }];
    let result = TaskGraph::from_records(tasks, assignments);
    assert!(matches!(result, Err(Error::Validation(_))));
}

#[test]
fn test_list_by_category_is_case_insensitive_and_restartable() {
    let mut graph = TaskGraph::new();
    let mut essay = new_task("Essay", "prof1");
    essay.category = "Writing".to_string();
    graph
        .create_task(&faculty("prof1"), essay)
        .expect("create essay");
    graph
        .create_task(&faculty("prof1"), new_task("Chores", "prof1"))
        .expect("create chores");

    assert_eq!(graph.list_by_category("WRITING").count(), 1);
    // Restartable: a fresh iterator yields the same sequence.
    assert_eq!(graph.list_by_category("WRITING").count(), 1);
    assert_eq!(graph.list_by_category("work").count(), 1);
    assert_eq!(graph.list_by_category("missing").count(), 0);
}
