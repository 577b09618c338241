// Rust guideline compliant 2026-02-06

//! End-to-end flows across the roster, task graph, ledger, and reports.

use campus_core::{Caller, Error, Identity, Ledger, Role, Roster, Status, Task, TaskGraph};

const S1: &str = "AB12CD34EF56";

fn admin() -> Caller {
    Caller::new("admin", Role::Admin)
}

fn faculty() -> Caller {
    Caller::new("prof1", Role::Faculty)
}

fn student() -> Caller {
    Caller::new(S1, Role::Student)
}

fn roster() -> Roster {
    let mut roster = Roster::new();
    roster
        .register(
            &admin(),
            Identity::student(S1.to_string(), "Alice".to_string(), "student@123"),
        )
        .expect("register student");
    roster
        .register(
            &admin(),
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

/// Faculty creates "Essay", assigns it, and the student drives it to Done.
#[test]
fn test_assignment_lifecycle() {
    let roster = roster();
    let mut graph = TaskGraph::new();

    let essay = Task::new(
        "Essay".to_string(),
        "Writing".to_string(),
        "prof1".to_string(),
    );
    let essay_id = graph.create_task(&faculty(), essay).expect("create essay");
    graph
        .assign(&faculty(), &essay_id, S1, &roster)
        .expect("assign to S1");

    graph
        .transition(&student(), &essay_id, Status::InProgress)
        .expect("S1 starts");
    graph
        .transition(&student(), &essay_id, Status::Done)
        .expect("S1 finishes");

    let assigned: Vec<_> = graph.list_for_student(S1).collect();
    assert_eq!(assigned.len(), 1);
    assert_eq!(assigned[0].status, Status::Done);
    assert_eq!(assigned[0].title, "Essay");
}

/// Admin deletes the parent of an assigned task; the cascade removes the
/// whole subtree and the student's listing no longer contains it.
#[test]
fn test_parent_cascade_clears_student_listing() {
    let roster = roster();
    let mut graph = TaskGraph::new();

    let parent = Task::new(
        "Coursework".to_string(),
        "Writing".to_string(),
        "prof1".to_string(),
    );
    let parent_id = graph.create_task(&faculty(), parent).expect("create parent");

    let mut essay = Task::new(
        "Essay".to_string(),
        "Writing".to_string(),
        "prof1".to_string(),
    );
    essay.parent_id = Some(parent_id.clone());
    let essay_id = graph.create_task(&faculty(), essay).expect("create essay");
    graph
        .assign(&faculty(), &essay_id, S1, &roster)
        .expect("assign essay");
    assert_eq!(graph.list_for_student(S1).count(), 1);

    let removed = graph
        .delete_task(&admin(), &parent_id)
        .expect("admin cascades");
    assert_eq!(removed.len(), 2);
    assert_eq!(graph.list_for_student(S1).count(), 0);
    assert!(graph.assignment(&essay_id).is_none());
}

/// A student attempting to record a grade is rejected before any state
/// changes.
#[test]
fn test_student_grade_attempt_leaves_ledger_unchanged() {
    let roster = roster();
    let mut ledger = Ledger::new();

    let result = ledger.record_grade(&student(), &roster, S1, "Math", 100);
    assert!(matches!(result, Err(Error::PermissionDenied(_))));

    let summary = ledger.summary(S1);
    assert!(summary.grades.is_empty());
    assert_eq!(summary.average_grade, 0.0);
    assert_eq!(summary.attendance_rate, 0.0);
}
