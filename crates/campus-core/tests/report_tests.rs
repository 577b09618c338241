// Rust guideline compliant 2026-02-06

//! Unit tests for the query/report facade.

use campus_core::report::{institution_report, student_report};
use campus_core::{Caller, Error, Identity, Ledger, Role, Roster, Status, Task, TaskGraph};

const S1: &str = "AB12CD34EF56";
const S2: &str = "GH78IJ90KL12";

fn admin() -> Caller {
    Caller::new("admin", Role::Admin)
}

fn faculty() -> Caller {
    Caller::new("prof1", Role::Faculty)
}

fn fixtures() -> (Roster, TaskGraph, Ledger) {
    let mut roster = Roster::new();
    roster
        .register(
            &admin(),
            Identity::student(S1.to_string(), "Alice".to_string(), "student@123"),
        )
        .expect("register S1");
    roster
        .register(
            &admin(),
            Identity::student(S2.to_string(), "Bob".to_string(), "student@123"),
        )
        .expect("register S2");
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

    let mut graph = TaskGraph::new();
    let mut essay = Task::new("Essay".to_string(), "Writing".to_string(), "prof1".to_string());
    essay.category = "Writing".to_string();
    let essay_id = graph.create_task(&faculty(), essay).expect("create essay");
    graph
        .assign(&faculty(), &essay_id, S1, &roster)
        .expect("assign essay");

    let mut ledger = Ledger::new();
    ledger
        .record_grade(&faculty(), &roster, S1, "Math", 80)
        .expect("grade math");
    ledger
        .record_grade(&faculty(), &roster, S1, "Writing", 90)
        .expect("grade writing");

    (roster, graph, ledger)
}

#[test]
fn test_student_reads_own_report() {
    let (roster, graph, ledger) = fixtures();
    let caller = Caller::new(S1, Role::Student);

    let report = student_report(&caller, &roster, &graph, &ledger, S1)
        .expect("students read their own record");
    assert_eq!(report.student_id, S1);
    assert_eq!(report.display_name, "Alice");
    assert_eq!(report.summary.grades.len(), 2);
    assert!((report.summary.average_grade - 85.0).abs() < f64::EPSILON);
    assert_eq!(report.tasks.len(), 1);
    assert_eq!(report.tasks[0].title, "Essay");
    assert_eq!(report.tasks[0].status, Status::Open);
}

#[test]
fn test_student_cannot_read_other_report() {
    let (roster, graph, ledger) = fixtures();
    let caller = Caller::new(S2, Role::Student);

    let result = student_report(&caller, &roster, &graph, &ledger, S1);
    assert!(matches!(result, Err(Error::PermissionDenied(_))));
}

#[test]
fn test_faculty_reads_any_report() {
    let (roster, graph, ledger) = fixtures();
    let report =
        student_report(&faculty(), &roster, &graph, &ledger, S1).expect("faculty read any record");
    assert_eq!(report.student_id, S1);
}

#[test]
fn test_report_for_unknown_student() {
    let (roster, graph, ledger) = fixtures();
    let result = student_report(&faculty(), &roster, &graph, &ledger, "ZZ99ZZ99ZZ99");
    assert!(matches!(result, Err(Error::NotFound(_))));
}

#[test]
fn test_report_for_non_student_identity() {
    let (roster, graph, ledger) = fixtures();
    let result = student_report(&admin(), &roster, &graph, &ledger, "prof1");
    assert!(matches!(result, Err(Error::Validation(_))));
}

#[test]
fn test_institution_report_covers_all_students_sorted() {
    let (roster, graph, ledger) = fixtures();
    let report =
        institution_report(&admin(), &roster, &graph, &ledger).expect("admin reads everything");

    assert_eq!(report.students.len(), 2);
    assert_eq!(report.students[0].student_id, S1);
    assert_eq!(report.students[1].student_id, S2);

    // Students without ledger entries still appear, with zero rates.
    assert_eq!(report.students[1].summary.attendance_rate, 0.0);
    assert!(report.students[1].summary.grades.is_empty());
}

#[test]
fn test_institution_report_denied_for_students() {
    let (roster, graph, ledger) = fixtures();
    let caller = Caller::new(S1, Role::Student);
    let result = institution_report(&caller, &roster, &graph, &ledger);
    assert!(matches!(result, Err(Error::PermissionDenied(_))));
}
