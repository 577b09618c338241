// Rust guideline compliant 2026-02-06

//! Integration tests driving the CLI command layer over a temporary data
//! directory.

use campus_app::{CampusContext, Session};
use campus_cli::commands;
use campus_core::Status;
use tempfile::TempDir;

const S1: &str = "AB12CD34EF56";

fn login(ctx: &CampusContext, id: &str, secret: &str) -> Session {
    let roster = ctx.load_roster().expect("load roster");
    campus_app::resolve(&roster, id, secret).expect("resolve session")
}

fn setup() -> (TempDir, CampusContext) {
    let temp = TempDir::new().expect("temp dir");
    commands::init::execute(temp.path(), Some("admin@123".to_string())).expect("init");
    let ctx = CampusContext::discover(Some(temp.path())).expect("discover");

    let admin = login(&ctx, "admin", "admin@123");
    commands::register::execute_student(
        &ctx,
        &admin,
        S1.to_string(),
        "Alice".to_string(),
        None,
    )
    .expect("register student");
    commands::register::execute_faculty(
        &ctx,
        &admin,
        "prof1".to_string(),
        "Fran".to_string(),
        "Writing".to_string(),
        None,
    )
    .expect("register faculty");

    (temp, ctx)
}

#[test]
fn test_init_is_idempotent() {
    let temp = TempDir::new().expect("temp dir");
    commands::init::execute(temp.path(), None).expect("first init");
    commands::init::execute(temp.path(), None).expect("second init");

    let ctx = CampusContext::discover(Some(temp.path())).expect("discover");
    assert_eq!(ctx.load_roster().expect("roster").len(), 1);
}

#[test]
fn test_create_assign_transition_flow() {
    let (_temp, ctx) = setup();

    let faculty = login(&ctx, "prof1", "teacher@123");
    commands::create::execute(
        &ctx,
        &faculty,
        commands::create::CreateArgs {
            title: "Essay".to_string(),
            category: Some("Writing".to_string()),
            priority: Some("high".to_string()),
            deadline: None,
            parent: None,
            assign: Some(S1.to_string()),
        },
    )
    .expect("create and assign");

    let graph = ctx.load_graph().expect("reload graph");
    let tasks = graph.task_records();
    assert_eq!(tasks.len(), 1);
    let task_id = tasks[0].id.clone();
    assert_eq!(
        graph.assignment(&task_id).map(|a| a.student_id.clone()),
        Some(S1.to_string())
    );

    let student = login(&ctx, S1, "student@123");
    commands::transition::execute(&ctx, &student, task_id.clone(), "in_progress".to_string())
        .expect("student starts");
    commands::transition::execute(&ctx, &student, task_id.clone(), "done".to_string())
        .expect("student finishes");

    let graph = ctx.load_graph().expect("reload graph");
    assert_eq!(
        graph.get(&task_id).map(|task| task.status),
        Some(Status::Done)
    );
}

#[test]
fn test_delete_cascades_through_cli() {
    let (_temp, ctx) = setup();

    let faculty = login(&ctx, "prof1", "teacher@123");
    commands::create::execute(
        &ctx,
        &faculty,
        commands::create::CreateArgs {
            title: "Coursework".to_string(),
            category: None,
            priority: None,
            deadline: None,
            parent: None,
            assign: None,
        },
    )
    .expect("create parent");

    let parent_id = ctx.load_graph().expect("graph").task_records()[0].id.clone();
    commands::create::execute(
        &ctx,
        &faculty,
        commands::create::CreateArgs {
            title: "Essay".to_string(),
            category: None,
            priority: None,
            deadline: None,
            parent: Some(parent_id.clone()),
            assign: Some(S1.to_string()),
        },
    )
    .expect("create assigned subtask");

    let admin = login(&ctx, "admin", "admin@123");
    commands::delete::execute(&ctx, &admin, parent_id).expect("cascade delete");

    let graph = ctx.load_graph().expect("reload graph");
    assert!(graph.is_empty());
    assert_eq!(graph.assignment_records().len(), 0);
}

#[test]
fn test_grade_attendance_and_report() {
    let (temp, ctx) = setup();

    let faculty = login(&ctx, "prof1", "teacher@123");
    commands::grade::execute_record(&ctx, &faculty, S1.to_string(), "Math".to_string(), 80)
        .expect("record grade");
    commands::attendance::execute_record(
        &ctx,
        &faculty,
        S1.to_string(),
        "2026-03-02".to_string(),
        true,
    )
    .expect("record attendance");

    let out = temp.path().join("report.csv");
    commands::report::execute_student(
        &ctx,
        &faculty,
        S1.to_string(),
        Some("csv".to_string()),
        Some(out.clone()),
    )
    .expect("render report");

    let document = std::fs::read_to_string(&out).expect("read rendered report");
    assert!(document.contains("Alice"));
    assert!(document.contains("Math"));
    assert!(document.contains("80"));
}

#[test]
fn test_student_cannot_record_grades() {
    let (_temp, ctx) = setup();

    let student = login(&ctx, S1, "student@123");
    let result =
        commands::grade::execute_record(&ctx, &student, S1.to_string(), "Math".to_string(), 100);
    assert!(result.is_err());

    let ledger = ctx.load_ledger().expect("reload ledger");
    assert!(ledger.summary(S1).grades.is_empty(), "ledger unchanged");
}

#[test]
fn test_bad_login_fails() {
    let (_temp, ctx) = setup();
    let roster = ctx.load_roster().expect("roster");
    assert!(campus_app::resolve(&roster, S1, "wrong").is_err());
    assert!(campus_app::resolve(&roster, "ghost", "pw").is_err());
}
