// Rust guideline compliant 2026-02-06

//! Unit tests for CLI output formatting and report rendering.

use campus_cli::output::{create_formatter, TaskRow};
use campus_cli::render::{create_renderer, CsvRenderer, JsonRenderer};
use campus_core::{
    InstitutionReport, Priority, ReportRenderer, Status, StudentReport, StudentSummary, Task,
    TaskLine,
};
use std::collections::BTreeMap;

const S1: &str = "AB12CD34EF56";

fn sample_row() -> TaskRow {
    let mut task = Task::new(
        "Essay".to_string(),
        "Writing".to_string(),
        "prof1".to_string(),
    );
    task.id = "tsk-abc123".to_string();
    task.status = Status::InProgress;
    task.priority = Priority::High;
    TaskRow::new(&task, Some(S1))
}

fn sample_report(grades: &[(&str, u8)]) -> StudentReport {
    let grades: BTreeMap<String, u8> = grades
        .iter()
        .map(|(subject, marks)| (subject.to_string(), *marks))
        .collect();
    let average = if grades.is_empty() {
        0.0
    } else {
        grades.values().map(|&m| f64::from(m)).sum::<f64>() / grades.len() as f64
    };
    StudentReport {
        student_id: S1.to_string(),
        display_name: "Alice".to_string(),
        active: true,
        summary: StudentSummary {
            grades,
            average_grade: average,
            attendance_rate: 0.75,
        },
        tasks: vec![TaskLine {
            id: "tsk-abc123".to_string(),
            title: "Essay".to_string(),
            category: "Writing".to_string(),
            status: Status::Open,
            priority: Priority::Low,
            deadline: None,
        }],
    }
}

#[test]
fn test_json_formatter_round_trips() {
    let formatter = create_formatter("json", false);
    let output = formatter.format_task(&sample_row());

    let value: serde_json::Value = serde_json::from_str(&output).expect("valid JSON");
    assert_eq!(value["id"], "tsk-abc123");
    assert_eq!(value["assignee"], S1);
    assert_eq!(value["status"], "in_progress");
}

#[test]
fn test_json_formatter_list_has_total() {
    let formatter = create_formatter("json", false);
    let output = formatter.format_task_list(&[sample_row()]);
    let value: serde_json::Value = serde_json::from_str(&output).expect("valid JSON");
    assert_eq!(value["total"], 1);
    assert_eq!(value["tasks"][0]["title"], "Essay");
}

#[test]
fn test_table_formatter_contains_fields() {
    let formatter = create_formatter("table", false);
    let output = formatter.format_task(&sample_row());
    assert!(output.contains("tsk-abc123"));
    assert!(output.contains("Essay"));
    assert!(output.contains(S1));

    let list = formatter.format_task_list(&[sample_row()]);
    assert!(list.contains("Essay"));
    assert!(list.contains("Assignee"));
}

#[test]
fn test_table_formatter_empty_list() {
    let formatter = create_formatter("table", false);
    assert_eq!(formatter.format_task_list(&[]), "No tasks found.");
}

#[test]
fn test_plain_formatter_one_line_per_task() {
    let formatter = create_formatter("plain", false);
    let output = formatter.format_task_list(&[sample_row()]);
    assert_eq!(output.lines().count(), 1);
    assert!(output.contains("tsk-abc123"));
}

#[test]
fn test_format_error_without_color() {
    let formatter = create_formatter("table", false);
    assert_eq!(formatter.format_error("boom"), "Error: boom");

    let json = create_formatter("json", false);
    let value: serde_json::Value =
        serde_json::from_str(&json.format_error("boom")).expect("valid JSON");
    assert_eq!(value["error"], "boom");
}

#[test]
fn test_csv_renderer_row_per_grade() {
    let report = sample_report(&[("Math", 80), ("Writing", 90)]);
    let document = CsvRenderer.render_student(&report).expect("render CSV");

    let lines: Vec<&str> = document.trim_end().lines().collect();
    assert_eq!(lines.len(), 3, "header plus one row per grade");
    assert!(lines[0].starts_with("Name,Student Id,Subject"));
    assert!(lines[1].contains("Math"));
    assert!(lines[2].contains("Writing"));
    assert!(lines[1].contains("85.00"), "average carried on each row");
}

#[test]
fn test_csv_renderer_summary_row_without_grades() {
    let report = sample_report(&[]);
    let document = CsvRenderer.render_student(&report).expect("render CSV");

    let lines: Vec<&str> = document.trim_end().lines().collect();
    assert_eq!(lines.len(), 2, "header plus a single summary row");
    assert!(lines[1].contains(S1));
    assert!(lines[1].contains("0.75"));
}

#[test]
fn test_csv_renderer_institution_covers_students() {
    let report = InstitutionReport {
        students: vec![sample_report(&[("Math", 60)]), sample_report(&[])],
    };
    let document = CsvRenderer
        .render_institution(&report)
        .expect("render CSV");
    let lines: Vec<&str> = document.trim_end().lines().collect();
    assert_eq!(lines.len(), 3);
}

#[test]
fn test_json_renderer_round_trips() {
    let report = sample_report(&[("Math", 80)]);
    let document = JsonRenderer.render_student(&report).expect("render JSON");
    let parsed: StudentReport = serde_json::from_str(&document).expect("parse back");
    assert_eq!(parsed, report);
}

#[test]
fn test_create_renderer_rejects_unknown_format() {
    assert!(create_renderer("csv").is_ok());
    assert!(create_renderer("json").is_ok());
    assert!(create_renderer("table").is_ok());
    assert!(create_renderer("pdf").is_err());
}
