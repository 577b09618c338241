// Rust guideline compliant 2026-02-06

//! Implementation of the `campus attendance` commands.

use crate::output_mode::is_json_output;
use crate::terminal;
use anyhow::Result;
use campus_app::{AppError, CampusContext, Session, SuccessEnvelope};
use chrono::NaiveDate;
use serde_json::json;

fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AppError::InvalidInput(format!("Invalid date '{}'. Use YYYY-MM-DD", raw)))
}

/// Records or updates an attendance entry.
///
/// # Errors
///
/// Returns an error if the caller may not record attendance, the student is
/// unknown, or the date is malformed.
pub fn execute_record(
    ctx: &CampusContext,
    session: &Session,
    student_id: String,
    date: String,
    present: bool,
) -> Result<()> {
    let caller = session.caller();
    let date = parse_date(&date)?;

    ctx.with_exclusive(|| {
        let roster = ctx.load_roster()?;
        let mut ledger = ctx.load_ledger()?;
        ledger.record_attendance(&caller, &roster, &student_id, date, present)?;
        ctx.save_ledger(&ledger)?;
        Ok(())
    })?;

    if is_json_output() {
        let envelope = SuccessEnvelope::new(json!({
            "student": student_id,
            "date": date,
            "present": present,
        }));
        println!("{}", serde_json::to_string_pretty(&envelope)?);
    } else {
        let state = if present { "present" } else { "absent" };
        terminal::print_success(&format!(
            "Attendance for {} on {}: {}",
            student_id, date, state
        ));
    }
    Ok(())
}

/// Removes an attendance entry.
///
/// # Errors
///
/// Returns an error if the caller may not record attendance or no such entry
/// exists.
pub fn execute_remove(
    ctx: &CampusContext,
    session: &Session,
    student_id: String,
    date: String,
) -> Result<()> {
    let caller = session.caller();
    let date = parse_date(&date)?;

    ctx.with_exclusive(|| {
        let mut ledger = ctx.load_ledger()?;
        ledger.remove_attendance(&caller, &student_id, date)?;
        ctx.save_ledger(&ledger)?;
        Ok(())
    })?;

    if is_json_output() {
        let envelope = SuccessEnvelope::new(json!({
            "student": student_id,
            "date": date,
        }));
        println!("{}", serde_json::to_string_pretty(&envelope)?);
    } else {
        terminal::print_success(&format!(
            "Attendance entry removed for {} on {}",
            student_id, date
        ));
    }
    Ok(())
}
