// Rust guideline compliant 2026-02-06

//! Implementation of the `campus grade` commands.

use crate::output_mode::is_json_output;
use crate::terminal;
use anyhow::Result;
use campus_app::{CampusContext, Session, SuccessEnvelope};
use serde_json::json;

/// Records or updates a grade.
///
/// # Errors
///
/// Returns an error if the caller may not record grades, the student is
/// unknown, or the marks are out of range.
pub fn execute_record(
    ctx: &CampusContext,
    session: &Session,
    student_id: String,
    subject: String,
    marks: u8,
) -> Result<()> {
    let caller = session.caller();

    ctx.with_exclusive(|| {
        let roster = ctx.load_roster()?;
        let mut ledger = ctx.load_ledger()?;
        ledger.record_grade(&caller, &roster, &student_id, &subject, marks)?;
        ctx.save_ledger(&ledger)?;
        Ok(())
    })?;

    if is_json_output() {
        let envelope = SuccessEnvelope::new(json!({
            "student": student_id,
            "subject": subject,
            "marks": marks,
        }));
        println!("{}", serde_json::to_string_pretty(&envelope)?);
    } else {
        terminal::print_success(&format!(
            "Grade recorded for {} in {}: {}",
            student_id, subject, marks
        ));
    }
    Ok(())
}

/// Removes a grade.
///
/// # Errors
///
/// Returns an error if the caller may not record grades or no such grade
/// exists.
pub fn execute_remove(
    ctx: &CampusContext,
    session: &Session,
    student_id: String,
    subject: String,
) -> Result<()> {
    let caller = session.caller();

    ctx.with_exclusive(|| {
        let mut ledger = ctx.load_ledger()?;
        ledger.remove_grade(&caller, &student_id, &subject)?;
        ctx.save_ledger(&ledger)?;
        Ok(())
    })?;

    if is_json_output() {
        let envelope = SuccessEnvelope::new(json!({
            "student": student_id,
            "subject": subject,
        }));
        println!("{}", serde_json::to_string_pretty(&envelope)?);
    } else {
        terminal::print_success(&format!("Grade removed for {} in {}", student_id, subject));
    }
    Ok(())
}
