// Rust guideline compliant 2026-02-06

//! Implementation of the `campus passwd` command.

use crate::output_mode::is_json_output;
use crate::terminal;
use anyhow::Result;
use campus_app::{CampusContext, Session, SuccessEnvelope};
use serde_json::json;

/// Resets an identity's credential.
///
/// # Errors
///
/// Returns an error if the caller may not reset credentials or the id is
/// unknown.
pub fn execute(
    ctx: &CampusContext,
    session: &Session,
    id: String,
    new_password: String,
) -> Result<()> {
    let caller = session.caller();

    ctx.with_exclusive(|| {
        let mut roster = ctx.load_roster()?;
        roster.reset_credential(&caller, &id, &new_password)?;
        ctx.save_roster(&roster)?;
        Ok(())
    })?;

    if is_json_output() {
        let envelope = SuccessEnvelope::new(json!({ "id": id }));
        println!("{}", serde_json::to_string_pretty(&envelope)?);
    } else {
        terminal::print_success(&format!("Credential reset for {}", id));
    }
    Ok(())
}
