// Rust guideline compliant 2026-02-06

//! Implementation of the `campus deactivate` command.
//!
//! Identities are never deleted; deactivation flips the soft lifecycle state
//! so historical tasks and ledger entries keep valid references.

use crate::output_mode::is_json_output;
use crate::terminal;
use anyhow::Result;
use campus_app::{CampusContext, Session, SuccessEnvelope};
use serde_json::json;

/// Deactivates an identity.
///
/// # Errors
///
/// Returns an error if the caller may not deactivate identities or the id is
/// unknown.
pub fn execute(ctx: &CampusContext, session: &Session, id: String) -> Result<()> {
    let caller = session.caller();

    ctx.with_exclusive(|| {
        let mut roster = ctx.load_roster()?;
        roster.deactivate(&caller, &id)?;
        ctx.save_roster(&roster)?;
        Ok(())
    })?;

    if is_json_output() {
        let envelope = SuccessEnvelope::new(json!({ "id": id, "active": false }));
        println!("{}", serde_json::to_string_pretty(&envelope)?);
    } else {
        terminal::print_success(&format!("Deactivated {}", id));
    }
    Ok(())
}
