// Rust guideline compliant 2026-02-06

//! Implementation of the `campus whoami` command.

use crate::output_mode::is_json_output;
use anyhow::Result;
use campus_app::{Session, SuccessEnvelope};
use campus_core::permissions_for;
use serde_json::json;

/// Prints the resolved session identity, role, and capability set.
///
/// # Errors
///
/// Returns an error if serialization fails in JSON mode.
pub fn execute(session: &Session) -> Result<()> {
    let capabilities = permissions_for(session.role);

    if is_json_output() {
        let envelope = SuccessEnvelope::new(json!({
            "id": session.identity.id,
            "display_name": session.identity.display_name,
            "role": session.role,
            "capabilities": capabilities,
        }));
        println!("{}", serde_json::to_string_pretty(&envelope)?);
        return Ok(());
    }

    println!(
        "{} ({}) role={:?}",
        session.identity.display_name, session.identity.id, session.role
    );
    println!("Capabilities:");
    for capability in capabilities {
        println!("  - {}", capability);
    }
    Ok(())
}
