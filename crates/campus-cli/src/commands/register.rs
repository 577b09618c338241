// Rust guideline compliant 2026-02-06

//! Implementation of the `campus register` commands.
//!
//! Registers new student and faculty identities. Newly registered identities
//! get the configured default credential unless one is provided.

use crate::output_mode::is_json_output;
use crate::terminal;
use anyhow::Result;
use campus_app::{CampusContext, Session, SuccessEnvelope};
use campus_core::Identity;
use serde_json::json;

/// Registers a new student.
///
/// # Arguments
///
/// * `ctx` - The data directory context
/// * `session` - The authenticated session
/// * `id` - Roll number (12 uppercase alphanumeric characters)
/// * `name` - Student name
/// * `password` - Optional credential; defaults to the configured value
///
/// # Errors
///
/// Returns an error if the caller may not register identities, the identity
/// fails validation, or the id collides.
pub fn execute_student(
    ctx: &CampusContext,
    session: &Session,
    id: String,
    name: String,
    password: Option<String>,
) -> Result<()> {
    let caller = session.caller();
    let config = ctx.load_config()?;
    let secret = password.unwrap_or(config.default_student_password);

    let registered = ctx.with_exclusive(|| {
        let mut roster = ctx.load_roster()?;
        let identity = Identity::student(id.clone(), name.clone(), &secret);
        let registered = roster.register(&caller, identity)?;
        ctx.save_roster(&roster)?;
        Ok(registered)
    })?;

    if is_json_output() {
        let envelope = SuccessEnvelope::new(json!({ "id": registered, "role": "student" }));
        println!("{}", serde_json::to_string_pretty(&envelope)?);
    } else {
        terminal::print_success(&format!("Registered student {} ({})", name, registered));
    }
    Ok(())
}

/// Registers a new faculty member.
///
/// # Arguments
///
/// * `ctx` - The data directory context
/// * `session` - The authenticated session
/// * `id` - Faculty user id (alphanumeric, at least 4 characters)
/// * `name` - Faculty name
/// * `course` - Course taught
/// * `password` - Optional credential; defaults to the configured value
///
/// # Errors
///
/// Returns an error if the caller may not register identities, the identity
/// fails validation, or the id or derived email collides.
pub fn execute_faculty(
    ctx: &CampusContext,
    session: &Session,
    id: String,
    name: String,
    course: String,
    password: Option<String>,
) -> Result<()> {
    let caller = session.caller();
    let config = ctx.load_config()?;
    let secret = password.unwrap_or(config.default_faculty_password);

    let (registered, email) = ctx.with_exclusive(|| {
        let mut roster = ctx.load_roster()?;
        let identity = Identity::faculty(id.clone(), name.clone(), course.clone(), &secret);
        let email = identity.email.clone();
        let registered = roster.register(&caller, identity)?;
        ctx.save_roster(&roster)?;
        Ok((registered, email))
    })?;

    if is_json_output() {
        let envelope = SuccessEnvelope::new(json!({
            "id": registered,
            "role": "faculty",
            "email": email,
        }));
        println!("{}", serde_json::to_string_pretty(&envelope)?);
    } else {
        let email = email.unwrap_or_default();
        terminal::print_success(&format!(
            "Registered faculty {} ({}) with email {}",
            name, registered, email
        ));
    }
    Ok(())
}
