// Rust guideline compliant 2026-02-09

//! Session resolution: the authentication interface.
//!
//! A session is resolved once per invocation and supplies the identity and
//! role the core trusts for the lifetime of that one operation. There is no
//! ambient "current user"; every core call receives the caller explicitly.

use crate::error::Result;
use campus_core::{Caller, Identity, Role, Roster};

/// The authenticated identity and role for the active invocation.
#[derive(Debug, Clone)]
pub struct Session {
    /// The authenticated identity.
    pub identity: Identity,
    /// The role resolved at authentication.
    pub role: Role,
}

impl Session {
    /// Returns the caller value to thread into core operations.
    #[must_use]
    pub fn caller(&self) -> Caller {
        Caller::new(self.identity.id.clone(), self.role)
    }
}

/// Resolves a session against the roster.
///
/// # Arguments
///
/// * `roster` - The identity store
/// * `id` - The presented identity id
/// * `secret` - The presented plaintext credential
///
/// # Errors
///
/// Returns an error if the id is unknown, the credential does not match, or
/// the identity has been deactivated.
pub fn resolve(roster: &Roster, id: &str, secret: &str) -> Result<Session> {
    let (identity, role) = roster.authenticate(id, secret)?;
    Ok(Session {
        identity: identity.clone(),
        role,
    })
}
