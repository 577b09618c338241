// Rust guideline compliant 2026-02-06

//! Identity store for students, faculty, and the administrator.
//!
//! Identities are never deleted, only deactivated, so historical tasks and
//! ledger entries keep valid id back-references. Credentials are stored as
//! SHA-256 digests and compared digest-to-digest with a fixed-time
//! comparison; plaintext never reaches the comparison.

use crate::access::{self, Caller, Capability};
use crate::models::{Identity, Role};
use crate::{Error, Result};
use sha2::{Digest, Sha256};
use std::collections::HashMap;

/// Hashes a plaintext credential to its stored hex digest form.
pub fn hash_credential(plaintext: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(plaintext.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Compares two byte strings without early exit.
///
/// Unequal lengths fail immediately; the length of a hex digest is not a
/// secret. Equal-length inputs are always scanned in full.
fn fixed_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}

/// In-memory identity store backed by the roster JSONL file.
pub struct Roster {
    identities: HashMap<String, Identity>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self {
            identities: HashMap::new(),
        }
    }

    /// Rebuilds a roster from persisted records.
    ///
    /// # Errors
    ///
    /// Returns an error if a record fails validation or two records collide
    /// on id (case-insensitive).
    pub fn from_records(records: Vec<Identity>) -> Result<Self> {
        let mut roster = Self::new();
        for identity in records {
            identity.validate()?;
            roster.check_collisions(&identity)?;
            roster.identities.insert(identity.id.clone(), identity);
        }
        Ok(roster)
    }

    /// Registers a new identity on behalf of the caller.
    ///
    /// # Arguments
    ///
    /// * `caller` - The authenticated caller
    /// * `identity` - The identity to register
    ///
    /// # Returns
    ///
    /// The registered identity id.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The caller lacks the register capability
    /// - The identity fails validation
    /// - The id or faculty email collides with an existing identity
    pub fn register(&mut self, caller: &Caller, identity: Identity) -> Result<String> {
        access::require(caller, Capability::RegisterIdentity)?;
        identity.validate()?;
        self.check_collisions(&identity)?;

        let id = identity.id.clone();
        self.identities.insert(id.clone(), identity);
        Ok(id)
    }

    /// Seeds the pre-registered administrator. Used by initialization only.
    ///
    /// # Errors
    ///
    /// Returns an error if the identity fails validation or collides.
    pub fn seed_admin(&mut self, identity: Identity) -> Result<String> {
        if identity.role != Role::Admin {
            return Err(Error::Validation(
                "Seeded identity must hold the admin role".to_string(),
            ));
        }
        identity.validate()?;
        self.check_collisions(&identity)?;

        let id = identity.id.clone();
        self.identities.insert(id.clone(), identity);
        Ok(id)
    }

    fn check_collisions(&self, identity: &Identity) -> Result<()> {
        let id_lower = identity.id.to_lowercase();
        if self
            .identities
            .keys()
            .any(|existing| existing.to_lowercase() == id_lower)
        {
            return Err(Error::DuplicateId(identity.id.clone()));
        }

        if let Some(email) = &identity.email {
            let email_lower = email.to_lowercase();
            if self
                .identities
                .values()
                .filter_map(|existing| existing.email.as_deref())
                .any(|existing| existing.to_lowercase() == email_lower)
            {
                return Err(Error::DuplicateId(email.clone()));
            }
        }

        Ok(())
    }

    /// Authenticates an identity against a presented plaintext credential.
    ///
    /// # Arguments
    ///
    /// * `id` - The identity id
    /// * `plaintext` - The presented credential
    ///
    /// # Returns
    ///
    /// The identity together with its role.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id, `BadCredential` when the digest
    /// does not match, and `Deactivated` for a matching but inactive
    /// identity.
    pub fn authenticate(&self, id: &str, plaintext: &str) -> Result<(&Identity, Role)> {
        let identity = self
            .identities
            .get(id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;

        let presented = hash_credential(plaintext);
        if !fixed_time_eq(presented.as_bytes(), identity.credential_hash.as_bytes()) {
            return Err(Error::BadCredential(id.to_string()));
        }

        if !identity.active {
            return Err(Error::Deactivated(id.to_string()));
        }

        Ok((identity, identity.role))
    }

    /// Deactivates an identity. The record is kept for referential integrity.
    ///
    /// # Errors
    ///
    /// Returns an error if the caller lacks the capability or the id is
    /// unknown.
    pub fn deactivate(&mut self, caller: &Caller, id: &str) -> Result<()> {
        access::require(caller, Capability::DeactivateIdentity)?;
        let identity = self
            .identities
            .get_mut(id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        identity.active = false;
        Ok(())
    }

    /// Replaces an identity's credential with the digest of a new plaintext.
    ///
    /// # Errors
    ///
    /// Returns an error if the caller lacks the capability or the id is
    /// unknown.
    pub fn reset_credential(&mut self, caller: &Caller, id: &str, new_plaintext: &str) -> Result<()> {
        access::require(caller, Capability::ResetCredential)?;
        let identity = self
            .identities
            .get_mut(id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        identity.credential_hash = hash_credential(new_plaintext);
        Ok(())
    }

    /// Returns an identity by id.
    pub fn get(&self, id: &str) -> Option<&Identity> {
        self.identities.get(id)
    }

    /// Returns an active identity by id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id and `Deactivated` for an
    /// inactive one.
    pub fn get_active(&self, id: &str) -> Result<&Identity> {
        let identity = self
            .identities
            .get(id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        if !identity.active {
            return Err(Error::Deactivated(id.to_string()));
        }
        Ok(identity)
    }

    /// Returns all student identities.
    pub fn students(&self) -> impl Iterator<Item = &Identity> {
        self.identities
            .values()
            .filter(|identity| identity.role == Role::Student)
    }

    /// Returns all identities.
    pub fn iter(&self) -> impl Iterator<Item = &Identity> {
        self.identities.values()
    }

    /// Returns the number of identities.
    pub fn len(&self) -> usize {
        self.identities.len()
    }

    /// Returns true if the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.identities.is_empty()
    }

    /// Returns persistence records, sorted by id for stable files.
    pub fn records(&self) -> Vec<Identity> {
        let mut records: Vec<Identity> = self.identities.values().cloned().collect();
        records.sort_by(|a, b| a.id.cmp(&b.id));
        records
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}
