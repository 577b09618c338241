// Rust guideline compliant 2026-02-06

//! Hash-based task id generation and resolution.
//!
//! Task ids have the form `tsk-XXXXXX` where the suffix is the first six hex
//! characters of a SHA-256 digest over the creation inputs. Partial ids are
//! accepted anywhere a task id is expected, as long as they are unambiguous.

use crate::{Error, Result, Task};
use sha2::{Digest, Sha256};

/// Prefix carried by every task id.
pub const ID_PREFIX: &str = "tsk-";

/// Length of the hex suffix in a full task id.
pub const ID_SUFFIX_LEN: usize = 6;

/// Generates a task id from the creation inputs.
///
/// # Arguments
///
/// * `title` - Task title
/// * `author` - Creator identity id
/// * `timestamp` - Creation Unix timestamp
/// * `nonce` - Disambiguation counter for digest collisions
pub fn generate_id(title: &str, author: &str, timestamp: i64, nonce: u32) -> String {
    let mut hasher = Sha256::new();
    hasher.update(title.as_bytes());
    hasher.update(author.as_bytes());
    hasher.update(timestamp.to_le_bytes());
    hasher.update(nonce.to_le_bytes());

    let hash = hasher.finalize();
    let hex = format!("{:x}", hash);
    format!("{}{}", ID_PREFIX, &hex[..ID_SUFFIX_LEN])
}

/// Validates that an id has the canonical task id format.
///
/// # Errors
///
/// Returns a validation error if the prefix or suffix is malformed.
pub fn validate_id_format(id: &str) -> Result<()> {
    let suffix = id
        .strip_prefix(ID_PREFIX)
        .ok_or_else(|| Error::Validation(format!("Task id must start with '{}': {}", ID_PREFIX, id)))?;

    let valid = suffix.len() == ID_SUFFIX_LEN
        && suffix
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c));
    if !valid {
        return Err(Error::Validation(format!(
            "Task id suffix must be {} lowercase hex characters: {}",
            ID_SUFFIX_LEN, id
        )));
    }

    Ok(())
}

/// Resolves a partial task id to its canonical full id.
///
/// A bare suffix fragment is accepted with or without the `tsk-` prefix.
///
/// # Arguments
///
/// * `partial` - Partial or full task id
/// * `tasks` - Tasks to match against
///
/// # Returns
///
/// The canonical task id.
///
/// # Errors
///
/// Returns an error if:
/// - The partial id is empty
/// - No task matches
/// - More than one task matches
pub fn resolve_partial_id(partial: &str, tasks: &[Task]) -> Result<String> {
    let needle = partial.trim();
    if needle.is_empty() {
        return Err(Error::Validation("Task id cannot be empty".to_string()));
    }

    let normalized = if needle.starts_with(ID_PREFIX) {
        needle.to_string()
    } else {
        format!("{}{}", ID_PREFIX, needle)
    };

    let matches: Vec<String> = tasks
        .iter()
        .filter(|task| task.id.starts_with(&normalized))
        .map(|task| task.id.clone())
        .collect();

    match matches.len() {
        0 => Err(Error::NotFound(needle.to_string())),
        1 => Ok(matches.into_iter().next().unwrap_or_default()),
        _ => Err(Error::AmbiguousId(needle.to_string(), matches)),
    }
}
