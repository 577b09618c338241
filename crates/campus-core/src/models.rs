// Rust guideline compliant 2026-02-06

//! Core data models for Campus.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Role of an identity, determining its capability set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Institution administrator.
    Admin,
    /// Faculty member.
    Faculty,
    /// Enrolled student.
    Student,
}

/// Status of a Task in the finite state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Task is open and has not been started.
    Open,
    /// Task is currently being worked on.
    InProgress,
    /// Task is finished. Terminal.
    Done,
    /// Task was cancelled by its owner. Terminal.
    Cancelled,
}

/// Priority level of a Task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Default priority for new tasks.
    #[default]
    Low,
    /// Elevated priority.
    Medium,
    /// Urgent work.
    High,
}

/// A registered person: student, faculty member, or the administrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    /// Unique identifier across all roles (roll number or user id).
    pub id: String,
    /// Display name, alphabetic.
    pub display_name: String,
    /// Role determining the capability set.
    pub role: Role,
    /// Hex-encoded SHA-256 digest of the credential.
    pub credential_hash: String,
    /// Soft lifecycle state. Identities are never deleted.
    #[serde(default = "default_active")]
    pub active: bool,
    /// Course taught, faculty only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    /// Derived institutional email, faculty only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Unix timestamp of registration.
    pub created_at: i64,
}

fn default_active() -> bool {
    true
}

impl Identity {
    /// Creates a new student identity.
    ///
    /// # Arguments
    ///
    /// * `id` - Roll number (12 uppercase alphanumeric characters)
    /// * `display_name` - Student name
    /// * `credential` - Plaintext credential, hashed before storage
    pub fn student(id: String, display_name: String, credential: &str) -> Self {
        Self {
            id,
            display_name,
            role: Role::Student,
            credential_hash: crate::roster::hash_credential(credential),
            active: true,
            course: None,
            email: None,
            created_at: now_timestamp(),
        }
    }

    /// Creates a new faculty identity.
    ///
    /// The institutional email is derived as `{name}.{id}@university.in`,
    /// lowercased.
    ///
    /// # Arguments
    ///
    /// * `id` - Faculty user id (alphanumeric, at least 4 characters)
    /// * `display_name` - Faculty name
    /// * `course` - Course taught
    /// * `credential` - Plaintext credential, hashed before storage
    pub fn faculty(id: String, display_name: String, course: String, credential: &str) -> Self {
        let email = format!(
            "{}.{}@university.in",
            display_name.to_lowercase(),
            id.to_lowercase()
        );
        Self {
            id,
            display_name,
            role: Role::Faculty,
            credential_hash: crate::roster::hash_credential(credential),
            active: true,
            course: Some(course),
            email: Some(email),
            created_at: now_timestamp(),
        }
    }

    /// Creates the administrator identity seeded at initialization.
    pub fn admin(id: String, display_name: String, credential: &str) -> Self {
        Self {
            id,
            display_name,
            role: Role::Admin,
            credential_hash: crate::roster::hash_credential(credential),
            active: true,
            course: None,
            email: None,
            created_at: now_timestamp(),
        }
    }

    /// Validates the identity data.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The display name is empty or contains non-alphabetic characters
    /// - The id does not match the format required by the role
    /// - A faculty identity is missing its course or the course is blank
    pub fn validate(&self) -> crate::Result<()> {
        if self.display_name.is_empty() || !self.display_name.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(crate::Error::Validation(
                "Display name can only contain alphabets".to_string(),
            ));
        }

        match self.role {
            Role::Student => {
                let valid = self.id.len() == 12
                    && self
                        .id
                        .chars()
                        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit());
                if !valid {
                    return Err(crate::Error::Validation(
                        "Roll number must contain only uppercase letters and digits, exactly 12 characters"
                            .to_string(),
                    ));
                }
            }
            Role::Faculty => {
                let valid = self.id.len() >= 4 && self.id.chars().all(|c| c.is_ascii_alphanumeric());
                if !valid {
                    return Err(crate::Error::Validation(
                        "User id must be alphanumeric and at least 4 characters long".to_string(),
                    ));
                }
                match &self.course {
                    Some(course) if !course.trim().is_empty() => {}
                    _ => {
                        return Err(crate::Error::Validation(
                            "Course name cannot be empty".to_string(),
                        ))
                    }
                }
            }
            Role::Admin => {
                if self.id.trim().is_empty() {
                    return Err(crate::Error::Validation(
                        "Administrator id cannot be empty".to_string(),
                    ));
                }
            }
        }

        if self.credential_hash.trim().is_empty() {
            return Err(crate::Error::Validation(
                "Credential hash cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// A Task represents one unit of assigned work, possibly nested under a parent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique hash-based identifier (format: tsk-XXXXXX).
    pub id: String,
    /// One-line summary of the task.
    pub title: String,
    /// Free-form category used for filtering.
    pub category: String,
    /// Priority level.
    #[serde(default)]
    pub priority: Priority,
    /// Optional due date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    /// Identity id of the creator (faculty or admin).
    pub created_by: String,
    /// Current status in the FSM.
    pub status: Status,
    /// Parent task id. Root tasks have none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl Task {
    /// Creates a new open task with a generated id.
    ///
    /// # Arguments
    ///
    /// * `title` - Task title
    /// * `category` - Task category
    /// * `created_by` - Identity id of the creator
    pub fn new(title: String, category: String, created_by: String) -> Self {
        let now = now_timestamp();
        let id = crate::ids::generate_id(&title, &created_by, now, 0);

        Self {
            id,
            title,
            category,
            priority: Priority::default(),
            deadline: None,
            created_by,
            status: Status::Open,
            parent_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Validates the task data.
    ///
    /// # Errors
    ///
    /// Returns an error if the title or category is empty, or the id format
    /// is invalid.
    pub fn validate(&self) -> crate::Result<()> {
        if self.title.trim().is_empty() {
            return Err(crate::Error::Validation(
                "Title cannot be empty".to_string(),
            ));
        }

        if self.category.trim().is_empty() {
            return Err(crate::Error::Validation(
                "Category cannot be empty".to_string(),
            ));
        }

        if self.created_by.trim().is_empty() {
            return Err(crate::Error::Validation(
                "Creator id cannot be empty".to_string(),
            ));
        }

        crate::ids::validate_id_format(&self.id)?;

        Ok(())
    }

    /// Validates the deadline against a reference date.
    ///
    /// Creation-time check only; persisted tasks keep their deadline even
    /// once it has passed.
    ///
    /// # Errors
    ///
    /// Returns an error if a deadline is set and lies before `today`.
    pub fn validate_deadline(&self, today: NaiveDate) -> crate::Result<()> {
        if let Some(deadline) = self.deadline {
            if deadline < today {
                return Err(crate::Error::Validation(
                    "Deadline cannot be in the past".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// The active assignment of a task to a student. At most one per task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Assigned task id.
    pub task_id: String,
    /// Assigned student id.
    pub student_id: String,
    /// Unix timestamp of assignment.
    pub assigned_at: i64,
}

/// A grade for one student in one subject. Upsert keyed by (student, subject).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeRecord {
    /// Graded student id.
    pub student_id: String,
    /// Subject name.
    pub subject: String,
    /// Marks, 0-100.
    pub marks: u8,
}

/// One attendance entry. Upsert keyed by (student, date).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Student id.
    pub student_id: String,
    /// Calendar date of the session.
    pub date: NaiveDate,
    /// Whether the student was present.
    pub present: bool,
}

/// Per-student ledger summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentSummary {
    /// Subject to marks mapping.
    pub grades: BTreeMap<String, u8>,
    /// Mean of all marks, 0.0 when no grades exist.
    pub average_grade: f64,
    /// Fraction of sessions attended, 0.0 when no records exist.
    pub attendance_rate: f64,
}

/// Returns the current Unix timestamp in seconds.
pub(crate) fn now_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_else(|_| std::time::Duration::from_secs(0))
        .as_secs() as i64
}
