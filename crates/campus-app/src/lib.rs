// Rust guideline compliant 2026-02-09

//! Shared application services for Campus.
//!
//! This crate provides reusable, non-CLI-specific helpers for data directory
//! discovery, session resolution, list filtering, and standardized response
//! envelopes.

pub mod error;
pub mod list;
pub mod repo;
pub mod response;
pub mod session;

pub use error::{AppError, ErrorCode, Result};
pub use list::{list_tasks, parse_priority, parse_status, TaskListOptions};
pub use repo::CampusContext;
pub use response::{ErrorEnvelope, SuccessEnvelope};
pub use session::{resolve, Session};
