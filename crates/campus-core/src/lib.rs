// Rust guideline compliant 2026-02-06

//! Campus Core Library
//!
//! This crate provides the foundational components for the Campus records and
//! task management system:
//! - Data models (Identity, Task, Assignment, ledger records)
//! - Identity store with hashed credentials (roster)
//! - Role-scoped access control (capability table)
//! - Task graph (tree arena, cycle detection, status FSM)
//! - Grade/attendance ledger
//! - Query/report facade and renderer contract
//! - Storage engine (JSONL read/write, streaming, locking)
//! - Error types and result handling

pub mod access;
pub mod config;
pub mod error;
pub mod fsm;
pub mod graph;
pub mod ids;
pub mod ledger;
pub mod models;
pub mod report;
pub mod roster;
pub mod storage;

pub use access::{has_capability, permissions_for, Caller, Capability};
pub use config::{Config, OutputFormat};
pub use error::{Error, Result};
pub use fsm::{validate_transition, TransitionActor};
pub use graph::TaskGraph;
pub use ledger::Ledger;
pub use models::{
    Assignment, AttendanceRecord, GradeRecord, Identity, Priority, Role, Status, StudentSummary,
    Task,
};
pub use report::{InstitutionReport, ReportRenderer, StudentReport, TaskLine};
pub use roster::Roster;
pub use storage::{Record, Store};
