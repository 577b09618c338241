// Rust guideline compliant 2026-02-06

//! Campus CLI Library
//!
//! Command modules, output formatting, and report rendering for the `campus`
//! binary.

pub mod commands;
pub mod output;
pub mod output_mode;
pub mod render;
pub mod terminal;

pub use output::{create_formatter, OutputFormatter, TaskRow};
pub use render::{create_renderer, CsvRenderer, JsonRenderer, TableRenderer};
pub use terminal::should_use_color;
