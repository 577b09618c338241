// Rust guideline compliant 2026-02-06

//! Implementation of the `campus report` commands.
//!
//! The core builds a structured report record; the renderer chosen here
//! turns it into a document (CSV, JSON, or a table), written to a file or
//! printed to stdout.

use crate::render::create_renderer;
use crate::terminal;
use anyhow::Result;
use campus_app::{AppError, CampusContext, Session};
use campus_core::{report, OutputFormat};
use std::path::PathBuf;

fn default_format(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Json => "json",
        OutputFormat::Table | OutputFormat::Plain => "table",
    }
}

fn emit(document: String, out: Option<PathBuf>) -> Result<()> {
    match out {
        Some(path) => {
            std::fs::write(&path, document)?;
            terminal::print_success(&format!("Report written to {}", path.display()));
        }
        None => println!("{}", document),
    }
    Ok(())
}

/// Generates the report for one student.
///
/// # Errors
///
/// Returns an error if the caller may not read the record, the student is
/// unknown, or rendering fails.
pub fn execute_student(
    ctx: &CampusContext,
    session: &Session,
    student_id: String,
    format: Option<String>,
    out: Option<PathBuf>,
) -> Result<()> {
    let caller = session.caller();
    let roster = ctx.load_roster()?;
    let graph = ctx.load_graph()?;
    let ledger = ctx.load_ledger()?;

    let record = report::student_report(&caller, &roster, &graph, &ledger, &student_id)
        .map_err(AppError::from)?;

    let config = ctx.load_config()?;
    let format = format.unwrap_or_else(|| default_format(config.output_format).to_string());
    let renderer = create_renderer(&format).map_err(AppError::from)?;
    let document = renderer.render_student(&record).map_err(AppError::from)?;

    emit(document, out)
}

/// Generates the report covering every student.
///
/// # Errors
///
/// Returns an error if the caller may not read all records or rendering
/// fails.
pub fn execute_all(
    ctx: &CampusContext,
    session: &Session,
    format: Option<String>,
    out: Option<PathBuf>,
) -> Result<()> {
    let caller = session.caller();
    let roster = ctx.load_roster()?;
    let graph = ctx.load_graph()?;
    let ledger = ctx.load_ledger()?;

    let record =
        report::institution_report(&caller, &roster, &graph, &ledger).map_err(AppError::from)?;

    let config = ctx.load_config()?;
    let format = format.unwrap_or_else(|| default_format(config.output_format).to_string());
    let renderer = create_renderer(&format).map_err(AppError::from)?;
    let document = renderer.render_institution(&record).map_err(AppError::from)?;

    emit(document, out)
}
