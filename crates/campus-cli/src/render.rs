// Rust guideline compliant 2026-02-07

//! Report renderers.
//!
//! Implementations of the core [`ReportRenderer`] contract. The core hands
//! over a structured record; everything about document shape, columns, and
//! encoding lives here.

use campus_core::{Error, InstitutionReport, ReportRenderer, Result, StudentReport};
use tabled::{builder::Builder, settings::Style};

/// CSV document renderer.
///
/// One row per grade; a student without grades still gets a summary row so
/// every student appears in the document.
pub struct CsvRenderer;

const CSV_HEADERS: [&str; 6] = [
    "Name",
    "Student Id",
    "Subject",
    "Marks",
    "Average Grade",
    "Attendance Rate",
];

impl CsvRenderer {
    fn write_student(
        writer: &mut csv::Writer<Vec<u8>>,
        report: &StudentReport,
    ) -> std::result::Result<(), csv::Error> {
        let average = format!("{:.2}", report.summary.average_grade);
        let rate = format!("{:.2}", report.summary.attendance_rate);

        if report.summary.grades.is_empty() {
            writer.write_record([
                report.display_name.as_str(),
                report.student_id.as_str(),
                "",
                "",
                average.as_str(),
                rate.as_str(),
            ])?;
            return Ok(());
        }

        for (subject, marks) in &report.summary.grades {
            writer.write_record([
                report.display_name.as_str(),
                report.student_id.as_str(),
                subject.as_str(),
                marks.to_string().as_str(),
                average.as_str(),
                rate.as_str(),
            ])?;
        }
        Ok(())
    }

    fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String> {
        let bytes = writer
            .into_inner()
            .map_err(|e| Error::Validation(format!("CSV render failed: {}", e)))?;
        String::from_utf8(bytes).map_err(|e| Error::Validation(format!("CSV render failed: {}", e)))
    }
}

impl ReportRenderer for CsvRenderer {
    fn render_student(&self, report: &StudentReport) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record(CSV_HEADERS)
            .map_err(|e| Error::Validation(format!("CSV render failed: {}", e)))?;
        Self::write_student(&mut writer, report)
            .map_err(|e| Error::Validation(format!("CSV render failed: {}", e)))?;
        Self::finish(writer)
    }

    fn render_institution(&self, report: &InstitutionReport) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record(CSV_HEADERS)
            .map_err(|e| Error::Validation(format!("CSV render failed: {}", e)))?;
        for student in &report.students {
            Self::write_student(&mut writer, student)
                .map_err(|e| Error::Validation(format!("CSV render failed: {}", e)))?;
        }
        Self::finish(writer)
    }
}

/// JSON document renderer over the structured record.
pub struct JsonRenderer;

impl ReportRenderer for JsonRenderer {
    fn render_student(&self, report: &StudentReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }

    fn render_institution(&self, report: &InstitutionReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}

/// Human-readable table renderer.
pub struct TableRenderer;

impl TableRenderer {
    fn student_section(report: &StudentReport) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Student: {} ({})\n",
            report.display_name, report.student_id
        ));
        if !report.active {
            output.push_str("Status:  deactivated\n");
        }
        output.push_str(&format!(
            "Average Grade: {:.2}\n",
            report.summary.average_grade
        ));
        output.push_str(&format!(
            "Attendance: {:.1}%\n",
            report.summary.attendance_rate * 100.0
        ));

        if !report.summary.grades.is_empty() {
            let mut builder = Builder::default();
            builder.push_record(vec!["Subject", "Marks"]);
            for (subject, marks) in &report.summary.grades {
                builder.push_record(vec![subject.clone(), marks.to_string()]);
            }
            let mut table = builder.build();
            table.with(Style::modern());
            output.push_str(&table.to_string());
            output.push('\n');
        }

        if !report.tasks.is_empty() {
            let mut builder = Builder::default();
            builder.push_record(vec!["Task", "Title", "Category", "Status"]);
            for task in &report.tasks {
                builder.push_record(vec![
                    task.id.clone(),
                    task.title.clone(),
                    task.category.clone(),
                    format!("{:?}", task.status),
                ]);
            }
            let mut table = builder.build();
            table.with(Style::modern());
            output.push_str(&table.to_string());
            output.push('\n');
        }

        output
    }
}

impl ReportRenderer for TableRenderer {
    fn render_student(&self, report: &StudentReport) -> Result<String> {
        Ok(Self::student_section(report))
    }

    fn render_institution(&self, report: &InstitutionReport) -> Result<String> {
        if report.students.is_empty() {
            return Ok("No students registered.".to_string());
        }

        let mut output = String::new();
        for student in &report.students {
            output.push_str(&Self::student_section(student));
            output.push('\n');
        }
        Ok(output)
    }
}

/// Factory function to create a renderer for a format name.
///
/// # Arguments
/// * `format` - The desired document format ("csv", "json", or "table")
///
/// # Errors
///
/// Returns an error for unknown formats.
pub fn create_renderer(format: &str) -> Result<Box<dyn ReportRenderer>> {
    match format {
        "csv" => Ok(Box::new(CsvRenderer)),
        "json" => Ok(Box::new(JsonRenderer)),
        "table" => Ok(Box::new(TableRenderer)),
        other => Err(Error::Validation(format!(
            "Unknown report format: {}",
            other
        ))),
    }
}
