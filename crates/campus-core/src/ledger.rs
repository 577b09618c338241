// Rust guideline compliant 2026-02-06

//! Grade and attendance ledger.
//!
//! Records are upserts keyed by (student, subject) and (student, date). Only
//! faculty and admin callers may mutate the ledger; the capability check runs
//! before any state is read.

use crate::access::{self, Caller, Capability};
use crate::models::{AttendanceRecord, GradeRecord, Role, StudentSummary};
use crate::roster::Roster;
use crate::{Error, Result};
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};

/// In-memory ledger backed by the grade and attendance JSONL files.
pub struct Ledger {
    /// Grades keyed by (student id, subject).
    grades: HashMap<(String, String), GradeRecord>,
    /// Attendance keyed by (student id, date).
    attendance: HashMap<(String, NaiveDate), AttendanceRecord>,
}

impl Ledger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self {
            grades: HashMap::new(),
            attendance: HashMap::new(),
        }
    }

    /// Rebuilds the ledger from persisted records. Later duplicates win,
    /// matching upsert semantics.
    pub fn from_records(grades: Vec<GradeRecord>, attendance: Vec<AttendanceRecord>) -> Self {
        let mut ledger = Self::new();
        for record in grades {
            ledger
                .grades
                .insert((record.student_id.clone(), record.subject.clone()), record);
        }
        for record in attendance {
            ledger
                .attendance
                .insert((record.student_id.clone(), record.date), record);
        }
        ledger
    }

    /// Records or updates a grade.
    ///
    /// # Arguments
    ///
    /// * `caller` - The authenticated caller
    /// * `roster` - Identity store used to validate the student
    /// * `student_id` - The graded student
    /// * `subject` - Subject name
    /// * `marks` - Marks, 0-100
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The caller lacks the grade capability
    /// - The student is unknown or not a student
    /// - The subject is empty or the marks exceed 100
    pub fn record_grade(
        &mut self,
        caller: &Caller,
        roster: &Roster,
        student_id: &str,
        subject: &str,
        marks: u8,
    ) -> Result<()> {
        access::require(caller, Capability::RecordGrade)?;
        Self::require_student(roster, student_id)?;

        if subject.trim().is_empty() {
            return Err(Error::Validation("Subject cannot be empty".to_string()));
        }
        if marks > 100 {
            return Err(Error::Validation(format!(
                "Marks must be between 0 and 100, got {}",
                marks
            )));
        }

        self.grades.insert(
            (student_id.to_string(), subject.to_string()),
            GradeRecord {
                student_id: student_id.to_string(),
                subject: subject.to_string(),
                marks,
            },
        );
        Ok(())
    }

    /// Removes a grade.
    ///
    /// # Errors
    ///
    /// Returns an error if the caller lacks the grade capability or no such
    /// grade exists.
    pub fn remove_grade(&mut self, caller: &Caller, student_id: &str, subject: &str) -> Result<()> {
        access::require(caller, Capability::RecordGrade)?;
        self.grades
            .remove(&(student_id.to_string(), subject.to_string()))
            .map(|_| ())
            .ok_or_else(|| Error::NotFound(format!("{}/{}", student_id, subject)))
    }

    /// Records or updates an attendance entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the caller lacks the attendance capability or the
    /// student is unknown or not a student.
    pub fn record_attendance(
        &mut self,
        caller: &Caller,
        roster: &Roster,
        student_id: &str,
        date: NaiveDate,
        present: bool,
    ) -> Result<()> {
        access::require(caller, Capability::RecordAttendance)?;
        Self::require_student(roster, student_id)?;

        self.attendance.insert(
            (student_id.to_string(), date),
            AttendanceRecord {
                student_id: student_id.to_string(),
                date,
                present,
            },
        );
        Ok(())
    }

    /// Removes an attendance entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the caller lacks the attendance capability or no
    /// such entry exists.
    pub fn remove_attendance(
        &mut self,
        caller: &Caller,
        student_id: &str,
        date: NaiveDate,
    ) -> Result<()> {
        access::require(caller, Capability::RecordAttendance)?;
        self.attendance
            .remove(&(student_id.to_string(), date))
            .map(|_| ())
            .ok_or_else(|| Error::NotFound(format!("{}/{}", student_id, date)))
    }

    fn require_student(roster: &Roster, student_id: &str) -> Result<()> {
        let identity = roster
            .get(student_id)
            .ok_or_else(|| Error::NotFound(student_id.to_string()))?;
        if identity.role != Role::Student {
            return Err(Error::Validation(format!(
                "{} is not a student",
                student_id
            )));
        }
        Ok(())
    }

    /// Computes the ledger summary for a student.
    ///
    /// The attendance rate is present-count over total-count and 0.0 when no
    /// records exist; likewise the average grade with no grades. Zero
    /// records are not an error.
    pub fn summary(&self, student_id: &str) -> StudentSummary {
        let grades: BTreeMap<String, u8> = self
            .grades
            .values()
            .filter(|record| record.student_id == student_id)
            .map(|record| (record.subject.clone(), record.marks))
            .collect();

        let average_grade = if grades.is_empty() {
            0.0
        } else {
            grades.values().map(|&marks| f64::from(marks)).sum::<f64>() / grades.len() as f64
        };

        let entries: Vec<&AttendanceRecord> = self
            .attendance
            .values()
            .filter(|record| record.student_id == student_id)
            .collect();
        let attendance_rate = if entries.is_empty() {
            0.0
        } else {
            entries.iter().filter(|record| record.present).count() as f64 / entries.len() as f64
        };

        StudentSummary {
            grades,
            average_grade,
            attendance_rate,
        }
    }

    /// Returns all grades for a student.
    pub fn grades_for<'a>(&'a self, student_id: &str) -> impl Iterator<Item = &'a GradeRecord> + 'a {
        let student_id = student_id.to_string();
        self.grades
            .values()
            .filter(move |record| record.student_id == student_id)
    }

    /// Returns all attendance entries for a student.
    pub fn attendance_for<'a>(
        &'a self,
        student_id: &str,
    ) -> impl Iterator<Item = &'a AttendanceRecord> + 'a {
        let student_id = student_id.to_string();
        self.attendance
            .values()
            .filter(move |record| record.student_id == student_id)
    }

    /// Returns grade persistence records, sorted for stable files.
    pub fn grade_records(&self) -> Vec<GradeRecord> {
        let mut records: Vec<GradeRecord> = self.grades.values().cloned().collect();
        records.sort_by(|a, b| (&a.student_id, &a.subject).cmp(&(&b.student_id, &b.subject)));
        records
    }

    /// Returns attendance persistence records, sorted for stable files.
    pub fn attendance_records(&self) -> Vec<AttendanceRecord> {
        let mut records: Vec<AttendanceRecord> = self.attendance.values().cloned().collect();
        records.sort_by(|a, b| (&a.student_id, a.date).cmp(&(&b.student_id, b.date)));
        records
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}
