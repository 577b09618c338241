// Rust guideline compliant 2026-02-06

//! Storage module for JSONL file operations.
//!
//! One JSONL file per entity kind. Reads use streaming deserialization and
//! skip malformed lines with a warning; writes are atomic (temp file +
//! rename). A file lock serializes mutating sequences.

use crate::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// A persistable entity with a stable storage key.
pub trait Record: Serialize + DeserializeOwned {
    /// Returns the storage key identifying this record within its file.
    fn key(&self) -> String;

    /// Validates the record before it is written or after it is read.
    ///
    /// # Errors
    ///
    /// Returns an error describing the malformed field.
    fn validate(&self) -> Result<()>;
}

impl Record for crate::models::Identity {
    fn key(&self) -> String {
        self.id.clone()
    }

    fn validate(&self) -> Result<()> {
        crate::models::Identity::validate(self)
    }
}

impl Record for crate::models::Task {
    fn key(&self) -> String {
        self.id.clone()
    }

    fn validate(&self) -> Result<()> {
        crate::models::Task::validate(self)
    }
}

impl Record for crate::models::Assignment {
    fn key(&self) -> String {
        self.task_id.clone()
    }

    fn validate(&self) -> Result<()> {
        if self.task_id.trim().is_empty() || self.student_id.trim().is_empty() {
            return Err(Error::Validation(
                "Assignment ids cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Record for crate::models::GradeRecord {
    fn key(&self) -> String {
        format!("{}/{}", self.student_id, self.subject)
    }

    fn validate(&self) -> Result<()> {
        if self.student_id.trim().is_empty() || self.subject.trim().is_empty() {
            return Err(Error::Validation(
                "Grade record ids cannot be empty".to_string(),
            ));
        }
        if self.marks > 100 {
            return Err(Error::Validation(format!(
                "Marks must be between 0 and 100, got {}",
                self.marks
            )));
        }
        Ok(())
    }
}

impl Record for crate::models::AttendanceRecord {
    fn key(&self) -> String {
        format!("{}/{}", self.student_id, self.date)
    }

    fn validate(&self) -> Result<()> {
        if self.student_id.trim().is_empty() {
            return Err(Error::Validation(
                "Attendance student id cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// JSONL storage engine for one entity kind.
pub struct Store<T: Record> {
    /// Path to the JSONL file.
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T: Record> Store<T> {
    /// Creates a new store over the given file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty.
    pub fn new(path: PathBuf) -> Result<Self> {
        if path.as_os_str().is_empty() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path cannot be empty",
            )));
        }
        Ok(Self {
            path,
            _marker: PhantomData,
        })
    }

    /// Returns the JSONL file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads all records using streaming deserialization.
    ///
    /// A missing file is an empty store. Malformed lines are skipped with a
    /// warning so one corrupt line does not take the whole file down.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or a record fails
    /// validation.
    pub fn load_all(&self) -> Result<Vec<T>> {
        use std::fs::File;
        use std::io::BufReader;

        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let mut records = Vec::new();

        let stream = serde_json::Deserializer::from_reader(reader).into_iter::<T>();
        for result in stream {
            match result {
                Ok(record) => {
                    record.validate()?;
                    records.push(record);
                }
                Err(e) => {
                    eprintln!("Warning: Skipping malformed JSONL line: {}", e);
                }
            }
        }

        Ok(records)
    }

    /// Loads a single record by key, terminating early on a match.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no record carries the key.
    pub fn load_by_key(&self, key: &str) -> Result<T> {
        use std::fs::File;
        use std::io::BufReader;

        if !self.path.exists() {
            return Err(Error::NotFound(key.to_string()));
        }

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let stream = serde_json::Deserializer::from_reader(reader).into_iter::<T>();

        for result in stream {
            match result {
                Ok(record) => {
                    if record.key() == key {
                        record.validate()?;
                        return Ok(record);
                    }
                }
                Err(e) => {
                    eprintln!("Warning: Skipping malformed JSONL line: {}", e);
                }
            }
        }

        Err(Error::NotFound(key.to_string()))
    }

    /// Saves a single record, replacing any record with the same key.
    ///
    /// # Errors
    ///
    /// Returns an error if the record fails validation or the file cannot be
    /// rewritten.
    pub fn save(&self, record: &T) -> Result<()>
    where
        T: Clone,
    {
        record.validate()?;

        let mut records = self.load_all().unwrap_or_default();
        if let Some(pos) = records.iter().position(|r| r.key() == record.key()) {
            records[pos] = record.clone();
        } else {
            records.push(record.clone());
        }

        self.save_all(&records)
    }

    /// Replaces the entire file with the provided records, atomically.
    ///
    /// # Errors
    ///
    /// Returns an error if any record fails validation or the write fails.
    pub fn save_all(&self, records: &[T]) -> Result<()> {
        use std::fs::File;
        use std::io::Write;

        for record in records {
            record.validate()?;
        }

        let temp_path = self.path.with_extension("jsonl.tmp");

        {
            let mut file = File::create(&temp_path)?;
            for record in records {
                let json = serde_json::to_string(record)?;
                file.write_all(json.as_bytes())?;
                file.write_all(b"\n")?;
            }
            file.sync_all()?;
        }

        std::fs::rename(&temp_path, &self.path)?;

        Ok(())
    }

    /// Deletes a record by key.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no record carries the key.
    pub fn delete(&self, key: &str) -> Result<()> {
        let mut records = self.load_all()?;

        let initial_len = records.len();
        records.retain(|record| record.key() != key);
        if records.len() == initial_len {
            return Err(Error::NotFound(key.to_string()));
        }

        self.save_all(&records)
    }

    /// Executes a closure under an exclusive lock on the storage file.
    ///
    /// The lock is released on every exit path, success or error.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock cannot be acquired or the closure fails.
    pub fn with_lock<F, R>(&self, f: F) -> Result<R>
    where
        F: FnOnce() -> Result<R>,
    {
        use fs2::FileExt;
        use std::fs::OpenOptions;

        let lock_path = self.path.with_extension("lock");
        let lock_file = OpenOptions::new()
            .create(true)
            .write(true)
            .open(&lock_path)?;

        lock_file.try_lock_exclusive().map_err(|e| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::WouldBlock,
                format!("Failed to acquire lock: {}", e),
            ))
        })?;

        let result = f();

        let _ = lock_file.unlock();

        result
    }
}
