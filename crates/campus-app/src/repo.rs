// Rust guideline compliant 2026-02-09

//! Data directory discovery and store management.

use crate::error::{AppError, Result};
use campus_core::{
    Assignment, AttendanceRecord, Config, GradeRecord, Identity, Ledger, Roster, Store, Task,
    TaskGraph,
};
use std::path::{Path, PathBuf};

/// Path metadata for a Campus data directory.
#[derive(Debug, Clone)]
pub struct CampusContext {
    root: PathBuf,
    campus_dir: PathBuf,
    roster_path: PathBuf,
    tasks_path: PathBuf,
    assignments_path: PathBuf,
    grades_path: PathBuf,
    attendance_path: PathBuf,
    config_path: PathBuf,
}

impl CampusContext {
    /// Discovers a Campus data directory under an optional root.
    ///
    /// # Arguments
    ///
    /// * `root` - Optional root to pin discovery; defaults to the current
    ///   directory
    ///
    /// # Errors
    ///
    /// Returns an error if the root cannot be resolved or the `.campus`
    /// directory is missing.
    pub fn discover(root: Option<&Path>) -> Result<Self> {
        let root = match root {
            Some(root) => root.to_path_buf(),
            None => std::env::current_dir()?,
        };
        let campus_dir = root.join(".campus");
        if !campus_dir.exists() {
            return Err(AppError::RepoNotInitialized {
                path: campus_dir.clone(),
            });
        }

        Ok(Self::at(root, campus_dir))
    }

    /// Builds a context over a root without checking for the data directory.
    /// Used by initialization before the directory exists.
    #[must_use]
    pub fn uninitialized(root: &Path) -> Self {
        let campus_dir = root.join(".campus");
        Self::at(root.to_path_buf(), campus_dir)
    }

    fn at(root: PathBuf, campus_dir: PathBuf) -> Self {
        Self {
            root,
            roster_path: campus_dir.join("roster.jsonl"),
            tasks_path: campus_dir.join("tasks.jsonl"),
            assignments_path: campus_dir.join("assignments.jsonl"),
            grades_path: campus_dir.join("grades.jsonl"),
            attendance_path: campus_dir.join("attendance.jsonl"),
            config_path: campus_dir.join("config.toml"),
            campus_dir,
        }
    }

    /// Returns the root path.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.root.as_path()
    }

    /// Returns the `.campus` directory path.
    #[must_use]
    pub fn campus_dir(&self) -> &Path {
        self.campus_dir.as_path()
    }

    /// Returns the config TOML path.
    #[must_use]
    pub fn config_path(&self) -> &Path {
        self.config_path.as_path()
    }

    /// Opens the roster store.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be initialized.
    pub fn roster_store(&self) -> Result<Store<Identity>> {
        Ok(Store::new(self.roster_path.clone())?)
    }

    /// Opens the task store.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be initialized.
    pub fn task_store(&self) -> Result<Store<Task>> {
        Ok(Store::new(self.tasks_path.clone())?)
    }

    /// Opens the assignment store.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be initialized.
    pub fn assignment_store(&self) -> Result<Store<Assignment>> {
        Ok(Store::new(self.assignments_path.clone())?)
    }

    /// Opens the grade store.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be initialized.
    pub fn grade_store(&self) -> Result<Store<GradeRecord>> {
        Ok(Store::new(self.grades_path.clone())?)
    }

    /// Opens the attendance store.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be initialized.
    pub fn attendance_store(&self) -> Result<Store<AttendanceRecord>> {
        Ok(Store::new(self.attendance_path.clone())?)
    }

    /// Loads configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded.
    pub fn load_config(&self) -> Result<Config> {
        Ok(Config::load(self.campus_dir())?)
    }

    /// Loads the roster component from its store.
    ///
    /// # Errors
    ///
    /// Returns an error if records cannot be read or fail integrity checks.
    pub fn load_roster(&self) -> Result<Roster> {
        Ok(Roster::from_records(self.roster_store()?.load_all()?)?)
    }

    /// Loads the task graph component from its stores.
    ///
    /// # Errors
    ///
    /// Returns an error if records cannot be read or fail integrity checks.
    pub fn load_graph(&self) -> Result<TaskGraph> {
        let tasks = self.task_store()?.load_all()?;
        let assignments = self.assignment_store()?.load_all()?;
        Ok(TaskGraph::from_records(tasks, assignments)?)
    }

    /// Loads the ledger component from its stores.
    ///
    /// # Errors
    ///
    /// Returns an error if records cannot be read.
    pub fn load_ledger(&self) -> Result<Ledger> {
        let grades = self.grade_store()?.load_all()?;
        let attendance = self.attendance_store()?.load_all()?;
        Ok(Ledger::from_records(grades, attendance))
    }

    /// Persists the roster component.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn save_roster(&self, roster: &Roster) -> Result<()> {
        Ok(self.roster_store()?.save_all(&roster.records())?)
    }

    /// Persists the task graph component.
    ///
    /// Tasks are written before assignments, so a failure between the two
    /// writes leaves at most an unassigned task, never a dangling
    /// assignment.
    ///
    /// # Errors
    ///
    /// Returns an error if either write fails.
    pub fn save_graph(&self, graph: &TaskGraph) -> Result<()> {
        self.task_store()?.save_all(&graph.task_records())?;
        self.assignment_store()?
            .save_all(&graph.assignment_records())?;
        Ok(())
    }

    /// Persists the ledger component.
    ///
    /// # Errors
    ///
    /// Returns an error if either write fails.
    pub fn save_ledger(&self, ledger: &Ledger) -> Result<()> {
        self.grade_store()?.save_all(&ledger.grade_records())?;
        self.attendance_store()?
            .save_all(&ledger.attendance_records())?;
        Ok(())
    }

    /// Executes a closure under the data directory's exclusive lock.
    ///
    /// Every mutating sequence acquires this lock, performs all of its
    /// writes, and releases the lock on every exit path.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock cannot be acquired or the closure fails.
    pub fn with_exclusive<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        use fs2::FileExt;
        use std::fs::OpenOptions;

        let lock_path = self.campus_dir.join(".lock");
        let lock_file = OpenOptions::new()
            .create(true)
            .write(true)
            .open(&lock_path)?;

        lock_file.try_lock_exclusive().map_err(|e| {
            AppError::Io(std::io::Error::new(
                std::io::ErrorKind::WouldBlock,
                format!("Failed to acquire lock: {}", e),
            ))
        })?;

        let result = f();

        let _ = lock_file.unlock();

        result
    }
}
