// Rust guideline compliant 2026-02-06

//! Configuration management for Campus.

use crate::models::Priority;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// Human-readable table format.
    #[default]
    Table,
    /// Plain text format.
    Plain,
}

/// Configuration for Campus behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Default category for new tasks.
    #[serde(default = "default_category")]
    pub default_category: String,

    /// Default priority for new tasks.
    #[serde(default)]
    pub default_priority: Priority,

    /// Default credential assigned to newly registered students.
    #[serde(default = "default_student_password")]
    pub default_student_password: String,

    /// Default credential assigned to newly registered faculty.
    #[serde(default = "default_faculty_password")]
    pub default_faculty_password: String,

    /// Default output format for commands.
    #[serde(default)]
    pub output_format: OutputFormat,
}

fn default_category() -> String {
    "work".to_string()
}

fn default_student_password() -> String {
    "student@123".to_string()
}

fn default_faculty_password() -> String {
    "teacher@123".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_category: default_category(),
            default_priority: Priority::default(),
            default_student_password: default_student_password(),
            default_faculty_password: default_faculty_password(),
            output_format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides
    /// earlier):
    /// 1. Default values
    /// 2. Configuration file at `.campus/config.toml`
    /// 3. Environment variables with `CAMPUS_` prefix
    ///
    /// # Arguments
    ///
    /// * `campus_dir` - Path to the `.campus` directory
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration file exists but cannot be read
    /// - The configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(campus_dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        let config_path = campus_dir.join("config.toml");
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let file_config: Config = toml::from_str(&content)
                .map_err(|e| crate::Error::Validation(format!("Invalid config file: {}", e)))?;
            config = file_config;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `CAMPUS_DEFAULT_CATEGORY` - Default task category
    /// - `CAMPUS_DEFAULT_PRIORITY` - Default task priority (low/medium/high)
    /// - `CAMPUS_DEFAULT_STUDENT_PASSWORD` - Default student credential
    /// - `CAMPUS_DEFAULT_FACULTY_PASSWORD` - Default faculty credential
    /// - `CAMPUS_OUTPUT_FORMAT` - Output format (json/table/plain)
    ///
    /// # Errors
    ///
    /// Returns an error if an override fails to parse.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(value) = std::env::var("CAMPUS_DEFAULT_CATEGORY") {
            self.default_category = value;
        }

        if let Ok(value) = std::env::var("CAMPUS_DEFAULT_PRIORITY") {
            self.default_priority = match value.to_lowercase().as_str() {
                "low" => Priority::Low,
                "medium" => Priority::Medium,
                "high" => Priority::High,
                other => {
                    return Err(crate::Error::Validation(format!(
                        "Invalid CAMPUS_DEFAULT_PRIORITY: {}",
                        other
                    )))
                }
            };
        }

        if let Ok(value) = std::env::var("CAMPUS_DEFAULT_STUDENT_PASSWORD") {
            self.default_student_password = value;
        }

        if let Ok(value) = std::env::var("CAMPUS_DEFAULT_FACULTY_PASSWORD") {
            self.default_faculty_password = value;
        }

        if let Ok(value) = std::env::var("CAMPUS_OUTPUT_FORMAT") {
            self.output_format = match value.to_lowercase().as_str() {
                "json" => OutputFormat::Json,
                "table" => OutputFormat::Table,
                "plain" => OutputFormat::Plain,
                other => {
                    return Err(crate::Error::Validation(format!(
                        "Invalid CAMPUS_OUTPUT_FORMAT: {}",
                        other
                    )))
                }
            };
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if the default category or a default credential is
    /// blank.
    pub fn validate(&self) -> Result<()> {
        if self.default_category.trim().is_empty() {
            return Err(crate::Error::Validation(
                "Default category cannot be empty".to_string(),
            ));
        }
        if self.default_student_password.trim().is_empty()
            || self.default_faculty_password.trim().is_empty()
        {
            return Err(crate::Error::Validation(
                "Default credentials cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Writes the configuration to `config.toml` in the campus directory.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, campus_dir: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::Error::Validation(format!("Invalid config: {}", e)))?;
        std::fs::write(campus_dir.join("config.toml"), content)?;
        Ok(())
    }
}
