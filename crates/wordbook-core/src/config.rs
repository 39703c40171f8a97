// Rust guideline compliant 2026-10-19

//! Configuration management for Wordbook.

use crate::codec::CsvColumns;
use crate::{Error, Result};
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

/// Configuration for Wordbook behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Initial sort direction of the word list (true = A to Z).
    #[serde(default = "default_sort_ascending")]
    pub sort_ascending: bool,

    /// Upper bound on questions per quiz session.
    #[serde(default = "default_quiz_max_questions")]
    pub quiz_max_questions: usize,

    /// Upper bound on answer choices per quiz question.
    #[serde(default = "default_quiz_max_choices")]
    pub quiz_max_choices: usize,

    /// Delay in milliseconds before the next quiz question is shown.
    #[serde(default = "default_quiz_pacing_ms")]
    pub quiz_pacing_ms: u64,

    /// Column set written by CSV export.
    #[serde(default)]
    pub csv_columns: CsvColumns,

    /// Default output format for commands.
    #[serde(default)]
    pub output_format: OutputFormat,
}

fn default_sort_ascending() -> bool {
    true
}

fn default_quiz_max_questions() -> usize {
    10
}

fn default_quiz_max_choices() -> usize {
    4
}

fn default_quiz_pacing_ms() -> u64 {
    500
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sort_ascending: default_sort_ascending(),
            quiz_max_questions: default_quiz_max_questions(),
            quiz_max_choices: default_quiz_max_choices(),
            quiz_pacing_ms: default_quiz_pacing_ms(),
            csv_columns: CsvColumns::default(),
            output_format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `.wordbook/config.toml`
    /// 3. Environment variables with `WORDBOOK_` prefix
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Path to the `.wordbook` directory
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(data_dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        let config_path = data_dir.join("config.toml");
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Invalid config file: {}", e)))?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `WORDBOOK_SORT_ASCENDING` - Initial sort direction (true/false)
    /// - `WORDBOOK_QUIZ_MAX_QUESTIONS` - Questions per quiz
    /// - `WORDBOOK_QUIZ_MAX_CHOICES` - Choices per question
    /// - `WORDBOOK_QUIZ_PACING_MS` - Delay before the next question
    /// - `WORDBOOK_CSV_COLUMNS` - Export column set (full/basic)
    /// - `WORDBOOK_OUTPUT_FORMAT` - Output format (json/table/plain)
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values are invalid.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("WORDBOOK_SORT_ASCENDING") {
            self.sort_ascending = val.parse().map_err(|_| {
                Error::Config("WORDBOOK_SORT_ASCENDING must be true or false".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("WORDBOOK_QUIZ_MAX_QUESTIONS") {
            self.quiz_max_questions = val.parse().map_err(|_| {
                Error::Config("WORDBOOK_QUIZ_MAX_QUESTIONS must be a positive number".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("WORDBOOK_QUIZ_MAX_CHOICES") {
            self.quiz_max_choices = val.parse().map_err(|_| {
                Error::Config("WORDBOOK_QUIZ_MAX_CHOICES must be a positive number".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("WORDBOOK_QUIZ_PACING_MS") {
            self.quiz_pacing_ms = val.parse().map_err(|_| {
                Error::Config("WORDBOOK_QUIZ_PACING_MS must be a number".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("WORDBOOK_CSV_COLUMNS") {
            self.csv_columns = match val.as_str() {
                "full" => CsvColumns::Full,
                "basic" => CsvColumns::Basic,
                _ => {
                    return Err(Error::Config(
                        "WORDBOOK_CSV_COLUMNS must be full or basic".to_string(),
                    ))
                }
            };
        }

        if let Ok(val) = std::env::var("WORDBOOK_OUTPUT_FORMAT") {
            self.output_format = match val.as_str() {
                "json" => OutputFormat::Json,
                "table" => OutputFormat::Table,
                "plain" => OutputFormat::Plain,
                _ => {
                    return Err(Error::Config(
                        "WORDBOOK_OUTPUT_FORMAT must be json, table, or plain".to_string(),
                    ))
                }
            };
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - quiz_max_questions is zero
    /// - quiz_max_choices is zero
    fn validate(&self) -> Result<()> {
        if self.quiz_max_questions == 0 {
            return Err(Error::Config(
                "quiz_max_questions must be greater than 0".to_string(),
            ));
        }

        if self.quiz_max_choices == 0 {
            return Err(Error::Config(
                "quiz_max_choices must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Saves the configuration to a TOML file.
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Path to the `.wordbook` directory
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be created or written
    /// - Serialization fails
    pub fn save(&self, data_dir: &Path) -> Result<()> {
        let config_path = data_dir.join("config.toml");
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}
