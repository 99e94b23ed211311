//! Error types for growth-journal

use crate::domain::WizardStep;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the journal
#[derive(Debug, Error)]
pub enum JournalError {
    #[error("Moment not found: {0}")]
    MomentNotFound(String),

    #[error("Value not found: {0}")]
    ValueNotFound(String),

    #[error("Strength not found: {0}")]
    StrengthNotFound(String),

    #[error("Moment '{0}' is a default entry and cannot be edited")]
    DefaultMomentLocked(String),

    #[error("Reflection incomplete: missing {}", format_steps(.0))]
    IncompleteReflection(Vec<WizardStep>),

    #[error("Reflection error: {0}")]
    Wizard(String),

    #[error("Invalid mood: {0} (expected 1-5)")]
    InvalidMood(u8),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("{0}")]
    Command(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

fn format_steps(steps: &[WizardStep]) -> String {
    steps
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl JournalError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            JournalError::Config(_)
            | JournalError::ConfigNotFound(_)
            | JournalError::TomlDeserialize(_) => 2,
            JournalError::Catalog(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            JournalError::ConfigNotFound(path) => {
                format!(
                    "Config file not found: {}\n\n\
                    Suggestions:\n\
                    • Check the path passed to --config\n\
                    • Unset GROWTH_JOURNAL_CONFIG to run with built-in defaults",
                    path.display()
                )
            }
            JournalError::MomentNotFound(id)
            | JournalError::ValueNotFound(id)
            | JournalError::StrengthNotFound(id) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Ids are shown in the first column of 'moments', 'values' and 'strengths'\n\
                    • Ids are case-sensitive (got '{}')",
                    self, id
                )
            }
            JournalError::DefaultMomentLocked(_) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Add a new moment instead: moment add --title ... --description ... --reflection ...",
                    self
                )
            }
            JournalError::IncompleteReflection(_) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Use 'reflect prev' to go back and 'reflect answer <text>' to fill a step\n\
                    • Use 'reflect cancel' to discard this reflection",
                    self
                )
            }
            JournalError::InvalidMood(_) => {
                format!(
                    "{}\n\n\
                    Example: moment add --mood 4 ...",
                    self
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using JournalError
pub type Result<T> = std::result::Result<T, JournalError>;
