//! Error types for the board library.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::StageId;

/// Comprehensive error type for all board operations.
///
/// Note that the load path never produces an error: missing or corrupt
/// persisted state silently falls back to the default project template.
#[derive(Error, Debug)]
pub enum BoardError {
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Imported project data that is structurally invalid
    #[error("Invalid project data: {reason}")]
    InvalidImport { reason: String },
    /// Stage missing from the current project's stage list
    #[error("Stage '{id}' not found in the current project")]
    StageNotFound { id: StageId },
    /// Sub-task missing from the named stage
    #[error("Sub-task '{sub_task}' not found in stage '{stage}'")]
    SubTaskNotFound { stage: StageId, sub_task: String },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl BoardError {
    /// Creates an input validation error.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates an import validation error.
    pub fn invalid_import(reason: impl Into<String>) -> Self {
        Self::InvalidImport {
            reason: reason.into(),
        }
    }

    pub(crate) fn file_system(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn task_join(err: impl std::fmt::Display) -> Self {
        Self::Configuration {
            message: format!("Task join error: {err}"),
        }
    }
}

/// Result type alias for board operations
pub type Result<T> = std::result::Result<T, BoardError>;
