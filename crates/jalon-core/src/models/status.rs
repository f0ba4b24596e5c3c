//! Status enumeration shared by stages and sub-tasks.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of stage and sub-task statuses.
///
/// The persisted representation uses the snake_case identifiers `to_do`,
/// `in_progress` and `done`; the user-facing labels follow the board's
/// French vocabulary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Work has not started
    #[default]
    ToDo,

    /// Work is underway
    InProgress,

    /// Work is finished
    Done,
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "to_do" | "todo" => Ok(Status::ToDo),
            "in_progress" | "inprogress" => Ok(Status::InProgress),
            "done" => Ok(Status::Done),
            _ => Err(format!("Invalid status: {s}")),
        }
    }
}

impl Status {
    /// Persisted string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::ToDo => "to_do",
            Status::InProgress => "in_progress",
            Status::Done => "done",
        }
    }

    /// User-facing label (the board speaks French).
    pub fn label(&self) -> &'static str {
        match self {
            Status::ToDo => "À faire",
            Status::InProgress => "En cours",
            Status::Done => "Fait",
        }
    }

    /// Label with a consistent icon prefix for display contexts.
    ///
    /// - `✓ Fait` for finished work
    /// - `➤ En cours` for active work
    /// - `○ À faire` for pending work
    pub fn with_icon(&self) -> &'static str {
        match self {
            Status::Done => "✓ Fait",
            Status::InProgress => "➤ En cours",
            Status::ToDo => "○ À faire",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
