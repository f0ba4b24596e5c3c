//! Derived reminder records.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::StageId;

/// Classification of a deadline notice.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReminderKind {
    /// Deadline is coming up (within the reminder window, today included)
    Reminder,

    /// Deadline day is already past
    Alert,
}

impl ReminderKind {
    /// Icon used when rendering reminder lists.
    pub fn icon(&self) -> &'static str {
        match self {
            ReminderKind::Reminder => "🔔",
            ReminderKind::Alert => "⚠",
        }
    }
}

/// A deadline notice derived from the current stage list and today's date.
///
/// Reminders are never persisted; they are rebuilt from the project on every
/// change and on every load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub kind: ReminderKind,
    pub stage_id: StageId,
    pub stage_title: String,
    pub deadline: Date,
    pub message: String,
}
