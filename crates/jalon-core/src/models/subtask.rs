//! Sub-task and link models.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::Status;

/// A labelled URL attached to a stage or sub-task.
///
/// Links are immutable once created; edits replace the whole list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Link {
    pub label: String,
    pub url: String,
}

/// A child work item owned by exactly one stage.
///
/// Identity is the `(stage id, sub-task id)` pair: sub-task ids are unique
/// only within their owning stage. Sub-tasks are created by the project
/// template and mutated in place; they are never deleted individually, only
/// reset together with their stage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubTask {
    /// Identifier, unique within the owning stage
    pub id: String,

    /// Display label
    pub label: String,

    /// Current status
    pub status: Status,

    /// Optional deadline (calendar date)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<Date>,

    /// What should be achieved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objective: Option<String>,

    /// What has actually been done
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accomplished: Option<String>,

    /// Person responsible for the sub-task
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,

    /// Free-form notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Attached links; replaced wholesale on edit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<Link>>,
}

impl SubTask {
    /// Creates a pristine sub-task: status `to_do`, all free-text fields
    /// unset. This is the shape the project template produces.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            status: Status::ToDo,
            deadline: None,
            objective: None,
            accomplished: None,
            owner: None,
            notes: None,
            links: None,
        }
    }

    /// Clears status and every free-text field back to the pristine state.
    pub(crate) fn scrub(&mut self) {
        self.status = Status::ToDo;
        self.deadline = None;
        self.objective = None;
        self.accomplished = None;
        self.owner = None;
        self.notes = None;
        self.links = None;
    }
}
