//! Project aggregate root.

use jiff::civil::Date;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Stage, StageId, SubTask};

/// The complete project plan: the sole unit of persistence.
///
/// Exactly one project lives in a store file. Field names serialize in
/// camelCase, the same layout the export and import commands exchange.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Display name of the project
    pub name: String,

    /// The project stages; a valid project always has at least one
    pub stages: Vec<Stage>,

    /// Timestamp of the last persisted change (UTC)
    pub last_modified: Timestamp,

    /// Anchor date from which default deadlines are offset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_date: Option<Date>,
}

impl Project {
    /// Looks up a stage by id.
    pub fn stage(&self, id: StageId) -> Option<&Stage> {
        self.stages.iter().find(|stage| stage.id == id)
    }

    pub(crate) fn stage_mut(&mut self, id: StageId) -> Option<&mut Stage> {
        self.stages.iter_mut().find(|stage| stage.id == id)
    }

    /// Looks up a sub-task by the `(stage id, sub-task id)` pair.
    pub fn sub_task(&self, stage_id: StageId, sub_task_id: &str) -> Option<&SubTask> {
        self.stage(stage_id)
            .and_then(|stage| stage.sub_task(sub_task_id))
    }
}
