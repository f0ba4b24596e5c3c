//! Parameter structures for board operations.
//!
//! These structures carry partial updates from the interface layers into the
//! board without framework-specific derives: the CLI defines clap wrapper
//! structs and converts them into these types. A field left as `None` means
//! "leave as is"; a `Some` value is merged into the target.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::models::{Link, Stage, StageId, Status, SubTask};

/// Partial update of a stage's editable fields.
///
/// The deadline is deliberately absent: deadline changes go through the
/// dedicated board operation so the manual-edit flag is always set
/// alongside.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StagePatch {
    /// Updated display title
    pub title: Option<String>,
    /// Updated responsible person (empty string clears)
    pub owner: Option<String>,
    /// Updated status
    pub status: Option<Status>,
    /// Updated notes (empty string clears)
    pub notes: Option<String>,
    /// Replacement link list
    pub links: Option<Vec<Link>>,
    /// Replacement dependency list (informational only)
    pub dependencies: Option<Vec<StageId>>,
}

impl StagePatch {
    /// True when the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.owner.is_none()
            && self.status.is_none()
            && self.notes.is_none()
            && self.links.is_none()
            && self.dependencies.is_none()
    }

    pub(crate) fn apply(&self, stage: &mut Stage) {
        if let Some(title) = &self.title {
            stage.title = title.clone();
        }
        if let Some(owner) = &self.owner {
            stage.owner = owner.clone();
        }
        if let Some(status) = self.status {
            stage.status = status;
        }
        if let Some(notes) = &self.notes {
            stage.notes = notes.clone();
        }
        if let Some(links) = &self.links {
            stage.links = links.clone();
        }
        if let Some(dependencies) = &self.dependencies {
            stage.dependencies = dependencies.clone();
        }
    }
}

/// Partial update of a sub-task's editable fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubTaskPatch {
    /// Updated display label
    pub label: Option<String>,
    /// Updated status
    pub status: Option<Status>,
    /// Updated deadline
    pub deadline: Option<Date>,
    /// What should be achieved
    pub objective: Option<String>,
    /// What has actually been done
    pub accomplished: Option<String>,
    /// Updated responsible person
    pub owner: Option<String>,
    /// Updated notes
    pub notes: Option<String>,
    /// Replacement link list
    pub links: Option<Vec<Link>>,
}

impl SubTaskPatch {
    /// True when the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.label.is_none()
            && self.status.is_none()
            && self.deadline.is_none()
            && self.objective.is_none()
            && self.accomplished.is_none()
            && self.owner.is_none()
            && self.notes.is_none()
            && self.links.is_none()
    }

    pub(crate) fn apply(&self, task: &mut SubTask) {
        if let Some(label) = &self.label {
            task.label = label.clone();
        }
        if let Some(status) = self.status {
            task.status = status;
        }
        if let Some(deadline) = self.deadline {
            task.deadline = Some(deadline);
        }
        if let Some(objective) = &self.objective {
            task.objective = Some(objective.clone());
        }
        if let Some(accomplished) = &self.accomplished {
            task.accomplished = Some(accomplished.clone());
        }
        if let Some(owner) = &self.owner {
            task.owner = Some(owner.clone());
        }
        if let Some(notes) = &self.notes {
            task.notes = Some(notes.clone());
        }
        if let Some(links) = &self.links {
            task.links = Some(links.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::template::default_stage;

    #[test]
    fn empty_patches_report_empty() {
        assert!(StagePatch::default().is_empty());
        assert!(SubTaskPatch::default().is_empty());

        let patch = StagePatch {
            owner: Some("Nadia".to_string()),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }

    #[test]
    fn stage_patch_merges_only_set_fields() {
        let mut stage = default_stage(StageId::Fondations, Some(date(2024, 6, 9)));
        let before_deadline = stage.deadline;

        let patch = StagePatch {
            owner: Some("Nadia".to_string()),
            status: Some(Status::InProgress),
            ..Default::default()
        };
        patch.apply(&mut stage);

        assert_eq!(stage.owner, "Nadia");
        assert_eq!(stage.status, Status::InProgress);
        assert_eq!(stage.title, "Fondations");
        assert_eq!(stage.deadline, before_deadline);
    }

    #[test]
    fn sub_task_patch_fills_optional_fields() {
        let mut task = SubTask::new("f1", "Vision & ligne éditoriale");

        let patch = SubTaskPatch {
            status: Some(Status::Done),
            accomplished: Some("Ligne éditoriale validée".to_string()),
            deadline: Some(date(2024, 7, 1)),
            ..Default::default()
        };
        patch.apply(&mut task);

        assert_eq!(task.status, Status::Done);
        assert_eq!(
            task.accomplished.as_deref(),
            Some("Ligne éditoriale validée")
        );
        assert_eq!(task.deadline, Some(date(2024, 7, 1)));
        assert!(task.owner.is_none());
    }
}
