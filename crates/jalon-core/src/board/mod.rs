//! The board: single holder of the current project state.
//!
//! [`Board`] is the explicit context object through which every mutation
//! flows. It owns the current [`Project`], the reminder list derived from
//! it, and the [`Storage`] gateway. Every successful mutation recomputes the
//! reminders against the new stage list and then persists the project; the
//! initial load does neither a save nor a timestamp refresh, so opening the
//! board never rewrites untouched data.
//!
//! Construction goes through [`BoardBuilder`]:
//!
//! ```rust,no_run
//! use jalon_core::BoardBuilder;
//!
//! # async fn example() -> jalon_core::Result<()> {
//! let board = BoardBuilder::new().build().await?;
//! println!("{}", board.project());
//! # Ok(())
//! # }
//! ```

use tokio::task;

use crate::error::{BoardError, Result};
use crate::models::{Project, Reminder, Stage, StageId, SubTask};
use crate::reminders::compute_reminders;
use crate::storage::{export_json, Storage};
use crate::template::today;

pub mod builder;
mod project_ops;
mod stage_ops;
mod task_ops;

pub use builder::BoardBuilder;

/// In-memory holder of the current project, its derived reminders, and the
/// persistence gateway.
pub struct Board {
    pub(crate) project: Project,
    pub(crate) reminders: Vec<Reminder>,
    pub(crate) storage: Storage,
}

impl Board {
    pub(crate) fn open(project: Project, storage: Storage) -> Self {
        let reminders = compute_reminders(&project.stages, today());
        Self {
            project,
            reminders,
            storage,
        }
    }

    /// The current project.
    pub fn project(&self) -> &Project {
        &self.project
    }

    /// The reminder list derived from the current project.
    pub fn reminders(&self) -> &[Reminder] {
        &self.reminders
    }

    /// Looks up a stage in the current project.
    pub fn stage(&self, id: StageId) -> Option<&Stage> {
        self.project.stage(id)
    }

    /// Looks up a sub-task in the current project.
    pub fn sub_task(&self, stage_id: StageId, sub_task_id: &str) -> Option<&SubTask> {
        self.project.sub_task(stage_id, sub_task_id)
    }

    /// Pretty-printed JSON of the current project, for export.
    pub fn export_json(&self) -> Result<String> {
        export_json(&self.project)
    }

    /// Recomputes the reminder list and persists the project.
    ///
    /// Runs after every successful mutation, in that order. The write goes
    /// through a blocking task; the returned stamp is copied back so the
    /// in-memory `lastModified` matches the store.
    pub(crate) async fn commit(&mut self) -> Result<()> {
        self.reminders = compute_reminders(&self.project.stages, today());

        let storage = self.storage.clone();
        let project = self.project.clone();
        let stamp = task::spawn_blocking(move || storage.save(&project))
            .await
            .map_err(BoardError::task_join)??;

        self.project.last_modified = stamp;
        Ok(())
    }
}
