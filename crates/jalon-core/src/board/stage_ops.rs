//! Stage operations for the Board.

use jiff::civil::Date;

use super::Board;
use crate::error::{BoardError, Result};
use crate::models::{Stage, StageId, Status};
use crate::params::StagePatch;
use crate::template::{default_deadline, default_stage, today};

impl Board {
    /// Merges the patch into the named stage and returns the updated stage.
    pub async fn patch_stage(&mut self, id: StageId, patch: StagePatch) -> Result<Stage> {
        let stage = self
            .project
            .stage_mut(id)
            .ok_or(BoardError::StageNotFound { id })?;
        patch.apply(stage);
        let updated = stage.clone();

        self.commit().await?;
        Ok(updated)
    }

    /// Sets the stage's deadline together with the manual-edit flag.
    ///
    /// The two always move as a pair: a user-chosen date marks the stage as
    /// manually scheduled, a programmatic one clears the mark.
    pub async fn set_stage_deadline(
        &mut self,
        id: StageId,
        deadline: Date,
        manually_edited: bool,
    ) -> Result<Stage> {
        let stage = self
            .project
            .stage_mut(id)
            .ok_or(BoardError::StageNotFound { id })?;
        stage.deadline = deadline;
        stage.deadline_manually_edited = manually_edited;
        let updated = stage.clone();

        self.commit().await?;
        Ok(updated)
    }

    /// Recomputes the stage's deadline from the current launch date and
    /// clears the manual-edit flag.
    pub async fn revert_stage_to_auto(&mut self, id: StageId) -> Result<Stage> {
        let anchor = self.project.launch_date.unwrap_or_else(today);
        self.set_stage_deadline(id, default_deadline(id, anchor), false)
            .await
    }

    /// Convenience transition straight to `done` from any state.
    ///
    /// The deadline is left untouched: a finished stage simply stops feeding
    /// the reminder computation.
    pub async fn mark_stage_done(&mut self, id: StageId) -> Result<Stage> {
        self.patch_stage(
            id,
            StagePatch {
                status: Some(Status::Done),
                ..Default::default()
            },
        )
        .await
    }

    /// Replaces the stage with its default-template counterpart, derived
    /// from the current launch date.
    ///
    /// Reset scrubs harder than the template alone: owner and notes are
    /// forced empty, links are dropped, and every sub-task returns to
    /// `to_do` with its free-text fields cleared.
    pub async fn reset_stage(&mut self, id: StageId) -> Result<Stage> {
        let mut fresh = default_stage(id, self.project.launch_date);
        fresh.owner.clear();
        fresh.notes.clear();
        fresh.links.clear();
        fresh.deadline_manually_edited = false;
        for task in &mut fresh.sub_tasks {
            task.scrub();
        }

        let stage = self
            .project
            .stage_mut(id)
            .ok_or(BoardError::StageNotFound { id })?;
        *stage = fresh;
        let updated = stage.clone();

        self.commit().await?;
        Ok(updated)
    }
}
