//! Sub-task operations for the Board.

use super::Board;
use crate::error::{BoardError, Result};
use crate::models::{StageId, SubTask};
use crate::params::SubTaskPatch;

impl Board {
    /// Merges the patch into the named sub-task within the named stage and
    /// returns the updated sub-task.
    pub async fn patch_sub_task(
        &mut self,
        stage_id: StageId,
        sub_task_id: &str,
        patch: SubTaskPatch,
    ) -> Result<SubTask> {
        let stage = self
            .project
            .stage_mut(stage_id)
            .ok_or(BoardError::StageNotFound { id: stage_id })?;
        let task = stage
            .sub_task_mut(sub_task_id)
            .ok_or_else(|| BoardError::SubTaskNotFound {
                stage: stage_id,
                sub_task: sub_task_id.to_string(),
            })?;
        patch.apply(task);
        let updated = task.clone();

        self.commit().await?;
        Ok(updated)
    }
}
