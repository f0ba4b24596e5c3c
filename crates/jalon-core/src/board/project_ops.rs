//! Whole-project operations for the Board.

use jiff::civil::Date;

use super::Board;
use crate::error::{BoardError, Result};
use crate::models::Project;
use crate::template::initial_project;

impl Board {
    /// Replaces the entire project with a fresh default template.
    ///
    /// Anchored to "now": any previously set launch date is discarded along
    /// with the rest of the project.
    pub async fn reset_project(&mut self) -> Result<()> {
        self.project = initial_project(None);
        self.commit().await
    }

    /// Updates the project's launch date.
    ///
    /// No stage deadline is recomputed here: only stages explicitly reset or
    /// reverted to the auto schedule pick up the new anchor.
    pub async fn set_launch_date(&mut self, date: Option<Date>) -> Result<()> {
        self.project.launch_date = date;
        self.commit().await
    }

    /// Wholesale project substitution, used by import.
    ///
    /// A project with an empty stage list is rejected before any mutation
    /// happens, leaving the current state untouched.
    pub async fn replace_project(&mut self, project: Project) -> Result<()> {
        if project.stages.is_empty() {
            return Err(BoardError::invalid_import("the stage list is empty"));
        }
        self.project = project;
        self.commit().await
    }
}
