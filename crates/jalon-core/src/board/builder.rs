//! Builder for creating and configuring Board instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::Board;
use crate::error::{BoardError, Result};
use crate::storage::Storage;

/// Builder for creating and configuring Board instances.
#[derive(Debug, Clone)]
pub struct BoardBuilder {
    store_path: Option<PathBuf>,
}

impl BoardBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self { store_path: None }
    }

    /// Sets a custom store file path.
    ///
    /// If not specified, uses the XDG Base Directory specification:
    /// `$XDG_DATA_HOME/jalon/projet.json` or
    /// `~/.local/share/jalon/projet.json`.
    pub fn with_store_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.store_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the board: resolves the store path, loads the project (falling
    /// back to the default template) and derives the reminder list.
    ///
    /// The initial load does not write the store back: untouched data keeps
    /// its `lastModified` stamp.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::FileSystem` if the store directory cannot be
    /// created, `BoardError::XdgDirectory` if no default path can be
    /// resolved.
    pub async fn build(self) -> Result<Board> {
        let store_path = match self.store_path {
            Some(path) => path,
            None => Self::default_store_path()?,
        };

        if let Some(parent) = store_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|source| BoardError::file_system(parent.to_path_buf(), source))?;
        }

        let storage = Storage::new(store_path);
        let loading = storage.clone();
        let project = task::spawn_blocking(move || loading.load())
            .await
            .map_err(BoardError::task_join)?;

        Ok(Board::open(project, storage))
    }

    /// Returns the default store path following the XDG Base Directory
    /// specification.
    fn default_store_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("jalon")
            .place_data_file("projet.json")
            .map_err(|e| BoardError::XdgDirectory(e.to_string()))
    }
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}
