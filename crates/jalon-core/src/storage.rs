//! Persistence gateway: one project, one JSON file.
//!
//! The store is a single JSON blob holding the whole [`Project`]: there is
//! exactly one project per store file, so no keys, tables or ids. Loading is
//! infallible: anything that cannot be read back as a usable project falls
//! back to the default template.

use std::fs;
use std::path::{Path, PathBuf};

use jiff::civil::Date;
use jiff::Timestamp;

use crate::error::{BoardError, Result};
use crate::models::Project;
use crate::template::initial_project;

/// Gateway to the single JSON store file.
#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    /// Creates a gateway for the given store file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the store file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the project from the store file.
    ///
    /// A missing or unreadable file, unparsable JSON, or a project with an
    /// empty stage list all fall back to the default template anchored to
    /// today. This never surfaces an error.
    pub fn load(&self) -> Project {
        let Ok(raw) = fs::read_to_string(&self.path) else {
            return initial_project(None);
        };
        match serde_json::from_str::<Project>(&raw) {
            Ok(project) if !project.stages.is_empty() => project,
            _ => initial_project(None),
        }
    }

    /// Writes the project to the store file with a refreshed `lastModified`
    /// stamp, and returns the stamp so callers can align their in-memory
    /// copy.
    pub fn save(&self, project: &Project) -> Result<Timestamp> {
        let stamp = Timestamp::now();
        let mut stamped = project.clone();
        stamped.last_modified = stamp;

        let json = serde_json::to_string(&stamped)?;
        fs::write(&self.path, json)
            .map_err(|source| BoardError::file_system(self.path.clone(), source))?;
        Ok(stamp)
    }
}

/// Pretty-printed JSON of the project, for file export.
pub fn export_json(project: &Project) -> Result<String> {
    serde_json::to_string_pretty(project).map_err(Into::into)
}

/// Default export file name for the given date:
/// `projet-editorial-<YYYY-MM-DD>.json`.
pub fn export_file_name(date: Date) -> String {
    format!("projet-editorial-{date}.json")
}
