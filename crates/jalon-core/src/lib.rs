//! Core library for the Jalon project planning board.
//!
//! Jalon tracks a single editorial project as a fixed set of stages, each
//! with sub-tasks, statuses, deadlines, notes and links. This crate provides
//! the whole non-presentation logic: the domain models, the default project
//! template with its auto-schedule offsets, the reminder derivation, the
//! JSON persistence gateway and the [`Board`] state store that ties them
//! together.
//!
//! # Architecture
//!
//! ```text
//! Storage ──load──▶ Board ──derive──▶ Reminders
//!    ▲                │
//!    └───── save ─────┘  (after every mutation)
//! ```
//!
//! The board owns the project exclusively; interface layers read through its
//! accessors and mutate through its operations. Reminders are never
//! persisted: they are rebuilt from the current stage list and today's date
//! on every change.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use jalon_core::{BoardBuilder, StageId, params::StagePatch, Status};
//!
//! # async fn example() -> jalon_core::Result<()> {
//! let mut board = BoardBuilder::new()
//!     .with_store_path(Some("projet.json"))
//!     .build()
//!     .await?;
//!
//! let stage = board
//!     .patch_stage(
//!         StageId::Fondations,
//!         StagePatch {
//!             status: Some(Status::InProgress),
//!             ..Default::default()
//!         },
//!     )
//!     .await?;
//! println!("{stage}");
//!
//! for reminder in board.reminders() {
//!     println!("{reminder}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod board;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod reminders;
pub mod storage;
pub mod template;

// Re-export commonly used types
pub use board::{Board, BoardBuilder};
pub use display::{FrenchDate, LocalDateTime, OperationStatus, Reminders};
pub use error::{BoardError, Result};
pub use models::{Link, Project, Reminder, ReminderKind, Stage, StageId, Status, SubTask};
pub use params::{StagePatch, SubTaskPatch};
pub use reminders::compute_reminders;
pub use storage::{export_file_name, export_json, Storage};
pub use template::{default_deadline, default_stage, initial_project, PROJECT_NAME};
