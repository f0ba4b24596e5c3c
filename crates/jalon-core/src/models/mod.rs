//! Data models for the project planning board.
//!
//! This module contains the domain types of the board: the [`Project`]
//! aggregate with its [`Stage`]s and [`SubTask`]s, the shared [`Status`]
//! enumeration, and the derived [`Reminder`] records. Display
//! implementations live in [`crate::display`] to keep data structures and
//! presentation separate.
//!
//! Deadlines are [`jiff::civil::Date`] values: calendar days with no
//! time-of-day semantics. All deadline comparisons therefore happen at whole
//! day granularity.

pub mod project;
pub mod reminder;
pub mod stage;
pub mod status;
pub mod subtask;


pub use project::Project;
pub use reminder::{Reminder, ReminderKind};
pub use stage::{Stage, StageId};
pub use status::Status;
pub use subtask::{Link, SubTask};
