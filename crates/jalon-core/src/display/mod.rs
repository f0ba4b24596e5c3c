//! Display formatting for the board's domain objects.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! this module adds the pieces around them: collection wrappers with
//! empty-list handling, operation feedback messages, and date formatting
//! helpers. All formatters produce markdown, which the CLI renders to the
//! terminal.
//!
//! # Module organization
//!
//! - [`collections`]: collection wrapper types ([`Reminders`])
//! - [`status`]: operation feedback messages ([`OperationStatus`])
//! - [`date`]: calendar date and timestamp formatting wrappers
//! - [`models`]: Display implementations for the domain models

pub mod collections;
pub mod date;
pub mod models;
pub mod status;

pub use collections::Reminders;
pub use date::{FrenchDate, LocalDateTime};
pub use status::OperationStatus;
