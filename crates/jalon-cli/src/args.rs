use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{
    ExportArgs, ImportArgs, LaunchArgs, ResetProjectArgs, StageCommands, TaskCommands,
};

/// Main command-line interface for the Jalon planning board
///
/// Jalon tracks an editorial project as a fixed set of stages, each with
/// sub-tasks, statuses, deadlines, notes and links. The whole project lives
/// in a single JSON store file; deadlines default to a fixed schedule
/// offset from the project launch date, and upcoming or passed deadlines
/// surface as reminders and alerts.
#[derive(Parser)]
#[command(version, about, name = "jalon")]
pub struct Args {
    /// Path to the JSON store file. Defaults to
    /// $XDG_DATA_HOME/jalon/projet.json
    #[arg(long, global = true)]
    pub store_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Jalon CLI
///
/// Running without a command prints the project overview with the reminder
/// banner, mirroring the board's home view.
#[derive(Subcommand)]
pub enum Commands {
    /// Manage stages
    #[command(alias = "s")]
    Stage {
        #[command(subcommand)]
        command: StageCommands,
    },
    /// Manage sub-tasks within stages
    #[command(alias = "t")]
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
    /// Show upcoming and passed deadlines
    #[command(alias = "r")]
    Reminders,
    /// Set or clear the project launch date
    Launch(LaunchArgs),
    /// Reset the whole project to the default template
    Reset(ResetProjectArgs),
    /// Export the project as a pretty-printed JSON file
    Export(ExportArgs),
    /// Import a project from a JSON file, replacing the current one
    Import(ImportArgs),
}
