//! Command definitions and handlers using clap's derive API.
//!
//! Argument structs follow the parameter wrapper pattern: clap-specific
//! structures live here and convert into the core parameter types
//! ([`StagePatch`], [`SubTaskPatch`]) before reaching the board, keeping the
//! core free of CLI framework concerns.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use jalon_core::{
    export_file_name, Board, FrenchDate, Link, OperationStatus, Project, Reminders, StageId,
    StagePatch, Status, SubTaskPatch,
};
use jiff::civil::Date;
use jiff::Zoned;
use log::debug;

use crate::renderer::TerminalRenderer;

/// Parses a `LABEL=URL` pair into a link.
fn parse_link(s: &str) -> std::result::Result<Link, String> {
    let (label, url) = s
        .split_once('=')
        .ok_or_else(|| format!("expected LABEL=URL, got '{s}'"))?;
    if label.is_empty() || url.is_empty() {
        return Err(format!("expected LABEL=URL, got '{s}'"));
    }
    Ok(Link {
        label: label.to_string(),
        url: url.to_string(),
    })
}

/// Command-line argument representation of status values.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    /// Work has not started
    ToDo,
    /// Work is underway
    InProgress,
    /// Work is finished
    Done,
}

impl From<StatusArg> for Status {
    fn from(val: StatusArg) -> Self {
        match val {
            StatusArg::ToDo => Status::ToDo,
            StatusArg::InProgress => Status::InProgress,
            StatusArg::Done => Status::Done,
        }
    }
}

/// Show details of a specific stage
#[derive(Args)]
pub struct ShowStageArgs {
    /// Identifier of the stage (e.g. fondations, production_livre1)
    pub id: StageId,
}

/// Update a stage's editable fields
///
/// Only the provided flags change; everything else is left as is. The
/// deadline has its own subcommand so the manual-edit flag always moves
/// together with the date.
#[derive(Args)]
pub struct SetStageArgs {
    /// Identifier of the stage to update
    pub id: StageId,
    /// Updated title for the stage
    #[arg(short, long)]
    pub title: Option<String>,
    /// Person responsible for the stage (empty string clears)
    #[arg(short, long)]
    pub owner: Option<String>,
    /// New status for the stage
    #[arg(short, long)]
    pub status: Option<StatusArg>,
    /// Updated notes (empty string clears)
    #[arg(short, long)]
    pub notes: Option<String>,
    /// Replacement links as LABEL=URL pairs (repeat the flag to add several)
    #[arg(long = "link", value_parser = parse_link)]
    pub links: Option<Vec<Link>>,
    /// Replacement dependency list as comma-separated stage ids
    #[arg(long = "depends-on", value_delimiter = ',')]
    pub dependencies: Option<Vec<StageId>>,
}

impl From<SetStageArgs> for StagePatch {
    fn from(val: SetStageArgs) -> Self {
        StagePatch {
            title: val.title,
            owner: val.owner,
            status: val.status.map(Into::into),
            notes: val.notes,
            links: val.links,
            dependencies: val.dependencies,
        }
    }
}

/// Set a stage's deadline by hand
///
/// The stage is marked as manually scheduled; use `stage auto` to return it
/// to the launch-date schedule.
#[derive(Args)]
pub struct SetDeadlineArgs {
    /// Identifier of the stage to update
    pub id: StageId,
    /// New deadline as an ISO date (YYYY-MM-DD)
    pub date: Date,
}

/// Revert a stage to the automatic schedule
#[derive(Args)]
pub struct AutoScheduleArgs {
    /// Identifier of the stage to revert
    pub id: StageId,
}

/// Mark a stage as done
#[derive(Args)]
pub struct MarkDoneArgs {
    /// Identifier of the stage to mark as done
    pub id: StageId,
}

/// Reset a stage to its default-template state
#[derive(Args)]
pub struct ResetStageArgs {
    /// Identifier of the stage to reset
    pub id: StageId,
    /// Confirm the reset (required: this discards the stage's content)
    #[arg(long)]
    pub confirm: bool,
}

#[derive(Subcommand)]
pub enum StageCommands {
    /// List all stages
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show details of a specific stage
    #[command(alias = "s")]
    Show(ShowStageArgs),
    /// Update a stage's editable fields
    Set(SetStageArgs),
    /// Set a stage's deadline by hand
    #[command(alias = "d")]
    Deadline(SetDeadlineArgs),
    /// Revert a stage to the automatic schedule
    #[command(alias = "a")]
    Auto(AutoScheduleArgs),
    /// Mark a stage as done
    Done(MarkDoneArgs),
    /// Reset a stage to its default-template state
    Reset(ResetStageArgs),
}

/// Show details of a specific sub-task
#[derive(Args)]
pub struct ShowTaskArgs {
    /// Identifier of the owning stage
    pub stage: StageId,
    /// Identifier of the sub-task within the stage (e.g. f1)
    pub id: String,
}

/// Update a sub-task's editable fields
#[derive(Args)]
pub struct SetTaskArgs {
    /// Identifier of the owning stage
    pub stage: StageId,
    /// Identifier of the sub-task within the stage (e.g. f1)
    pub id: String,
    /// Updated label for the sub-task
    #[arg(short, long)]
    pub label: Option<String>,
    /// New status for the sub-task
    #[arg(short, long)]
    pub status: Option<StatusArg>,
    /// Deadline as an ISO date (YYYY-MM-DD)
    #[arg(short, long)]
    pub deadline: Option<Date>,
    /// What should be achieved
    #[arg(long)]
    pub objective: Option<String>,
    /// What has actually been done
    #[arg(long)]
    pub accomplished: Option<String>,
    /// Person responsible for the sub-task
    #[arg(short, long)]
    pub owner: Option<String>,
    /// Updated notes
    #[arg(short, long)]
    pub notes: Option<String>,
    /// Replacement links as LABEL=URL pairs (repeat the flag to add several)
    #[arg(long = "link", value_parser = parse_link)]
    pub links: Option<Vec<Link>>,
}

impl From<SetTaskArgs> for SubTaskPatch {
    fn from(val: SetTaskArgs) -> Self {
        SubTaskPatch {
            label: val.label,
            status: val.status.map(Into::into),
            deadline: val.deadline,
            objective: val.objective,
            accomplished: val.accomplished,
            owner: val.owner,
            notes: val.notes,
            links: val.links,
        }
    }
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Show details of a specific sub-task
    #[command(alias = "s")]
    Show(ShowTaskArgs),
    /// Update a sub-task's editable fields
    Set(SetTaskArgs),
}

/// Set or clear the project launch date
///
/// Changing the launch date does not move any existing deadline: only stages
/// reset or reverted to the automatic schedule pick up the new anchor.
#[derive(Args)]
pub struct LaunchArgs {
    /// Launch date as an ISO date (YYYY-MM-DD)
    pub date: Option<Date>,
    /// Clear the launch date instead of setting one
    #[arg(long, conflicts_with = "date")]
    pub clear: bool,
}

/// Reset the whole project to the default template
#[derive(Args)]
pub struct ResetProjectArgs {
    /// Confirm the reset (required: this discards the whole project)
    #[arg(long)]
    pub confirm: bool,
}

/// Export the project as a pretty-printed JSON file
#[derive(Args)]
pub struct ExportArgs {
    /// Output file path. Defaults to projet-editorial-<YYYY-MM-DD>.json
    pub output: Option<PathBuf>,
}

/// Import a project from a JSON file, replacing the current one
#[derive(Args)]
pub struct ImportArgs {
    /// Path of the JSON file to import
    pub file: PathBuf,
    /// Confirm the import (required: this replaces the whole project)
    #[arg(long)]
    pub confirm: bool,
}

/// Command handler tying the board to the terminal renderer.
pub struct Cli {
    board: Board,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(board: Board, renderer: TerminalRenderer) -> Self {
        Self { board, renderer }
    }

    /// Project overview with the reminder banner: the board's home view.
    pub fn overview(&self) -> Result<()> {
        let mut output = self.board.project().to_string();
        output.push('\n');
        output.push_str("## Rappels\n\n");
        output.push_str(&Reminders(self.board.reminders().to_vec()).to_string());
        self.renderer.render(&output)
    }

    pub fn show_reminders(&self) -> Result<()> {
        let output = format!(
            "# Rappels\n\n{}",
            Reminders(self.board.reminders().to_vec())
        );
        self.renderer.render(&output)
    }

    pub async fn handle_stage_command(mut self, command: StageCommands) -> Result<()> {
        match command {
            StageCommands::List => self.renderer.render(&self.board.project().to_string()),
            StageCommands::Show(args) => match self.board.stage(args.id) {
                Some(stage) => self.renderer.render(&stage.to_string()),
                None => self.render_missing_stage(args.id),
            },
            StageCommands::Set(args) => {
                let id = args.id;
                let patch: StagePatch = args.into();
                if patch.is_empty() {
                    return self.renderer.render(&OperationStatus::failure(
                        "Nothing to update: provide at least one field flag.".to_string(),
                    )
                    .to_string());
                }
                debug!("Patching stage {id}");
                let stage = self.board.patch_stage(id, patch).await?;
                self.render_updated_stage(&stage)
            }
            StageCommands::Deadline(args) => {
                let stage = self
                    .board
                    .set_stage_deadline(args.id, args.date, true)
                    .await?;
                self.render_updated_stage(&stage)
            }
            StageCommands::Auto(args) => {
                let stage = self.board.revert_stage_to_auto(args.id).await?;
                self.render_updated_stage(&stage)
            }
            StageCommands::Done(args) => {
                let stage = self.board.mark_stage_done(args.id).await?;
                self.render_updated_stage(&stage)
            }
            StageCommands::Reset(args) => {
                if !args.confirm {
                    bail!(
                        "Resetting stage '{}' discards its content. Re-run with --confirm to proceed.",
                        args.id
                    );
                }
                let stage = self.board.reset_stage(args.id).await?;
                let output = format!("Reset stage '{}' to its default state.\n\n{stage}", args.id);
                self.renderer.render(&output)
            }
        }
    }

    pub async fn handle_task_command(mut self, command: TaskCommands) -> Result<()> {
        match command {
            TaskCommands::Show(args) => match self.board.sub_task(args.stage, &args.id) {
                Some(task) => self.renderer.render(&task.to_string()),
                None => self.renderer.render(
                    &OperationStatus::failure(format!(
                        "Sub-task '{}' not found in stage '{}'.",
                        args.id, args.stage
                    ))
                    .to_string(),
                ),
            },
            TaskCommands::Set(args) => {
                let stage_id = args.stage;
                let task_id = args.id.clone();
                let patch: SubTaskPatch = args.into();
                if patch.is_empty() {
                    return self.renderer.render(&OperationStatus::failure(
                        "Nothing to update: provide at least one field flag.".to_string(),
                    )
                    .to_string());
                }
                debug!("Patching sub-task {stage_id}/{task_id}");
                let task = self
                    .board
                    .patch_sub_task(stage_id, &task_id, patch)
                    .await?;
                let output = format!("Updated sub-task '{task_id}'.\n\n{task}");
                self.renderer.render(&output)
            }
        }
    }

    pub async fn set_launch(mut self, args: LaunchArgs) -> Result<()> {
        if args.clear {
            self.board.set_launch_date(None).await?;
            return self.renderer.render(
                &OperationStatus::success("Launch date cleared.".to_string()).to_string(),
            );
        }
        let Some(date) = args.date else {
            bail!("Provide a launch date (YYYY-MM-DD) or --clear.");
        };
        self.board.set_launch_date(Some(date)).await?;
        self.renderer.render(
            &OperationStatus::success(format!(
                "Launch date set to {}. Existing deadlines are unchanged; reset or \
                 revert stages to apply the new schedule.",
                FrenchDate(&date)
            ))
            .to_string(),
        )
    }

    pub async fn reset_project(mut self, args: ResetProjectArgs) -> Result<()> {
        if !args.confirm {
            bail!("Resetting discards the whole project. Re-run with --confirm to proceed.");
        }
        self.board.reset_project().await?;
        let output = format!(
            "{}{}",
            OperationStatus::success("Project reset to the default template.".to_string()),
            self.board.project()
        );
        self.renderer.render(&output)
    }

    pub fn export(&self, args: ExportArgs) -> Result<()> {
        let json = self.board.export_json()?;
        let path = args
            .output
            .unwrap_or_else(|| PathBuf::from(export_file_name(Zoned::now().date())));
        std::fs::write(&path, json)
            .with_context(|| format!("Failed to write export file '{}'", path.display()))?;
        self.renderer.render(
            &OperationStatus::success(format!("Exported project to '{}'.", path.display()))
                .to_string(),
        )
    }

    pub async fn import(mut self, args: ImportArgs) -> Result<()> {
        if !args.confirm {
            bail!("Importing replaces the whole project. Re-run with --confirm to proceed.");
        }
        let raw = std::fs::read_to_string(&args.file)
            .with_context(|| format!("Failed to read import file '{}'", args.file.display()))?;
        let project: Project = serde_json::from_str(&raw)
            .with_context(|| format!("'{}' is not a valid project export", args.file.display()))?;
        self.board.replace_project(project).await?;
        let output = format!(
            "{}{}",
            OperationStatus::success(format!(
                "Imported project from '{}'.",
                args.file.display()
            )),
            self.board.project()
        );
        self.renderer.render(&output)
    }

    fn render_updated_stage(&self, stage: &jalon_core::Stage) -> Result<()> {
        let output = format!("Updated stage '{}'.\n\n{stage}", stage.id);
        self.renderer.render(&output)
    }

    fn render_missing_stage(&self, id: StageId) -> Result<()> {
        self.renderer.render(
            &OperationStatus::failure(format!("Stage '{id}' not found in the current project."))
                .to_string(),
        )
    }
}
