//! Stage model and the closed set of stage identifiers.

use std::fmt;
use std::str::FromStr;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{Link, Status, SubTask};

/// The fixed, closed set of stage identifiers.
///
/// The project plan always draws its stages from these eight phases. Keeping
/// the identifiers as an enum ties the auto-schedule offset table
/// ([`StageId::offset_days`]) to the identifier set by construction: adding a
/// stage without an offset is a compile error, and an "unknown stage id" can
/// never reach the schedule.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StageId {
    Fondations,
    Organisation,
    MethodeProduction,
    ProductionLivre1,
    IdentiteImage,
    DiffusionLecteurs,
    International,
    PilotageGlobal,
}

impl StageId {
    /// Every stage identifier, in the canonical plan order.
    pub const ALL: [StageId; 8] = [
        StageId::Fondations,
        StageId::Organisation,
        StageId::MethodeProduction,
        StageId::ProductionLivre1,
        StageId::IdentiteImage,
        StageId::DiffusionLecteurs,
        StageId::International,
        StageId::PilotageGlobal,
    ];

    /// Persisted string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            StageId::Fondations => "fondations",
            StageId::Organisation => "organisation",
            StageId::MethodeProduction => "methode_production",
            StageId::ProductionLivre1 => "production_livre1",
            StageId::IdentiteImage => "identite_image",
            StageId::DiffusionLecteurs => "diffusion_lecteurs",
            StageId::International => "international",
            StageId::PilotageGlobal => "pilotage_global",
        }
    }

    /// Day offset of the stage's auto-scheduled deadline, counted from the
    /// project launch date.
    pub fn offset_days(&self) -> i32 {
        match self {
            StageId::Fondations => 14,
            StageId::Organisation => 21,
            StageId::MethodeProduction => 28,
            StageId::ProductionLivre1 => 90,
            StageId::IdentiteImage => 45,
            StageId::DiffusionLecteurs => 120,
            StageId::International => 150,
            StageId::PilotageGlobal => 180,
        }
    }
}

impl FromStr for StageId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fondations" => Ok(StageId::Fondations),
            "organisation" => Ok(StageId::Organisation),
            "methode_production" => Ok(StageId::MethodeProduction),
            "production_livre1" => Ok(StageId::ProductionLivre1),
            "identite_image" => Ok(StageId::IdentiteImage),
            "diffusion_lecteurs" => Ok(StageId::DiffusionLecteurs),
            "international" => Ok(StageId::International),
            "pilotage_global" => Ok(StageId::PilotageGlobal),
            _ => Err(format!("Unknown stage id: {s}")),
        }
    }
}

impl fmt::Display for StageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A top-level phase of the project plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Stage {
    /// Identifier, drawn from the fixed set of eight phases
    pub id: StageId,

    /// Display title of the stage
    pub title: String,

    /// Person responsible for the stage (free text, may be empty)
    pub owner: String,

    /// Deadline of the stage (calendar date, no time-of-day semantics)
    pub deadline: Date,

    /// Current status of the stage
    pub status: Status,

    /// Child work items; ids are unique only within this stage
    pub sub_tasks: Vec<SubTask>,

    /// Free-form notes
    pub notes: String,

    /// Attached links; replaced wholesale on edit
    pub links: Vec<Link>,

    /// Informational only: no scheduling logic reads this
    pub dependencies: Vec<StageId>,

    /// True when the deadline diverged from the auto-computed schedule
    #[serde(default)]
    pub deadline_manually_edited: bool,
}

impl Stage {
    /// Looks up a sub-task by its id within this stage.
    pub fn sub_task(&self, id: &str) -> Option<&SubTask> {
        self.sub_tasks.iter().find(|task| task.id == id)
    }

    pub(crate) fn sub_task_mut(&mut self, id: &str) -> Option<&mut SubTask> {
        self.sub_tasks.iter_mut().find(|task| task.id == id)
    }
}
