//! Default project template and the auto-schedule deadline computation.
//!
//! The template produces the fixed eight-stage skeleton of the editorial
//! plan, every deadline derived from the launch date through the static
//! offset table carried by [`StageId::offset_days`]. Building the template
//! twice with the same launch date yields the same stages (timestamps
//! aside), which is what makes the reset operations reproducible.

use jiff::civil::Date;
use jiff::{Span, Timestamp, Zoned};

use crate::models::{Project, Stage, StageId, Status, SubTask};

/// Display name of the default project.
pub const PROJECT_NAME: &str = "Roman – Projet éditorial";

/// Today's calendar date in the system time zone.
pub(crate) fn today() -> Date {
    Zoned::now().date()
}

/// Auto-scheduled deadline for a stage: launch date plus the stage's static
/// day offset.
///
/// Pure and total: the closed [`StageId`] set guarantees an offset for every
/// stage, and the date arithmetic saturates at the calendar bounds.
///
/// # Examples
///
/// ```rust
/// use jalon_core::{default_deadline, StageId};
/// use jiff::civil::date;
///
/// let launch = date(2024, 6, 9);
/// assert_eq!(
///     default_deadline(StageId::Fondations, launch),
///     date(2024, 6, 23)
/// );
/// ```
pub fn default_deadline(id: StageId, launch: Date) -> Date {
    launch.saturating_add(Span::new().days(i64::from(id.offset_days())))
}

fn task(id: &str, label: &str) -> SubTask {
    SubTask::new(id, label)
}

fn stage(
    id: StageId,
    anchor: Date,
    title: &str,
    notes: &str,
    dependencies: Vec<StageId>,
    sub_tasks: Vec<SubTask>,
) -> Stage {
    Stage {
        id,
        title: title.to_string(),
        owner: String::new(),
        deadline: default_deadline(id, anchor),
        status: Status::ToDo,
        sub_tasks,
        notes: notes.to_string(),
        links: Vec::new(),
        dependencies,
        deadline_manually_edited: false,
    }
}

/// Re-derives a single stage from a freshly built template.
///
/// Used to reset one stage without disturbing the others. When no launch
/// date is given, the template anchors to today.
pub fn default_stage(id: StageId, launch: Option<Date>) -> Stage {
    let anchor = launch.unwrap_or_else(today);
    match id {
        StageId::Fondations => stage(
            id,
            anchor,
            "Fondations",
            "Vision, ligne éditoriale, règles, cadre juridique, nom de la collection.",
            vec![],
            vec![
                task("f1", "Vision & ligne éditoriale"),
                task("f2", "Règles et cadre juridique"),
                task("f3", "Nom de la collection"),
            ],
        ),
        StageId::Organisation => stage(
            id,
            anchor,
            "Organisation",
            "Rôles, équipe, responsabilités.",
            vec![],
            vec![
                task("o1", "Définir les rôles"),
                task("o2", "Constituer l'équipe"),
                task("o3", "Répartition des responsabilités"),
            ],
        ),
        StageId::MethodeProduction => stage(
            id,
            anchor,
            "Méthode de production",
            "Process écriture → relecture → corrections → validation.",
            vec![StageId::Fondations, StageId::Organisation],
            vec![
                task("m1", "Process écriture"),
                task("m2", "Process relecture"),
                task("m3", "Corrections & validation"),
            ],
        ),
        StageId::ProductionLivre1 => stage(
            id,
            anchor,
            "Production du livre 1",
            "Rédaction, relecture, corrections, préparation publication, publication.",
            vec![StageId::MethodeProduction],
            vec![
                task("p1", "Rédaction"),
                task("p2", "Relecture"),
                task("p3", "Corrections"),
                task("p4", "Préparation publication"),
                task("p5", "Publication"),
            ],
        ),
        StageId::IdentiteImage => stage(
            id,
            anchor,
            "Identité & image",
            "Nom, logo, direction artistique, couverture.",
            vec![],
            vec![
                task("i1", "Nom & logo"),
                task("i2", "Direction artistique"),
                task("i3", "Couverture"),
            ],
        ),
        StageId::DiffusionLecteurs => stage(
            id,
            anchor,
            "Diffusion & lecteurs",
            "Mode d'édition, canaux de vente, présence en ligne, retours lecteurs.",
            vec![StageId::ProductionLivre1],
            vec![
                task("d1", "Mode d'édition"),
                task("d2", "Canaux de vente"),
                task("d3", "Présence en ligne"),
                task("d4", "Retours lecteurs"),
            ],
        ),
        StageId::International => stage(
            id,
            anchor,
            "International",
            "Préparation traductions arabe / anglais / français.",
            vec![StageId::ProductionLivre1],
            vec![
                task("int1", "Préparation traduction arabe"),
                task("int2", "Préparation traduction anglais"),
                task("int3", "Préparation traduction français"),
            ],
        ),
        StageId::PilotageGlobal => stage(
            id,
            anchor,
            "Pilotage global",
            "Suivi, validations, rappels, avancement.",
            vec![],
            vec![
                task("pil1", "Suivi des étapes"),
                task("pil2", "Validations"),
                task("pil3", "Rappels & alertes"),
            ],
        ),
    }
}

/// Builds the full initial project anchored to the given launch date, or to
/// today when none is given.
///
/// Every stage status is `to_do`, all free-text fields are empty and every
/// deadline comes from [`default_deadline`].
pub fn initial_project(launch: Option<Date>) -> Project {
    let anchor = launch.unwrap_or_else(today);
    Project {
        name: PROJECT_NAME.to_string(),
        stages: StageId::ALL
            .iter()
            .map(|&id| default_stage(id, Some(anchor)))
            .collect(),
        last_modified: Timestamp::now(),
        launch_date: Some(anchor),
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn deadlines_follow_the_offset_table() {
        let launch = date(2024, 6, 9);
        let project = initial_project(Some(launch));

        assert_eq!(project.stages.len(), StageId::ALL.len());
        for id in StageId::ALL {
            let matching: Vec<_> = project
                .stages
                .iter()
                .filter(|stage| stage.id == id)
                .collect();
            assert_eq!(matching.len(), 1, "exactly one stage per id");
            assert_eq!(matching[0].deadline, default_deadline(id, launch));
        }

        assert_eq!(
            default_deadline(StageId::PilotageGlobal, launch),
            date(2024, 12, 6)
        );
    }

    #[test]
    fn template_is_deterministic_for_a_launch_date() {
        let launch = date(2025, 1, 15);
        let first = initial_project(Some(launch));
        let second = initial_project(Some(launch));
        assert_eq!(first.stages, second.stages);
        assert_eq!(first.launch_date, second.launch_date);
    }

    #[test]
    fn template_stages_start_pristine() {
        let project = initial_project(Some(date(2024, 6, 9)));
        for stage in &project.stages {
            assert_eq!(stage.status, Status::ToDo);
            assert!(stage.owner.is_empty());
            assert!(stage.links.is_empty());
            assert!(!stage.deadline_manually_edited);
            assert!(!stage.sub_tasks.is_empty());
            for task in &stage.sub_tasks {
                assert_eq!(task.status, Status::ToDo);
                assert!(task.objective.is_none());
                assert!(task.links.is_none());
            }
        }
    }

    #[test]
    fn default_stage_matches_the_full_template() {
        let launch = date(2024, 6, 9);
        let project = initial_project(Some(launch));
        for id in StageId::ALL {
            assert_eq!(
                &default_stage(id, Some(launch)),
                project.stage(id).unwrap()
            );
        }
    }

    #[test]
    fn sub_task_counts_match_the_plan() {
        let project = initial_project(Some(date(2024, 6, 9)));
        let counts: Vec<usize> = project
            .stages
            .iter()
            .map(|stage| stage.sub_tasks.len())
            .collect();
        assert_eq!(counts, vec![3, 3, 3, 5, 3, 4, 3, 3]);
    }
}
