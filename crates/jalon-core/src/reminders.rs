//! Reminder computation over the stage list.
//!
//! This is a pure derivation: given the stages and the midnight-truncated
//! current date, it produces the sorted list of reminder and alert records.
//! Callers (the board, after every mutation) pass `Zoned::now().date()` as
//! `today`; tests pass fixed dates.

use jiff::civil::Date;

use crate::display::FrenchDate;
use crate::models::{Reminder, ReminderKind, Stage, Status};

/// A deadline within this many days of today produces a reminder.
const REMINDER_WINDOW_DAYS: i32 = 3;

/// Computes the reminder/alert list for the given stages.
///
/// For every stage whose status is not `done`:
/// - a deadline strictly before `today` produces an alert;
/// - a deadline within [`REMINDER_WINDOW_DAYS`] days (today included)
///   produces a reminder;
/// - anything further out produces nothing.
///
/// A stage whose deadline is exactly today is still a reminder, not an
/// alert: alerts only start once midnight has passed the deadline day. The
/// result is sorted ascending by deadline.
///
/// # Examples
///
/// ```rust
/// use jalon_core::{compute_reminders, initial_project};
/// use jiff::civil::date;
///
/// let project = initial_project(Some(date(2024, 6, 9)));
/// // The nearest default deadline is 14 days out: nothing to report.
/// assert!(compute_reminders(&project.stages, date(2024, 6, 9)).is_empty());
/// ```
pub fn compute_reminders(stages: &[Stage], today: Date) -> Vec<Reminder> {
    let mut reminders = Vec::new();

    for stage in stages {
        if stage.status == Status::Done {
            continue;
        }

        let days_remaining = (stage.deadline - today).get_days();
        if days_remaining < 0 {
            reminders.push(Reminder {
                kind: ReminderKind::Alert,
                stage_id: stage.id,
                stage_title: stage.title.clone(),
                deadline: stage.deadline,
                message: format!(
                    "Deadline dépassée le {} – statut : {}",
                    FrenchDate(&stage.deadline),
                    stage.status.label()
                ),
            });
        } else if days_remaining <= REMINDER_WINDOW_DAYS {
            let plural = if days_remaining > 1 { "s" } else { "" };
            reminders.push(Reminder {
                kind: ReminderKind::Reminder,
                stage_id: stage.id,
                stage_title: stage.title.clone(),
                deadline: stage.deadline,
                message: format!(
                    "Rappel : deadline le {} (dans {} jour{})",
                    FrenchDate(&stage.deadline),
                    days_remaining,
                    plural
                ),
            });
        }
    }

    reminders.sort_by_key(|reminder| reminder.deadline);
    reminders
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::models::StageId;

    fn stage_with_deadline(id: StageId, deadline: Date, status: Status) -> Stage {
        Stage {
            id,
            title: format!("Stage {id}"),
            owner: String::new(),
            deadline,
            status,
            sub_tasks: vec![],
            notes: String::new(),
            links: vec![],
            dependencies: vec![],
            deadline_manually_edited: false,
        }
    }

    #[test]
    fn done_stages_are_never_reported() {
        let today = date(2024, 6, 10);
        let stages = vec![stage_with_deadline(
            StageId::Fondations,
            date(2024, 6, 1),
            Status::Done,
        )];
        assert!(compute_reminders(&stages, today).is_empty());
    }

    #[test]
    fn overdue_deadline_is_an_alert() {
        let today = date(2024, 6, 10);
        let stages = vec![stage_with_deadline(
            StageId::Fondations,
            date(2024, 6, 9),
            Status::ToDo,
        )];

        let reminders = compute_reminders(&stages, today);
        assert_eq!(reminders.len(), 1);
        assert_eq!(reminders[0].kind, ReminderKind::Alert);
        assert_eq!(
            reminders[0].message,
            "Deadline dépassée le 9 juin 2024 – statut : À faire"
        );
    }

    #[test]
    fn deadline_within_three_days_is_a_reminder() {
        let today = date(2024, 6, 10);
        let stages = vec![stage_with_deadline(
            StageId::Organisation,
            date(2024, 6, 12),
            Status::InProgress,
        )];

        let reminders = compute_reminders(&stages, today);
        assert_eq!(reminders.len(), 1);
        assert_eq!(reminders[0].kind, ReminderKind::Reminder);
        assert_eq!(
            reminders[0].message,
            "Rappel : deadline le 12 juin 2024 (dans 2 jours)"
        );
    }

    #[test]
    fn deadline_today_is_a_reminder_not_an_alert() {
        let today = date(2024, 6, 10);
        let stages = vec![stage_with_deadline(
            StageId::International,
            today,
            Status::ToDo,
        )];

        let reminders = compute_reminders(&stages, today);
        assert_eq!(reminders.len(), 1);
        assert_eq!(reminders[0].kind, ReminderKind::Reminder);
        // Zero days remaining stays singular.
        assert_eq!(
            reminders[0].message,
            "Rappel : deadline le 10 juin 2024 (dans 0 jour)"
        );
    }

    #[test]
    fn one_day_remaining_stays_singular() {
        let today = date(2024, 6, 10);
        let stages = vec![stage_with_deadline(
            StageId::Organisation,
            date(2024, 6, 11),
            Status::ToDo,
        )];

        let reminders = compute_reminders(&stages, today);
        assert_eq!(
            reminders[0].message,
            "Rappel : deadline le 11 juin 2024 (dans 1 jour)"
        );
    }

    #[test]
    fn far_deadlines_produce_nothing() {
        let today = date(2024, 6, 10);
        let stages = vec![stage_with_deadline(
            StageId::PilotageGlobal,
            date(2024, 6, 20),
            Status::ToDo,
        )];
        assert!(compute_reminders(&stages, today).is_empty());
    }

    #[test]
    fn result_is_sorted_ascending_by_deadline() {
        let today = date(2024, 6, 10);
        let stages = vec![
            stage_with_deadline(StageId::International, date(2024, 6, 12), Status::ToDo),
            stage_with_deadline(StageId::Fondations, date(2024, 6, 1), Status::ToDo),
            stage_with_deadline(StageId::Organisation, date(2024, 6, 10), Status::ToDo),
        ];

        let reminders = compute_reminders(&stages, today);
        let deadlines: Vec<Date> = reminders.iter().map(|r| r.deadline).collect();
        assert_eq!(
            deadlines,
            vec![date(2024, 6, 1), date(2024, 6, 10), date(2024, 6, 12)]
        );
        assert_eq!(reminders[0].kind, ReminderKind::Alert);
        assert_eq!(reminders[1].kind, ReminderKind::Reminder);
        assert_eq!(reminders[2].kind, ReminderKind::Reminder);
    }
}
