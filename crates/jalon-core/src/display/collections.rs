//! Collection wrapper types for displaying groups of domain objects.

use std::fmt;

use crate::models::Reminder;

/// Newtype wrapper for displaying the reminder list.
///
/// Formats one line per reminder and handles the empty list gracefully.
pub struct Reminders(pub Vec<Reminder>);

impl Reminders {
    /// Check if there are no reminders.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of reminders in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterator over the reminders.
    pub fn iter(&self) -> std::slice::Iter<'_, Reminder> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Reminders {
    type Item = &'a Reminder;
    type IntoIter = std::slice::Iter<'a, Reminder>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Reminders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "Aucun rappel.")
        } else {
            for reminder in &self.0 {
                write!(f, "{reminder}")?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::models::{ReminderKind, StageId};

    #[test]
    fn empty_reminder_list() {
        let output = Reminders(vec![]).to_string();
        assert_eq!(output, "Aucun rappel.\n");
    }

    #[test]
    fn reminder_lines_carry_kind_icons() {
        let reminders = Reminders(vec![
            Reminder {
                kind: ReminderKind::Alert,
                stage_id: StageId::Fondations,
                stage_title: "Fondations".to_string(),
                deadline: date(2024, 6, 1),
                message: "Deadline dépassée le 1 juin 2024 – statut : À faire".to_string(),
            },
            Reminder {
                kind: ReminderKind::Reminder,
                stage_id: StageId::Organisation,
                stage_title: "Organisation".to_string(),
                deadline: date(2024, 6, 12),
                message: "Rappel : deadline le 12 juin 2024 (dans 2 jours)".to_string(),
            },
        ]);

        let output = reminders.to_string();
        assert!(output.contains("⚠ **Fondations**"));
        assert!(output.contains("🔔 **Organisation**"));
        assert_eq!(output.lines().count(), 2);
    }
}
