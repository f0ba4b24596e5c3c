//! Display implementations for the domain models.
//!
//! All output is markdown, rendered by the CLI's terminal renderer. A
//! [`Project`] formats as an overview with one compact line per stage; a
//! [`Stage`] formats as a full card with its sub-task list; a [`SubTask`]
//! formats as a standalone detail card.

use std::fmt;

use crate::display::{FrenchDate, LocalDateTime};
use crate::models::{Link, Project, Reminder, Stage, SubTask};

fn write_links(f: &mut fmt::Formatter<'_>, links: &[Link]) -> fmt::Result {
    writeln!(f, "**Liens :**")?;
    for link in links {
        writeln!(f, "- [{}]({})", link.label, link.url)?;
    }
    Ok(())
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.name)?;
        writeln!(f)?;
        match &self.launch_date {
            Some(launch) => {
                writeln!(f, "**Date de lancement :** {}", FrenchDate(launch))?;
            }
            None => writeln!(f, "**Date de lancement :** non définie")?,
        }
        writeln!(
            f,
            "**Dernière modification :** {}",
            LocalDateTime(&self.last_modified)
        )?;
        writeln!(f)?;
        writeln!(f, "## Étapes")?;
        writeln!(f)?;
        for stage in &self.stages {
            writeln!(
                f,
                "- {} **{}** ({}) · deadline {}",
                stage.status.with_icon(),
                stage.title,
                stage.id,
                FrenchDate(&stage.deadline)
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} ({})", self.title, self.id)?;
        writeln!(f)?;
        writeln!(f, "**Statut :** {}", self.status.with_icon())?;
        let schedule = if self.deadline_manually_edited {
            "modifiée à la main"
        } else {
            "planning auto"
        };
        writeln!(
            f,
            "**Deadline :** {} ({schedule})",
            FrenchDate(&self.deadline)
        )?;
        if !self.owner.is_empty() {
            writeln!(f, "**Responsable :** {}", self.owner)?;
        }
        if !self.dependencies.is_empty() {
            let deps: Vec<&str> = self.dependencies.iter().map(|id| id.as_str()).collect();
            writeln!(f, "**Dépendances :** {}", deps.join(", "))?;
        }
        if !self.notes.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.notes)?;
        }
        if !self.links.is_empty() {
            writeln!(f)?;
            write_links(f, &self.links)?;
        }
        if !self.sub_tasks.is_empty() {
            writeln!(f)?;
            writeln!(f, "**Sous-tâches :**")?;
            for task in &self.sub_tasks {
                writeln!(
                    f,
                    "- {} `{}` {}",
                    task.status.with_icon(),
                    task.id,
                    task.label
                )?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for SubTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} ({})", self.label, self.id)?;
        writeln!(f)?;
        writeln!(f, "**Statut :** {}", self.status.with_icon())?;
        if let Some(deadline) = &self.deadline {
            writeln!(f, "**Deadline :** {}", FrenchDate(deadline))?;
        }
        if let Some(owner) = &self.owner {
            if !owner.is_empty() {
                writeln!(f, "**Responsable :** {owner}")?;
            }
        }
        if let Some(objective) = &self.objective {
            if !objective.is_empty() {
                writeln!(f, "**Objectif :** {objective}")?;
            }
        }
        if let Some(accomplished) = &self.accomplished {
            if !accomplished.is_empty() {
                writeln!(f, "**Réalisé :** {accomplished}")?;
            }
        }
        if let Some(notes) = &self.notes {
            if !notes.is_empty() {
                writeln!(f, "**Notes :** {notes}")?;
            }
        }
        if let Some(links) = &self.links {
            if !links.is_empty() {
                writeln!(f)?;
                write_links(f, links)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Reminder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- {} **{}** : {}",
            self.kind.icon(),
            self.stage_title,
            self.message
        )
    }
}
