//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::days::CompletionStats;
use crate::models::WeeklyTask;
use crate::planner::{GenerateOutcome, ReconcileReport, WeekOverview};

/// Wrapper type for displaying the outcome of calendar generation.
pub struct GenerateSummary(pub GenerateOutcome);

impl fmt::Display for GenerateSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            GenerateOutcome::NothingToExpand => {
                writeln!(f, "Nothing to expand: no plan section has content.")
            }
            GenerateOutcome::Generated { year, weeks } => {
                writeln!(f, "Generated {weeks} weekly strategy items for {year}.")
            }
        }
    }
}

/// Wrapper type for displaying the result of a week save.
pub struct SaveSummary(pub ReconcileReport);

impl fmt::Display for SaveSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.aborted {
            writeln!(
                f,
                "Week {} not changed: refusing to clear all existing tasks.",
                self.0.week
            )
        } else {
            writeln!(
                f,
                "Week {}: {} task(s) written, {} removed.",
                self.0.week, self.0.upserted, self.0.deleted
            )
        }
    }
}

impl fmt::Display for CompletionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} tasks completed", self.completed, self.total)
    }
}

impl fmt::Display for WeekOverview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "# Week {} of {} ({} to {})",
            self.week, self.year, self.dates[0], self.dates[6]
        )?;
        writeln!(f)?;

        match &self.item {
            Some(item) => write!(f, "{item}")?,
            None => writeln!(f, "No strategy item for this week.")?,
        }
        writeln!(f)?;

        writeln!(f, "## Tasks ({})", self.stats)?;
        writeln!(f)?;

        if self.board.is_empty() && self.unassigned.is_empty() {
            writeln!(f, "No tasks for this week.")?;
            return Ok(());
        }

        for (day, tasks) in &self.board {
            writeln!(f, "### {}", WeeklyTask::day_name(*day))?;
            writeln!(f)?;
            for task in tasks {
                write!(f, "{task}")?;
            }
            writeln!(f)?;
        }

        if !self.unassigned.is_empty() {
            writeln!(f, "### Unassigned")?;
            writeln!(f)?;
            for task in &self.unassigned {
                write!(f, "{task}")?;
            }
        }

        Ok(())
    }
}
