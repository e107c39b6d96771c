//! Display implementations for domain models.
//!
//! Kept apart from the model definitions so the models stay pure data.
//! All output is markdown with status icons for completion state.

use std::fmt;

use crate::models::{ItemStatus, Priority, Quarter, TaskType, WeeklyStrategyItem, WeeklyTask};

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{}", self.number())
    }
}

impl fmt::Display for WeeklyStrategyItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} ({})", self.title, self.quarter)?;
        writeln!(f)?;
        writeln!(f, "- Deadline: {}", self.deadline_date)?;
        writeln!(f, "- Priority: {}", self.priority)?;
        writeln!(f, "- Status: {}", self.status)?;
        writeln!(f, "- Theme: {}", self.focus_theme)?;
        writeln!(f)?;
        writeln!(f, "{}", self.narrative)?;
        Ok(())
    }
}

impl WeeklyTask {
    fn icon(&self) -> &'static str {
        if self.is_completed { "✓" } else { "○" }
    }
}

impl fmt::Display for WeeklyTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon(), self.title)?;
        if let Some(id) = &self.id {
            write!(f, " (ID: {id})")?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "  {} | {} | {}h",
            self.priority, self.task_type, self.estimated_hours
        )?;
        if !self.description.is_empty() {
            writeln!(f, "  {}", self.description)?;
        }
        Ok(())
    }
}
