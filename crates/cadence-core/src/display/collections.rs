//! Collection wrapper types for displaying groups of domain objects.
//!
//! Newtype wrappers give collections a Display implementation with
//! graceful empty-collection handling, without title handling, so
//! consumers can print headers separately.

use std::fmt;

use crate::models::{WeeklyStrategyItem, WeeklyTask};

/// Newtype wrapper for displaying a list of weekly strategy items.
pub struct StrategyItems(pub Vec<WeeklyStrategyItem>);

impl StrategyItems {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of items in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the strategy items.
    pub fn iter(&self) -> std::slice::Iter<'_, WeeklyStrategyItem> {
        self.0.iter()
    }
}

impl fmt::Display for StrategyItems {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No calendar generated yet.")
        } else {
            for item in &self.0 {
                write!(f, "{item}")?;
                writeln!(f)?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying a flat list of weekly tasks.
pub struct WeekTasks(pub Vec<WeeklyTask>);

impl WeekTasks {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of tasks in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the tasks.
    pub fn iter(&self) -> std::slice::Iter<'_, WeeklyTask> {
        self.0.iter()
    }
}

impl fmt::Display for WeekTasks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No tasks for this week.")
        } else {
            for task in &self.0 {
                write!(f, "{task}")?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Priority, TaskType};

    #[test]
    fn test_empty_collections() {
        assert!(format!("{}", StrategyItems(vec![])).contains("No calendar"));
        assert!(format!("{}", WeekTasks(vec![])).contains("No tasks"));
    }

    #[test]
    fn test_week_tasks_shows_icon_and_id() {
        let tasks = WeekTasks(vec![WeeklyTask {
            id: Some("abc".to_string()),
            week_number: 1,
            day_of_week: None,
            title: "Ship it".to_string(),
            description: String::new(),
            priority: Priority::High,
            estimated_hours: 3.0,
            is_completed: true,
            task_type: TaskType::Action,
        }]);
        let out = format!("{tasks}");
        assert!(out.contains("✓ Ship it (ID: abc)"));
        assert!(out.contains("high"));
    }
}
