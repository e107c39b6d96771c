//! Pure day-assignment operations over a week's task list.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CadenceError, Result};
use crate::models::{TaskId, WeeklyTask};

/// Completion counters for progress indicators.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CompletionStats {
    /// Number of completed tasks
    pub completed: usize,

    /// Total number of tasks
    pub total: usize,
}

/// Groups tasks by their assigned day (1 = Monday .. 7 = Sunday).
///
/// Input order is preserved within each day. Tasks without a day
/// assignment are not part of the map; callers list those separately.
pub fn group_by_day(tasks: &[WeeklyTask]) -> BTreeMap<u8, Vec<WeeklyTask>> {
    let mut by_day: BTreeMap<u8, Vec<WeeklyTask>> = BTreeMap::new();
    for task in tasks {
        if let Some(day) = task.day_of_week {
            by_day.entry(day).or_default().push(task.clone());
        }
    }
    by_day
}

/// Tasks that have no day assignment yet, in input order.
pub fn unassigned(tasks: &[WeeklyTask]) -> Vec<WeeklyTask> {
    tasks
        .iter()
        .filter(|t| t.day_of_week.is_none())
        .cloned()
        .collect()
}

/// Returns a new list with the matching task's day changed.
///
/// Fails closed on a day outside 1..=7 rather than clamping or silently
/// corrupting the assignment. An unknown `task_id` is a no-op: the
/// returned list is equivalent to the input.
pub fn move_to_day(tasks: &[WeeklyTask], task_id: &TaskId, new_day: u8) -> Result<Vec<WeeklyTask>> {
    if !(1..=7).contains(&new_day) {
        return Err(CadenceError::invalid_input(
            "day",
            format!("Day must be between 1 (Monday) and 7 (Sunday), got {new_day}"),
        ));
    }

    Ok(tasks
        .iter()
        .map(|task| {
            if task.id.as_ref() == Some(task_id) {
                let mut moved = task.clone();
                moved.day_of_week = Some(new_day);
                moved
            } else {
                task.clone()
            }
        })
        .collect())
}

/// Completion counters over a task list.
pub fn completion_stats(tasks: &[WeeklyTask]) -> CompletionStats {
    CompletionStats {
        completed: tasks.iter().filter(|t| t.is_completed).count(),
        total: tasks.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Priority, TaskType};

    fn task(id: &str, day: Option<u8>, completed: bool) -> WeeklyTask {
        WeeklyTask {
            id: Some(id.to_string()),
            week_number: 7,
            day_of_week: day,
            title: format!("task {id}"),
            description: String::new(),
            priority: Priority::Medium,
            estimated_hours: 1.5,
            is_completed: completed,
            task_type: TaskType::Action,
        }
    }

    #[test]
    fn test_group_by_day_preserves_input_order() {
        let tasks = vec![
            task("a", Some(1), false),
            task("b", Some(3), false),
            task("c", Some(1), false),
            task("d", None, false),
        ];
        let grouped = group_by_day(&tasks);

        let monday: Vec<&str> = grouped[&1].iter().map(|t| t.id.as_deref().unwrap()).collect();
        assert_eq!(monday, vec!["a", "c"]);
        assert_eq!(grouped[&3].len(), 1);
        assert!(!grouped.contains_key(&7));

        let floating = unassigned(&tasks);
        assert_eq!(floating.len(), 1);
        assert_eq!(floating[0].id.as_deref(), Some("d"));
    }

    #[test]
    fn test_move_to_day() {
        let tasks = vec![task("a", Some(1), false), task("b", Some(2), false)];
        let moved = move_to_day(&tasks, &"b".to_string(), 5).unwrap();
        assert_eq!(moved[0].day_of_week, Some(1));
        assert_eq!(moved[1].day_of_week, Some(5));
    }

    #[test]
    fn test_move_to_day_missing_id_is_noop() {
        let tasks = vec![task("a", Some(1), false)];
        let moved = move_to_day(&tasks, &"missing-id".to_string(), 3).unwrap();
        assert_eq!(moved, tasks);
    }

    #[test]
    fn test_move_to_day_rejects_invalid_day() {
        let tasks = vec![task("a", Some(1), false)];
        for bad_day in [0u8, 8, 42] {
            let err = move_to_day(&tasks, &"a".to_string(), bad_day).unwrap_err();
            assert!(matches!(err, CadenceError::InvalidInput { .. }));
        }
    }

    #[test]
    fn test_completion_stats() {
        let tasks = vec![
            task("a", None, true),
            task("b", None, false),
            task("c", Some(2), true),
        ];
        let stats = completion_stats(&tasks);
        assert_eq!(stats, CompletionStats { completed: 2, total: 3 });

        assert_eq!(completion_stats(&[]), CompletionStats::default());
    }
}
