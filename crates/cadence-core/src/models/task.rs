//! Weekly task model: one schedulable unit of work within a week.

use serde::{Deserialize, Serialize};

use super::{Priority, TaskType};

/// Stable task identifier. Assigned once (by [`crate::reconcile::normalize_ids`]
/// for locally created tasks) and never reused.
pub type TaskId = String;

/// One schedulable unit of work within a week.
///
/// A task belongs to exactly one week; the persisted store is the single
/// source of truth once a reconciliation pass has run. `id` is `None` only
/// for tasks created locally that have not yet been normalized.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeeklyTask {
    /// Stable identifier; absent until normalization assigns one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<TaskId>,

    /// Week the task belongs to (1..=52)
    pub week_number: u8,

    /// Day assignment: 1 = Monday .. 7 = Sunday, or unassigned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<u8>,

    /// Brief title of the task
    pub title: String,

    /// Detailed description
    #[serde(default)]
    pub description: String,

    /// Priority of the task
    pub priority: Priority,

    /// Estimated effort in hours (positive)
    pub estimated_hours: f64,

    /// Whether the task has been completed
    #[serde(default)]
    pub is_completed: bool,

    /// Kind of work the task represents
    pub task_type: TaskType,
}

impl WeeklyTask {
    /// Display name for a 1..=7 day index.
    pub fn day_name(day: u8) -> &'static str {
        match day {
            1 => "Monday",
            2 => "Tuesday",
            3 => "Wednesday",
            4 => "Thursday",
            5 => "Friday",
            6 => "Saturday",
            7 => "Sunday",
            _ => "Unassigned",
        }
    }
}
