//! Parameter structures for cadence operations.
//!
//! Shared, framework-free parameter structs used across interfaces. The
//! CLI defines its own clap argument wrappers and converts them into
//! these types, keeping core logic independent of any argument-parsing
//! framework. Business validation (priority strings, day ranges, hour
//! bounds) lives here rather than in the interface layers.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CadenceError, Result};
use crate::models::{Priority, Quarter, TaskType};

/// Generic parameters for operations requiring just a task ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the task to operate on
    pub id: String,
}

/// Parameters for generating the annual calendar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateCalendar {
    /// Target plan year
    pub year: i16,
}

/// Parameters for listing the generated calendar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarQuery {
    /// Plan year to list
    pub year: i16,
    /// Optional quarter filter ('q1'..'q4' or '1'..'4')
    pub quarter: Option<String>,
}

impl CalendarQuery {
    /// Parses the optional quarter filter.
    pub fn validate(&self) -> Result<Option<Quarter>> {
        self.quarter
            .as_deref()
            .map(|q| {
                Quarter::from_str(q).map_err(|_| {
                    CadenceError::invalid_input(
                        "quarter",
                        format!("Invalid quarter: {q}. Must be one of q1, q2, q3, q4"),
                    )
                })
            })
            .transpose()
    }
}

/// Parameters addressing one week of a plan year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekRef {
    /// Plan year
    pub year: i16,
    /// Week number (1..=52)
    pub week: u8,
}

/// Parameters for creating a new weekly task.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskCreate {
    /// Week the task belongs to (1..=52)
    pub week: u8,
    /// Title of the task (required)
    pub title: String,
    /// Optional detailed description
    pub description: Option<String>,
    /// Priority ('low', 'medium', or 'high'; defaults to medium)
    pub priority: Option<String>,
    /// Estimated effort in hours (positive; defaults to 1)
    pub estimated_hours: Option<f64>,
    /// Task type ('project', 'strategy', or 'action'; defaults to action)
    pub task_type: Option<String>,
    /// Optional day assignment (1 = Monday .. 7 = Sunday)
    pub day: Option<u8>,
}

impl TaskCreate {
    /// Validates the creation parameters and parses the enum fields.
    ///
    /// # Errors
    ///
    /// * `CadenceError::InvalidInput` - week outside 1..=52, empty title,
    ///   unknown priority/type, non-positive hours, or day outside 1..=7
    pub fn validate(&self) -> Result<(Priority, TaskType, f64)> {
        if !(1..=52).contains(&self.week) {
            return Err(CadenceError::invalid_input(
                "week",
                format!("Week must be between 1 and 52, got {}", self.week),
            ));
        }
        if self.title.trim().is_empty() {
            return Err(CadenceError::invalid_input("title", "Title must not be empty"));
        }

        let priority = match self.priority.as_deref() {
            Some(p) => Priority::from_str(p).map_err(|_| {
                CadenceError::invalid_input(
                    "priority",
                    format!("Invalid priority: {p}. Must be 'low', 'medium', or 'high'"),
                )
            })?,
            None => Priority::Medium,
        };

        let task_type = match self.task_type.as_deref() {
            Some(t) => TaskType::from_str(t).map_err(|_| {
                CadenceError::invalid_input(
                    "task_type",
                    format!("Invalid task type: {t}. Must be 'project', 'strategy', or 'action'"),
                )
            })?,
            None => TaskType::Action,
        };

        let hours = self.estimated_hours.unwrap_or(1.0);
        if !hours.is_finite() || hours <= 0.0 {
            return Err(CadenceError::invalid_input(
                "estimated_hours",
                format!("Estimated hours must be positive, got {hours}"),
            ));
        }

        if let Some(day) = self.day {
            if !(1..=7).contains(&day) {
                return Err(CadenceError::invalid_input(
                    "day",
                    format!("Day must be between 1 (Monday) and 7 (Sunday), got {day}"),
                ));
            }
        }

        Ok((priority, task_type, hours))
    }
}

/// Parameters for toggling a task's completion state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompleteTask {
    /// Task ID to update
    pub id: String,
    /// New completion state
    pub completed: bool,
}

/// Parameters for moving a task to a different day within its week.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MoveTask {
    /// Task ID to move
    pub id: String,
    /// Target day (1 = Monday .. 7 = Sunday)
    pub day: u8,
}
