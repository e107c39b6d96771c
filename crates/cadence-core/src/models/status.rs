//! Status, priority, and type enumerations for calendar items and tasks.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of item and task priorities.
///
/// Within a quarter, the expansion assigns `High` to the first four weeks,
/// `Medium` to the next five, and `Low` to the rest.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Low priority work
    Low,

    /// Medium priority work
    #[default]
    Medium,

    /// High priority work
    High,
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(format!("Invalid priority: {s}")),
        }
    }
}

impl Priority {
    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

/// Type-safe enumeration of strategy item statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    /// Item was generated and has not been started
    #[default]
    Planned,

    /// Item is being worked on
    InProgress,

    /// Item has been completed
    Done,
}

impl FromStr for ItemStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "planned" => Ok(ItemStatus::Planned),
            "inprogress" | "in_progress" => Ok(ItemStatus::InProgress),
            "done" => Ok(ItemStatus::Done),
            _ => Err(format!("Invalid item status: {s}")),
        }
    }
}

impl ItemStatus {
    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Planned => "planned",
            ItemStatus::InProgress => "inprogress",
            ItemStatus::Done => "done",
        }
    }
}

/// Type-safe enumeration of weekly task kinds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    /// Longer-running project work
    Project,

    /// Strategic planning work
    Strategy,

    /// Concrete one-off action
    #[default]
    Action,
}

impl FromStr for TaskType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "project" => Ok(TaskType::Project),
            "strategy" => Ok(TaskType::Strategy),
            "action" => Ok(TaskType::Action),
            _ => Err(format!("Invalid task type: {s}")),
        }
    }
}

impl TaskType {
    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskType::Project => "project",
            TaskType::Strategy => "strategy",
            TaskType::Action => "action",
        }
    }
}

/// Calendar quarter, derived from a week number as `ceil(week / 13)`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum Quarter {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl Quarter {
    /// Derives the quarter for a week number in 1..=52.
    ///
    /// Weeks past 52 clamp to Q4 so that callers never see an invalid
    /// quarter for an out-of-band week index.
    pub fn from_week(week_number: u8) -> Self {
        match week_number {
            1..=13 => Quarter::Q1,
            14..=26 => Quarter::Q2,
            27..=39 => Quarter::Q3,
            _ => Quarter::Q4,
        }
    }

    /// The quarter index as 1..=4.
    pub fn number(&self) -> u8 {
        match self {
            Quarter::Q1 => 1,
            Quarter::Q2 => 2,
            Quarter::Q3 => 3,
            Quarter::Q4 => 4,
        }
    }

    /// English ordinal name used when composing narratives.
    pub fn ordinal_name(&self) -> &'static str {
        match self {
            Quarter::Q1 => "First quarter",
            Quarter::Q2 => "Second quarter",
            Quarter::Q3 => "Third quarter",
            Quarter::Q4 => "Fourth quarter",
        }
    }

    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Quarter::Q1 => "q1",
            Quarter::Q2 => "q2",
            Quarter::Q3 => "q3",
            Quarter::Q4 => "q4",
        }
    }
}

impl FromStr for Quarter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "q1" | "1" => Ok(Quarter::Q1),
            "q2" | "2" => Ok(Quarter::Q2),
            "q3" | "3" => Ok(Quarter::Q3),
            "q4" | "4" => Ok(Quarter::Q4),
            _ => Err(format!("Invalid quarter: {s}")),
        }
    }
}
