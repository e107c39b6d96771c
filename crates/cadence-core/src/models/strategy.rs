//! Weekly strategy item model: one themed week of the annual calendar.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{ItemStatus, Priority, Quarter};

/// One themed week of the expanded annual calendar.
///
/// Items are created in a single batch of 52 per year and are never
/// partially written: the expansion replaces any previously generated set
/// for the same year.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeeklyStrategyItem {
    /// Week number within the plan year (1..=52)
    pub week_number: u8,

    /// Quarter the week belongs to, derived as `ceil(week_number / 13)`
    pub quarter: Quarter,

    /// Short title for the week
    pub title: String,

    /// Composed description (quarter, theme, tactics, rotated insight)
    pub narrative: String,

    /// Focus label taken from the theme cycle
    pub focus_theme: String,

    /// Ordered list of short tactic labels
    pub tactics: Vec<String>,

    /// Friday-of-week deadline per the day-of-year formula (no time of day)
    pub deadline_date: Date,

    /// Priority band within the quarter
    pub priority: Priority,

    /// Current status; always `Planned` when generated
    #[serde(default)]
    pub status: ItemStatus,
}
