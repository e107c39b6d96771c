//! Data models for the annual calendar and weekly tasks.
//!
//! This module contains the core domain records: plan sections (input),
//! weekly strategy items (the expanded calendar), weekly tasks (editable,
//! day-assignable work), and the supporting enumerations. Display
//! implementations live in [`crate::display::models`] to keep data
//! structures separate from presentation.

pub mod category;
pub mod section;
pub mod status;
pub mod strategy;
pub mod task;
pub mod theme;

// Re-export all public types at the models level
pub use category::SectionCategory;
pub use section::PlanSection;
pub use status::{ItemStatus, Priority, Quarter, TaskType};
pub use strategy::WeeklyStrategyItem;
pub use task::{TaskId, WeeklyTask};
pub use theme::{ThemeCycleEntry, THEME_CYCLE};
