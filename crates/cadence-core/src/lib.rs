//! Core library for the Cadence annual planning application.
//!
//! Cadence expands a free-form annual plan into a 52-week strategy
//! calendar and keeps each week's task list reconciled against a local
//! SQLite store. The crate splits into a pure core and an imperative
//! shell:
//!
//! - **Pure core**: [`calendar`] (week arithmetic), [`insights`]
//!   (content extraction), [`expansion`] (plan-to-calendar expansion),
//!   [`reconcile`] (task diffing), and [`days`] (day-board operations)
//!   are deterministic and side-effect free.
//! - **Imperative shell**: [`planner`] sequences persistence through
//!   [`db`] and exposes the high-level operations interfaces call.
//!
//! # Display Architecture
//!
//! Domain models implement [`std::fmt::Display`] producing markdown;
//! [`display`] adds collection newtypes and result wrappers so the same
//! data formats consistently across contexts.
//!
//! # Quick Start
//!
//! ```rust
//! use cadence_core::{
//!     models::PlanSection,
//!     params::GenerateCalendar,
//!     PlannerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some("test.db"))
//!     .build()
//!     .await?;
//!
//! let sections = vec![PlanSection {
//!     id: 1,
//!     title: "Marketing".to_string(),
//!     order: 1,
//!     narrative: Some("- Grow the newsletter\n- Launch referral program".to_string()),
//! }];
//!
//! let outcome = planner
//!     .generate_calendar(&sections, &GenerateCalendar { year: 2025 })
//!     .await?;
//! println!("{outcome:?}");
//! # Ok(())
//! # }
//! ```

pub mod calendar;
pub mod days;
pub mod db;
pub mod display;
pub mod error;
pub mod expansion;
pub mod insights;
pub mod models;
pub mod params;
pub mod planner;
pub mod reconcile;

// Re-export commonly used types
pub use days::CompletionStats;
pub use db::Database;
pub use display::{GenerateSummary, SaveSummary, StrategyItems, WeekTasks};
pub use error::{CadenceError, Result};
pub use expansion::{ContentInsight, Expansion};
pub use models::{
    ItemStatus, PlanSection, Priority, Quarter, SectionCategory, TaskId, TaskType,
    WeeklyStrategyItem, WeeklyTask,
};
pub use params::{
    CalendarQuery, CompleteTask, GenerateCalendar, Id, MoveTask, TaskCreate, WeekRef,
};
pub use planner::{GenerateOutcome, Planner, PlannerBuilder, ReconcileReport, WeekOverview};
pub use reconcile::{normalize_ids, reconcile, IdGenerator, ReconcilePlan, UuidGenerator};
