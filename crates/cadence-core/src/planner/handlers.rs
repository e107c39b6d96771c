//! High-level planner flows built on the pure core and the ops layer.

use std::collections::BTreeMap;

use jiff::civil::Date;

use super::Planner;
use crate::calendar;
use crate::days::{self, CompletionStats};
use crate::error::{CadenceError, Result};
use crate::expansion::{expand_annual_plan, Expansion};
use crate::models::{PlanSection, Priority, TaskType, WeeklyStrategyItem, WeeklyTask};
use crate::params::{CalendarQuery, CompleteTask, GenerateCalendar, Id, MoveTask, TaskCreate, WeekRef};
use crate::reconcile::{normalize_ids, reconcile};

/// Outcome of a calendar generation pass.
///
/// "Nothing to expand" is a reportable result for the caller to surface,
/// not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// No plan section had a non-empty narrative
    NothingToExpand,

    /// The year's calendar was replaced with a fresh batch
    Generated { year: i16, weeks: usize },
}

/// Result of saving one week's task list through reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Week the save applied to
    pub week: u8,

    /// Whether the anti-wipe guard cancelled the destructive pass
    pub aborted: bool,

    /// Rows removed by the delete pass
    pub deleted: usize,

    /// Tasks written by the upsert pass
    pub upserted: usize,
}

/// Aggregate view of one week: strategy item, day board, and progress.
#[derive(Debug, Clone)]
pub struct WeekOverview {
    /// Plan year
    pub year: i16,

    /// Week number (1..=52)
    pub week: u8,

    /// Monday-to-Sunday dates of the week
    pub dates: [Date; 7],

    /// Strategy item for the week, if a calendar was generated
    pub item: Option<WeeklyStrategyItem>,

    /// Tasks grouped by assigned day (1 = Monday .. 7 = Sunday)
    pub board: BTreeMap<u8, Vec<WeeklyTask>>,

    /// Tasks without a day assignment
    pub unassigned: Vec<WeeklyTask>,

    /// Completion counters over the week's tasks
    pub stats: CompletionStats,
}

impl Planner {
    /// Expands plan sections into the year's calendar and persists it as
    /// one atomic batch, replacing any previously generated set.
    pub async fn generate_calendar(
        &self,
        sections: &[PlanSection],
        params: &GenerateCalendar,
    ) -> Result<GenerateOutcome> {
        match expand_annual_plan(sections, params.year)? {
            Expansion::NothingToExpand => Ok(GenerateOutcome::NothingToExpand),
            Expansion::Expanded(items) => {
                let weeks = items.len();
                self.replace_annual_plan(params.year, items).await?;
                Ok(GenerateOutcome::Generated {
                    year: params.year,
                    weeks,
                })
            }
        }
    }

    /// Lists the generated calendar, optionally filtered to one quarter.
    pub async fn calendar(&self, query: &CalendarQuery) -> Result<Vec<WeeklyStrategyItem>> {
        let quarter = query.validate()?;
        self.list_strategy_items(query.year, quarter).await
    }

    /// Builds the aggregate view of one week.
    pub async fn week_overview(&self, params: &WeekRef) -> Result<WeekOverview> {
        if !(1..=calendar::WEEKS_PER_YEAR).contains(&params.week) {
            return Err(CadenceError::invalid_input(
                "week",
                format!("Week must be between 1 and 52, got {}", params.week),
            ));
        }
        let dates = calendar::week_date_range(params.year, params.week)?;
        let item = self.get_strategy_item(params.year, params.week).await?;
        let tasks = self.list_week_tasks(params.week).await?;

        Ok(WeekOverview {
            year: params.year,
            week: params.week,
            dates,
            item,
            board: days::group_by_day(&tasks),
            unassigned: days::unassigned(&tasks),
            stats: days::completion_stats(&tasks),
        })
    }

    /// Saves one week's desired task list through reconciliation.
    ///
    /// The desired list is normalized, diffed against the persisted
    /// identifiers, and the resulting plan is applied (deletes before
    /// upserts). The reconcile gate serializes saves so that no two
    /// passes race on the store. When the anti-wipe guard fires the
    /// destructive pass is skipped entirely and the report says so.
    pub async fn save_week_tasks(
        &self,
        week: u8,
        desired: Vec<WeeklyTask>,
    ) -> Result<ReconcileReport> {
        let _guard = self.reconcile_gate.lock().await;

        let normalized = normalize_ids(&desired, self.ids.as_ref()).into_owned();
        let existing = self.list_task_ids(week).await?;
        let plan = reconcile(week, &existing, &normalized);

        if plan.aborted {
            return Ok(ReconcileReport {
                week,
                aborted: true,
                deleted: 0,
                upserted: 0,
            });
        }

        let (deleted, upserted) = self.apply_reconcile_plan(plan).await?;
        Ok(ReconcileReport {
            week,
            aborted: false,
            deleted,
            upserted,
        })
    }

    /// Creates a task in a week. The task flows through the same
    /// normalize-and-reconcile path as any other edit.
    pub async fn add_task(&self, params: &TaskCreate) -> Result<WeeklyTask> {
        let (priority, task_type, hours) = params.validate()?;

        let mut desired = self.list_week_tasks(params.week).await?;
        desired.push(WeeklyTask {
            id: None,
            week_number: params.week,
            day_of_week: params.day,
            title: params.title.trim().to_string(),
            description: params.description.clone().unwrap_or_default(),
            priority,
            estimated_hours: hours,
            is_completed: false,
            task_type,
        });

        let desired = normalize_ids(&desired, self.ids.as_ref()).into_owned();
        let created = desired
            .last()
            .cloned()
            .ok_or_else(|| CadenceError::Configuration {
                message: "Normalization dropped the new task".to_string(),
            })?;

        self.save_week_tasks(params.week, desired).await?;
        Ok(created)
    }

    /// Sets a task's completion state and saves its week.
    pub async fn set_task_completion(&self, params: &CompleteTask) -> Result<WeeklyTask> {
        let task = self
            .find_task(&params.id)
            .await?
            .ok_or_else(|| CadenceError::TaskNotFound {
                id: params.id.clone(),
            })?;

        let desired: Vec<WeeklyTask> = self
            .list_week_tasks(task.week_number)
            .await?
            .into_iter()
            .map(|mut t| {
                if t.id.as_deref() == Some(params.id.as_str()) {
                    t.is_completed = params.completed;
                }
                t
            })
            .collect();

        self.save_week_tasks(task.week_number, desired).await?;
        let mut updated = task;
        updated.is_completed = params.completed;
        Ok(updated)
    }

    /// Moves a task to a different day within its week.
    ///
    /// The day change is a plain field update through the reconcile path;
    /// the task keeps its identifier. Invalid days are rejected before
    /// anything is written.
    pub async fn move_task(&self, params: &MoveTask) -> Result<WeeklyTask> {
        let task = self
            .find_task(&params.id)
            .await?
            .ok_or_else(|| CadenceError::TaskNotFound {
                id: params.id.clone(),
            })?;

        let tasks = self.list_week_tasks(task.week_number).await?;
        let desired = days::move_to_day(&tasks, &params.id, params.day)?;

        self.save_week_tasks(task.week_number, desired).await?;
        let mut moved = task;
        moved.day_of_week = Some(params.day);
        Ok(moved)
    }

    /// Explicitly removes one task by id.
    ///
    /// This is a direct delete, not a reconciliation: the anti-wipe guard
    /// protects bulk saves, while an explicit removal of the last task in
    /// a week is a deliberate act and goes through.
    pub async fn remove_task(&self, params: &Id) -> Result<WeeklyTask> {
        let task = self
            .find_task(&params.id)
            .await?
            .ok_or_else(|| CadenceError::TaskNotFound {
                id: params.id.clone(),
            })?;

        self.delete_task_by_id(&params.id).await?;
        Ok(task)
    }

    /// Convenience constructor used by interfaces that build tasks before
    /// handing them to [`Planner::save_week_tasks`].
    pub fn blank_task(week: u8) -> WeeklyTask {
        WeeklyTask {
            id: None,
            week_number: week,
            day_of_week: None,
            title: String::new(),
            description: String::new(),
            priority: Priority::Medium,
            estimated_hours: 1.0,
            is_completed: false,
            task_type: TaskType::Action,
        }
    }
}
