//! Low-level database operations for the Planner.
//!
//! Each operation opens its own connection inside a blocking task so the
//! async callers never hold SQLite handles across await points.

use std::collections::HashSet;

use tokio::task;

use super::Planner;
use crate::days::CompletionStats;
use crate::db::Database;
use crate::error::{CadenceError, Result};
use crate::models::{Quarter, TaskId, WeeklyStrategyItem, WeeklyTask};
use crate::reconcile::ReconcilePlan;

/// Maps a blocking-task join failure into a configuration error.
fn join_err(e: tokio::task::JoinError) -> CadenceError {
    CadenceError::Configuration {
        message: format!("Task join error: {e}"),
    }
}

impl Planner {
    /// Atomically replaces the generated calendar for a year.
    pub async fn replace_annual_plan(
        &self,
        year: i16,
        items: Vec<WeeklyStrategyItem>,
    ) -> Result<()> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.replace_annual_plan(year, &items)
        })
        .await
        .map_err(join_err)?
    }

    /// Lists the generated calendar for a year, optionally one quarter.
    pub async fn list_strategy_items(
        &self,
        year: i16,
        quarter: Option<Quarter>,
    ) -> Result<Vec<WeeklyStrategyItem>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_strategy_items(year, quarter)
        })
        .await
        .map_err(join_err)?
    }

    /// Retrieves one week's strategy item.
    pub async fn get_strategy_item(
        &self,
        year: i16,
        week: u8,
    ) -> Result<Option<WeeklyStrategyItem>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_strategy_item(year, week)
        })
        .await
        .map_err(join_err)?
    }

    /// Retrieves all persisted tasks for one week.
    pub async fn list_week_tasks(&self, week: u8) -> Result<Vec<WeeklyTask>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_tasks(week)
        })
        .await
        .map_err(join_err)?
    }

    /// Retrieves a task by its identifier.
    pub async fn find_task(&self, id: &TaskId) -> Result<Option<WeeklyTask>> {
        let db_path = self.db_path.clone();
        let id = id.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.find_task(&id)
        })
        .await
        .map_err(join_err)?
    }

    /// Completion counters for one week.
    pub async fn week_completion(&self, week: u8) -> Result<CompletionStats> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.week_completion(week)
        })
        .await
        .map_err(join_err)?
    }

    /// Deletes a single task by id; returns whether a row was removed.
    pub(crate) async fn delete_task_by_id(&self, id: &TaskId) -> Result<bool> {
        let db_path = self.db_path.clone();
        let ids = vec![id.clone()];

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            Ok(db.delete_tasks(&ids)? > 0)
        })
        .await
        .map_err(join_err)?
    }

    /// Applies a computed reconciliation plan: delete pass first, then the
    /// upsert pass. The passes are independent; both are attempted even if
    /// the first fails, and the first error (if any) is reported after.
    pub(crate) async fn apply_reconcile_plan(&self, plan: ReconcilePlan) -> Result<(usize, usize)> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let deleted = db.delete_tasks(&plan.to_delete);
            let upserted = db.upsert_tasks(&plan.to_upsert);
            match (deleted, upserted) {
                (Ok(d), Ok(u)) => Ok((d, u)),
                (Err(e), _) | (_, Err(e)) => Err(e),
            }
        })
        .await
        .map_err(join_err)?
    }

    /// Snapshot of the persisted task identifiers for one week.
    pub(crate) async fn list_task_ids(&self, week: u8) -> Result<HashSet<TaskId>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_task_ids(week)
        })
        .await
        .map_err(join_err)?
    }
}
