//! Weekly task queries: upsert, delete, and week-scoped reads.

use std::collections::HashSet;

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension};

use crate::days::CompletionStats;
use crate::error::{CadenceError, DatabaseResultExt, Result};
use crate::models::{Priority, TaskId, TaskType, WeeklyTask};

// SQL as const strings, matching the column order of build_task_from_row
const SELECT_TASK_COLUMNS: &str = "id, week_number, day_of_week, title, description, priority, estimated_hours, is_completed, task_type";
const SELECT_TASK_IDS_SQL: &str = "SELECT id FROM weekly_tasks WHERE week_number = ?1";
const UPSERT_TASK_SQL: &str = "INSERT INTO weekly_tasks (id, week_number, day_of_week, title, description, priority, estimated_hours, is_completed, task_type, created_at, updated_at) \
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11) \
     ON CONFLICT(id) DO UPDATE SET \
         week_number = excluded.week_number, \
         day_of_week = excluded.day_of_week, \
         title = excluded.title, \
         description = excluded.description, \
         priority = excluded.priority, \
         estimated_hours = excluded.estimated_hours, \
         is_completed = excluded.is_completed, \
         task_type = excluded.task_type, \
         updated_at = excluded.updated_at";
const DELETE_TASK_SQL: &str = "DELETE FROM weekly_tasks WHERE id = ?1";
const WEEK_COMPLETION_SQL: &str =
    "SELECT total_tasks, completed_tasks FROM week_task_counts WHERE week_number = ?1";

impl super::Database {
    /// Helper function to construct a WeeklyTask from a database row
    fn build_task_from_row(row: &rusqlite::Row) -> rusqlite::Result<WeeklyTask> {
        let priority_str: String = row.get(5)?;
        let priority = priority_str.parse::<Priority>().map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                5,
                Type::Text,
                format!("Invalid priority: {priority_str}").into(),
            )
        })?;

        let type_str: String = row.get(8)?;
        let task_type = type_str.parse::<TaskType>().map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                8,
                Type::Text,
                format!("Invalid task type: {type_str}").into(),
            )
        })?;

        Ok(WeeklyTask {
            id: Some(row.get(0)?),
            week_number: row.get::<_, i64>(1)? as u8,
            day_of_week: row.get::<_, Option<i64>>(2)?.map(|d| d as u8),
            title: row.get(3)?,
            description: row.get(4)?,
            priority,
            estimated_hours: row.get(6)?,
            is_completed: row.get(7)?,
            task_type,
        })
    }

    /// Lists the persisted task identifiers for one week.
    pub fn list_task_ids(&self, week: u8) -> Result<HashSet<TaskId>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_TASK_IDS_SQL)
            .map_err(|e| CadenceError::database_error("Failed to prepare query", e))?;

        let ids = stmt
            .query_map(params![i64::from(week)], |row| row.get::<_, String>(0))
            .map_err(|e| CadenceError::database_error("Failed to query task ids", e))?
            .collect::<std::result::Result<HashSet<_>, _>>()
            .map_err(|e| CadenceError::database_error("Failed to fetch task ids", e))?;

        Ok(ids)
    }

    /// Retrieves all tasks for one week, assigned days first.
    pub fn get_tasks(&self, week: u8) -> Result<Vec<WeeklyTask>> {
        let query = format!(
            "SELECT {SELECT_TASK_COLUMNS} FROM weekly_tasks WHERE week_number = ?1 \
             ORDER BY day_of_week IS NULL, day_of_week, created_at"
        );
        let mut stmt = self
            .connection
            .prepare(&query)
            .map_err(|e| CadenceError::database_error("Failed to prepare query", e))?;

        let tasks = stmt
            .query_map(params![i64::from(week)], Self::build_task_from_row)
            .map_err(|e| CadenceError::database_error("Failed to query tasks", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| CadenceError::database_error("Failed to fetch tasks", e))?;

        Ok(tasks)
    }

    /// Retrieves a task by its identifier.
    pub fn find_task(&self, id: &TaskId) -> Result<Option<WeeklyTask>> {
        let query = format!("SELECT {SELECT_TASK_COLUMNS} FROM weekly_tasks WHERE id = ?1");
        self.connection
            .query_row(&query, params![id], Self::build_task_from_row)
            .optional()
            .map_err(|e| CadenceError::database_error("Failed to query task", e))
    }

    /// Upserts tasks by id in one transaction; returns the count written.
    ///
    /// Upserting is idempotent: an existing row is overwritten with the
    /// incoming fields, a missing row is inserted. Every task must carry
    /// an id (run normalization first).
    pub fn upsert_tasks(&mut self, tasks: &[WeeklyTask]) -> Result<usize> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now_str = Timestamp::now().to_string();

        for task in tasks {
            let id = task.id.as_ref().ok_or_else(|| {
                CadenceError::invalid_input("id", "Cannot persist a task without an id")
            })?;
            tx.execute(
                UPSERT_TASK_SQL,
                params![
                    id,
                    i64::from(task.week_number),
                    task.day_of_week.map(i64::from),
                    task.title,
                    task.description,
                    task.priority.as_str(),
                    task.estimated_hours,
                    task.is_completed,
                    task.task_type.as_str(),
                    &now_str,
                    &now_str
                ],
            )
            .map_err(|e| CadenceError::database_error("Failed to upsert task", e))?;
        }

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(tasks.len())
    }

    /// Deletes tasks by id; ids without a row are silently skipped.
    /// Returns the number of rows actually removed.
    pub fn delete_tasks(&mut self, ids: &[TaskId]) -> Result<usize> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let mut removed = 0usize;
        for id in ids {
            removed += tx
                .execute(DELETE_TASK_SQL, params![id])
                .map_err(|e| CadenceError::database_error("Failed to delete task", e))?;
        }

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(removed)
    }

    /// Completion counters for one week, computed by the counts view.
    pub fn week_completion(&self, week: u8) -> Result<CompletionStats> {
        self.connection
            .query_row(WEEK_COMPLETION_SQL, params![i64::from(week)], |row| {
                Ok(CompletionStats {
                    completed: row.get::<_, i64>(1)? as usize,
                    total: row.get::<_, i64>(0)? as usize,
                })
            })
            .optional()
            .map(Option::unwrap_or_default)
            .db_context("Failed to query week completion")
    }
}
