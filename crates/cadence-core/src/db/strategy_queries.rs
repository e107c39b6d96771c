//! Strategy item queries: the generated annual calendar.

use jiff::civil::Date;
use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension};

use crate::calendar::quarter_week_range;
use crate::error::{CadenceError, DatabaseResultExt, Result};
use crate::models::{ItemStatus, Priority, Quarter, WeeklyStrategyItem};

// SQL as const strings, matching the column order of build_item_from_row
const INSERT_ITEM_SQL: &str = "INSERT INTO strategy_items (year, week_number, quarter, title, narrative, focus_theme, tactics, deadline_date, priority, status, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)";
const DELETE_YEAR_SQL: &str = "DELETE FROM strategy_items WHERE year = ?1";
const SELECT_ITEM_COLUMNS: &str =
    "week_number, quarter, title, narrative, focus_theme, tactics, deadline_date, priority, status";
const COUNT_YEAR_SQL: &str = "SELECT COUNT(*) FROM strategy_items WHERE year = ?1";

impl super::Database {
    /// Helper function to construct a WeeklyStrategyItem from a database row
    fn build_item_from_row(row: &rusqlite::Row) -> rusqlite::Result<WeeklyStrategyItem> {
        let quarter_str: String = row.get(1)?;
        let quarter = quarter_str.parse::<Quarter>().map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                1,
                Type::Text,
                format!("Invalid quarter: {quarter_str}").into(),
            )
        })?;

        let tactics_json: String = row.get(5)?;
        let tactics: Vec<String> = serde_json::from_str(&tactics_json).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e))
        })?;

        let priority_str: String = row.get(7)?;
        let priority = priority_str.parse::<Priority>().map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                7,
                Type::Text,
                format!("Invalid priority: {priority_str}").into(),
            )
        })?;

        let status_str: String = row.get(8)?;
        let status = status_str.parse::<ItemStatus>().map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                8,
                Type::Text,
                format!("Invalid item status: {status_str}").into(),
            )
        })?;

        Ok(WeeklyStrategyItem {
            week_number: row.get::<_, i64>(0)? as u8,
            quarter,
            title: row.get(2)?,
            narrative: row.get(3)?,
            focus_theme: row.get(4)?,
            tactics,
            deadline_date: row.get::<_, String>(6)?.parse::<Date>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(6, Type::Text, Box::new(e))
            })?,
            priority,
            status,
        })
    }

    /// Replaces the full generated calendar for a year in one transaction.
    ///
    /// The previous batch for the year is deleted and all new items are
    /// inserted before committing, so readers either see the complete old
    /// calendar or the complete new one, never a partial mix.
    pub fn replace_annual_plan(&mut self, year: i16, items: &[WeeklyStrategyItem]) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now_str = Timestamp::now().to_string();

        tx.execute(DELETE_YEAR_SQL, params![i64::from(year)])
            .map_err(|e| CadenceError::database_error("Failed to clear previous calendar", e))?;

        for item in items {
            let tactics_json = serde_json::to_string(&item.tactics)?;
            tx.execute(
                INSERT_ITEM_SQL,
                params![
                    i64::from(year),
                    i64::from(item.week_number),
                    item.quarter.as_str(),
                    item.title,
                    item.narrative,
                    item.focus_theme,
                    tactics_json,
                    item.deadline_date.to_string(),
                    item.priority.as_str(),
                    item.status.as_str(),
                    &now_str,
                    &now_str
                ],
            )
            .map_err(|e| CadenceError::database_error("Failed to insert strategy item", e))?;
        }

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(())
    }

    /// Lists the generated calendar for a year, optionally one quarter.
    pub fn list_strategy_items(
        &self,
        year: i16,
        quarter: Option<Quarter>,
    ) -> Result<Vec<WeeklyStrategyItem>> {
        let (query, params_vec): (String, Vec<i64>) = match quarter {
            Some(q) => {
                let (first, last) = quarter_week_range(q);
                (
                    format!(
                        "SELECT {SELECT_ITEM_COLUMNS} FROM strategy_items \
                         WHERE year = ?1 AND week_number BETWEEN ?2 AND ?3 \
                         ORDER BY week_number"
                    ),
                    vec![i64::from(year), i64::from(first), i64::from(last)],
                )
            }
            None => (
                format!(
                    "SELECT {SELECT_ITEM_COLUMNS} FROM strategy_items \
                     WHERE year = ?1 ORDER BY week_number"
                ),
                vec![i64::from(year)],
            ),
        };

        let mut stmt = self
            .connection
            .prepare(&query)
            .map_err(|e| CadenceError::database_error("Failed to prepare query", e))?;

        let params_refs: Vec<&dyn rusqlite::ToSql> =
            params_vec.iter().map(|p| p as &dyn rusqlite::ToSql).collect();

        let items = stmt
            .query_map(&params_refs[..], Self::build_item_from_row)
            .map_err(|e| CadenceError::database_error("Failed to query strategy items", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| CadenceError::database_error("Failed to fetch strategy items", e))?;

        Ok(items)
    }

    /// Retrieves one week's strategy item for a year.
    pub fn get_strategy_item(&self, year: i16, week: u8) -> Result<Option<WeeklyStrategyItem>> {
        let query = format!(
            "SELECT {SELECT_ITEM_COLUMNS} FROM strategy_items WHERE year = ?1 AND week_number = ?2"
        );
        self.connection
            .query_row(
                &query,
                params![i64::from(year), i64::from(week)],
                Self::build_item_from_row,
            )
            .optional()
            .map_err(|e| CadenceError::database_error("Failed to query strategy item", e))
    }

    /// Number of strategy items stored for a year.
    pub fn count_strategy_items(&self, year: i16) -> Result<u32> {
        self.connection
            .query_row(COUNT_YEAR_SQL, params![i64::from(year)], |row| {
                row.get::<_, i64>(0)
            })
            .map(|count| count as u32)
            .db_context("Failed to count strategy items")
    }
}
