//! Database schema initialization and migrations.

use crate::error::{CadenceError, DatabaseResultExt, Result};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        // Enable foreign keys for this connection
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        // Execute the schema SQL
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        // Apply migrations for existing databases
        self.apply_migrations()?;

        Ok(())
    }

    /// Apply database migrations for existing databases
    fn apply_migrations(&self) -> Result<()> {
        // Databases created before day assignment shipped lack the column
        let has_day_column: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('weekly_tasks') WHERE name = 'day_of_week'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .unwrap_or(false);

        if !has_day_column {
            self.connection
                .execute("ALTER TABLE weekly_tasks ADD COLUMN day_of_week INTEGER", [])
                .map_err(|e| {
                    CadenceError::database_error(
                        "Failed to add day_of_week column to weekly_tasks table",
                        e,
                    )
                })?;
        }

        Ok(())
    }
}
