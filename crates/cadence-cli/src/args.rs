use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{CalendarArgs, GenerateArgs, TaskCommands, WeekArgs};

/// Main command-line interface for the Cadence planning tool
///
/// Cadence expands an annual plan into a 52-week strategy calendar and
/// tracks the tasks of each week. It provides commands for generating
/// and browsing the calendar and for managing weekly tasks, including
/// day assignment and completion tracking.
#[derive(Parser)]
#[command(version, about, name = "cadence")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/cadence/cadence.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the Cadence CLI
///
/// The CLI is organized into four command categories:
/// - `generate`: Expand an annual plan into the 52-week calendar
/// - `calendar`: Browse the generated calendar
/// - `week`: Show one week's strategy item and task board
/// - `task`: Manage weekly tasks (add, list, done, move, rm)
#[derive(Subcommand)]
pub enum Commands {
    /// Generate the 52-week calendar from an annual plan
    #[command(alias = "g")]
    Generate(GenerateArgs),
    /// List the generated calendar
    #[command(alias = "c")]
    Calendar(CalendarArgs),
    /// Show one week's strategy item and task board
    #[command(alias = "w")]
    Week(WeekArgs),
    /// Manage weekly tasks
    #[command(alias = "t")]
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
}
