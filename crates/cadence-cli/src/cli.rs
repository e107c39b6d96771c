//! Command-line argument wrappers and command handlers.
//!
//! This module implements the CLI side of the parameter wrapper pattern:
//! clap argument structs carry the CLI-specific attributes and convert
//! explicitly into the framework-free core parameter types, so core
//! validation stays in `cadence-core` and clap concerns stay here.
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cadence_core::{
    display::{GenerateSummary, StrategyItems},
    models::PlanSection,
    params::{CalendarQuery, CompleteTask, GenerateCalendar, Id, MoveTask, TaskCreate, WeekRef},
    Planner, WeekTasks,
};
use clap::{Args, Subcommand, ValueEnum};
use log::debug;

use crate::renderer::TerminalRenderer;

// ============================================================================
// CLI Argument Wrapper Implementations
// ============================================================================

/// Generate the 52-week calendar from an annual plan
///
/// Reads plan sections from a JSON file and expands them into 52 themed
/// weekly strategy items, replacing any previously generated calendar
/// for the year.
#[derive(Args)]
pub struct GenerateArgs {
    /// Path to a JSON file containing the plan sections
    #[arg(help = "JSON file with an array of plan sections")]
    pub sections: PathBuf,
    /// Plan year to generate (defaults to the current year)
    #[arg(short, long)]
    pub year: Option<i16>,
}

/// List the generated calendar
#[derive(Args)]
pub struct CalendarArgs {
    /// Plan year to list (defaults to the current year)
    #[arg(short, long)]
    pub year: Option<i16>,
    /// Limit output to one quarter (q1..q4)
    #[arg(short, long)]
    pub quarter: Option<String>,
}

impl CalendarArgs {
    fn into_params(self, default_year: i16) -> CalendarQuery {
        CalendarQuery {
            year: self.year.unwrap_or(default_year),
            quarter: self.quarter,
        }
    }
}

/// Show one week's strategy item and task board
#[derive(Args)]
pub struct WeekArgs {
    /// Week number 1..=52 (defaults to the current ISO week)
    pub week: Option<u8>,
    /// Plan year (defaults to the current year)
    #[arg(short, long)]
    pub year: Option<i16>,
}

/// Task subcommands
#[derive(Subcommand)]
pub enum TaskCommands {
    /// Add a new task to a week
    #[command(alias = "a")]
    Add(AddTaskArgs),
    /// List the tasks of a week
    #[command(alias = "l")]
    List(ListTasksArgs),
    /// Mark a task as done (or reopen it)
    #[command(alias = "d")]
    Done(DoneTaskArgs),
    /// Move a task to a day of the week
    #[command(alias = "m")]
    Move(MoveTaskArgs),
    /// Remove a task
    Rm(RmTaskArgs),
}

/// Command-line representation of task priority values
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum PriorityArg {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for PriorityArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriorityArg::Low => write!(f, "low"),
            PriorityArg::Medium => write!(f, "medium"),
            PriorityArg::High => write!(f, "high"),
        }
    }
}

/// Command-line representation of task type values
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum TaskTypeArg {
    Project,
    Strategy,
    Action,
}

impl std::fmt::Display for TaskTypeArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskTypeArg::Project => write!(f, "project"),
            TaskTypeArg::Strategy => write!(f, "strategy"),
            TaskTypeArg::Action => write!(f, "action"),
        }
    }
}

/// Add a new task to a week
#[derive(Args)]
pub struct AddTaskArgs {
    /// Week the task belongs to (1..=52)
    pub week: u8,
    /// Title of the task
    pub title: String,
    /// Optional detailed description
    #[arg(short, long)]
    pub description: Option<String>,
    /// Priority of the task
    #[arg(short, long)]
    pub priority: Option<PriorityArg>,
    /// Estimated effort in hours
    #[arg(short, long)]
    pub estimated_hours: Option<f64>,
    /// Kind of work the task represents
    #[arg(short, long)]
    pub task_type: Option<TaskTypeArg>,
    /// Day assignment (1 = Monday .. 7 = Sunday)
    #[arg(long)]
    pub day: Option<u8>,
}

impl From<AddTaskArgs> for TaskCreate {
    fn from(val: AddTaskArgs) -> Self {
        TaskCreate {
            week: val.week,
            title: val.title,
            description: val.description,
            priority: val.priority.map(|p| p.to_string()),
            estimated_hours: val.estimated_hours,
            task_type: val.task_type.map(|t| t.to_string()),
            day: val.day,
        }
    }
}

/// List the tasks of a week
#[derive(Args)]
pub struct ListTasksArgs {
    /// Week to list (1..=52)
    pub week: u8,
}

/// Mark a task as done (or reopen it)
#[derive(Args)]
pub struct DoneTaskArgs {
    /// ID of the task to update
    pub id: String,
    /// Reopen the task instead of completing it
    #[arg(long)]
    pub reopen: bool,
}

impl From<DoneTaskArgs> for CompleteTask {
    fn from(val: DoneTaskArgs) -> Self {
        CompleteTask {
            id: val.id,
            completed: !val.reopen,
        }
    }
}

/// Move a task to a day of the week
#[derive(Args)]
pub struct MoveTaskArgs {
    /// ID of the task to move
    pub id: String,
    /// Target day (1 = Monday .. 7 = Sunday)
    pub day: u8,
}

impl From<MoveTaskArgs> for MoveTask {
    fn from(val: MoveTaskArgs) -> Self {
        MoveTask {
            id: val.id,
            day: val.day,
        }
    }
}

/// Remove a task
#[derive(Args)]
pub struct RmTaskArgs {
    /// ID of the task to remove
    pub id: String,
}

impl From<RmTaskArgs> for Id {
    fn from(val: RmTaskArgs) -> Self {
        Id { id: val.id }
    }
}

// ============================================================================
// Command handlers
// ============================================================================

/// CLI command dispatcher holding the planner and the output renderer.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    /// Create a new CLI handler
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    /// Handle the `generate` command
    pub async fn generate(&self, args: GenerateArgs, default_year: i16) -> Result<()> {
        let year = args.year.unwrap_or(default_year);
        let sections = read_sections(&args.sections)?;
        debug!("generate: {} section(s), year {year}", sections.len());

        let outcome = self
            .planner
            .generate_calendar(&sections, &GenerateCalendar { year })
            .await?;
        self.renderer.render(&GenerateSummary(outcome).to_string())
    }

    /// Handle the `calendar` command
    pub async fn calendar(&self, args: CalendarArgs, default_year: i16) -> Result<()> {
        let params = args.into_params(default_year);
        let items = self.planner.calendar(&params).await?;
        self.renderer.render(&StrategyItems(items).to_string())
    }

    /// Handle the `week` command
    pub async fn week(&self, params: &WeekRef) -> Result<()> {
        let overview = self.planner.week_overview(params).await?;
        self.renderer.render(&overview.to_string())
    }

    /// Handle `task` subcommands
    pub async fn handle_task_command(&self, command: TaskCommands) -> Result<()> {
        match command {
            TaskCommands::Add(args) => {
                let task = self.planner.add_task(&args.into()).await?;
                self.renderer.render(&format!("Created task:\n{task}"))
            }
            TaskCommands::List(args) => {
                let tasks = self.planner.list_week_tasks(args.week).await?;
                self.renderer.render(&WeekTasks(tasks).to_string())
            }
            TaskCommands::Done(args) => {
                let task = self.planner.set_task_completion(&args.into()).await?;
                self.renderer.render(&format!("Updated task:\n{task}"))
            }
            TaskCommands::Move(args) => {
                let task = self.planner.move_task(&args.into()).await?;
                self.renderer.render(&format!("Moved task:\n{task}"))
            }
            TaskCommands::Rm(args) => {
                let task = self.planner.remove_task(&args.into()).await?;
                self.renderer.render(&format!("Removed task:\n{task}"))
            }
        }
    }
}

/// Reads and parses the plan sections file.
fn read_sections(path: &Path) -> Result<Vec<PlanSection>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read sections file: {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse sections file: {}", path.display()))
}
