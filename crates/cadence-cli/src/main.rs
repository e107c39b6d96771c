//! Cadence CLI Application
//!
//! Command-line interface for the cadence annual planning tool.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use cadence_core::{calendar, params::WeekRef, PlannerBuilder};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let planner = PlannerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize planner")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Cadence started");

    let today = jiff::Zoned::now().date();
    let current_year = today.year();
    let cli = Cli::new(planner, renderer);

    match command {
        Generate(generate_args) => cli.generate(generate_args, current_year).await,
        Calendar(calendar_args) => cli.calendar(calendar_args, current_year).await,
        Week(week_args) => {
            let week = match week_args.week {
                Some(week) => week,
                // ISO week 53 falls outside the 52-week plan; treat it as
                // the final plan week.
                None => u8::try_from(calendar::current_iso_week_number(today))
                    .unwrap_or(52)
                    .min(52),
            };
            let params = WeekRef {
                year: week_args.year.unwrap_or(current_year),
                week,
            };
            cli.week(&params).await
        }
        Task { command } => cli.handle_task_command(command).await,
    }
}
