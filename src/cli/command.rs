use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config;

/// Solve a service area across a time window and collect the polygons into one dataset.
#[derive(Parser, Debug)]
#[command(name = "timelapse-polygons", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the times of day a solve would run for.
    Times(WindowArgs),
    /// Solve for every time of day and append the polygons to the output dataset.
    Solve(SolveArgs),
}

#[derive(Args, Debug)]
pub struct WindowArgs {
    /// Weekday name (e.g. Monday) or date as YYYYMMDD.
    #[arg(long, env = "TIMELAPSE_START_DAY")]
    pub start_day: String,
    /// HH:MM in 24-hour time.
    #[arg(long, env = "TIMELAPSE_START_TIME")]
    pub start_time: String,
    /// Must be the same kind of day as the start day.
    #[arg(long, env = "TIMELAPSE_END_DAY")]
    pub end_day: String,
    /// Inclusive: a solve runs at the end time if the increment lands on it.
    #[arg(long, env = "TIMELAPSE_END_TIME")]
    pub end_time: String,
    /// Minutes between two solves.
    #[arg(
        long,
        env = "TIMELAPSE_INCREMENT",
        default_value = config::DEFAULT_INCREMENT_MINUTES,
        allow_hyphen_values = true
    )]
    pub increment: i64,
}

#[derive(Args, Debug)]
pub struct SolveArgs {
    #[command(flatten)]
    pub window: WindowArgs,
    /// SQLite file receiving the polygons. Appended to if it exists.
    #[arg(long, env = "TIMELAPSE_OUTPUT", default_value = config::DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,
    /// Drop previously collected polygons before solving.
    #[arg(long, env = "TIMELAPSE_OVERWRITE")]
    pub overwrite: bool,
    /// Program that solves the service area for the time given after --time-of-day.
    #[arg(long, env = "TIMELAPSE_SOLVER")]
    pub solver: String,
    /// Extra arguments passed to the solver before --time-of-day.
    #[arg(last = true)]
    pub solver_args: Vec<String>,
}
