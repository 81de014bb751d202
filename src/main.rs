use anyhow::Result;
use cli::run_timelapse;

pub mod action;
pub mod action_handling;
pub mod cli;
pub mod config;
pub mod database;
pub mod day_selector;
pub mod response;
pub mod solver;
pub mod time_lapse;
pub mod time_lapse_data;
pub mod time_window;

fn main() -> Result<()> {
    run_timelapse()
}
