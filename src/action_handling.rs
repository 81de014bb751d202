use anyhow::Result;
use log::info;

use crate::{
    action::Action,
    database::Database,
    response::{Response, TimeLapseSummary},
    solver::CommandSolver,
    time_lapse::generate_time_lapse,
    time_lapse_data::TimeLapseData,
    time_window::{Increment, TimeWindow},
};

pub async fn perform_action(action: Action) -> Result<Response> {
    match action {
        Action::ListTimes(window, increment) => list_times(&window, &increment),
        Action::SolveTimeLapse(data) => solve_time_lapse(data).await,
    }
}

fn list_times(window: &TimeWindow, increment: &Increment) -> Result<Response> {
    Ok(Response::TimeList(window.instants(increment).collect()))
}

async fn solve_time_lapse(data: TimeLapseData) -> Result<Response> {
    let mut database = Database::open(&data.output)?;
    database.prepare_output(data.overwrite)?;
    info!(
        "Solving {} times between {} and {} every {} minutes",
        data.window.instant_count(&data.increment),
        data.window.start,
        data.window.end,
        data.increment.minutes()
    );
    let mut solver = CommandSolver::new(data.solver);
    let solves = generate_time_lapse(
        &mut solver,
        &mut database,
        data.window.instants(&data.increment),
    )
    .await?;
    Ok(Response::TimeLapse(TimeLapseSummary {
        output: data.output,
        solves,
        total_polygons: database.count_polygons()?,
        total_times: database.count_times_of_day()?,
    }))
}
