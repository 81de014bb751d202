use itertools::Itertools;
use log::info;

use crate::{
    config,
    response::{Response, TimeLapseSummary},
};

pub fn perform_response(response: &Response) {
    match response {
        Response::TimeList(times) => {
            println!(
                "{}",
                times
                    .iter()
                    .map(|time| time.format(config::TIME_OF_DAY_FORMAT))
                    .join("\n")
            );
        }
        Response::TimeLapse(summary) => print_summary(summary),
    }
}

fn print_summary(summary: &TimeLapseSummary) {
    info!("Finished solving");
    println!(
        "Appended {} polygons from {} solves to {}",
        summary.appended_polygons(),
        summary.solves.len(),
        summary.output.display()
    );
    println!(
        "The dataset now holds {} polygons for {} times of day",
        summary.total_polygons, summary.total_times
    );
}
