use chrono::NaiveDateTime;
use std::path::PathBuf;

use crate::time_lapse::SolveRecord;

#[derive(Debug)]
pub enum Response {
    TimeList(Vec<NaiveDateTime>),
    TimeLapse(TimeLapseSummary),
}

#[derive(Debug)]
pub struct TimeLapseSummary {
    pub output: PathBuf,
    pub solves: Vec<SolveRecord>,
    pub total_polygons: usize,
    pub total_times: usize,
}

impl TimeLapseSummary {
    pub fn appended_polygons(&self) -> usize {
        self.solves.iter().map(|solve| solve.polygon_count).sum()
    }
}
