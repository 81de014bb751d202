pub mod command_solver;
pub mod polygon;

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDateTime;

pub use self::command_solver::CommandSolver;
pub use self::polygon::ServiceAreaPolygon;

/// Computes service-area polygons for a single time of day.
///
/// Implementations may keep state between calls. The caller never runs two
/// solves at once.
#[async_trait]
pub trait ServiceAreaSolver {
    fn name(&self) -> String;

    async fn solve(&mut self, time_of_day: NaiveDateTime) -> Result<Vec<ServiceAreaPolygon>>;
}
