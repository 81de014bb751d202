use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use log::{debug, info};

use crate::{config, database::Database, solver::ServiceAreaSolver};

#[derive(Debug, PartialEq)]
pub struct SolveRecord {
    pub time_of_day: NaiveDateTime,
    pub polygon_count: usize,
}

/// Solves once per time of day and appends each result before starting the next solve.
pub async fn generate_time_lapse<S, I>(
    solver: &mut S,
    database: &mut Database,
    times: I,
) -> Result<Vec<SolveRecord>>
where
    S: ServiceAreaSolver + ?Sized,
    I: IntoIterator<Item = NaiveDateTime>,
{
    info!("Solving service area with {} at time...", solver.name());
    let mut records = vec![];
    for time_of_day in times {
        info!("{}", time_of_day.format(config::TIME_OF_DAY_FORMAT));
        let polygons = solver
            .solve(time_of_day)
            .await
            .with_context(|| format!("While solving for {}", time_of_day))?;
        let polygon_count = database.append_polygons(time_of_day, &polygons)?;
        debug!("Appended {} polygons", polygon_count);
        records.push(SolveRecord {
            time_of_day,
            polygon_count,
        });
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use anyhow::{bail, Result};
    use async_trait::async_trait;
    use chrono::NaiveDateTime;

    use super::{generate_time_lapse, SolveRecord};
    use crate::{
        database::Database,
        solver::{ServiceAreaPolygon, ServiceAreaSolver},
        time_window::{Increment, TimeWindow},
    };

    /// Returns one polygon per facility and remembers every requested time.
    struct RecordingSolver {
        facilities: i64,
        fail_at: Option<NaiveDateTime>,
        requested: Vec<NaiveDateTime>,
    }

    impl RecordingSolver {
        fn new(facilities: i64) -> RecordingSolver {
            RecordingSolver {
                facilities,
                fail_at: None,
                requested: vec![],
            }
        }
    }

    #[async_trait]
    impl ServiceAreaSolver for RecordingSolver {
        fn name(&self) -> String {
            "recording".to_owned()
        }

        async fn solve(&mut self, time_of_day: NaiveDateTime) -> Result<Vec<ServiceAreaPolygon>> {
            self.requested.push(time_of_day);
            if self.fail_at == Some(time_of_day) {
                bail!("No network dataset");
            }
            Ok((1..=self.facilities)
                .map(|facility_id| ServiceAreaPolygon {
                    facility_id,
                    name: format!("Facility {}", facility_id),
                    from_break: 0.0,
                    to_break: 30.0,
                    shape: "POLYGON EMPTY".to_owned(),
                })
                .collect())
        }
    }

    fn prepared_database() -> Database {
        let mut database = Database::open_in_memory().unwrap();
        database.prepare_output(false).unwrap();
        database
    }

    #[tokio::test]
    async fn solves_every_instant_in_order() {
        let window = TimeWindow::parse("Monday", "08:00", "Monday", "09:00").unwrap();
        let increment = Increment::from_minutes(30).unwrap();
        let times: Vec<_> = window.instants(&increment).collect();
        let mut solver = RecordingSolver::new(2);
        let mut database = prepared_database();

        let records = generate_time_lapse(&mut solver, &mut database, window.instants(&increment))
            .await
            .unwrap();

        assert_eq!(solver.requested, times);
        assert_eq!(
            records,
            times
                .iter()
                .map(|time| SolveRecord {
                    time_of_day: *time,
                    polygon_count: 2,
                })
                .collect::<Vec<_>>()
        );
        assert_eq!(database.count_polygons().unwrap(), 6);
        assert_eq!(database.get_times_of_day().unwrap(), times);
    }

    #[tokio::test]
    async fn stops_at_first_failed_solve() {
        let window = TimeWindow::parse("20190101", "08:00", "20190101", "08:04").unwrap();
        let increment = Increment::from_minutes(1).unwrap();
        let times: Vec<_> = window.instants(&increment).collect();
        let mut solver = RecordingSolver::new(1);
        solver.fail_at = Some(times[2]);
        let mut database = prepared_database();

        let result = generate_time_lapse(&mut solver, &mut database, times.clone()).await;

        assert!(result.is_err());
        assert_eq!(solver.requested, times[..3].to_vec());
        assert_eq!(database.get_times_of_day().unwrap(), times[..2].to_vec());
    }

    #[tokio::test]
    async fn works_through_a_trait_object() {
        let mut solver: Box<dyn ServiceAreaSolver + Send> = Box::new(RecordingSolver::new(3));
        let mut database = prepared_database();
        let window = TimeWindow::parse("Friday", "17:00", "Friday", "17:10").unwrap();

        let records = generate_time_lapse(
            solver.as_mut(),
            &mut database,
            window.instants(&Increment::from_minutes(10).unwrap()),
        )
        .await
        .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(database.count_polygons().unwrap(), 6);
    }
}
