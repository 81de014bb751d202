use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use tokio::process::Command;

use super::{polygon::parse_polygons, ServiceAreaPolygon, ServiceAreaSolver};
use crate::{config, time_lapse_data::SolverCommand};

/// Runs an external program once per time of day and reads polygons from its stdout.
pub struct CommandSolver {
    command: SolverCommand,
}

impl CommandSolver {
    pub fn new(command: SolverCommand) -> CommandSolver {
        CommandSolver { command }
    }
}

#[async_trait]
impl ServiceAreaSolver for CommandSolver {
    fn name(&self) -> String {
        self.command.to_string()
    }

    async fn solve(&mut self, time_of_day: NaiveDateTime) -> Result<Vec<ServiceAreaPolygon>> {
        let output = Command::new(&self.command.program)
            .args(&self.command.args)
            .arg(config::TIME_OF_DAY_FLAG)
            .arg(time_of_day.format(config::TIME_OF_DAY_FORMAT).to_string())
            .kill_on_drop(true)
            .output()
            .await
            .with_context(|| format!("While starting solver {}", self.command.program))?;
        if !output.status.success() {
            bail!(
                "Solver {} failed ({}): {}",
                self.command.program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        let stdout = String::from_utf8(output.stdout).context("Solver output is not UTF-8")?;
        parse_polygons(&stdout)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use chrono::NaiveDate;

    use super::CommandSolver;
    use crate::{solver::ServiceAreaSolver, time_lapse_data::SolverCommand};

    fn shell(script: &str) -> CommandSolver {
        CommandSolver::new(SolverCommand {
            program: "sh".to_owned(),
            args: vec!["-c".to_owned(), script.to_owned()],
        })
    }

    #[tokio::test]
    async fn passes_time_of_day_and_reads_polygons() {
        // sh -c puts the appended flag in $0 and the time in $1.
        let mut solver = shell(r#"printf '7\t%s\t0\t10\tPOLYGON EMPTY\n' "$1""#);
        let time = NaiveDate::from_ymd_opt(1900, 1, 1)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap();
        let polygons = solver.solve(time).await.unwrap();
        assert_eq!(polygons.len(), 1);
        assert_eq!(polygons[0].facility_id, 7);
        assert_eq!(polygons[0].name, "1900-01-01 08:30:00");
    }

    #[tokio::test]
    async fn failing_solver_reports_stderr() {
        let mut solver = shell("echo 'network dataset not found' >&2; exit 3");
        let time = NaiveDate::from_ymd_opt(2019, 1, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        let err = solver.solve(time).await.unwrap_err();
        assert!(err.to_string().contains("network dataset not found"));
    }

    #[tokio::test]
    async fn missing_program_is_an_error() {
        let mut solver = CommandSolver::new(SolverCommand {
            program: "/nonexistent/service-area-solver".to_owned(),
            args: vec![],
        });
        let time = NaiveDate::from_ymd_opt(2019, 1, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        assert!(solver.solve(time).await.is_err());
    }
}
