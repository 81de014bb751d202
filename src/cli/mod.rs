pub mod command;
pub mod response_handling;

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use self::{
    command::{Cli, Command, SolveArgs, WindowArgs},
    response_handling::perform_response,
};
use crate::{
    action::Action,
    action_handling::perform_action,
    config,
    time_lapse_data::{SolverCommand, TimeLapseData},
    time_window::{Increment, TimeWindow},
};

#[tokio::main]
pub async fn run_timelapse() -> Result<()> {
    enable_logging();
    let cli = Cli::parse();
    let action = convert_command_to_action(cli.command)?;
    let response = perform_action(action).await?;
    perform_response(&response);
    Ok(())
}

fn enable_logging() {
    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter(None, LevelFilter::Info);
    if let Ok(filters) = std::env::var(config::LOG_ENV_VAR) {
        builder.parse_filters(&filters);
    }
    builder.init();
}

fn convert_command_to_action(command: Command) -> Result<Action> {
    match command {
        Command::Times(window) => {
            let (window, increment) = convert_window_args(&window)?;
            Ok(Action::ListTimes(window, increment))
        }
        Command::Solve(SolveArgs {
            window,
            output,
            overwrite,
            solver,
            solver_args,
        }) => {
            let (window, increment) = convert_window_args(&window)?;
            Ok(Action::SolveTimeLapse(TimeLapseData {
                window,
                increment,
                output,
                overwrite,
                solver: SolverCommand {
                    program: solver,
                    args: solver_args,
                },
            }))
        }
    }
}

fn convert_window_args(args: &WindowArgs) -> Result<(TimeWindow, Increment)> {
    let window = TimeWindow::parse(&args.start_day, &args.start_time, &args.end_day, &args.end_time)?;
    let increment = Increment::from_minutes(args.increment)?;
    Ok((window, increment))
}

#[cfg(test)]
mod tests {
    use super::{
        command::{SolveArgs, WindowArgs},
        convert_command_to_action, Command,
    };
    use crate::{action::Action, time_window::WindowError};

    fn window(start_day: &str, end_day: &str, increment: i64) -> WindowArgs {
        WindowArgs {
            start_day: start_day.to_owned(),
            start_time: "08:00".to_owned(),
            end_day: end_day.to_owned(),
            end_time: "09:00".to_owned(),
            increment,
        }
    }

    #[test]
    fn builds_solve_action() {
        let action = convert_command_to_action(Command::Solve(SolveArgs {
            window: window("Saturday", "Saturday", 20),
            output: "out.sqlite".into(),
            overwrite: true,
            solver: "solve-sa".to_owned(),
            solver_args: vec!["--layer".to_owned(), "walk".to_owned()],
        }))
        .unwrap();
        match action {
            Action::SolveTimeLapse(data) => {
                assert_eq!(data.window.instant_count(&data.increment), 4);
                assert!(data.overwrite);
                assert_eq!(data.solver.to_string(), "solve-sa --layer walk");
            }
            Action::ListTimes(..) => panic!("Expected a solve action"),
        }
    }

    #[test]
    fn validation_fails_before_any_solve() {
        let err = convert_command_to_action(Command::Times(window("Monday", "20190101", 5)))
            .err()
            .unwrap();
        assert_eq!(
            err.downcast_ref::<WindowError>(),
            Some(&WindowError::GenericStartSpecificEnd)
        );

        let err = convert_command_to_action(Command::Times(window("Monday", "Monday", 0)))
            .err()
            .unwrap();
        assert_eq!(
            err.downcast_ref::<WindowError>(),
            Some(&WindowError::NonPositiveIncrement(0))
        );
    }
}
