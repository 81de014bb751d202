use std::{fmt, path::PathBuf};

use crate::time_window::{Increment, TimeWindow};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolverCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl fmt::Display for SolverCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in self.args.iter() {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct TimeLapseData {
    pub window: TimeWindow,
    pub increment: Increment,
    pub output: PathBuf,
    pub overwrite: bool,
    pub solver: SolverCommand,
}
