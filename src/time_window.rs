use chrono::{Duration, NaiveDateTime, NaiveTime, Weekday};
use thiserror::Error;

use crate::{config, day_selector::DaySelector};

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum WindowError {
    #[error("Could not read day {0:?}. Use a weekday name (e.g. Monday) or a date as YYYYMMDD.")]
    InvalidDay(String),
    #[error("Could not read time {0:?}. Use HH:MM in 24-hour time.")]
    InvalidClockTime(String),
    #[error("Your Start Day is a specific date, but your End Day is a generic weekday. Please use either a specific date or a generic weekday for both Start Day and End Day.")]
    SpecificStartGenericEnd,
    #[error("Your Start Day is a generic weekday, but your End Day is a specific date. Please use either a specific date or a generic weekday for both Start Day and End Day.")]
    GenericStartSpecificEnd,
    #[error("If using a generic weekday, the Start Day and End Day must be the same ({0:?} != {1:?}).")]
    DifferentWeekdays(Weekday, Weekday),
    #[error("Start and end date and time are the same.")]
    SameStartAndEnd,
    #[error("End time is earlier than start time.")]
    EndBeforeStart,
    #[error("The time increment must be a positive number of minutes, got {0}.")]
    NonPositiveIncrement(i64),
    #[error("The time increment of {0} minutes is too large.")]
    IncrementTooLarge(i64),
}

/// One end of a window: a day selector plus a clock time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DayTime {
    pub day: DaySelector,
    pub time: NaiveTime,
}

impl DayTime {
    pub fn new(day: DaySelector, time: NaiveTime) -> DayTime {
        DayTime { day, time }
    }

    pub fn parse(day: &str, time: &str) -> Result<DayTime, WindowError> {
        let time = NaiveTime::parse_from_str(time.trim(), config::CLOCK_FORMAT)
            .map_err(|_| WindowError::InvalidClockTime(time.to_owned()))?;
        Ok(DayTime::new(day.parse()?, time))
    }

    pub fn to_datetime(&self) -> NaiveDateTime {
        self.day.to_date().and_time(self.time)
    }
}

/// Step size between two solves. Always positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Increment {
    step: Duration,
}

impl Increment {
    pub fn from_minutes(minutes: i64) -> Result<Increment, WindowError> {
        if minutes <= 0 {
            return Err(WindowError::NonPositiveIncrement(minutes));
        }
        let step = Duration::try_minutes(minutes).ok_or(WindowError::IncrementTooLarge(minutes))?;
        Ok(Increment { step })
    }

    pub fn minutes(&self) -> i64 {
        self.step.num_minutes()
    }

    pub fn to_duration(&self) -> Duration {
        self.step
    }
}

/// Validated closed interval `[start, end]` with `start < end`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeWindow {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<TimeWindow, WindowError> {
        if start == end {
            Err(WindowError::SameStartAndEnd)
        } else if end < start {
            Err(WindowError::EndBeforeStart)
        } else {
            Ok(TimeWindow { start, end })
        }
    }

    pub fn from_day_times(start: &DayTime, end: &DayTime) -> Result<TimeWindow, WindowError> {
        match (start.day, end.day) {
            (DaySelector::Date(_), DaySelector::GenericWeekday(_)) => {
                return Err(WindowError::SpecificStartGenericEnd)
            }
            (DaySelector::GenericWeekday(_), DaySelector::Date(_)) => {
                return Err(WindowError::GenericStartSpecificEnd)
            }
            (DaySelector::GenericWeekday(start_day), DaySelector::GenericWeekday(end_day))
                if start_day != end_day =>
            {
                return Err(WindowError::DifferentWeekdays(start_day, end_day))
            }
            _ => {}
        }
        TimeWindow::new(start.to_datetime(), end.to_datetime())
    }

    pub fn parse(
        start_day: &str,
        start_time: &str,
        end_day: &str,
        end_time: &str,
    ) -> Result<TimeWindow, WindowError> {
        let start = DayTime::parse(start_day, start_time)?;
        let end = DayTime::parse(end_day, end_time)?;
        TimeWindow::from_day_times(&start, &end)
    }

    /// Number of instants `instants` yields: `floor((end - start) / increment) + 1`.
    pub fn instant_count(&self, increment: &Increment) -> usize {
        let span = (self.end - self.start).num_seconds();
        (span / increment.to_duration().num_seconds() + 1) as usize
    }

    pub fn instants(&self, increment: &Increment) -> TimeInstants {
        TimeInstants {
            next: Some(self.start),
            end: self.end,
            step: increment.to_duration(),
        }
    }
}

pub struct TimeInstants {
    next: Option<NaiveDateTime>,
    end: NaiveDateTime,
    step: Duration,
}

impl Iterator for TimeInstants {
    type Item = NaiveDateTime;

    fn next(&mut self) -> Option<NaiveDateTime> {
        let current = self.next.filter(|time| *time <= self.end)?;
        self.next = current.checked_add_signed(self.step);
        Some(current)
    }
}
