use chrono::{Duration, NaiveDate, Weekday};
use lazy_static::lazy_static;
use std::{collections::HashMap, fmt, str::FromStr};

use crate::{config, time_window::WindowError};

lazy_static! {
    static ref GENERIC_WEEKDAYS: HashMap<&'static str, Weekday> = {
        let mut weekdays = HashMap::new();
        weekdays.insert("monday", Weekday::Mon);
        weekdays.insert("tuesday", Weekday::Tue);
        weekdays.insert("wednesday", Weekday::Wed);
        weekdays.insert("thursday", Weekday::Thu);
        weekdays.insert("friday", Weekday::Fri);
        weekdays.insert("saturday", Weekday::Sat);
        weekdays.insert("sunday", Weekday::Sun);
        weekdays
    };
    // Sunday of the solver's reference week. Monday is 1900-01-01.
    static ref GENERIC_SUNDAY: NaiveDate =
        NaiveDate::from_ymd_opt(1899, 12, 31).expect("1899-12-31 is a valid date");
}

/// The calendar part of a window endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DaySelector {
    Date(NaiveDate),
    GenericWeekday(Weekday),
}

impl FromStr for DaySelector {
    type Err = WindowError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(weekday) = GENERIC_WEEKDAYS.get(s.to_lowercase().as_str()) {
            return Ok(Self::GenericWeekday(*weekday));
        }
        NaiveDate::parse_from_str(s, config::DAY_FORMAT)
            .map(Self::Date)
            .map_err(|_| WindowError::InvalidDay(s.to_owned()))
    }
}

impl DaySelector {
    pub fn to_date(&self) -> NaiveDate {
        match self {
            DaySelector::Date(date) => *date,
            DaySelector::GenericWeekday(weekday) => {
                *GENERIC_SUNDAY + Duration::days(weekday.num_days_from_sunday() as i64)
            }
        }
    }
}

impl fmt::Display for DaySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DaySelector::Date(date) => write!(f, "{}", date.format(config::DAY_FORMAT)),
            DaySelector::GenericWeekday(weekday) => write!(f, "{}", weekday_name(*weekday)),
        }
    }
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
