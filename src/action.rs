use crate::{
    time_lapse_data::TimeLapseData,
    time_window::{Increment, TimeWindow},
};

pub enum Action {
    ListTimes(TimeWindow, Increment),
    SolveTimeLapse(TimeLapseData),
}
