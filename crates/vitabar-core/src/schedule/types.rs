//! Query modes understood by the external timetable command.

use std::fmt;

/// Which timetable view to request from the external command.
///
/// The command is always invoked with exactly one fixed positional
/// argument selecting the mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleQuery {
    /// Currently ongoing class, if any (`vitable o`)
    Ongoing,
    /// Full schedule for the day (`vitable s`)
    FullDay,
}

impl ScheduleQuery {
    /// The fixed positional argument passed to the external command.
    pub fn arg(&self) -> &'static str {
        match self {
            ScheduleQuery::Ongoing => "o",
            ScheduleQuery::FullDay => "s",
        }
    }
}

impl fmt::Display for ScheduleQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleQuery::Ongoing => write!(f, "ongoing"),
            ScheduleQuery::FullDay => write!(f, "full_day"),
        }
    }
}
