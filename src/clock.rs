//! Day-period bucketing — picks which greeting/farewell applies right now.

use chrono::{Local, Timelike};

/// One of the three periods a day is split into for greetings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPeriod {
    Morning,
    Afternoon,
    Evening,
}

impl DayPeriod {
    /// Bucket an hour (0–23): [6,12) is morning, [12,18) is afternoon,
    /// everything else is evening/night.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            6..=11 => Self::Morning,
            12..=17 => Self::Afternoon,
            _ => Self::Evening,
        }
    }

    /// The period of the local wall clock.
    pub fn current() -> Self {
        Self::from_hour(Local::now().hour())
    }

    /// Index into a locale's greeting/farewell arrays.
    pub fn index(self) -> usize {
        match self {
            Self::Morning => 0,
            Self::Afternoon => 1,
            Self::Evening => 2,
        }
    }
}
