use chrono::{Datelike, Local, Weekday};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Weekdays in timesheet order. Sunday is the last column, not the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

pub const DAYS: [Day; 7] = [
    Day::Monday,
    Day::Tuesday,
    Day::Wednesday,
    Day::Thursday,
    Day::Friday,
    Day::Saturday,
    Day::Sunday,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayLabel {
    pub full: &'static str,
    pub short: &'static str,
}

impl Day {
    pub fn label(self) -> DayLabel {
        let full = self.name();
        DayLabel {
            full,
            short: &full[..3],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }

    /// 1-based position in the week, Monday = 1 through Sunday = 7.
    pub fn ordinal(self) -> u8 {
        self.index() as u8 + 1
    }

    pub fn index(self) -> usize {
        match self {
            Day::Monday => 0,
            Day::Tuesday => 1,
            Day::Wednesday => 2,
            Day::Thursday => 3,
            Day::Friday => 4,
            Day::Saturday => 5,
            Day::Sunday => 6,
        }
    }

    pub fn from_weekday(weekday: Weekday) -> Self {
        DAYS[weekday.num_days_from_monday() as usize]
    }

    /// Maps a browser `Date.getDay()` index, where 0 is Sunday.
    pub fn from_js_weekday(index: u8) -> Option<Self> {
        match index {
            0 => Some(Day::Sunday),
            1..=6 => Some(DAYS[usize::from(index) - 1]),
            _ => None,
        }
    }

    pub fn today() -> Self {
        Self::from_weekday(Local::now().weekday())
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Day {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        DAYS.into_iter()
            .find(|day| {
                let label = day.label();
                label.full.eq_ignore_ascii_case(wanted) || label.short.eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| format!("unknown day: {s}"))
    }
}
