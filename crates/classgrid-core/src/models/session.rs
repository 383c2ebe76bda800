//! Class session models

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Day of the week a session takes place on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DayLabel {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayLabel {
    pub fn all() -> &'static [DayLabel] {
        &[
            DayLabel::Monday,
            DayLabel::Tuesday,
            DayLabel::Wednesday,
            DayLabel::Thursday,
            DayLabel::Friday,
            DayLabel::Saturday,
            DayLabel::Sunday,
        ]
    }

    /// Position in the week, Monday = 0
    pub fn index(&self) -> usize {
        match self {
            DayLabel::Monday => 0,
            DayLabel::Tuesday => 1,
            DayLabel::Wednesday => 2,
            DayLabel::Thursday => 3,
            DayLabel::Friday => 4,
            DayLabel::Saturday => 5,
            DayLabel::Sunday => 6,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DayLabel::Monday => "Monday",
            DayLabel::Tuesday => "Tuesday",
            DayLabel::Wednesday => "Wednesday",
            DayLabel::Thursday => "Thursday",
            DayLabel::Friday => "Friday",
            DayLabel::Saturday => "Saturday",
            DayLabel::Sunday => "Sunday",
        }
    }

    pub fn short_name(&self) -> &'static str {
        &self.name()[..3]
    }
}

impl From<Weekday> for DayLabel {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => DayLabel::Monday,
            Weekday::Tue => DayLabel::Tuesday,
            Weekday::Wed => DayLabel::Wednesday,
            Weekday::Thu => DayLabel::Thursday,
            Weekday::Fri => DayLabel::Friday,
            Weekday::Sat => DayLabel::Saturday,
            Weekday::Sun => DayLabel::Sunday,
        }
    }
}

impl fmt::Display for DayLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Week parity of a biweekly alternation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeekParity {
    A,
    B,
}

impl WeekParity {
    pub fn flipped(self) -> Self {
        match self {
            WeekParity::A => WeekParity::B,
            WeekParity::B => WeekParity::A,
        }
    }
}

impl fmt::Display for WeekParity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeekParity::A => f.write_str("A"),
            WeekParity::B => f.write_str("B"),
        }
    }
}

/// Opaque handle of a session inside its schedule snapshot
///
/// Selection is tracked by id instead of by value so that two identical
/// sessions in the same schedule stay distinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionId(usize);

impl SessionId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One scheduled class occurrence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Course code or title
    pub name: String,

    /// Session type (lecture, tutorial, lab...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,

    pub day: DayLabel,

    /// Only held on weeks of this parity; every week when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week: Option<WeekParity>,

    pub start_hour: u8,
    pub start_min: u8,
    pub end_hour: u8,
    pub end_min: u8,
}

impl Session {
    /// Minutes since midnight at which the session starts
    pub fn start_minutes(&self) -> u32 {
        self.start_hour as u32 * 60 + self.start_min as u32
    }

    /// Minutes since midnight at which the session ends
    pub fn end_minutes(&self) -> u32 {
        self.end_hour as u32 * 60 + self.end_min as u32
    }

    /// "08:00-10:00"
    pub fn time_range(&self) -> String {
        format!(
            "{:02}:{:02}-{:02}:{:02}",
            self.start_hour, self.start_min, self.end_hour, self.end_min
        )
    }

    /// True if the session fits the 07:00-21:00 quarter-hour grid
    pub fn is_within_grid(&self) -> bool {
        let on_quarter = |m: u8| m < 60 && m % 15 == 0;
        on_quarter(self.start_min)
            && on_quarter(self.end_min)
            && self.start_minutes() >= 7 * 60
            && self.end_minutes() <= 21 * 60
            && self.end_minutes() > self.start_minutes()
    }

    /// True if the session is held on weeks of the given parity
    pub fn occurs_in(&self, parity: WeekParity) -> bool {
        self.week.is_none_or(|week| week == parity)
    }
}
