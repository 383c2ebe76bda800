//! Parsers for schedule data files

pub mod schedule;

pub use schedule::{ScheduleFormat, ScheduleParser};
