//! Data models for classgrid

pub mod config;
pub mod schedule;
pub mod session;

pub use config::{AlternationLayout, ColorScheme, Locale, ViewMode};
pub use schedule::{Schedule, SemesterPlanning};
pub use session::{DayLabel, Session, SessionId, WeekParity};
