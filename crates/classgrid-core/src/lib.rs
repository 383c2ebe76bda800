//! classgrid-core - Core library for classgrid
//!
//! Grid layout and navigation engine for weekly/daily class schedules:
//! date arithmetic, time-to-row mapping, session filtering and the view
//! state machine, plus schedule loading.

pub mod date_math;
pub mod error;
pub mod filter;
pub mod grid;
pub mod header;
pub mod layout;
pub mod models;
pub mod parsers;
pub mod preferences;
pub mod view_state;

pub use error::{CoreError, LoadReport};
pub use filter::{PositionedSession, SessionFilter};
pub use grid::{GridCoordinate, SlotDescriptor, VisibleDay};
pub use header::{format_header_label, EnglishMonths, FrenchMonths, MonthNames};
pub use layout::GridLayout;
pub use models::{Locale, Schedule, SemesterPlanning, Session, SessionId, ViewMode};
pub use parsers::ScheduleParser;
pub use preferences::ClassgridPreferences;
pub use view_state::{Direction, ViewEvent, ViewState};
