//! Full grid layout for one render cycle

use crate::filter::{PositionedSession, SessionFilter};
use crate::grid::{column_count, slots, visible_days, SlotDescriptor, VisibleDay};
use crate::header::{format_header_label, MonthNames};
use crate::models::{AlternationLayout, Schedule, ViewMode, WeekParity};
use crate::view_state::ViewState;
use serde::Serialize;

/// Everything a renderer needs to draw the grid
///
/// Rebuilt from scratch on every state change; nothing is carried over
/// between cycles.
#[derive(Debug, Clone, Serialize)]
pub struct GridLayout<'a> {
    pub header: String,
    pub mode: ViewMode,
    pub week_parity: WeekParity,
    pub column_count: i32,
    pub days: Vec<VisibleDay>,
    pub slots: Vec<SlotDescriptor>,
    pub sessions: Vec<PositionedSession<'a>>,
}

impl<'a> GridLayout<'a> {
    pub fn compute(
        schedule: &'a Schedule,
        state: &ViewState,
        alternation: AlternationLayout,
        months: &impl MonthNames,
    ) -> Self {
        let sessions = SessionFilter::new(schedule)
            .with_layout(alternation)
            .visible(state);

        Self {
            header: format_header_label(state, months),
            mode: state.mode,
            week_parity: schedule.semester.alternance_for(state.selected_date),
            column_count: column_count(state.mode),
            days: visible_days(state.mode, state.selected_date),
            slots: slots(),
            sessions,
        }
    }

    /// Sessions whose columns fall inside the visible day buckets
    pub fn drawable_sessions(&self) -> impl Iterator<Item = &PositionedSession<'a>> {
        let last_column = self.column_count;
        self.sessions
            .iter()
            .filter(move |p| p.coordinate.col_end - 1 <= last_column)
    }

    pub fn selected(&self) -> Option<&PositionedSession<'a>> {
        self.sessions.iter().find(|p| p.is_selected)
    }
}
