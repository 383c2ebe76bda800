//! Session visibility and positioning

use crate::date_math::day_label;
use crate::grid::{day_columns, time_to_row, GridCoordinate};
use crate::models::{AlternationLayout, Schedule, Session, SessionId, ViewMode};
use crate::view_state::ViewState;
use serde::Serialize;

/// A visible session with its place on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PositionedSession<'a> {
    pub id: SessionId,
    pub session: &'a Session,
    pub coordinate: GridCoordinate,
    pub is_selected: bool,
}

/// Selects and positions the sessions of a schedule for a view state
pub struct SessionFilter<'a> {
    schedule: &'a Schedule,
    layout: AlternationLayout,
}

impl<'a> SessionFilter<'a> {
    pub fn new(schedule: &'a Schedule) -> Self {
        Self {
            schedule,
            layout: AlternationLayout::default(),
        }
    }

    pub fn with_layout(mut self, layout: AlternationLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Day and week-alternation rules
    ///
    /// Week modes never filter by day: in compact mode weekend sessions
    /// come out positioned past the last visible day.
    pub fn is_visible(&self, session: &Session, state: &ViewState) -> bool {
        if state.mode == ViewMode::Day && session.day != day_label(state.selected_date) {
            return false;
        }
        session.occurs_in(self.schedule.semester.alternance_for(state.selected_date))
    }

    /// Grid span of a session in the given mode
    pub fn position(&self, session: &Session, mode: ViewMode) -> GridCoordinate {
        let columns = day_columns(mode, session.day.index()).for_week(session.week, self.layout);
        GridCoordinate {
            col_start: columns.start,
            col_end: columns.end,
            row_start: time_to_row(session.start_hour, session.start_min),
            row_end: time_to_row(session.end_hour, session.end_min),
        }
    }

    /// Visible sessions in schedule order
    pub fn visible(&self, state: &ViewState) -> Vec<PositionedSession<'a>> {
        self.schedule
            .iter()
            .filter(|(_, session)| self.is_visible(session, state))
            .map(|(id, session)| PositionedSession {
                id,
                session,
                coordinate: self.position(session, state.mode),
                is_selected: state.is_selected(id),
            })
            .collect()
    }
}
