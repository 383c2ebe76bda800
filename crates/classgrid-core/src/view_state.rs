//! Interactive view state and its transitions

use crate::date_math::shift_date;
use crate::models::{SessionId, ViewMode};
use chrono::{Local, NaiveDate};
use serde::Serialize;
use tracing::debug;

/// Navigation direction of the previous/next arrows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Backward,
    Forward,
}

impl Direction {
    pub fn units(&self) -> i64 {
        match self {
            Direction::Backward => -1,
            Direction::Forward => 1,
        }
    }
}

/// User input consumed by the view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    Navigate(Direction),
    ModeChange(ViewMode),
    SessionClick(SessionId),
    BackgroundClick,
    Today,
}

/// What the grid currently shows
///
/// The selected session is not revalidated when the date or the mode
/// changes; a stale selection simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub mode: ViewMode,
    pub selected_date: NaiveDate,
    pub selected_session: Option<SessionId>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(Local::now().date_naive())
    }
}

impl ViewState {
    /// Day view of `date` with nothing selected
    pub fn new(selected_date: NaiveDate) -> Self {
        Self {
            mode: ViewMode::Day,
            selected_date,
            selected_session: None,
        }
    }

    pub fn with_mode(mut self, mode: ViewMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn set_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
    }

    /// Step one day in day mode, one week in week modes
    pub fn move_date(&mut self, direction: Direction) {
        self.selected_date = shift_date(self.selected_date, direction.units(), self.mode.is_week());
    }

    pub fn go_to(&mut self, date: NaiveDate) {
        self.selected_date = date;
    }

    pub fn go_to_today(&mut self) {
        self.go_to(Local::now().date_naive());
    }

    /// Toggle selection: reselecting the selected session clears it
    pub fn select_session(&mut self, id: SessionId) {
        self.selected_session = if self.selected_session == Some(id) {
            None
        } else {
            Some(id)
        };
    }

    pub fn clear_selection(&mut self) {
        self.selected_session = None;
    }

    pub fn click_background(&mut self) {
        self.clear_selection();
    }

    pub fn is_selected(&self, id: SessionId) -> bool {
        self.selected_session == Some(id)
    }

    /// Dispatch a UI event
    pub fn apply(&mut self, event: ViewEvent) {
        match event {
            ViewEvent::Navigate(direction) => self.move_date(direction),
            ViewEvent::ModeChange(mode) => self.set_mode(mode),
            ViewEvent::SessionClick(id) => self.select_session(id),
            ViewEvent::BackgroundClick => self.click_background(),
            ViewEvent::Today => self.go_to_today(),
        }
        debug!(
            ?event,
            mode = %self.mode,
            date = %self.selected_date,
            selected = ?self.selected_session,
            "View state updated"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let state = ViewState::default();
        assert_eq!(state.mode, ViewMode::Day);
        assert!(state.selected_session.is_none());
    }

    #[test]
    fn test_move_date_day_mode() {
        let mut state = ViewState::new(date(2026, 2, 28));
        state.move_date(Direction::Forward);
        assert_eq!(state.selected_date, date(2026, 3, 1));
        state.move_date(Direction::Backward);
        state.move_date(Direction::Backward);
        assert_eq!(state.selected_date, date(2026, 2, 27));
    }

    #[test]
    fn test_move_date_week_modes() {
        let mut state = ViewState::new(date(2026, 1, 28)).with_mode(ViewMode::Compact);
        state.move_date(Direction::Forward);
        assert_eq!(state.selected_date, date(2026, 2, 4));

        state.set_mode(ViewMode::Complete);
        state.move_date(Direction::Backward);
        state.move_date(Direction::Backward);
        assert_eq!(state.selected_date, date(2026, 1, 21));
    }

    #[test]
    fn test_set_mode_keeps_date_and_selection() {
        let mut state = ViewState::new(date(2026, 10, 21));
        state.select_session(SessionId::new(3));
        state.set_mode(ViewMode::Complete);
        assert_eq!(state.selected_date, date(2026, 10, 21));
        assert_eq!(state.selected_session, Some(SessionId::new(3)));
    }

    #[test]
    fn test_select_toggle() {
        let mut state = ViewState::new(date(2026, 10, 21));
        let a = SessionId::new(0);
        let b = SessionId::new(1);

        state.select_session(a);
        assert!(state.is_selected(a));

        state.select_session(b);
        assert!(!state.is_selected(a));
        assert!(state.is_selected(b));

        state.select_session(b);
        let mut cleared = ViewState::new(date(2026, 10, 21));
        cleared.clear_selection();
        assert_eq!(state, cleared);
    }

    #[test]
    fn test_click_background_always_clears() {
        let mut state = ViewState::new(date(2026, 10, 21));
        state.click_background();
        assert!(state.selected_session.is_none());

        state.select_session(SessionId::new(2));
        state.click_background();
        assert!(state.selected_session.is_none());
    }

    #[test]
    fn test_navigation_keeps_stale_selection() {
        let mut state = ViewState::new(date(2026, 10, 21));
        state.select_session(SessionId::new(1));
        state.move_date(Direction::Forward);
        assert_eq!(state.selected_session, Some(SessionId::new(1)));
    }

    #[test]
    fn test_apply_dispatch() {
        let mut state = ViewState::new(date(2026, 10, 21));
        state.apply(ViewEvent::ModeChange(ViewMode::Compact));
        state.apply(ViewEvent::Navigate(Direction::Forward));
        assert_eq!(state.selected_date, date(2026, 10, 28));

        state.apply(ViewEvent::SessionClick(SessionId::new(0)));
        assert!(state.is_selected(SessionId::new(0)));
        state.apply(ViewEvent::SessionClick(SessionId::new(0)));
        assert!(state.selected_session.is_none());

        state.apply(ViewEvent::SessionClick(SessionId::new(4)));
        state.apply(ViewEvent::BackgroundClick);
        assert!(state.selected_session.is_none());

        state.apply(ViewEvent::Today);
        assert_eq!(state.selected_date, Local::now().date_naive());
    }
}
