//! Integration tests for grid layout and navigation

use chrono::{Datelike, NaiveDate, Weekday};
use classgrid_core::date_math::{shift_date, start_of_week};
use classgrid_core::grid::time_to_row;
use classgrid_core::models::{AlternationLayout, DayLabel, WeekParity};
use classgrid_core::{
    Direction, EnglishMonths, GridLayout, Schedule, SemesterPlanning, Session, SessionFilter,
    SessionId, ViewEvent, ViewMode, ViewState,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn create_session(name: &str, day: DayLabel, week: Option<WeekParity>) -> Session {
    Session {
        name: name.to_string(),
        kind: None,
        room: None,
        day,
        week,
        start_hour: 14,
        start_min: 15,
        end_hour: 16,
        end_min: 15,
    }
}

#[test]
fn test_time_to_row_domain_edges() {
    assert_eq!(time_to_row(7, 0), 2);
    assert_eq!(time_to_row(20, 45), 57);
    // Line 58 closes the last slot
    assert_eq!(time_to_row(21, 0), 58);
}

#[test]
fn test_time_to_row_monotonic_over_domain() {
    let mut previous = None;
    for hour in 7..=20u8 {
        for minute in [0u8, 15, 30, 45] {
            let row = time_to_row(hour, minute);
            if let Some(prev) = previous {
                assert!(row > prev, "{}:{} not after previous row", hour, minute);
            }
            previous = Some(row);
        }
    }
}

#[test]
fn test_start_of_week_properties() {
    let mut d = date(2025, 12, 20);
    while d < date(2026, 3, 1) {
        let monday = start_of_week(d);
        assert_eq!(monday.weekday(), Weekday::Mon);
        assert_eq!(start_of_week(monday), monday);
        assert!(monday <= d && (d - monday).num_days() < 7);
        d = shift_date(d, 1, false);
    }
}

#[test]
fn test_day_and_week_shift_agree() {
    for d in [date(2026, 1, 28), date(2024, 2, 25), date(2026, 12, 30)] {
        assert_eq!(shift_date(d, 7, false), shift_date(d, 1, true));
    }
}

#[test]
fn test_day_mode_on_wednesday() {
    let schedule = Schedule::new(
        SemesterPlanning::new(WeekParity::A),
        vec![
            create_session("monday", DayLabel::Monday, None),
            create_session("wednesday-any", DayLabel::Wednesday, None),
            create_session("wednesday-a", DayLabel::Wednesday, Some(WeekParity::A)),
        ],
    );
    let state = ViewState::new(date(2026, 10, 21));

    let visible = SessionFilter::new(&schedule).visible(&state);
    let names: Vec<_> = visible.iter().map(|p| p.session.name.as_str()).collect();
    assert_eq!(names, vec!["wednesday-any", "wednesday-a"]);
}

#[test]
fn test_complete_mode_alternance() {
    let schedule = Schedule::new(
        SemesterPlanning::new(WeekParity::A),
        vec![
            create_session("b-only", DayLabel::Tuesday, Some(WeekParity::B)),
            create_session("every-week", DayLabel::Tuesday, None),
        ],
    );
    let state = ViewState::new(date(2026, 10, 21)).with_mode(ViewMode::Complete);

    let visible = SessionFilter::new(&schedule).visible(&state);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].session.name, "every-week");
    assert_eq!(visible[0].id, SessionId::new(1));
}

#[test]
fn test_toggle_law_and_background_click() {
    let mut toggled = ViewState::new(date(2026, 10, 21));
    let id = SessionId::new(0);
    toggled.select_session(id);
    toggled.select_session(id);

    let mut cleared = ViewState::new(date(2026, 10, 21));
    cleared.clear_selection();
    assert_eq!(toggled, cleared);

    let mut state = ViewState::new(date(2026, 10, 21));
    state.apply(ViewEvent::BackgroundClick);
    assert_eq!(state.selected_session, None);
}

#[test]
fn test_compact_navigation_crosses_month() {
    let mut state = ViewState::new(date(2026, 1, 28));
    state.apply(ViewEvent::ModeChange(ViewMode::Compact));
    state.apply(ViewEvent::Navigate(Direction::Forward));
    assert_eq!(state.selected_date, date(2026, 2, 4));
}

#[test]
fn test_full_cycle_with_split_layout() {
    let schedule = Schedule::new(
        SemesterPlanning::new(WeekParity::A),
        vec![
            create_session("a-only", DayLabel::Friday, Some(WeekParity::A)),
            create_session("weekend", DayLabel::Sunday, None),
        ],
    );
    let mut state = ViewState::new(date(2026, 10, 23)).with_mode(ViewMode::Compact);
    state.apply(ViewEvent::SessionClick(SessionId::new(0)));

    let layout = GridLayout::compute(&schedule, &state, AlternationLayout::Split, &EnglishMonths);
    assert_eq!(layout.header, "Week of 19 October");
    assert_eq!(layout.week_parity, WeekParity::A);

    let drawable: Vec<_> = layout.drawable_sessions().collect();
    assert_eq!(drawable.len(), 1);
    assert_eq!(drawable[0].coordinate.col_start, 10);
    assert_eq!(drawable[0].coordinate.col_end, 11);
    assert!(drawable[0].is_selected);

    // Stale selection after navigating away matches nothing
    state.apply(ViewEvent::ModeChange(ViewMode::Day));
    let layout = GridLayout::compute(&schedule, &state, AlternationLayout::Split, &EnglishMonths);
    assert!(layout.selected().is_some());
    state.apply(ViewEvent::Navigate(Direction::Forward));
    let layout = GridLayout::compute(&schedule, &state, AlternationLayout::Split, &EnglishMonths);
    assert!(layout.selected().is_none());
    assert_eq!(state.selected_session, Some(SessionId::new(0)));
}
