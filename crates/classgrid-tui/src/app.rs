//! TUI application state

use crate::keybindings::{KeyAction, KeyBindings};
use classgrid_core::{
    ClassgridPreferences, Direction, GridLayout, LoadReport, Schedule, ScheduleParser, SessionId,
    ViewEvent, ViewMode, ViewState,
};
use crossterm::event::{KeyCode, KeyModifiers};
use std::path::PathBuf;
use tracing::{debug, warn};

/// TUI Application state
pub struct App {
    /// Sessions and semester planning being displayed
    pub schedule: Schedule,

    /// File the schedule was loaded from, for reloads
    pub schedule_path: Option<PathBuf>,

    /// Mode, date and selection (single writer: this app)
    pub state: ViewState,

    pub preferences: ClassgridPreferences,

    /// Where preferences are saved; nothing is persisted when unset
    pub preferences_dir: Option<PathBuf>,

    pub keybindings: KeyBindings,

    /// First visible grid slot when the grid is taller than the terminal
    pub scroll: u16,

    pub show_help: bool,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Error/info message for the status bar
    pub status_message: Option<String>,
}

impl App {
    pub fn new(schedule: Schedule, state: ViewState, preferences: ClassgridPreferences) -> Self {
        let mut keybindings = KeyBindings::new();
        keybindings.load_custom(&preferences.keybindings);

        Self {
            schedule,
            schedule_path: None,
            state,
            preferences,
            preferences_dir: None,
            keybindings,
            scroll: 0,
            show_help: false,
            should_quit: false,
            status_message: None,
        }
    }

    pub fn with_schedule_path(mut self, path: PathBuf) -> Self {
        self.schedule_path = Some(path);
        self
    }

    pub fn with_preferences_dir(mut self, dir: PathBuf) -> Self {
        self.preferences_dir = Some(dir);
        self
    }

    /// Layout for the current state, recomputed on every call
    pub fn layout(&self) -> GridLayout<'_> {
        GridLayout::compute(
            &self.schedule,
            &self.state,
            self.preferences.alternation_layout,
            &self.preferences.locale,
        )
    }

    pub fn dispatch(&mut self, event: ViewEvent) {
        self.state.apply(event);
    }

    /// Handle keyboard input
    /// Returns true if the key was bound to an action
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        match self.keybindings.get_action(code, modifiers) {
            Some(action) => {
                self.handle_action(action);
                true
            }
            None => false,
        }
    }

    pub fn handle_action(&mut self, action: KeyAction) {
        if self.show_help && !matches!(action, KeyAction::ForceQuit | KeyAction::Quit) {
            if matches!(action, KeyAction::ToggleHelp | KeyAction::ClearSelection) {
                self.show_help = false;
            }
            return;
        }

        match action {
            KeyAction::Quit | KeyAction::ForceQuit => self.should_quit = true,
            KeyAction::Reload => self.reload(),
            KeyAction::ThemeToggle => self.toggle_theme(),
            KeyAction::Previous => self.dispatch(ViewEvent::Navigate(Direction::Backward)),
            KeyAction::Next => self.dispatch(ViewEvent::Navigate(Direction::Forward)),
            KeyAction::Today => self.dispatch(ViewEvent::Today),
            KeyAction::DayView => self.dispatch(ViewEvent::ModeChange(ViewMode::Day)),
            KeyAction::CompactView => self.dispatch(ViewEvent::ModeChange(ViewMode::Compact)),
            KeyAction::CompleteView => self.dispatch(ViewEvent::ModeChange(ViewMode::Complete)),
            KeyAction::NextSession => self.cycle_selection(true),
            KeyAction::PrevSession => self.cycle_selection(false),
            KeyAction::ClearSelection => self.dispatch(ViewEvent::BackgroundClick),
            KeyAction::ScrollUp => self.scroll = self.scroll.saturating_sub(1),
            KeyAction::ScrollDown => self.scroll = self.scroll.saturating_add(1),
            KeyAction::ToggleHelp => self.show_help = true,
        }
    }

    /// Move the selection through the drawn sessions, in schedule order
    fn cycle_selection(&mut self, forward: bool) {
        let ids: Vec<SessionId> = self.layout().drawable_sessions().map(|p| p.id).collect();
        if ids.is_empty() {
            return;
        }

        let current = self
            .state
            .selected_session
            .and_then(|selected| ids.iter().position(|id| *id == selected));
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => ids.len() - 1,
            (Some(pos), true) => (pos + 1) % ids.len(),
            (Some(pos), false) => (pos + ids.len() - 1) % ids.len(),
        };

        let target = ids[next];
        if self.state.selected_session != Some(target) {
            self.dispatch(ViewEvent::SessionClick(target));
        }
    }

    /// Re-read the schedule file
    ///
    /// The selection is dropped since ids refer to the previous snapshot.
    pub fn reload(&mut self) {
        let Some(path) = self.schedule_path.clone() else {
            self.status_message = Some("No schedule file to reload".to_string());
            return;
        };

        let mut report = LoadReport::new();
        match ScheduleParser::new().load_reported(&path, &mut report) {
            Some(schedule) => {
                self.schedule = schedule;
                self.state.clear_selection();
                self.status_message = Some(format!("Reloaded: {}", report.summary()));
                debug!(?path, "Schedule reloaded");
            }
            None => {
                let reason = report
                    .fatal()
                    .map(|e| e.to_string())
                    .unwrap_or_else(|| report.summary());
                warn!(?path, %reason, "Schedule reload failed");
                self.status_message = Some(format!("Reload failed: {}", reason));
            }
        }
    }

    fn toggle_theme(&mut self) {
        self.preferences.color_scheme = self.preferences.color_scheme.toggled();
        if let Some(dir) = &self.preferences_dir {
            if let Err(e) = self.preferences.save(dir) {
                warn!(error = %e, "Failed to save preferences");
                self.status_message = Some(format!("Failed to save preferences: {}", e));
            }
        }
    }
}
