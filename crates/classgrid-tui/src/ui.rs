//! TUI rendering logic

use crate::app::App;
use crate::components::schedule_grid::max_scroll;
use crate::components::{DetailPane, HelpModal, ScheduleGrid};
use crate::theme::StatusColor;
use chrono::Local;
use classgrid_core::models::{SessionId, ViewMode};
use classgrid_core::{Direction as Step, ViewEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tracing::trace;

/// Minimum width before the detail pane is shown next to the grid
const DETAIL_PANE_MIN_WIDTH: u16 = 100;
const DETAIL_PANE_WIDTH: u16 = 32;

/// Main UI renderer
///
/// Remembers where the clickable parts landed on the last frame so mouse
/// events can be mapped back to view events.
#[derive(Default)]
pub struct Ui {
    hit_map: Vec<(Rect, SessionId)>,
    grid_area: Rect,
    prev_button: Rect,
    next_button: Rect,
    mode_tabs: Vec<(Rect, ViewMode)>,
}

impl Ui {
    pub fn new() -> Self {
        Self::default()
    }

    /// Main render function
    pub fn render(&mut self, frame: &mut Frame, app: &mut App) {
        let size = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Header + separator
                Constraint::Min(0),    // Grid (+ detail pane)
                Constraint::Length(1), // Status bar
            ])
            .split(size);

        let (grid_area, detail_area) = if chunks[1].width >= DETAIL_PANE_MIN_WIDTH {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Min(0), Constraint::Length(DETAIL_PANE_WIDTH)])
                .split(chunks[1]);
            (columns[0], Some(columns[1]))
        } else {
            (chunks[1], None)
        };

        app.scroll = app.scroll.min(max_scroll(grid_area.height));

        let scheme = app.preferences.color_scheme;
        let layout = app.layout();

        self.render_header(frame, chunks[0], &layout.header, layout.week_parity, app);

        self.grid_area = grid_area;
        self.hit_map = ScheduleGrid::new(&layout, scheme, Local::now().date_naive())
            .scroll(app.scroll)
            .render(frame, grid_area);

        if let Some(area) = detail_area {
            DetailPane::new(layout.selected(), scheme).render(frame, area);
        }

        self.render_status_bar(frame, chunks[2], app, layout.sessions.len());

        if app.show_help {
            HelpModal::new(&app.keybindings).render(frame, size);
        }
    }

    fn render_header(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        label: &str,
        parity: classgrid_core::models::WeekParity,
        app: &App,
    ) {
        let scheme = app.preferences.color_scheme;
        let focus = StatusColor::Focus.to_color(scheme);
        let neutral = StatusColor::Neutral.to_color(scheme);

        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(neutral));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let tab_titles: Vec<String> = ViewMode::all()
            .iter()
            .map(|mode| format!(" {} ", mode.title()))
            .collect();
        let tabs_width: u16 = tab_titles.iter().map(|t| t.chars().count() as u16).sum();

        let row = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
                Constraint::Length(tabs_width),
            ])
            .split(inner);

        self.prev_button = row[0];
        self.next_button = row[2];
        frame.render_widget(
            Paragraph::new(Span::styled(" ◀ ", Style::default().fg(focus))),
            row[0],
        );
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(
                    label.to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("  · week {}", parity), Style::default().fg(neutral)),
            ]))
            .alignment(ratatui::layout::Alignment::Center),
            row[1],
        );
        frame.render_widget(
            Paragraph::new(Span::styled(" ▶ ", Style::default().fg(focus))),
            row[2],
        );

        self.mode_tabs.clear();
        let mut x = row[3].x;
        for (mode, title) in ViewMode::all().iter().zip(tab_titles) {
            let width = title.chars().count() as u16;
            let rect = Rect {
                x,
                y: row[3].y,
                width,
                height: row[3].height,
            }
            .intersection(row[3]);
            x += width;

            let style = if *mode == app.state.mode {
                Style::default()
                    .fg(focus)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(neutral)
            };
            frame.render_widget(Paragraph::new(Span::styled(title, style)), rect);
            self.mode_tabs.push((rect, *mode));
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect, app: &App, visible: usize) {
        let scheme = app.preferences.color_scheme;
        let status = if let Some(ref msg) = app.status_message {
            let warning = StatusColor::Warning.to_color(scheme);
            Line::from(vec![
                Span::styled(" ⚠ ", Style::default().fg(warning).bold()),
                Span::styled(msg.as_str(), Style::default().fg(warning)),
            ])
        } else {
            Line::from(vec![
                Span::styled(
                    format!(" ● {}/{} sessions ", visible, app.schedule.len()),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled("│", Style::default().fg(Color::Gray)),
                Span::styled(" q", Style::default().fg(Color::Cyan).bold()),
                Span::styled(" quit ", Style::default().fg(Color::Gray)),
                Span::styled("│", Style::default().fg(Color::Gray)),
                Span::styled(
                    " ←→ move │ 1/2/3 mode │ t today │ n/p select │ j/k scroll │ ? help",
                    Style::default().fg(Color::Gray),
                ),
            ])
        };

        let bar = Paragraph::new(status).style(Style::default().bg(Color::DarkGray));
        frame.render_widget(bar, area);
    }

    /// Map a left click on the last frame to a view event
    pub fn handle_click(&self, column: u16, row: u16, app: &mut App) {
        if app.show_help {
            app.show_help = false;
            return;
        }

        let position = Position::new(column, row);
        let event = if self.prev_button.contains(position) {
            Some(ViewEvent::Navigate(Step::Backward))
        } else if self.next_button.contains(position) {
            Some(ViewEvent::Navigate(Step::Forward))
        } else if let Some((_, mode)) = self
            .mode_tabs
            .iter()
            .find(|(rect, _)| rect.contains(position))
        {
            Some(ViewEvent::ModeChange(*mode))
        } else if let Some((_, id)) = self
            .hit_map
            .iter()
            .rev()
            .find(|(rect, _)| rect.contains(position))
        {
            Some(ViewEvent::SessionClick(*id))
        } else if self.grid_area.contains(position) {
            Some(ViewEvent::BackgroundClick)
        } else {
            None
        };

        trace!(column, row, ?event, "Mouse click");
        if let Some(event) = event {
            app.status_message = None;
            app.dispatch(event);
        }
    }
}
