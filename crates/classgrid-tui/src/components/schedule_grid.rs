//! Time grid widget: header row, one terminal line per 15-minute slot,
//! session blocks laid over the day columns.

use crate::theme::{GridPalette, SessionKindColor};
use chrono::NaiveDate;
use classgrid_core::grid::{GridCoordinate, HEADER_ROW, SLOT_COUNT, TIME_COLUMN};
use classgrid_core::models::{ColorScheme, SessionId};
use classgrid_core::{GridLayout, PositionedSession};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Width of the time label column, in cells
pub const TIME_WIDTH: u16 = 6;

/// First grid row holding a slot
const FIRST_SLOT_ROW: i32 = HEADER_ROW + 1;

/// First grid column holding a day
const FIRST_DAY_COLUMN: i32 = TIME_COLUMN + 1;

/// Terminal rectangle covered by a grid span
///
/// `area` is the whole grid widget (header line included), `scroll` the
/// number of slot rows hidden above the view. Returns `None` when the
/// span is entirely scrolled out, outside the visible columns, or the
/// terminal is too narrow to draw it.
pub fn track_rect(
    area: Rect,
    coordinate: &GridCoordinate,
    column_count: i32,
    scroll: u16,
) -> Option<Rect> {
    let halves = column_count - 1;
    if halves <= 0
        || coordinate.col_start < FIRST_DAY_COLUMN
        || coordinate.col_end - 1 > column_count
    {
        return None;
    }

    let half_width = i32::from(area.width.saturating_sub(TIME_WIDTH)) / halves;
    if half_width == 0 {
        return None;
    }

    let body_height = i32::from(area.height.saturating_sub(1));
    let top = (coordinate.row_start - FIRST_SLOT_ROW - i32::from(scroll)).max(0);
    let bottom = (coordinate.row_end - FIRST_SLOT_ROW - i32::from(scroll)).min(body_height);
    if bottom <= top {
        return None;
    }

    let x = i32::from(area.x)
        + i32::from(TIME_WIDTH)
        + (coordinate.col_start - FIRST_DAY_COLUMN) * half_width;
    let width = coordinate.col_span() * half_width;
    let y = i32::from(area.y) + 1 + top;

    Some(Rect {
        x: u16::try_from(x).ok()?,
        y: u16::try_from(y).ok()?,
        width: u16::try_from(width).ok()?,
        height: u16::try_from(bottom - top).ok()?,
    })
}

/// Largest useful scroll offset for a grid of the given height
pub fn max_scroll(area_height: u16) -> u16 {
    let body = area_height.saturating_sub(1);
    (SLOT_COUNT as u16).saturating_sub(body)
}

/// Grid renderer
pub struct ScheduleGrid<'l, 'a> {
    layout: &'l GridLayout<'a>,
    scheme: ColorScheme,
    today: NaiveDate,
    scroll: u16,
}

impl<'l, 'a> ScheduleGrid<'l, 'a> {
    pub fn new(layout: &'l GridLayout<'a>, scheme: ColorScheme, today: NaiveDate) -> Self {
        Self {
            layout,
            scheme,
            today,
            scroll: 0,
        }
    }

    pub fn scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }

    /// Render the grid and return the drawn session blocks, bottom-most first
    pub fn render(&self, frame: &mut Frame, area: Rect) -> Vec<(Rect, SessionId)> {
        let palette = GridPalette::for_scheme(self.scheme);

        self.render_header(frame, area, &palette);
        self.render_slots(frame, area, &palette);

        let mut hits = Vec::new();
        for positioned in self.layout.drawable_sessions() {
            let Some(rect) = track_rect(
                area,
                &positioned.coordinate,
                self.layout.column_count,
                self.scroll,
            ) else {
                continue;
            };
            self.render_session(frame, rect, positioned, &palette);
            hits.push((rect, positioned.id));
        }
        hits
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, palette: &GridPalette) {
        for day in &self.layout.days {
            let span = GridCoordinate {
                col_start: day.columns.start,
                col_end: day.columns.end,
                row_start: FIRST_SLOT_ROW,
                row_end: FIRST_SLOT_ROW + 1,
            };
            let Some(mut rect) = track_rect(area, &span, self.layout.column_count, 0) else {
                continue;
            };
            rect.y = area.y;

            let style = if day.date == self.today {
                palette.today_header
            } else {
                palette.day_header
            };
            let title = format!("{} {}", day.label.short_name(), day.date.format("%d"));
            frame.render_widget(
                Paragraph::new(Span::styled(title, style)).alignment(Alignment::Center),
                rect,
            );
        }
    }

    fn render_slots(&self, frame: &mut Frame, area: Rect, palette: &GridPalette) {
        let body_width = usize::from(area.width.saturating_sub(TIME_WIDTH));
        let visible = self
            .layout
            .slots
            .iter()
            .skip(usize::from(self.scroll))
            .take(usize::from(area.height.saturating_sub(1)));

        for (offset, slot) in visible.enumerate() {
            let (label_style, fill, fill_style) = if slot.is_emphasized {
                (palette.emphasized_line, "┈", palette.emphasized_line)
            } else if slot.is_major_line {
                (palette.time_label, "─", palette.major_line)
            } else {
                (palette.time_label, " ", palette.minor_line)
            };

            let label = if slot.is_major_line || slot.is_emphasized {
                format!("{:02}:{:02} ", slot.hour, slot.minute)
            } else {
                " ".repeat(usize::from(TIME_WIDTH))
            };

            let line = Line::from(vec![
                Span::styled(label, label_style),
                Span::styled(fill.repeat(body_width), fill_style),
            ]);
            let row = Rect {
                x: area.x,
                y: area.y + 1 + offset as u16,
                width: area.width,
                height: 1,
            };
            frame.render_widget(Paragraph::new(line), row);
        }
    }

    fn render_session(
        &self,
        frame: &mut Frame,
        rect: Rect,
        positioned: &PositionedSession<'_>,
        palette: &GridPalette,
    ) {
        let session = positioned.session;
        let kind_color = SessionKindColor::from_kind(session.kind.as_deref()).to_color(self.scheme);
        let border_style = if positioned.is_selected {
            palette.selected_border
        } else {
            Style::default().fg(kind_color)
        };

        let mut title = session.name.clone();
        if let Some(kind) = &session.kind {
            title = format!("{} {}", kind, title);
        }
        if let Some(week) = session.week {
            title = format!("{} [{}]", title, week);
        }

        let mut lines = vec![Line::from(Span::styled(
            session.time_range(),
            Style::default().fg(kind_color),
        ))];
        if let Some(room) = &session.room {
            lines.push(Line::from(Span::raw(room.clone())));
        }

        frame.render_widget(Clear, rect);
        if rect.height >= 3 {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(Span::styled(
                    title,
                    Style::default().fg(kind_color).add_modifier(Modifier::BOLD),
                ));
            frame.render_widget(Paragraph::new(lines).block(block), rect);
        } else {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(title, border_style))),
                rect,
            );
        }
    }
}
