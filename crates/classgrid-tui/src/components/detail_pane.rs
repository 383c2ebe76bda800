use crate::theme::{SessionKindColor, StatusColor};
use classgrid_core::PositionedSession;
use classgrid_core::models::ColorScheme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Side pane describing the selected session
pub struct DetailPane<'s, 'a> {
    selected: Option<&'s PositionedSession<'a>>,
    scheme: ColorScheme,
}

impl<'s, 'a> DetailPane<'s, 'a> {
    pub fn new(selected: Option<&'s PositionedSession<'a>>, scheme: ColorScheme) -> Self {
        Self { selected, scheme }
    }

    /// Render the detail pane
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let focused = self.selected.is_some();
        let border_color = if focused {
            StatusColor::Focus.to_color(self.scheme)
        } else {
            StatusColor::Neutral.to_color(self.scheme)
        };

        let paragraph = Paragraph::new(self.lines())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border_color))
                    .title(Span::styled(
                        " Session ",
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
            )
            .wrap(Wrap { trim: false });

        frame.render_widget(paragraph, area);
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let neutral = Style::default().fg(StatusColor::Neutral.to_color(self.scheme));
        let Some(positioned) = self.selected else {
            return vec![Line::from(Span::styled(
                "Click a session or press n/p to select one",
                neutral,
            ))];
        };

        let session = positioned.session;
        let kind_color = SessionKindColor::from_kind(session.kind.as_deref()).to_color(self.scheme);
        let field = |label: &str, value: String| {
            Line::from(vec![
                Span::styled(format!("{:<7}", label), neutral),
                Span::raw(value),
            ])
        };

        let mut lines = vec![
            Line::from(Span::styled(
                session.name.clone(),
                Style::default().fg(kind_color).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            field("Day", session.day.name().to_string()),
            field("Time", session.time_range()),
        ];
        if let Some(kind) = &session.kind {
            lines.push(field("Kind", kind.clone()));
        }
        if let Some(room) = &session.room {
            lines.push(field("Room", room.clone()));
        }
        lines.push(field(
            "Weeks",
            session
                .week
                .map(|w| format!("{} only", w))
                .unwrap_or_else(|| "every week".to_string()),
        ));
        lines.push(field("Id", positioned.id.to_string()));
        lines
    }
}
