//! Help modal component for displaying keybindings

use crate::keybindings::{KeyAction, KeyBindings};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const SECTIONS: [(&str, &[KeyAction]); 4] = [
    (
        "Navigation",
        &[
            KeyAction::Previous,
            KeyAction::Next,
            KeyAction::Today,
            KeyAction::ScrollUp,
            KeyAction::ScrollDown,
        ],
    ),
    (
        "View",
        &[
            KeyAction::DayView,
            KeyAction::CompactView,
            KeyAction::CompleteView,
        ],
    ),
    (
        "Selection",
        &[
            KeyAction::NextSession,
            KeyAction::PrevSession,
            KeyAction::ClearSelection,
        ],
    ),
    (
        "General",
        &[
            KeyAction::Reload,
            KeyAction::ThemeToggle,
            KeyAction::ToggleHelp,
            KeyAction::Quit,
            KeyAction::ForceQuit,
        ],
    ),
];

/// Help modal displaying keybindings
pub struct HelpModal<'k> {
    keybindings: &'k KeyBindings,
}

impl<'k> HelpModal<'k> {
    pub fn new(keybindings: &'k KeyBindings) -> Self {
        Self { keybindings }
    }

    /// Render the help modal as an overlay
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let modal_width = 56;
        let modal_height = 28;

        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length((area.height.saturating_sub(modal_height)) / 2),
                Constraint::Length(modal_height),
                Constraint::Min(0),
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length((area.width.saturating_sub(modal_width)) / 2),
                Constraint::Length(modal_width),
                Constraint::Min(0),
            ])
            .split(vertical[1]);

        let modal_area = horizontal[1];

        // Clear the area behind the modal
        frame.render_widget(Clear, modal_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(Span::styled(
                " Help - Keybindings ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ))
            .title_alignment(Alignment::Center);

        let inner = block.inner(modal_area);
        frame.render_widget(block, modal_area);

        let help_text = Paragraph::new(self.build_help_content())
            .wrap(Wrap { trim: false })
            .alignment(Alignment::Left);

        frame.render_widget(help_text, inner);
    }

    fn build_help_content(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        for (title, actions) in SECTIONS {
            lines.push(Line::from(vec![Span::styled(
                format!("{}:", title),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )]));

            for action in actions {
                let keys = self.keybindings.keys_for_action(*action);
                if keys.is_empty() {
                    continue;
                }
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("  {:<14}", keys.join(" / ")),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::raw(action.description()),
                ]));
            }
            lines.push(Line::from(""));
        }

        lines.push(Line::from(vec![
            Span::styled("Click ", Style::default().fg(Color::DarkGray)),
            Span::raw("a session to select it, the grid to clear"),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                "?",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" or ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                "ESC",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to close", Style::default().fg(Color::DarkGray)),
        ]));

        lines
    }
}
