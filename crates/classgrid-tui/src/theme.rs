//! Color system for the classgrid TUI
//!
//! - Cyan: selection, focus, navigation
//! - Green / Magenta / Yellow: session kinds (tutorial, lab, lecture)
//! - Gray: grid lines, neutral text

use classgrid_core::models::ColorScheme;
use ratatui::style::{Color, Modifier, Style};

/// Status color palette following k9s/lazygit conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusColor {
    Success,
    Error,
    Warning,
    Neutral,
    Focus,
    Important,
}

impl StatusColor {
    /// Convert to Ratatui Color based on color scheme
    pub fn to_color(self, scheme: ColorScheme) -> Color {
        match scheme {
            ColorScheme::Dark => match self {
                StatusColor::Success => Color::Green,
                StatusColor::Error => Color::Red,
                StatusColor::Warning => Color::Yellow,
                StatusColor::Neutral => Color::DarkGray,
                StatusColor::Focus => Color::Cyan,
                StatusColor::Important => Color::Magenta,
            },
            ColorScheme::Light => match self {
                StatusColor::Success => Color::Rgb(0, 128, 0),
                StatusColor::Error => Color::Rgb(200, 0, 0),
                StatusColor::Warning => Color::Rgb(180, 120, 0),
                StatusColor::Neutral => Color::Gray,
                StatusColor::Focus => Color::Rgb(0, 128, 128),
                StatusColor::Important => Color::Rgb(128, 0, 128),
            },
        }
    }
}

/// Session kind semantic color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKindColor {
    Lecture,
    Tutorial,
    Lab,
    Other,
}

impl SessionKindColor {
    /// Classify the free-form kind of a session ("CM", "TD", "TP", ...)
    pub fn from_kind(kind: Option<&str>) -> Self {
        let Some(kind) = kind else {
            return SessionKindColor::Other;
        };
        match kind.trim().to_lowercase().as_str() {
            "cm" | "c" | "cours" | "lecture" => SessionKindColor::Lecture,
            "td" | "d" | "tutorial" => SessionKindColor::Tutorial,
            "tp" | "t" | "lab" => SessionKindColor::Lab,
            _ => SessionKindColor::Other,
        }
    }

    pub fn to_color(self, scheme: ColorScheme) -> Color {
        match self {
            SessionKindColor::Lecture => StatusColor::Warning.to_color(scheme),
            SessionKindColor::Tutorial => StatusColor::Success.to_color(scheme),
            SessionKindColor::Lab => StatusColor::Important.to_color(scheme),
            SessionKindColor::Other => StatusColor::Neutral.to_color(scheme),
        }
    }
}

/// Styles of the background grid
#[derive(Debug, Clone, Copy)]
pub struct GridPalette {
    pub major_line: Style,
    pub minor_line: Style,
    pub emphasized_line: Style,
    pub time_label: Style,
    pub day_header: Style,
    pub today_header: Style,
    pub selected_border: Style,
}

impl GridPalette {
    pub fn for_scheme(scheme: ColorScheme) -> Self {
        let text = match scheme {
            ColorScheme::Dark => Color::White,
            ColorScheme::Light => Color::Black,
        };
        let neutral = StatusColor::Neutral.to_color(scheme);
        let focus = StatusColor::Focus.to_color(scheme);

        Self {
            major_line: Style::default().fg(neutral),
            minor_line: Style::default().fg(neutral).add_modifier(Modifier::DIM),
            emphasized_line: Style::default().fg(StatusColor::Warning.to_color(scheme)),
            time_label: Style::default().fg(text),
            day_header: Style::default().fg(text).add_modifier(Modifier::BOLD),
            today_header: Style::default().fg(focus).add_modifier(Modifier::BOLD),
            selected_border: Style::default().fg(focus).add_modifier(Modifier::BOLD),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_kind_classification() {
        assert_eq!(
            SessionKindColor::from_kind(Some("CM")),
            SessionKindColor::Lecture
        );
        assert_eq!(
            SessionKindColor::from_kind(Some(" td ")),
            SessionKindColor::Tutorial
        );
        assert_eq!(
            SessionKindColor::from_kind(Some("TP")),
            SessionKindColor::Lab
        );
        assert_eq!(
            SessionKindColor::from_kind(Some("exam")),
            SessionKindColor::Other
        );
        assert_eq!(SessionKindColor::from_kind(None), SessionKindColor::Other);
    }

    #[test]
    fn test_scheme_changes_colors() {
        assert_ne!(
            StatusColor::Focus.to_color(ColorScheme::Dark),
            StatusColor::Focus.to_color(ColorScheme::Light)
        );
        let dark = GridPalette::for_scheme(ColorScheme::Dark);
        let light = GridPalette::for_scheme(ColorScheme::Light);
        assert_ne!(dark.time_label, light.time_label);
    }
}
