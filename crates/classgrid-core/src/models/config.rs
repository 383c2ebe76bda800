//! View configuration models

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Color scheme for TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Dark theme (default): Black bg, White fg
    #[default]
    Dark,
    /// Light theme: White bg, Black fg
    Light,
}

impl ColorScheme {
    pub fn toggled(self) -> Self {
        match self {
            ColorScheme::Dark => ColorScheme::Light,
            ColorScheme::Light => ColorScheme::Dark,
        }
    }
}

/// Temporal granularity of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// A single day
    #[default]
    Day,
    /// Monday to Friday
    Compact,
    /// Monday to Sunday
    Complete,
}

impl ViewMode {
    pub fn all() -> &'static [ViewMode] {
        &[ViewMode::Day, ViewMode::Compact, ViewMode::Complete]
    }

    /// Week modes navigate by 7 days and show the Monday-based week
    pub fn is_week(&self) -> bool {
        matches!(self, ViewMode::Compact | ViewMode::Complete)
    }

    pub fn visible_day_count(&self) -> usize {
        match self {
            ViewMode::Day => 1,
            ViewMode::Compact => 5,
            ViewMode::Complete => 7,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ViewMode::Day => "day",
            ViewMode::Compact => "compact",
            ViewMode::Complete => "complete",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ViewMode::Day => "Day",
            ViewMode::Compact => "Compact week",
            ViewMode::Complete => "Complete week",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "day" => Ok(ViewMode::Day),
            "compact" => Ok(ViewMode::Compact),
            "complete" => Ok(ViewMode::Complete),
            other => Err(format!(
                "Unknown view mode '{}' (expected day, compact or complete)",
                other
            )),
        }
    }
}

/// How A/B-only sessions use the two columns reserved for each day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlternationLayout {
    /// Every session spans both columns of its day
    #[default]
    FullWidth,
    /// A sessions take the left column, B sessions the right one
    Split,
}

/// Language of month names in navigation headers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::En => f.write_str("en"),
            Locale::Fr => f.write_str("fr"),
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "fr" | "french" => Ok(Locale::Fr),
            other => Err(format!("Unknown locale '{}' (expected en or fr)", other)),
        }
    }
}
