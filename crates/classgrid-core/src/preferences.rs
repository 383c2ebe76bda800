//! User preferences persistence for classgrid
//!
//! Stores UI preferences (theme, default view, locale, keybindings) in
//! `<config_dir>/classgrid/preferences.json`.

use crate::models::{AlternationLayout, ColorScheme, Locale, ViewMode};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

const PREFERENCES_FILE: &str = "preferences.json";

/// classgrid-specific user preferences
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClassgridPreferences {
    /// Color scheme (dark / light)
    pub color_scheme: ColorScheme,

    /// View mode the grid opens in
    pub default_mode: ViewMode,

    /// Column usage of A/B-only sessions
    pub alternation_layout: AlternationLayout,

    /// Language of month names in headers
    pub locale: Locale,

    /// Custom keybindings, e.g. `{"Ctrl+Q": "quit"}`
    pub keybindings: HashMap<String, String>,
}

impl ClassgridPreferences {
    /// `<config_dir>/classgrid`, if the platform has a config directory
    pub fn default_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("classgrid"))
    }

    /// Load preferences from `<dir>/preferences.json`.
    /// Returns defaults on any I/O or parse error (graceful degradation).
    pub fn load(dir: &Path) -> Self {
        let path = dir.join(PREFERENCES_FILE);
        match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!(?path, error = %e, "Ignoring malformed preferences");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Persist preferences to `<dir>/preferences.json`.
    pub fn save(&self, dir: &Path) -> Result<()> {
        std::fs::create_dir_all(dir).context("Failed to create preferences directory")?;
        let path = dir.join(PREFERENCES_FILE);
        let content =
            serde_json::to_string_pretty(self).context("Failed to serialize preferences")?;
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write preferences to {}", path.display()))
    }
}
