//! Keybindings for the classgrid TUI
//!
//! Supports:
//! - Custom keybindings from the preferences file
//! - Modifier keys: Ctrl, Shift, Alt, Cmd
//! - Standard keys: a-z, 0-9, F1-F12, arrows, Tab, Enter, Esc, etc.
//! - Reverse lookup for the help modal

use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;
use tracing::warn;

/// Actions that can be triggered by keyboard shortcuts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    Quit,
    ForceQuit,
    /// Re-read the schedule file
    Reload,
    /// Toggle color scheme (Dark/Light)
    ThemeToggle,
    /// Previous day or week
    Previous,
    /// Next day or week
    Next,
    Today,
    DayView,
    CompactView,
    CompleteView,
    /// Select the next visible session
    NextSession,
    /// Select the previous visible session
    PrevSession,
    ClearSelection,
    ScrollUp,
    ScrollDown,
    ToggleHelp,
}

impl KeyAction {
    /// Get all possible actions
    pub fn all() -> &'static [KeyAction] {
        &[
            KeyAction::Previous,
            KeyAction::Next,
            KeyAction::Today,
            KeyAction::DayView,
            KeyAction::CompactView,
            KeyAction::CompleteView,
            KeyAction::NextSession,
            KeyAction::PrevSession,
            KeyAction::ClearSelection,
            KeyAction::ScrollUp,
            KeyAction::ScrollDown,
            KeyAction::Reload,
            KeyAction::ThemeToggle,
            KeyAction::ToggleHelp,
            KeyAction::Quit,
            KeyAction::ForceQuit,
        ]
    }

    /// Action name used in the preferences file
    pub fn name(&self) -> &'static str {
        match self {
            KeyAction::Quit => "quit",
            KeyAction::ForceQuit => "force_quit",
            KeyAction::Reload => "reload",
            KeyAction::ThemeToggle => "theme_toggle",
            KeyAction::Previous => "previous",
            KeyAction::Next => "next",
            KeyAction::Today => "today",
            KeyAction::DayView => "day_view",
            KeyAction::CompactView => "compact_view",
            KeyAction::CompleteView => "complete_view",
            KeyAction::NextSession => "next_session",
            KeyAction::PrevSession => "prev_session",
            KeyAction::ClearSelection => "clear_selection",
            KeyAction::ScrollUp => "scroll_up",
            KeyAction::ScrollDown => "scroll_down",
            KeyAction::ToggleHelp => "toggle_help",
        }
    }

    /// Get human-readable description for help modal
    pub fn description(&self) -> &'static str {
        match self {
            KeyAction::Quit => "Quit",
            KeyAction::ForceQuit => "Force quit",
            KeyAction::Reload => "Reload schedule file",
            KeyAction::ThemeToggle => "Toggle theme (Dark/Light)",
            KeyAction::Previous => "Previous day / week",
            KeyAction::Next => "Next day / week",
            KeyAction::Today => "Jump to today",
            KeyAction::DayView => "Day view",
            KeyAction::CompactView => "Compact week (Mon-Fri)",
            KeyAction::CompleteView => "Complete week (Mon-Sun)",
            KeyAction::NextSession => "Select next session",
            KeyAction::PrevSession => "Select previous session",
            KeyAction::ClearSelection => "Clear selection / close help",
            KeyAction::ScrollUp => "Scroll grid up",
            KeyAction::ScrollDown => "Scroll grid down",
            KeyAction::ToggleHelp => "Toggle this help",
        }
    }

    /// Parse action from its preferences name
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.to_lowercase();
        Self::all().iter().copied().find(|action| action.name() == name)
    }
}

/// Key with modifiers for lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct KeyWithMods {
    code: KeyCode,
    modifiers: KeyModifiers,
}

/// Keybindings system
pub struct KeyBindings {
    /// Default keybindings (immutable)
    defaults: HashMap<KeyWithMods, KeyAction>,
    /// Custom keybindings from preferences (override defaults)
    custom: HashMap<KeyWithMods, KeyAction>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyBindings {
    /// Create new keybindings with defaults
    pub fn new() -> Self {
        let none = KeyModifiers::NONE;
        let defaults = [
            (KeyCode::Char('q'), none, KeyAction::Quit),
            (KeyCode::Char('q'), KeyModifiers::CONTROL, KeyAction::ForceQuit),
            (KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::ForceQuit),
            (KeyCode::F(5), none, KeyAction::Reload),
            (KeyCode::Char('t'), KeyModifiers::CONTROL, KeyAction::ThemeToggle),
            (KeyCode::Left, none, KeyAction::Previous),
            (KeyCode::Char('h'), none, KeyAction::Previous),
            (KeyCode::Right, none, KeyAction::Next),
            (KeyCode::Char('l'), none, KeyAction::Next),
            (KeyCode::Char('t'), none, KeyAction::Today),
            (KeyCode::Char('1'), none, KeyAction::DayView),
            (KeyCode::Char('2'), none, KeyAction::CompactView),
            (KeyCode::Char('3'), none, KeyAction::CompleteView),
            (KeyCode::Char('n'), none, KeyAction::NextSession),
            (KeyCode::Tab, none, KeyAction::NextSession),
            (KeyCode::Char('p'), none, KeyAction::PrevSession),
            (KeyCode::BackTab, KeyModifiers::SHIFT, KeyAction::PrevSession),
            (KeyCode::Esc, none, KeyAction::ClearSelection),
            (KeyCode::Up, none, KeyAction::ScrollUp),
            (KeyCode::Char('k'), none, KeyAction::ScrollUp),
            (KeyCode::Down, none, KeyAction::ScrollDown),
            (KeyCode::Char('j'), none, KeyAction::ScrollDown),
            (KeyCode::Char('?'), KeyModifiers::SHIFT, KeyAction::ToggleHelp),
        ]
        .into_iter()
        .map(|(code, modifiers, action)| (KeyWithMods { code, modifiers }, action))
        .collect();

        Self {
            defaults,
            custom: HashMap::new(),
        }
    }

    /// Load custom keybindings
    ///
    /// Format: `{"Ctrl+Q": "quit", "F5": "reload", ...}`. Invalid entries are
    /// logged and skipped.
    pub fn load_custom(&mut self, keybindings: &HashMap<String, String>) {
        for (key_str, action_str) in keybindings {
            let key_with_mods = match parse_key(key_str) {
                Ok(k) => k,
                Err(e) => {
                    warn!(key = %key_str, error = %e, "Failed to parse keybinding");
                    continue;
                }
            };

            let Some(action) = KeyAction::from_name(action_str) else {
                warn!(key = %key_str, action = %action_str, "Unknown keybinding action");
                continue;
            };

            self.custom.insert(key_with_mods, action);
        }
    }

    /// Get action for a key press
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<KeyAction> {
        let key = KeyWithMods { code, modifiers };

        // Custom bindings take precedence
        if let Some(action) = self.custom.get(&key).or_else(|| self.defaults.get(&key)) {
            return Some(*action);
        }

        // Terminals disagree on whether shifted symbols carry SHIFT
        if let KeyCode::Char(_) = code {
            let toggled = KeyWithMods {
                code,
                modifiers: modifiers ^ KeyModifiers::SHIFT,
            };
            return self
                .custom
                .get(&toggled)
                .or_else(|| self.defaults.get(&toggled))
                .copied();
        }

        None
    }

    /// All keys bound to an action (for help modal), sorted
    ///
    /// A default key that a custom binding reassigned is not listed.
    pub fn keys_for_action(&self, action: KeyAction) -> Vec<String> {
        let mut keys: Vec<String> = self
            .custom
            .iter()
            .chain(
                self.defaults
                    .iter()
                    .filter(|(key, _)| !self.custom.contains_key(key)),
            )
            .filter(|(_, act)| **act == action)
            .map(|(key, _)| format_key(key.code, key.modifiers))
            .collect();
        keys.sort();
        keys.dedup();
        keys
    }
}

/// Parse key string from preferences
///
/// Examples:
/// - "Ctrl+Q" → KeyCode::Char('q') + CONTROL
/// - "F5" → KeyCode::F(5)
/// - "shift+tab" → KeyCode::BackTab + SHIFT
/// - "left" → KeyCode::Left
fn parse_key(s: &str) -> Result<KeyWithMods, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("Empty key string".to_string());
    }
    let parts: Vec<String> = s.split('+').map(|p| p.trim().to_lowercase()).collect();

    let mut modifiers = KeyModifiers::NONE;
    let (key_part, modifier_parts) = parts
        .split_last()
        .ok_or_else(|| "Empty key string".to_string())?;

    for modifier in modifier_parts {
        match modifier.as_str() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" => modifiers |= KeyModifiers::ALT,
            "cmd" | "meta" => {
                #[cfg(target_os = "macos")]
                {
                    modifiers |= KeyModifiers::SUPER;
                }
                #[cfg(not(target_os = "macos"))]
                {
                    modifiers |= KeyModifiers::CONTROL;
                }
            }
            _ => return Err(format!("Unknown modifier: {}", modifier)),
        }
    }

    let code = match key_part.as_str() {
        "tab" => {
            if modifiers.contains(KeyModifiers::SHIFT) {
                KeyCode::BackTab
            } else {
                KeyCode::Tab
            }
        }
        "backtab" => {
            modifiers |= KeyModifiers::SHIFT;
            KeyCode::BackTab
        }
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "backspace" => KeyCode::Backspace,
        "space" => KeyCode::Char(' '),
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" | "pgup" => KeyCode::PageUp,
        "pagedown" | "pgdn" => KeyCode::PageDown,

        k if k.len() > 1 && k.starts_with('f') => {
            let num: u8 = k[1..]
                .parse()
                .map_err(|_| format!("Invalid F-key: {}", k))?;
            if !(1..=12).contains(&num) {
                return Err(format!("F-key out of range (1-12): F{}", num));
            }
            KeyCode::F(num)
        }

        k => {
            let mut chars = k.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => KeyCode::Char(ch),
                _ => return Err(format!("Unknown key: {}", key_part)),
            }
        }
    };

    Ok(KeyWithMods { code, modifiers })
}

/// Format key for display in help modal
fn format_key(code: KeyCode, modifiers: KeyModifiers) -> String {
    let mut parts = Vec::new();

    if modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl".to_string());
    }
    if modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt".to_string());
    }
    // Shift is implied by BackTab and by shifted symbols
    let shifted_symbol = matches!(code, KeyCode::BackTab)
        || matches!(code, KeyCode::Char(c) if !c.is_alphanumeric());
    if modifiers.contains(KeyModifiers::SHIFT) && !shifted_symbol {
        parts.push("Shift".to_string());
    }

    let key_str = match code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::F(n) => format!("F{}", n),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "Shift+Tab".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PgUp".to_string(),
        KeyCode::PageDown => "PgDn".to_string(),
        _ => "?".to_string(),
    };

    parts.push(key_str);
    parts.join("+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_key() {
        let key = parse_key("q").unwrap();
        assert_eq!(key.code, KeyCode::Char('q'));
        assert_eq!(key.modifiers, KeyModifiers::NONE);
    }

    #[test]
    fn test_parse_key_with_ctrl() {
        let key = parse_key("Ctrl+Q").unwrap();
        assert_eq!(key.code, KeyCode::Char('q'));
        assert_eq!(key.modifiers, KeyModifiers::CONTROL);
    }

    #[test]
    fn test_parse_function_and_arrow_keys() {
        assert_eq!(parse_key("F5").unwrap().code, KeyCode::F(5));
        assert_eq!(parse_key("left").unwrap().code, KeyCode::Left);
        assert!(parse_key("F13").is_err());
        assert_eq!(parse_key("f").unwrap().code, KeyCode::Char('f'));
    }

    #[test]
    fn test_parse_shift_tab() {
        let key = parse_key("Shift+Tab").unwrap();
        assert_eq!(key.code, KeyCode::BackTab);
        assert!(key.modifiers.contains(KeyModifiers::SHIFT));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_key("").is_err());
        assert!(parse_key("Hyper+x").is_err());
        assert!(parse_key("banana").is_err());
    }

    #[test]
    fn test_keybindings_defaults() {
        let kb = KeyBindings::new();
        assert_eq!(
            kb.get_action(KeyCode::Char('q'), KeyModifiers::NONE),
            Some(KeyAction::Quit)
        );
        assert_eq!(
            kb.get_action(KeyCode::Right, KeyModifiers::NONE),
            Some(KeyAction::Next)
        );
        assert_eq!(
            kb.get_action(KeyCode::Char('2'), KeyModifiers::NONE),
            Some(KeyAction::CompactView)
        );
        assert_eq!(kb.get_action(KeyCode::Char('z'), KeyModifiers::NONE), None);
    }

    #[test]
    fn test_shifted_symbol_matches_with_or_without_shift() {
        let kb = KeyBindings::new();
        assert_eq!(
            kb.get_action(KeyCode::Char('?'), KeyModifiers::SHIFT),
            Some(KeyAction::ToggleHelp)
        );
        assert_eq!(
            kb.get_action(KeyCode::Char('?'), KeyModifiers::NONE),
            Some(KeyAction::ToggleHelp)
        );
    }

    #[test]
    fn test_keybindings_custom_override() {
        let mut kb = KeyBindings::new();

        let mut custom = HashMap::new();
        custom.insert("q".to_string(), "reload".to_string());
        custom.insert("Ctrl+Nope".to_string(), "quit".to_string());
        custom.insert("x".to_string(), "not_an_action".to_string());
        kb.load_custom(&custom);

        assert_eq!(
            kb.get_action(KeyCode::Char('q'), KeyModifiers::NONE),
            Some(KeyAction::Reload)
        );
        assert_eq!(kb.get_action(KeyCode::Char('x'), KeyModifiers::NONE), None);
    }

    #[test]
    fn test_keys_for_action() {
        let mut kb = KeyBindings::new();
        assert_eq!(kb.keys_for_action(KeyAction::Next), vec!["l", "→"]);
        assert_eq!(kb.keys_for_action(KeyAction::ToggleHelp), vec!["?"]);
        assert_eq!(
            kb.keys_for_action(KeyAction::ForceQuit),
            vec!["Ctrl+c", "Ctrl+q"]
        );

        let mut custom = HashMap::new();
        custom.insert("q".to_string(), "reload".to_string());
        kb.load_custom(&custom);
        assert!(kb.keys_for_action(KeyAction::Quit).is_empty());
        assert_eq!(kb.keys_for_action(KeyAction::Reload), vec!["F5", "q"]);
    }

    #[test]
    fn test_action_from_name() {
        assert_eq!(KeyAction::from_name("quit"), Some(KeyAction::Quit));
        assert_eq!(
            KeyAction::from_name("NEXT_SESSION"),
            Some(KeyAction::NextSession)
        );
        assert_eq!(KeyAction::from_name("unknown"), None);
        for action in KeyAction::all() {
            assert_eq!(KeyAction::from_name(action.name()), Some(*action));
        }
    }
}
