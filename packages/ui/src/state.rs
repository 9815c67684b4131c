//! UI state owned by the root view.
//!
//! Two flags, `theme` and `menu`, held in one `Copy` struct and changed only
//! through the named transitions below. The root component keeps it in a
//! `Signal<UiState>` and every event handler goes through these methods.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    fn flipped(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Menu {
    Open,
    #[default]
    Closed,
}

impl Menu {
    pub fn is_open(self) -> bool {
        self == Menu::Open
    }
}

/// Root view state. Starts dark with the mobile menu closed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiState {
    pub theme: Theme,
    pub menu: Menu,
}

/// Class added to `<html>` while the dark palette is active.
pub const DARK_CLASS: &str = "dark";

impl UiState {
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.flipped();
    }

    pub fn toggle_menu(&mut self) {
        self.menu = match self.menu {
            Menu::Open => Menu::Closed,
            Menu::Closed => Menu::Open,
        };
    }

    /// A navigation link was followed; the mobile drawer always closes.
    pub fn select_nav_link(&mut self) {
        self.menu = Menu::Closed;
    }

    /// The global style-scope marker for the current theme.
    pub fn theme_class(&self) -> Option<&'static str> {
        self.theme.is_dark().then_some(DARK_CLASS)
    }

    /// Label on the desktop toggle: names the theme it switches to.
    pub fn theme_toggle_label(&self) -> &'static str {
        match self.theme {
            Theme::Dark => "Light",
            Theme::Light => "Dark",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = UiState::default();
        assert_eq!(state.theme, Theme::Dark);
        assert_eq!(state.menu, Menu::Closed);
        assert_eq!(state.theme_class(), Some("dark"));
    }

    #[test]
    fn test_theme_toggle_twice_restores() {
        let original = UiState::default();
        let mut state = original;

        state.toggle_theme();
        assert_eq!(state.theme, Theme::Light);
        assert_eq!(state.theme_class(), None);
        assert_eq!(state.theme_toggle_label(), "Dark");

        state.toggle_theme();
        assert_eq!(state, original);
        assert_eq!(state.theme_class(), original.theme_class());
    }

    #[test]
    fn test_theme_does_not_touch_menu() {
        let mut state = UiState::default();
        state.toggle_menu();
        state.toggle_theme();
        assert!(state.menu.is_open());
    }

    #[test]
    fn test_nav_link_closes_open_menu() {
        let mut state = UiState::default();
        state.toggle_menu();
        assert!(state.menu.is_open());

        state.select_nav_link();
        assert_eq!(state.menu, Menu::Closed);

        // Already closed stays closed
        state.select_nav_link();
        assert_eq!(state.menu, Menu::Closed);
    }

    #[test]
    fn test_serializes_lowercase() {
        let mut state = UiState::default();
        state.toggle_menu();
        let text = toml::to_string(&state).unwrap();
        assert!(text.contains("theme = \"dark\""));
        assert!(text.contains("menu = \"open\""));
    }
}
