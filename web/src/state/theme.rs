//! Visual theme selection.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use serde::{Deserialize, Serialize};

/// Active visual mode. The identifier doubles as the body CSS class and as
/// the persisted JSON string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    #[serde(rename = "light-theme")]
    Light,
    #[serde(rename = "dark-theme")]
    Dark,
}

impl Theme {
    /// Every theme, in declaration order. The body class sweep walks this list.
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    /// CSS class applied to `<body>` while this theme is active.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Light => "light-theme",
            Self::Dark => "dark-theme",
        }
    }

    /// Map a dark-theme toggle value to a theme. Only `Some(true)` is dark.
    pub fn from_toggle(value: Option<bool>) -> Self {
        if value == Some(true) { Self::Dark } else { Self::Light }
    }

    /// Toggle position that displays this theme.
    pub fn toggle_value(self) -> bool {
        self == Self::Dark
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.css_class())
    }
}
