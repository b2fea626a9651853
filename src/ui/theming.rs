// SPDX-License-Identifier: MPL-2.0
//! Light/dark theme selection.

use iced::Theme;
use serde::{Deserialize, Serialize};

/// Theme preference as stored in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // Dark on detection error
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    /// Iced theme for this preference.
    #[must_use]
    pub fn theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

/// Returns true when `theme` has a dark background.
///
/// Works for any built-in Iced theme, not only [`Theme::Light`] and
/// [`Theme::Dark`].
#[must_use]
pub fn is_dark_theme(theme: &Theme) -> bool {
    let bg = theme.extended_palette().background.base.color;
    (bg.r + bg.g + bg.b) / 3.0 < 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_modes_map_to_matching_theme() {
        assert_eq!(ThemeMode::Light.theme(), Theme::Light);
        assert_eq!(ThemeMode::Dark.theme(), Theme::Dark);
    }

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        // Depends on the host; must not panic
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn background_luminance_detects_dark_theme() {
        assert!(is_dark_theme(&Theme::Dark));
        assert!(!is_dark_theme(&Theme::Light));
        assert!(is_dark_theme(&Theme::Dracula));
    }

    #[test]
    fn theme_mode_serializes_lowercase() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            mode: ThemeMode,
        }

        let text = toml::to_string(&Wrapper {
            mode: ThemeMode::Dark,
        })
        .expect("serialize");
        assert!(text.contains("mode = \"dark\""));

        let parsed: Wrapper = toml::from_str("mode = \"system\"").expect("deserialize");
        assert_eq!(parsed.mode, ThemeMode::System);
    }
}
