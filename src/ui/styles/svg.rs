// SPDX-License-Identifier: MPL-2.0
//! SVG icon styles.

use crate::ui::design_tokens::palette;
use iced::widget::svg;
use iced::Theme;

/// Tints an icon with the theme's text color so it reads on any background.
pub fn tinted(theme: &Theme, _status: svg::Status) -> svg::Style {
    svg::Style {
        color: Some(theme.extended_palette().background.base.text),
    }
}

/// Success color, used by the acknowledgment check mark.
pub fn success(_theme: &Theme, _status: svg::Status) -> svg::Style {
    svg::Style {
        color: Some(palette::SUCCESS_500),
    }
}
