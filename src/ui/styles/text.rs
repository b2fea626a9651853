// SPDX-License-Identifier: MPL-2.0
//! Text styles.

use crate::ui::design_tokens::palette;
use iced::widget::text;
use iced::Theme;

pub fn success(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(palette::SUCCESS_500),
    }
}

pub fn error(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(palette::ERROR_500),
    }
}

/// Dimmed text for role badges and hints.
pub fn muted(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.extended_palette().background.strong.color),
    }
}
