// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Surface behind the detailed feedback form.
///
/// Derived from the active theme's weak background so the form stands out
/// from the message it belongs to in both light and dark modes.
pub fn form_panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.weak.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

/// Bubble around one transcript message.
pub fn message_bubble(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Bubble around a user message, tinted with the primary color.
pub fn user_bubble(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.primary.weak.color)),
        text_color: Some(palette.primary.weak.text),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_panel_is_translucent_and_bordered() {
        let style = form_panel(&Theme::Light);
        let Some(Background::Color(bg)) = style.background else {
            panic!("Expected color background")
        };
        assert_eq!(bg.a, opacity::SURFACE);
        assert_eq!(style.border.width, border::WIDTH_SM);
    }

    #[test]
    fn user_bubble_sets_text_color() {
        assert!(user_bubble(&Theme::Dark).text_color.is_some());
        assert!(message_bubble(&Theme::Dark).background.is_some());
    }
}
