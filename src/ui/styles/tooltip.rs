// SPDX-License-Identifier: MPL-2.0
//! Tooltip styles.
//!
//! Tooltips invert the theme (dark bubble on light theme, light bubble on
//! dark theme) so quick-action hints stay readable over message text.

use crate::ui::design_tokens::{border, radius, shadow, spacing, typography};
use crate::ui::theming::is_dark_theme;
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Color, Element, Theme};

/// Style for the tooltip bubble.
pub fn tooltip_container(theme: &Theme) -> container::Style {
    let (bg_color, text_color, border_color) = if is_dark_theme(theme) {
        (
            Color::from_rgba(0.95, 0.95, 0.95, 0.98),
            Color::from_rgb(0.1, 0.1, 0.1),
            Color::from_rgba(0.7, 0.7, 0.7, 0.3),
        )
    } else {
        (
            Color::from_rgba(0.15, 0.15, 0.15, 0.98),
            Color::from_rgb(0.95, 0.95, 0.95),
            Color::from_rgba(0.3, 0.3, 0.3, 0.3),
        )
    };

    container::Style {
        background: Some(Background::Color(bg_color)),
        border: Border {
            radius: radius::SM.into(),
            width: border::WIDTH_SM,
            color: border_color,
        },
        shadow: iced::Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
            ..shadow::MD
        },
        text_color: Some(text_color),
        ..Default::default()
    }
}

/// Wraps `content` in a tooltip using [`tooltip_container`].
///
/// ```ignore
/// styles::tooltip::styled(thumbs_up, "This was helpful", tooltip::Position::Top)
/// ```
pub fn styled<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    tip: impl Into<String>,
    position: tooltip::Position,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let tip_container = Container::new(Text::new(tip.into()).size(typography::BODY_SM))
        .padding(spacing::XS)
        .style(tooltip_container);

    tooltip(content, tip_container, position).gap(spacing::XXS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tooltip_container_has_background_and_text_color() {
        for theme in [Theme::Light, Theme::Dark] {
            let style = tooltip_container(&theme);
            assert!(style.background.is_some());
            assert!(style.text_color.is_some());
            assert!(style.shadow.blur_radius > 0.0);
        }
    }

    #[test]
    fn light_theme_uses_dark_tooltip() {
        let style = tooltip_container(&Theme::Light);
        let Some(Background::Color(bg)) = style.background else {
            panic!("Expected color background")
        };
        assert!(bg.r < 0.5);
    }

    #[test]
    fn dark_theme_uses_light_tooltip() {
        let style = tooltip_container(&Theme::Dark);
        let Some(Background::Color(bg)) = style.background else {
            panic!("Expected color background")
        };
        assert!(bg.r > 0.5);
    }
}
