// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use crate::ui::theming::is_dark_theme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Meaning of a quick-action button, used for its hover tint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Positive,
    Negative,
}

impl Intent {
    fn color(self) -> Color {
        match self {
            Intent::Positive => palette::SUCCESS_500,
            Intent::Negative => palette::ERROR_500,
        }
    }
}

/// Borderless icon button for thumbs-up / thumbs-down.
///
/// Transparent at rest, tinted with the intent color on hover.
pub fn quick_action(intent: Intent) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let text_color = theme.extended_palette().background.base.text;
        let alpha = match status {
            button::Status::Hovered => opacity::TINT,
            button::Status::Pressed => opacity::OVERLAY_SUBTLE,
            _ => opacity::TRANSPARENT,
        };

        button::Style {
            background: Some(Background::Color(Color {
                a: alpha,
                ..intent.color()
            })),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Primary action (Submit).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(if is_dark_theme(theme) {
                palette::GRAY_700
            } else {
                palette::GRAY_200
            })),
            text_color: palette::GRAY_400,
            border: Border {
                color: palette::GRAY_400,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Secondary action: transparent with a thin border.
pub fn outlined(theme: &Theme, status: button::Status) -> button::Style {
    let text_color = theme.extended_palette().background.base.text;
    let border_color = match status {
        button::Status::Hovered => palette::PRIMARY_500,
        _ => palette::GRAY_400,
    };

    button::Style {
        background: None,
        text_color,
        border: Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Unselected category chip.
pub fn chip(theme: &Theme, status: button::Status) -> button::Style {
    let dark = is_dark_theme(theme);
    let (bg_color, text_color) = if dark {
        (palette::GRAY_700, WHITE)
    } else {
        (palette::GRAY_100, palette::GRAY_900)
    };
    let border_color = match status {
        button::Status::Hovered => palette::PRIMARY_500,
        _ => palette::GRAY_400,
    };

    button::Style {
        background: Some(Background::Color(bg_color)),
        text_color,
        border: Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Selected category chip.
pub fn chip_selected(theme: &Theme, status: button::Status) -> button::Style {
    let (bg_color, text_color) = if is_dark_theme(theme) {
        (palette::PRIMARY_800, WHITE)
    } else {
        (palette::PRIMARY_100, palette::PRIMARY_800)
    };
    let border_color = match status {
        button::Status::Hovered => palette::PRIMARY_400,
        _ => palette::PRIMARY_500,
    };

    button::Style {
        background: Some(Background::Color(bg_color)),
        text_color,
        border: Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Single rating star; only the glyph color changes.
pub fn star(filled: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let text_color = match (filled, status) {
            (true, _) => palette::STAR_500,
            (false, button::Status::Hovered) => palette::STAR_500,
            (false, _) => theme.extended_palette().background.strong.color,
        };

        button::Style {
            background: None,
            text_color,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}
