// SPDX-License-Identifier: MPL-2.0
//! Icons used by the feedback widget.
//!
//! Icons are monochrome SVGs embedded at compile time via `include_bytes!`.
//! They are drawn with `currentColor` so a style (see
//! [`styles::svg`](super::styles::svg)) can tint them for the active theme.
//! Handles are cached using `OnceLock`.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::icons;
//!
//! let thumbs_up = button(icons::sized(icons::thumb_up(), sizing::ICON_SM));
//! ```
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `thumb_up` not `mark_helpful`).

use iced::widget::svg::{Handle, Svg};
use iced::Length;
use std::sync::OnceLock;

/// Defines an icon function with a cached handle.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/assets/icons/",
                $filename
            ));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(thumb_up, "thumb_up.svg", "Thumbs-up: hand with raised thumb.");
define_icon!(
    thumb_down,
    "thumb_down.svg",
    "Thumbs-down: hand with lowered thumb."
);
define_icon!(
    check_circle,
    "check_circle.svg",
    "Check mark inside a circle."
);

/// Creates a square icon of `size` pixels.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_handles_are_cached() {
        // Two calls must not panic and must reuse the same embedded data
        let _ = thumb_up();
        let _ = thumb_up();
        let _ = thumb_down();
        let _ = check_circle();
    }

    #[test]
    fn embedded_icons_are_svg_documents() {
        for data in [
            include_str!("../../assets/icons/thumb_up.svg"),
            include_str!("../../assets/icons/thumb_down.svg"),
            include_str!("../../assets/icons/check_circle.svg"),
        ] {
            assert!(data.contains("<svg"));
            assert!(data.contains("currentColor"));
        }
    }
}
