// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! owns a `State`, handles its `Message` in `update`, and reports anything
//! the host must act on as an `Event`.
//!
//! - [`feedback`] - Per-message feedback widget (thumbs, stars, categories)
//! - [`styles`] - Centralized styling (buttons, containers, tooltips)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - Embedded SVG icons

pub mod design_tokens;
pub mod feedback;
pub mod icons;
pub mod styles;
pub mod theming;
