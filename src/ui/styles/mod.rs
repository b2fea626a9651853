// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the feedback widget and the transcript host.

pub mod button;
pub mod container;
pub mod svg;
pub mod text;
pub mod tooltip;
