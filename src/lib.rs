// SPDX-License-Identifier: MPL-2.0
//! `message_feedback` is a per-message feedback widget for chat answers,
//! built with the Iced GUI framework.
//!
//! Users give a quick thumbs-up, or a thumbs-down that opens a form with
//! 1-5 star ratings and category tags. Payloads are handed to a
//! [`FeedbackSubmitter`](application::port::FeedbackSubmitter); failures are
//! logged and leave the widget ready for another attempt.
//!
//! # Layout
//!
//! - [`domain`] - Feedback vocabulary and payload validation (no I/O)
//! - [`application`] - The submitter port
//! - [`infrastructure`] - HTTP and dry-run submitters
//! - [`ui`] - The widget, styles and design tokens
//! - [`app`] - Transcript host window, config, localization
//! - [`diagnostics`] - In-memory log of widget activity

pub mod app;
pub mod application;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
