// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`feedback_api`]: Feedback submission over HTTP via `reqwest`, or a
//!   dry run that only logs (both implement [`FeedbackSubmitter`])
//!
//! [`FeedbackSubmitter`]: crate::application::port::FeedbackSubmitter

pub mod feedback_api;

pub use feedback_api::{DryRunSubmitter, HttpFeedbackSubmitter};
