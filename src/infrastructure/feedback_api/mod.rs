// SPDX-License-Identifier: MPL-2.0
//! Feedback submission adapters implementing the [`FeedbackSubmitter`] port.
//!
//! - [`HttpFeedbackSubmitter`]: JSON POST via `reqwest`
//! - [`DryRunSubmitter`]: logs the JSON body and succeeds
//!
//! [`FeedbackSubmitter`]: crate::application::port::FeedbackSubmitter

mod dry_run;
mod http;
mod wire;

pub use dry_run::DryRunSubmitter;
pub use http::{
    EndpointTemplate, HttpFeedbackSubmitter, CONVERSATION_ID_PLACEHOLDER, MESSAGE_ID_PLACEHOLDER,
};
pub use wire::FeedbackBody;
