// SPDX-License-Identifier: MPL-2.0
//! Message feedback widget.
//!
//! One widget is mounted per assistant message. Collapsed, it shows a
//! thumbs-up and a thumbs-down button. Thumbs-up submits a fixed positive
//! payload; thumbs-down expands a form with a 1-5 star row per
//! [`RatingCriterion`](crate::domain::feedback::RatingCriterion) and a chip per
//! [`CategoryTag`](crate::domain::feedback::CategoryTag).
//!
//! The widget never runs the submission itself. [`State::update`] returns
//! [`Event::Submit`]; the host hands the payload to its
//! [`FeedbackSubmitter`](crate::application::port::FeedbackSubmitter) and
//! reports the outcome with [`Message::SubmissionFinished`]. A failed
//! submission is logged and leaves the widget untouched so the user can
//! try again. A successful one switches it to the acknowledgment view for
//! good.

mod state;
mod view;


pub use state::{Event, Message, State, SubmissionKind, Surface};
pub use view::ViewContext;

/// User-facing strings rendered by the widget.
///
/// The host supplies these; [`Labels::default`] is English.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub helpful_tooltip: String,
    pub needs_improvement_tooltip: String,
    pub form_title: String,
    pub cancel: String,
    pub submit: String,
    pub thanks: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            helpful_tooltip: "This was helpful".to_string(),
            needs_improvement_tooltip: "This needs improvement".to_string(),
            form_title: "What could be improved?".to_string(),
            cancel: "Cancel".to_string(),
            submit: "Submit".to_string(),
            thanks: "Thank you for your feedback".to_string(),
        }
    }
}
