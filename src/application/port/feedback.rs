// SPDX-License-Identifier: MPL-2.0
//! Feedback submission port definition.
//!
//! This module defines the [`FeedbackSubmitter`] trait, the single external
//! collaborator of the feedback widget. Implementations persist or transmit
//! the payload; the widget only learns whether the call succeeded.
//!
//! # Design Notes
//!
//! - Submissions return a boxed future the host wraps in an Iced `Task`
//! - Any `Fn(MessageId, FeedbackPayload) -> impl Future` closure is a submitter
//! - The trait is `Send + Sync` so one submitter can serve every widget

use crate::domain::feedback::{FeedbackPayload, MessageId};
use futures_util::future::BoxFuture;
use std::fmt;
use std::future::Future;

// =============================================================================
// SubmissionError
// =============================================================================

/// Errors that can occur while handing feedback to a collaborator.
///
/// The widget treats every variant the same way; the distinction only
/// matters for logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// The request never produced a response (connection, timeout, DNS).
    Transport(String),

    /// The collaborator answered with a non-success HTTP status.
    Status(u16),

    /// The payload could not be encoded.
    Encode(String),

    /// The collaborator refused the feedback for any other reason.
    Rejected(String),
}

impl fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionError::Transport(msg) => write!(f, "Transport error: {msg}"),
            SubmissionError::Status(code) => write!(f, "Server answered with status {code}"),
            SubmissionError::Encode(msg) => write!(f, "Could not encode feedback: {msg}"),
            SubmissionError::Rejected(msg) => write!(f, "Feedback rejected: {msg}"),
        }
    }
}

impl std::error::Error for SubmissionError {}

/// Result type for submissions.
pub type SubmissionResult = Result<(), SubmissionError>;

// =============================================================================
// FeedbackSubmitter Trait
// =============================================================================

/// Port for delivering feedback payloads.
///
/// # Example
///
/// ```ignore
/// use message_feedback::application::port::FeedbackSubmitter;
///
/// let submitter = |id: MessageId, payload: FeedbackPayload| async move {
///     println!("{id}: helpful = {}", payload.is_helpful);
///     Ok::<(), SubmissionError>(())
/// };
/// let future = submitter.submit(MessageId::new("m1"), FeedbackPayload::positive());
/// ```
pub trait FeedbackSubmitter: Send + Sync {
    /// Delivers `payload` for `message_id`.
    ///
    /// The returned future owns everything it needs so it can outlive the
    /// widget that requested it.
    fn submit(
        &self,
        message_id: MessageId,
        payload: FeedbackPayload,
    ) -> BoxFuture<'static, SubmissionResult>;
}

impl<F, Fut> FeedbackSubmitter for F
where
    F: Fn(MessageId, FeedbackPayload) -> Fut + Send + Sync,
    Fut: Future<Output = SubmissionResult> + Send + 'static,
{
    fn submit(
        &self,
        message_id: MessageId,
        payload: FeedbackPayload,
    ) -> BoxFuture<'static, SubmissionResult> {
        Box::pin(self(message_id, payload))
    }
}
