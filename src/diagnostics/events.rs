// SPDX-License-Identifier: MPL-2.0
//! Feedback event types recorded for diagnostics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::port::SubmissionError;
use crate::domain::feedback::MessageId;
use crate::ui::feedback::SubmissionKind;

/// A timestamped feedback event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticEvent {
    pub timestamp: DateTime<Utc>,
    pub message_id: String,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates an event stamped with the current time.
    #[must_use]
    pub fn new(message_id: &MessageId, kind: DiagnosticEventKind) -> Self {
        Self::with_timestamp(message_id, kind, Utc::now())
    }

    #[must_use]
    pub fn with_timestamp(
        message_id: &MessageId,
        kind: DiagnosticEventKind,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            timestamp,
            message_id: message_id.as_str().to_string(),
            kind,
        }
    }
}

/// What happened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// The detailed form was opened.
    FeedbackOpened,

    /// The detailed form was closed without submitting.
    FeedbackCancelled,

    /// A payload was handed to the collaborator.
    SubmissionRequested {
        kind: SubmissionKind,
        is_helpful: bool,
        ratings: usize,
        categories: usize,
    },

    /// The collaborator accepted the payload.
    SubmissionSucceeded { kind: SubmissionKind },

    /// The collaborator rejected the payload.
    SubmissionFailed {
        kind: SubmissionKind,
        reason: String,
    },
}

impl DiagnosticEventKind {
    /// Builds a failure event from a submission error.
    #[must_use]
    pub fn failed(kind: SubmissionKind, error: &SubmissionError) -> Self {
        Self::SubmissionFailed {
            kind,
            reason: error.to_string(),
        }
    }

    /// Returns true for failure events.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::SubmissionFailed { .. })
    }
}
