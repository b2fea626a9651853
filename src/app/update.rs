// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.

use super::Message;
use crate::application::port::FeedbackSubmitter;
use crate::diagnostics::{DiagnosticEventKind, DiagnosticsLog};
use crate::domain::feedback::MessageId;
use crate::ui::feedback::{self, Event};
use iced::Task;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Mutable state touched by widget messages.
pub(super) struct FeedbackContext<'a> {
    pub widgets: &'a mut BTreeMap<MessageId, feedback::State>,
    pub diagnostics: &'a mut DiagnosticsLog,
    pub submitter: &'a Arc<dyn FeedbackSubmitter>,
}

/// Forwards a message to its widget and acts on the resulting event.
///
/// A `Submit` event starts the submitter; its outcome comes back to the same
/// widget as `SubmissionFinished`.
pub(super) fn handle_feedback(
    ctx: FeedbackContext<'_>,
    message_id: MessageId,
    message: feedback::Message,
) -> Task<Message> {
    let Some(widget) = ctx.widgets.get_mut(&message_id) else {
        tracing::warn!(%message_id, "message for unknown feedback widget");
        return Task::none();
    };

    match widget.update(message) {
        Event::None => Task::none(),
        Event::Opened => {
            ctx.diagnostics
                .record(&message_id, DiagnosticEventKind::FeedbackOpened);
            Task::none()
        }
        Event::Cancelled => {
            ctx.diagnostics
                .record(&message_id, DiagnosticEventKind::FeedbackCancelled);
            Task::none()
        }
        Event::Submit { kind, payload } => {
            ctx.diagnostics.record(
                &message_id,
                DiagnosticEventKind::SubmissionRequested {
                    kind,
                    is_helpful: payload.is_helpful,
                    ratings: payload.ratings.len(),
                    categories: payload.categories.len(),
                },
            );

            let submission = ctx.submitter.submit(message_id.clone(), payload);
            Task::perform(submission, move |result| Message::Feedback {
                message_id,
                message: feedback::Message::SubmissionFinished { kind, result },
            })
        }
        Event::Submitted { kind } => {
            ctx.diagnostics
                .record(&message_id, DiagnosticEventKind::SubmissionSucceeded { kind });
            Task::none()
        }
        Event::SubmissionFailed { kind, error } => {
            ctx.diagnostics
                .record(&message_id, DiagnosticEventKind::failed(kind, &error));
            Task::none()
        }
    }
}

/// Copies the diagnostics log as pretty JSON.
pub(super) fn handle_copy_diagnostics(diagnostics: &DiagnosticsLog) -> Task<Message> {
    match diagnostics.to_json() {
        Ok(json) => {
            tracing::info!(events = diagnostics.len(), "copied diagnostics to clipboard");
            iced::clipboard::write(json)
        }
        Err(error) => {
            tracing::error!(%error, "failed to serialize diagnostics");
            Task::none()
        }
    }
}
