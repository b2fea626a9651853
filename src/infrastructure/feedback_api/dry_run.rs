// SPDX-License-Identifier: MPL-2.0
//! Submitter that only logs what it would have sent.

use super::wire::FeedbackBody;
use crate::application::port::{FeedbackSubmitter, SubmissionError, SubmissionResult};
use crate::domain::feedback::{FeedbackPayload, MessageId};
use futures_util::future::{self, BoxFuture};

/// Logs every payload as JSON and reports success.
///
/// Used when no endpoint is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunSubmitter;

impl DryRunSubmitter {
    /// Encodes the payload exactly as the HTTP adapter would.
    pub fn encode(payload: &FeedbackPayload) -> Result<String, SubmissionError> {
        serde_json::to_string(&FeedbackBody::from(payload))
            .map_err(|e| SubmissionError::Encode(e.to_string()))
    }
}

impl FeedbackSubmitter for DryRunSubmitter {
    fn submit(
        &self,
        message_id: MessageId,
        payload: FeedbackPayload,
    ) -> BoxFuture<'static, SubmissionResult> {
        let result = Self::encode(&payload).map(|json| {
            tracing::info!(message_id = %message_id, body = %json, "feedback (dry run)");
        });
        Box::pin(future::ready(result))
    }
}
