// SPDX-License-Identifier: MPL-2.0
//! HTTP adapter posting feedback as JSON.

use super::wire::FeedbackBody;
use crate::application::port::{FeedbackSubmitter, SubmissionError, SubmissionResult};
use crate::domain::feedback::{ConversationId, FeedbackPayload, MessageId};
use futures_util::future::BoxFuture;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::time::Duration;

/// Placeholder replaced by the message identifier.
pub const MESSAGE_ID_PLACEHOLDER: &str = "{message_id}";

/// Placeholder replaced by the conversation identifier.
pub const CONVERSATION_ID_PLACEHOLDER: &str = "{conversation_id}";

/// Ids are opaque, so everything but unreserved characters is escaped.
const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// User agent sent with every request.
const USER_AGENT: &str = concat!("message-feedback/", env!("CARGO_PKG_VERSION"));

/// URL template such as
/// `https://host/api/v1/conversations/{conversation_id}/message/{message_id}/feedback`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointTemplate(String);

impl EndpointTemplate {
    #[must_use]
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Expands the placeholders and checks the result is a valid URL.
    ///
    /// Each id is percent-encoded as a single path segment.
    pub fn resolve(
        &self,
        conversation_id: Option<&ConversationId>,
        message_id: &MessageId,
    ) -> Result<reqwest::Url, SubmissionError> {
        let mut url = self
            .0
            .replace(MESSAGE_ID_PLACEHOLDER, &path_segment(message_id.as_str()));

        if url.contains(CONVERSATION_ID_PLACEHOLDER) {
            let conversation = conversation_id.ok_or_else(|| {
                SubmissionError::Rejected("endpoint needs a conversation id".to_string())
            })?;
            url = url.replace(
                CONVERSATION_ID_PLACEHOLDER,
                &path_segment(conversation.as_str()),
            );
        }

        reqwest::Url::parse(&url)
            .map_err(|e| SubmissionError::Encode(format!("invalid endpoint `{url}`: {e}")))
    }
}

fn path_segment(id: &str) -> String {
    utf8_percent_encode(id, PATH_SEGMENT_ENCODE_SET).to_string()
}

/// Posts each payload to an endpoint derived from the conversation and message ids.
///
/// The conversation id is captured at construction, so one submitter serves
/// every widget of a conversation.
#[derive(Debug, Clone)]
pub struct HttpFeedbackSubmitter {
    client: reqwest::Client,
    endpoint: EndpointTemplate,
    conversation_id: Option<ConversationId>,
}

impl HttpFeedbackSubmitter {
    /// Builds the HTTP client.
    pub fn new(
        endpoint: EndpointTemplate,
        conversation_id: Option<ConversationId>,
        timeout: Duration,
    ) -> Result<Self, SubmissionError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| SubmissionError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            endpoint,
            conversation_id,
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &EndpointTemplate {
        &self.endpoint
    }
}

impl FeedbackSubmitter for HttpFeedbackSubmitter {
    fn submit(
        &self,
        message_id: MessageId,
        payload: FeedbackPayload,
    ) -> BoxFuture<'static, SubmissionResult> {
        let client = self.client.clone();
        let url = self
            .endpoint
            .resolve(self.conversation_id.as_ref(), &message_id);
        let body = FeedbackBody::from(&payload);

        Box::pin(async move {
            let url = url?;
            tracing::debug!(%url, message_id = %message_id, "posting feedback");

            let response = client
                .post(url)
                .json(&body)
                .send()
                .await
                .map_err(|e| SubmissionError::Transport(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(SubmissionError::Status(status.as_u16()));
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str =
        "http://localhost:3000/api/v1/conversations/{conversation_id}/message/{message_id}/feedback";

    #[test]
    fn resolve_fills_both_placeholders() {
        let template = EndpointTemplate::new(TEMPLATE);
        let url = template
            .resolve(Some(&ConversationId::new("c-9")), &MessageId::new("m-3"))
            .expect("valid url");

        assert_eq!(
            url.as_str(),
            "http://localhost:3000/api/v1/conversations/c-9/message/m-3/feedback"
        );
    }

    #[test]
    fn resolve_without_conversation_placeholder_ignores_missing_id() {
        let template = EndpointTemplate::new("http://localhost/feedback/{message_id}");
        let url = template
            .resolve(None, &MessageId::new("abc"))
            .expect("valid url");

        assert_eq!(url.path(), "/feedback/abc");
    }

    #[test]
    fn resolve_escapes_reserved_characters_in_ids() {
        let template = EndpointTemplate::new(TEMPLATE);
        let url = template
            .resolve(
                Some(&ConversationId::new("c/1")),
                &MessageId::new("m?x=1#frag y"),
            )
            .expect("valid url");

        assert_eq!(
            url.path(),
            "/api/v1/conversations/c%2F1/message/m%3Fx%3D1%23frag%20y/feedback"
        );
        assert_eq!(url.query(), None);
        assert_eq!(url.fragment(), None);
    }

    #[test]
    fn resolve_keeps_unreserved_characters() {
        let template = EndpointTemplate::new("http://localhost/feedback/{message_id}");
        let url = template
            .resolve(None, &MessageId::new("msg-1_a.b~c"))
            .expect("valid url");

        assert_eq!(url.path(), "/feedback/msg-1_a.b~c");
    }

    #[test]
    fn resolve_requires_conversation_when_template_uses_it() {
        let template = EndpointTemplate::new(TEMPLATE);
        let err = template.resolve(None, &MessageId::new("m-3")).unwrap_err();
        assert!(matches!(err, SubmissionError::Rejected(_)));
    }

    #[test]
    fn resolve_rejects_invalid_url() {
        let template = EndpointTemplate::new("not a url/{message_id}");
        let err = template.resolve(None, &MessageId::new("m")).unwrap_err();
        assert!(matches!(err, SubmissionError::Encode(_)));
    }

    #[tokio::test]
    async fn invalid_endpoint_fails_without_network() {
        let submitter = HttpFeedbackSubmitter::new(
            EndpointTemplate::new(TEMPLATE),
            None,
            Duration::from_secs(1),
        )
        .expect("client");

        let result = submitter
            .submit(MessageId::new("m-1"), FeedbackPayload::positive())
            .await;

        assert!(matches!(result, Err(SubmissionError::Rejected(_))));
    }
}
