// SPDX-License-Identifier: MPL-2.0
//! Submission adapters driven end to end.

use message_feedback::application::port::{FeedbackSubmitter, SubmissionError};
use message_feedback::domain::feedback::{
    CategoryTag, ConversationId, FeedbackPayload, MessageId, RatingCriterion,
};
use message_feedback::infrastructure::feedback_api::{
    DryRunSubmitter, EndpointTemplate, HttpFeedbackSubmitter,
};
use message_feedback::ui::feedback::{self, Event, SubmissionKind};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use wiremock::{
    matchers::{body_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

const TIMEOUT: Duration = Duration::from_secs(5);

fn http_submitter(server: &MockServer) -> HttpFeedbackSubmitter {
    let template = format!(
        "{}/api/v1/conversations/{{conversation_id}}/message/{{message_id}}/feedback",
        server.uri()
    );
    HttpFeedbackSubmitter::new(
        EndpointTemplate::new(template),
        Some(ConversationId::new("conv-1")),
        TIMEOUT,
    )
    .expect("client builds")
}

/// Runs the `Submit` event a widget emitted through `submitter` and feeds the
/// outcome back, the way the host does.
async fn drive(
    widget: &mut feedback::State,
    submitter: &dyn FeedbackSubmitter,
    message: feedback::Message,
) -> Event {
    let Event::Submit { kind, payload } = widget.update(message) else {
        panic!("widget did not request a submission");
    };
    let result = submitter
        .submit(widget.message_id().clone(), payload)
        .await;
    widget.update(feedback::Message::SubmissionFinished { kind, result })
}

#[tokio::test]
async fn positive_feedback_posts_fixed_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/conversations/conv-1/message/m-1/feedback"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "isHelpful": true,
            "ratings": { "clarity": 5 },
            "categories": ["excellent_answer", "well_explained"]
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let submitter = http_submitter(&server);
    let mut widget = feedback::State::new(MessageId::new("m-1"), None);

    let event = drive(&mut widget, &submitter, feedback::Message::ThumbsUp).await;

    assert_eq!(
        event,
        Event::Submitted {
            kind: SubmissionKind::Positive
        }
    );
    assert!(widget.is_submitted());
}

#[tokio::test]
async fn detailed_feedback_posts_validated_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/conversations/conv-1/message/m-2/feedback"))
        .and(body_json(json!({
            "isHelpful": false,
            "ratings": { "accuracy": 2 },
            "categories": ["poor_citations"]
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let submitter = http_submitter(&server);
    let mut widget = feedback::State::new(MessageId::new("m-2"), None);
    widget.update(feedback::Message::ThumbsDown);
    widget.update(feedback::Message::RatingChanged(
        RatingCriterion::Accuracy,
        Some(2),
    ));
    widget.update(feedback::Message::CategoryToggled(CategoryTag::PoorCitations));

    drive(&mut widget, &submitter, feedback::Message::SubmitDetailed).await;

    assert!(widget.is_submitted());
    assert!(!widget.is_expanded());
}

#[tokio::test]
async fn server_error_leaves_widget_ready_to_retry() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let submitter = http_submitter(&server);
    let mut widget = feedback::State::new(MessageId::new("m-3"), None);

    let event = drive(&mut widget, &submitter, feedback::Message::ThumbsUp).await;

    assert_eq!(
        event,
        Event::SubmissionFailed {
            kind: SubmissionKind::Positive,
            error: SubmissionError::Status(500),
        }
    );
    assert!(!widget.is_submitted());
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_error() {
    // Bind then release a port so nothing is listening on it
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .and_then(|listener| listener.local_addr())
        .expect("free port")
        .port();
    let submitter = HttpFeedbackSubmitter::new(
        EndpointTemplate::new(format!("http://127.0.0.1:{port}/feedback/{{message_id}}")),
        None,
        TIMEOUT,
    )
    .expect("client builds");

    let result = submitter
        .submit(MessageId::new("m-4"), FeedbackPayload::positive())
        .await;

    assert!(matches!(result, Err(SubmissionError::Transport(_))));
}

#[tokio::test]
async fn missing_conversation_id_is_rejected_before_sending() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    let submitter = HttpFeedbackSubmitter::new(
        EndpointTemplate::new(format!("{}/c/{{conversation_id}}/m/{{message_id}}", server.uri())),
        None,
        TIMEOUT,
    )
    .expect("client builds");

    let result = submitter
        .submit(MessageId::new("m-5"), FeedbackPayload::positive())
        .await;

    assert!(matches!(result, Err(SubmissionError::Rejected(_))));
}

#[tokio::test]
async fn dry_run_always_succeeds() {
    let mut widget = feedback::State::new(MessageId::new("m-6"), None);

    drive(&mut widget, &DryRunSubmitter, feedback::Message::ThumbsUp).await;

    assert!(widget.is_submitted());
}

#[tokio::test]
async fn closure_collaborator_receives_id_and_payload() {
    let received: Arc<Mutex<Vec<(MessageId, FeedbackPayload)>>> = Arc::default();
    let sink = Arc::clone(&received);
    let submitter = move |id: MessageId, payload: FeedbackPayload| {
        let sink = Arc::clone(&sink);
        async move {
            sink.lock().await.push((id, payload));
            Ok::<(), SubmissionError>(())
        }
    };

    let mut widget = feedback::State::new(MessageId::new("m-7"), None);
    drive(&mut widget, &submitter, feedback::Message::ThumbsUp).await;

    let calls = received.lock().await;
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, MessageId::new("m-7"));
    assert_eq!(calls[0].1, FeedbackPayload::positive());
}

#[tokio::test]
async fn overlapping_submissions_settle_on_submitted() {
    let attempts = Arc::new(Mutex::new(0_u32));
    let counter = Arc::clone(&attempts);
    // First call succeeds, every later one fails
    let submitter = move |_id: MessageId, _payload: FeedbackPayload| {
        let counter = Arc::clone(&counter);
        async move {
            let mut n = counter.lock().await;
            *n += 1;
            if *n == 1 {
                Ok(())
            } else {
                Err(SubmissionError::Rejected("duplicate".into()))
            }
        }
    };

    let mut widget = feedback::State::new(MessageId::new("m-8"), None);
    let first = widget.update(feedback::Message::ThumbsUp);
    let second = widget.update(feedback::Message::ThumbsUp);

    let mut pending = Vec::new();
    for event in [first, second] {
        let Event::Submit { kind, payload } = event else {
            panic!("expected two submissions");
        };
        pending.push((kind, submitter.submit(widget.message_id().clone(), payload)));
    }
    for (kind, future) in pending {
        let result = future.await;
        widget.update(feedback::Message::SubmissionFinished { kind, result });
    }

    assert_eq!(*attempts.lock().await, 2);
    assert!(widget.is_submitted());
}
