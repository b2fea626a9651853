// SPDX-License-Identifier: MPL-2.0
//! Feedback widget state and message handling.

use crate::application::port::SubmissionError;
use crate::domain::feedback::{
    CategoryTag, ConversationId, FeedbackPayload, MessageId, RatingCriterion, StarRating,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Which widget action produced a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionKind {
    /// Thumbs-up shortcut.
    Positive,
    /// Detailed form submitted after thumbs-down.
    Detailed,
}

/// What the widget currently renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// Thank-you line; nothing else is interactive.
    Acknowledgment,
    /// Thumbs-up and thumbs-down buttons.
    QuickActions,
    /// Star rows, category chips, Cancel and Submit.
    Form,
}

/// Messages emitted by the feedback widget.
#[derive(Debug, Clone)]
pub enum Message {
    /// Thumbs-up: submit the fixed positive payload.
    ThumbsUp,
    /// Thumbs-down: open the detailed form.
    ThumbsDown,
    CategoryToggled(CategoryTag),
    /// A star row changed. `None` means the rating widget was cleared.
    RatingChanged(RatingCriterion, Option<i64>),
    Cancel,
    SubmitDetailed,
    /// Outcome of a submission the host ran on the widget's behalf.
    SubmissionFinished {
        kind: SubmissionKind,
        result: Result<(), SubmissionError>,
    },
}

/// Events propagated to the host application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// The detailed form was opened.
    Opened,
    /// The detailed form was closed without submitting.
    Cancelled,
    /// The host must hand `payload` to the collaborator and report back with
    /// [`Message::SubmissionFinished`].
    Submit {
        kind: SubmissionKind,
        payload: FeedbackPayload,
    },
    /// The collaborator accepted a submission.
    Submitted { kind: SubmissionKind },
    /// The collaborator rejected a submission. Already logged.
    SubmissionFailed {
        kind: SubmissionKind,
        error: SubmissionError,
    },
}

/// Local state of one feedback widget.
///
/// `submitted` only ever goes from `false` to `true`; once set, every
/// interaction message is ignored.
#[derive(Debug, Clone)]
pub struct State {
    message_id: MessageId,
    conversation_id: Option<ConversationId>,
    expanded: bool,
    submitted: bool,
    selected_categories: Vec<CategoryTag>,
    ratings: BTreeMap<RatingCriterion, StarRating>,
}

impl State {
    #[must_use]
    pub fn new(message_id: MessageId, conversation_id: Option<ConversationId>) -> Self {
        Self {
            message_id,
            conversation_id,
            expanded: false,
            submitted: false,
            selected_categories: Vec::new(),
            ratings: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn message_id(&self) -> &MessageId {
        &self.message_id
    }

    /// Carried for the host's bookkeeping; the widget never reads it.
    #[must_use]
    pub fn conversation_id(&self) -> Option<&ConversationId> {
        self.conversation_id.as_ref()
    }

    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    #[must_use]
    pub fn rating(&self, criterion: RatingCriterion) -> Option<StarRating> {
        self.ratings.get(&criterion).copied()
    }

    #[must_use]
    pub fn ratings(&self) -> &BTreeMap<RatingCriterion, StarRating> {
        &self.ratings
    }

    #[must_use]
    pub fn is_selected(&self, tag: CategoryTag) -> bool {
        self.selected_categories.contains(&tag)
    }

    /// Selected tags in the order they were picked.
    #[must_use]
    pub fn selected_categories(&self) -> &[CategoryTag] {
        &self.selected_categories
    }

    /// Acknowledgment wins over the form: a positive success can land while
    /// the form is still open.
    #[must_use]
    pub fn surface(&self) -> Surface {
        if self.submitted {
            Surface::Acknowledgment
        } else if self.expanded {
            Surface::Form
        } else {
            Surface::QuickActions
        }
    }

    /// Submit stays disabled until at least one rating or category is set.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.ratings.is_empty() || !self.selected_categories.is_empty()
    }

    /// Negative payload built from the current form, re-validated from its
    /// wire representation.
    #[must_use]
    pub fn detailed_payload(&self) -> FeedbackPayload {
        FeedbackPayload::negative(
            self.ratings
                .iter()
                .map(|(criterion, stars)| (criterion.as_str(), i64::from(stars.value()))),
            self.selected_categories.iter().map(|tag| tag.as_str()),
        )
    }

    /// Adds `tag` if absent, removes it if present.
    pub fn toggle_category(&mut self, tag: CategoryTag) {
        if let Some(pos) = self.selected_categories.iter().position(|t| *t == tag) {
            self.selected_categories.remove(pos);
        } else {
            self.selected_categories.push(tag);
        }
    }

    /// Stores the rating when `value` is present and within 1..=5.
    ///
    /// Returns whether the value was accepted.
    pub fn set_rating(&mut self, criterion: RatingCriterion, value: Option<i64>) -> bool {
        match value.and_then(StarRating::new) {
            Some(stars) => {
                self.ratings.insert(criterion, stars);
                true
            }
            None => false,
        }
    }

    /// Process a widget message and return the corresponding event.
    pub fn update(&mut self, message: Message) -> Event {
        if let Message::SubmissionFinished { kind, result } = message {
            return self.finish_submission(kind, result);
        }

        if self.submitted {
            return Event::None;
        }

        match message {
            Message::ThumbsUp => Event::Submit {
                kind: SubmissionKind::Positive,
                payload: FeedbackPayload::positive(),
            },
            Message::ThumbsDown => {
                self.expanded = true;
                Event::Opened
            }
            Message::CategoryToggled(tag) => {
                self.toggle_category(tag);
                Event::None
            }
            Message::RatingChanged(criterion, value) => {
                self.set_rating(criterion, value);
                Event::None
            }
            Message::Cancel => {
                self.expanded = false;
                Event::Cancelled
            }
            Message::SubmitDetailed => {
                if !self.can_submit() {
                    return Event::None;
                }
                Event::Submit {
                    kind: SubmissionKind::Detailed,
                    payload: self.detailed_payload(),
                }
            }
            Message::SubmissionFinished { .. } => Event::None,
        }
    }

    fn finish_submission(
        &mut self,
        kind: SubmissionKind,
        result: Result<(), SubmissionError>,
    ) -> Event {
        match result {
            Ok(()) => {
                self.submitted = true;
                if kind == SubmissionKind::Detailed {
                    self.expanded = false;
                }
                tracing::info!(message_id = %self.message_id, ?kind, "feedback submitted");
                Event::Submitted { kind }
            }
            Err(error) => {
                tracing::error!(
                    message_id = %self.message_id,
                    ?kind,
                    %error,
                    "Error submitting feedback"
                );
                Event::SubmissionFailed { kind, error }
            }
        }
    }
}
