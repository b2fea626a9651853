// SPDX-License-Identifier: MPL-2.0
//! Feedback domain types.
//!
//! The fixed rating criteria and category tags, the validated star value,
//! and the payload handed to feedback collaborators.

mod category;
mod criterion;
mod payload;

pub use category::{CategoryTag, UnknownCategory};
pub use criterion::{star_bounds, RatingCriterion, StarRating, UnknownCriterion};
pub use payload::{
    validate_categories, validate_ratings, ConversationId, FeedbackPayload, MessageId,
};
