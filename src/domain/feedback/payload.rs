// SPDX-License-Identifier: MPL-2.0
//! Normalized feedback payload and the validation that produces it.
//!
//! Validation works on raw, string-keyed input so that anything reaching a
//! collaborator has been filtered against the fixed enumerations, even when
//! the caller's own input path already constrains the values.

use super::category::CategoryTag;
use super::criterion::{RatingCriterion, StarRating};
use std::collections::BTreeMap;
use std::fmt;

// =============================================================================
// Identifiers
// =============================================================================

/// Opaque identifier of the chat message being rated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageId(String);

impl MessageId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque identifier of the conversation a message belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConversationId(String);

impl ConversationId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConversationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// FeedbackPayload
// =============================================================================

/// The unit handed to a feedback collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackPayload {
    pub is_helpful: bool,
    pub ratings: BTreeMap<RatingCriterion, StarRating>,
    pub categories: Vec<CategoryTag>,
}

impl FeedbackPayload {
    /// Fixed payload sent by the thumbs-up shortcut.
    #[must_use]
    pub fn positive() -> Self {
        Self {
            is_helpful: true,
            ratings: BTreeMap::from([(RatingCriterion::Clarity, StarRating::MAX)]),
            categories: vec![CategoryTag::ExcellentAnswer, CategoryTag::WellExplained],
        }
    }

    /// Builds a negative payload from raw ratings and categories.
    ///
    /// Unknown criteria, out-of-range ratings and unknown tags are dropped.
    #[must_use]
    pub fn negative<R, K, C, S>(ratings: R, categories: C) -> Self
    where
        R: IntoIterator<Item = (K, i64)>,
        K: AsRef<str>,
        C: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            is_helpful: false,
            ratings: validate_ratings(ratings),
            categories: validate_categories(categories),
        }
    }

    /// Ratings as `(wire name, stars)` pairs in criterion order.
    pub fn rating_entries(&self) -> impl Iterator<Item = (&'static str, u8)> + '_ {
        self.ratings
            .iter()
            .map(|(criterion, stars)| (criterion.as_str(), stars.value()))
    }
}

/// Keeps the entries whose key names a known criterion and whose value is in 1..=5.
///
/// A later entry for the same criterion replaces an earlier one.
#[must_use]
pub fn validate_ratings<R, K>(ratings: R) -> BTreeMap<RatingCriterion, StarRating>
where
    R: IntoIterator<Item = (K, i64)>,
    K: AsRef<str>,
{
    ratings
        .into_iter()
        .filter_map(|(key, value)| {
            let criterion = key.as_ref().parse::<RatingCriterion>().ok()?;
            StarRating::new(value).map(|stars| (criterion, stars))
        })
        .collect()
}

/// Keeps the known tags, in input order, without duplicates.
#[must_use]
pub fn validate_categories<C, S>(categories: C) -> Vec<CategoryTag>
where
    C: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut validated = Vec::new();
    for tag in categories {
        if let Ok(tag) = tag.as_ref().parse::<CategoryTag>() {
            if !validated.contains(&tag) {
                validated.push(tag);
            }
        }
    }
    validated
}
