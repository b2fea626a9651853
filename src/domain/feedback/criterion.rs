// SPDX-License-Identifier: MPL-2.0
//! Rating criteria and the star value attached to each of them.

use std::fmt;
use std::str::FromStr;

// =============================================================================
// Star Rating Bounds
// =============================================================================

/// Star rating bounds (1 to 5 stars).
pub mod star_bounds {
    /// Lowest accepted rating.
    pub const MIN: i64 = 1;
    /// Highest accepted rating.
    pub const MAX: i64 = 5;
}

// =============================================================================
// RatingCriterion
// =============================================================================

/// Quality dimension a user can score an answer on.
///
/// The identifiers returned by [`RatingCriterion::as_str`] are part of the
/// payload wire format and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RatingCriterion {
    Accuracy,
    Relevance,
    Completeness,
    Clarity,
}

impl RatingCriterion {
    /// All criteria in display order.
    pub const ALL: [RatingCriterion; 4] = [
        RatingCriterion::Accuracy,
        RatingCriterion::Relevance,
        RatingCriterion::Completeness,
        RatingCriterion::Clarity,
    ];

    /// Wire identifier (`accuracy`, `relevance`, ...).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RatingCriterion::Accuracy => "accuracy",
            RatingCriterion::Relevance => "relevance",
            RatingCriterion::Completeness => "completeness",
            RatingCriterion::Clarity => "clarity",
        }
    }

    /// Capitalized label shown next to the stars.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            RatingCriterion::Accuracy => "Accuracy",
            RatingCriterion::Relevance => "Relevance",
            RatingCriterion::Completeness => "Completeness",
            RatingCriterion::Clarity => "Clarity",
        }
    }
}

impl fmt::Display for RatingCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a known criterion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCriterion(pub String);

impl fmt::Display for UnknownCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown rating criterion: {}", self.0)
    }
}

impl std::error::Error for UnknownCriterion {}

impl FromStr for RatingCriterion {
    type Err = UnknownCriterion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|criterion| criterion.as_str() == s)
            .ok_or_else(|| UnknownCriterion(s.to_string()))
    }
}

// =============================================================================
// StarRating
// =============================================================================

/// Star rating, guaranteed to be within 1..=5.
///
/// Unlike the clamping value objects elsewhere, out-of-range input is
/// rejected rather than clamped: an invalid rating is dropped, never coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StarRating(u8);

impl StarRating {
    /// The highest rating, used by quick positive feedback.
    pub const MAX: StarRating = StarRating(5);

    /// Creates a rating, returning `None` when the value is outside 1..=5.
    #[must_use]
    pub fn new(value: i64) -> Option<Self> {
        if (star_bounds::MIN..=star_bounds::MAX).contains(&value) {
            u8::try_from(value).ok().map(Self)
        } else {
            None
        }
    }

    /// Returns the number of stars.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn criterion_round_trips_through_wire_name() {
        for criterion in RatingCriterion::ALL {
            assert_eq!(criterion.as_str().parse::<RatingCriterion>(), Ok(criterion));
        }
    }

    #[test]
    fn unknown_criterion_is_rejected() {
        let err = "helpfulness".parse::<RatingCriterion>().unwrap_err();
        assert_eq!(err, UnknownCriterion("helpfulness".to_string()));
        assert!("Accuracy".parse::<RatingCriterion>().is_err());
    }

    #[test]
    fn star_rating_accepts_one_through_five() {
        for value in 1..=5 {
            assert_eq!(StarRating::new(value).map(StarRating::value), Some(value as u8));
        }
    }

    #[test]
    fn star_rating_rejects_out_of_range() {
        assert_eq!(StarRating::new(0), None);
        assert_eq!(StarRating::new(6), None);
        assert_eq!(StarRating::new(-3), None);
        assert_eq!(StarRating::new(i64::MAX), None);
    }

    #[test]
    fn star_rating_max_is_five() {
        assert_eq!(StarRating::MAX.value(), 5);
    }
}
