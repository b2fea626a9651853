// SPDX-License-Identifier: MPL-2.0
//! Category tags describing what was wrong, or right, about an answer.

use std::fmt;
use std::str::FromStr;

/// Qualitative label attached to a piece of feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CategoryTag {
    IncorrectInformation,
    MissingInformation,
    IrrelevantInformation,
    UnclearExplanation,
    PoorCitations,
    ExcellentAnswer,
    HelpfulCitations,
    WellExplained,
    Other,
}

impl CategoryTag {
    /// All tags in display order.
    pub const ALL: [CategoryTag; 9] = [
        CategoryTag::IncorrectInformation,
        CategoryTag::MissingInformation,
        CategoryTag::IrrelevantInformation,
        CategoryTag::UnclearExplanation,
        CategoryTag::PoorCitations,
        CategoryTag::ExcellentAnswer,
        CategoryTag::HelpfulCitations,
        CategoryTag::WellExplained,
        CategoryTag::Other,
    ];

    /// Wire identifier, e.g. `poor_citations`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CategoryTag::IncorrectInformation => "incorrect_information",
            CategoryTag::MissingInformation => "missing_information",
            CategoryTag::IrrelevantInformation => "irrelevant_information",
            CategoryTag::UnclearExplanation => "unclear_explanation",
            CategoryTag::PoorCitations => "poor_citations",
            CategoryTag::ExcellentAnswer => "excellent_answer",
            CategoryTag::HelpfulCitations => "helpful_citations",
            CategoryTag::WellExplained => "well_explained",
            CategoryTag::Other => "other",
        }
    }

    /// Fixed display label, e.g. "Poor Citations".
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            CategoryTag::IncorrectInformation => "Incorrect Information",
            CategoryTag::MissingInformation => "Missing Information",
            CategoryTag::IrrelevantInformation => "Irrelevant Information",
            CategoryTag::UnclearExplanation => "Unclear Explanation",
            CategoryTag::PoorCitations => "Poor Citations",
            CategoryTag::ExcellentAnswer => "Excellent Answer",
            CategoryTag::HelpfulCitations => "Helpful Citations",
            CategoryTag::WellExplained => "Well Explained",
            CategoryTag::Other => "Other",
        }
    }
}

impl fmt::Display for CategoryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a known category tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown feedback category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for CategoryTag {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip_through_wire_name() {
        for tag in CategoryTag::ALL {
            assert_eq!(tag.as_str().parse::<CategoryTag>(), Ok(tag));
        }
    }

    #[test]
    fn wire_names_are_unique() {
        let mut names: Vec<_> = CategoryTag::ALL.iter().map(|t| t.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), CategoryTag::ALL.len());
    }

    #[test]
    fn poor_citations_label() {
        assert_eq!(CategoryTag::PoorCitations.label(), "Poor Citations");
        assert_eq!(CategoryTag::Other.label(), "Other");
    }

    #[test]
    fn bogus_tag_is_rejected() {
        assert_eq!(
            "bogus_tag".parse::<CategoryTag>(),
            Err(UnknownCategory("bogus_tag".to_string()))
        );
    }
}
