// SPDX-License-Identifier: MPL-2.0
//! JSON body sent to feedback backends.
//!
//! ```json
//! { "isHelpful": false, "ratings": { "clarity": 3 }, "categories": ["other"] }
//! ```

use crate::domain::feedback::FeedbackPayload;
use serde::Serialize;
use std::collections::BTreeMap;

/// Serializable mirror of [`FeedbackPayload`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackBody {
    pub is_helpful: bool,
    pub ratings: BTreeMap<String, u8>,
    pub categories: Vec<String>,
}

impl From<&FeedbackPayload> for FeedbackBody {
    fn from(payload: &FeedbackPayload) -> Self {
        Self {
            is_helpful: payload.is_helpful,
            ratings: payload
                .rating_entries()
                .map(|(name, stars)| (name.to_string(), stars))
                .collect(),
            categories: payload
                .categories
                .iter()
                .map(|tag| tag.as_str().to_string())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn positive_payload_serializes_to_wire_shape() {
        let body = FeedbackBody::from(&FeedbackPayload::positive());
        let value = serde_json::to_value(&body).expect("serialize");

        assert_eq!(
            value,
            json!({
                "isHelpful": true,
                "ratings": { "clarity": 5 },
                "categories": ["excellent_answer", "well_explained"]
            })
        );
    }

    #[test]
    fn empty_negative_payload_keeps_empty_collections() {
        let payload =
            FeedbackPayload::negative(Vec::<(&str, i64)>::new(), ["missing_information"]);
        let value = serde_json::to_value(FeedbackBody::from(&payload)).expect("serialize");

        assert_eq!(
            value,
            json!({
                "isHelpful": false,
                "ratings": {},
                "categories": ["missing_information"]
            })
        );
    }
}
