use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::{Timestamp, UnknownVariant};

/// Moderation state of a customer review.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewStatus {
    Pending,
    Approved,
    Rejected,
}

impl ReviewStatus {
    /// Return the canonical string representation used on the wire.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReviewStatus {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "PENDING" => Ok(Self::Pending),
            "APPROVED" => Ok(Self::Approved),
            "REJECTED" => Ok(Self::Rejected),
            _ => Err(UnknownVariant::new("review status", value)),
        }
    }
}

/// A customer review of a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Review ID.
    pub id: String,
    /// Reviewed product ID.
    pub product_id: String,
    /// Reviewed product title, shown in the moderation queue.
    pub product_title: String,
    /// Display name of the reviewer.
    pub author_name: String,
    /// Star rating from 1 to 5.
    pub rating: u8,
    /// Review text.
    pub body: String,
    /// Moderation state.
    pub status: ReviewStatus,
    /// When the review was submitted.
    pub created_at: Timestamp,
}

/// Input for submitting a review from the product page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReviewRequest {
    /// Star rating from 1 to 5.
    pub rating: u8,
    /// Review text.
    pub body: String,
}

/// Input for approving or rejecting a review in the back office.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModerateReviewRequest {
    /// The new moderation state.
    pub status: ReviewStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json;

    #[test]
    fn review_status_roundtrip() {
        for (text, status) in [
            ("PENDING", ReviewStatus::Pending),
            ("APPROVED", ReviewStatus::Approved),
            ("REJECTED", ReviewStatus::Rejected),
        ] {
            assert_eq!(status.as_str(), text);
            assert_eq!(status.to_string(), text);
            assert_eq!(ReviewStatus::from_str(text).unwrap(), status);
        }
        assert!(ReviewStatus::from_str("FLAGGED").is_err());
    }

    #[test]
    fn review_decodes_camel_case_payload() {
        let json = r#"{
            "id": "r1",
            "productId": "p1",
            "productTitle": "Pixel 7",
            "authorName": "Sam",
            "rating": 4,
            "body": "Screen is spotless.",
            "status": "PENDING",
            "createdAt": "2025-02-11T18:00:00Z"
        }"#;

        let review: Review = serde_json::from_str(json).unwrap();
        assert_eq!(review.rating, 4);
        assert_eq!(review.status, ReviewStatus::Pending);
        assert_eq!(review.product_title, "Pixel 7");
    }

    #[test]
    fn moderation_request_serializes_status_string() {
        let request = ModerateReviewRequest {
            status: ReviewStatus::Approved,
        };

        let serialized = serde_json::to_string(&request).unwrap();
        assert_eq!(serialized, "{\"status\":\"APPROVED\"}");
    }
}
