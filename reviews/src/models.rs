use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What a review points at. Customers review restaurants and drivers;
/// nothing ties a review back to an order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetType {
    Restaurant,
    Driver,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub customer_id: String,
    pub target_id: String,
    pub target_type: TargetType,
    pub rating: u8,
    pub review: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    pub customer_id: String,
    pub target_id: String,
    pub target_type: TargetType,
    pub rating: u8,
    pub review: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReviewRequest {
    pub rating: u8,
    pub review: String,
}

impl Review {
    pub fn from_request(request: CreateReviewRequest) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4().to_string(),
            customer_id: request.customer_id,
            target_id: request.target_id,
            target_type: request.target_type,
            rating: request.rating,
            review: request.review,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_type_serializes_as_plain_name() {
        let json = serde_json::to_string(&TargetType::Restaurant).unwrap();
        assert_eq!(json, "\"Restaurant\"");

        let parsed: TargetType = serde_json::from_str("\"Driver\"").unwrap();
        assert_eq!(parsed, TargetType::Driver);
    }

    #[test]
    fn review_document_uses_camel_case_fields() {
        let review = Review::from_request(CreateReviewRequest {
            customer_id: "c1".to_string(),
            target_id: "r1".to_string(),
            target_type: TargetType::Restaurant,
            rating: 4,
            review: "solid noodles".to_string(),
        });

        let json = serde_json::to_string(&review).unwrap();
        assert!(json.contains("\"customerId\""));
        assert!(json.contains("\"targetType\":\"Restaurant\""));
    }
}
