use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Restaurant-owner fields. An owner is a regular user carrying this
/// profile, not a separate document type.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantProfile {
    pub restaurant_name: String,
    pub restaurant_address: String,
    pub restaurant_license_number: String,
    #[serde(default)]
    pub restaurant_documents: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    /// Absent for social logins.
    #[serde(default)]
    pub password: Option<String>,
    pub user_type: String,
    #[serde(default)]
    pub restaurant_profile: Option<RestaurantProfile>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub email: String,
    #[serde(default)]
    pub password: Option<String>,
    pub user_type: String,
    #[serde(default)]
    pub restaurant_profile: Option<RestaurantProfile>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub email: String,
    #[serde(default)]
    pub password: Option<String>,
    pub user_type: String,
    #[serde(default)]
    pub restaurant_profile: Option<RestaurantProfile>,
}

impl User {
    pub fn from_request(request: CreateUserRequest) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4().to_string(),
            email: request.email,
            password: request.password,
            user_type: request.user_type,
            restaurant_profile: request.restaurant_profile,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_user_has_no_restaurant_profile() {
        let user = User::from_request(CreateUserRequest {
            email: "ada@example.com".to_string(),
            password: Some("hunter2".to_string()),
            user_type: "customer".to_string(),
            restaurant_profile: None,
        });

        assert!(user.restaurant_profile.is_none());

        let json = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();
        assert!(back.restaurant_profile.is_none());
    }

    #[test]
    fn owner_round_trips_with_profile() {
        let user = User::from_request(CreateUserRequest {
            email: "owner@example.com".to_string(),
            password: None,
            user_type: "restaurantOwner".to_string(),
            restaurant_profile: Some(RestaurantProfile {
                restaurant_name: "Nom Nom Noodles".to_string(),
                restaurant_address: "12 Main St".to_string(),
                restaurant_license_number: "LIC-42".to_string(),
                restaurant_documents: vec!["permit.pdf".to_string()],
            }),
        });

        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("\"restaurantLicenseNumber\":\"LIC-42\""));

        let back: User = serde_json::from_str(&json).unwrap();
        let profile = back.restaurant_profile.unwrap();
        assert_eq!(profile.restaurant_documents.len(), 1);
    }
}
