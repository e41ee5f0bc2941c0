use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub device_info: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionRequest {
    pub user_id: String,
    #[serde(default)]
    pub device_info: Option<String>,
}

impl Session {
    /// Issues a session for the request, rejecting blank user ids.
    pub fn from_request(request: CreateSessionRequest) -> Result<Self, AppError> {
        if request.user_id.trim().is_empty() {
            return Err(AppError::MissingUserId);
        }

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            user_id: request.user_id,
            device_info: request.device_info,
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(user_id: &str) -> CreateSessionRequest {
        CreateSessionRequest {
            user_id: user_id.to_string(),
            device_info: Some("Pixel 9".to_string()),
        }
    }

    #[test]
    fn issuing_a_session_carries_the_request_fields() {
        let session = Session::from_request(request("u1")).unwrap();

        assert!(!session.id.is_empty());
        assert_eq!(session.user_id, "u1");
        assert_eq!(session.device_info.as_deref(), Some("Pixel 9"));
    }

    #[test]
    fn each_session_gets_its_own_id() {
        let first = Session::from_request(request("u1")).unwrap();
        let second = Session::from_request(request("u1")).unwrap();

        assert_ne!(first.id, second.id);
    }

    #[test]
    fn blank_user_id_is_rejected() {
        assert!(matches!(
            Session::from_request(request("")),
            Err(AppError::MissingUserId)
        ));
        assert!(matches!(
            Session::from_request(request("   ")),
            Err(AppError::MissingUserId)
        ));
    }
}
