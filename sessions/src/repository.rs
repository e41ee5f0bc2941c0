use redis::{AsyncCommands, aio::ConnectionManager};

use crate::{error::AppError, models::Session};

const SESSIONS_KEY: &str = "sessions";

#[derive(Clone)]
pub struct SessionRepository {
    redis: ConnectionManager,
}

impl SessionRepository {
    pub fn new(redis: ConnectionManager) -> Self {
        Self { redis }
    }

    pub async fn save(&self, session: &Session) -> Result<(), AppError> {
        let document = serde_json::to_string(session)?;

        let mut conn = self.redis.clone();
        let _: () = conn.hset(SESSIONS_KEY, &session.id, document).await?;

        Ok(())
    }

    pub async fn find(&self, id: &str) -> Result<Option<Session>, AppError> {
        let mut conn = self.redis.clone();
        let raw: Option<String> = conn.hget(SESSIONS_KEY, id).await?;

        match raw {
            Some(document) => Ok(Some(serde_json::from_str(&document)?)),
            None => Ok(None),
        }
    }

    pub async fn find_by_user(&self, user_id: &str) -> Result<Vec<Session>, AppError> {
        let mut sessions = self.all().await?;
        sessions.retain(|session| session.user_id == user_id);

        Ok(sessions)
    }

    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let mut conn = self.redis.clone();
        let removed: u32 = conn.hdel(SESSIONS_KEY, id).await?;

        Ok(removed > 0)
    }

    /// Revokes every session a user holds; returns how many were dropped.
    pub async fn delete_by_user(&self, user_id: &str) -> Result<usize, AppError> {
        let sessions = self.find_by_user(user_id).await?;

        let mut conn = self.redis.clone();
        for session in &sessions {
            let _: () = conn.hdel(SESSIONS_KEY, &session.id).await?;
        }

        Ok(sessions.len())
    }

    async fn all(&self) -> Result<Vec<Session>, AppError> {
        let mut conn = self.redis.clone();
        let raw: Vec<String> = conn.hvals(SESSIONS_KEY).await?;

        raw.iter()
            .map(|document| serde_json::from_str(document).map_err(AppError::from))
            .collect()
    }
}
