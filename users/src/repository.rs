use redis::{AsyncCommands, aio::ConnectionManager};

use crate::{error::AppError, models::User};

const USERS_KEY: &str = "users";

#[derive(Clone)]
pub struct UserRepository {
    redis: ConnectionManager,
}

impl UserRepository {
    pub fn new(redis: ConnectionManager) -> Self {
        Self { redis }
    }

    pub async fn save(&self, user: &User) -> Result<(), AppError> {
        let document = serde_json::to_string(user)?;

        let mut conn = self.redis.clone();
        let _: () = conn.hset(USERS_KEY, &user.id, document).await?;

        Ok(())
    }

    pub async fn find(&self, id: &str) -> Result<Option<User>, AppError> {
        let mut conn = self.redis.clone();
        let raw: Option<String> = conn.hget(USERS_KEY, id).await?;

        match raw {
            Some(document) => Ok(Some(serde_json::from_str(&document)?)),
            None => Ok(None),
        }
    }

    pub async fn all(&self) -> Result<Vec<User>, AppError> {
        let mut conn = self.redis.clone();
        let raw: Vec<String> = conn.hvals(USERS_KEY).await?;

        raw.iter()
            .map(|document| serde_json::from_str(document).map_err(AppError::from))
            .collect()
    }

    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let mut conn = self.redis.clone();
        let removed: u32 = conn.hdel(USERS_KEY, id).await?;

        Ok(removed > 0)
    }
}
