use redis::{AsyncCommands, aio::ConnectionManager};

use crate::{
    error::AppError,
    models::{Review, TargetType},
};

const REVIEWS_KEY: &str = "reviews";

#[derive(Clone)]
pub struct ReviewRepository {
    redis: ConnectionManager,
}

impl ReviewRepository {
    pub fn new(redis: ConnectionManager) -> Self {
        Self { redis }
    }

    pub async fn save(&self, review: &Review) -> Result<(), AppError> {
        let document = serde_json::to_string(review)?;

        let mut conn = self.redis.clone();
        let _: () = conn.hset(REVIEWS_KEY, &review.id, document).await?;

        Ok(())
    }

    pub async fn find(&self, id: &str) -> Result<Option<Review>, AppError> {
        let mut conn = self.redis.clone();
        let raw: Option<String> = conn.hget(REVIEWS_KEY, id).await?;

        match raw {
            Some(document) => Ok(Some(serde_json::from_str(&document)?)),
            None => Ok(None),
        }
    }

    pub async fn find_by_target(
        &self,
        target_id: &str,
        target_type: TargetType,
    ) -> Result<Vec<Review>, AppError> {
        let mut reviews = self.all().await?;
        reviews.retain(|review| review.target_id == target_id && review.target_type == target_type);

        Ok(reviews)
    }

    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let mut conn = self.redis.clone();
        let removed: u32 = conn.hdel(REVIEWS_KEY, id).await?;

        Ok(removed > 0)
    }

    async fn all(&self) -> Result<Vec<Review>, AppError> {
        let mut conn = self.redis.clone();
        let raw: Vec<String> = conn.hvals(REVIEWS_KEY).await?;

        raw.iter()
            .map(|document| serde_json::from_str(document).map_err(AppError::from))
            .collect()
    }
}
