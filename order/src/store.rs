//! Order persistence. One Redis hash, order id to JSON document.

use redis::{AsyncCommands, aio::ConnectionManager};

use crate::{error::AppError, models::Order};

const ORDERS_KEY: &str = "orders";

pub trait OrderStore {
    /// Inserts or overwrites the document under its order id.
    async fn put(&self, order: &Order) -> Result<(), AppError>;

    async fn get(&self, order_id: &str) -> Result<Option<Order>, AppError>;

    /// Every stored order, unordered. Listings filter this; there is no
    /// secondary index.
    async fn all(&self) -> Result<Vec<Order>, AppError>;
}

#[derive(Clone)]
pub struct RedisOrderStore {
    redis: ConnectionManager,
}

impl RedisOrderStore {
    pub fn new(redis: ConnectionManager) -> Self {
        Self { redis }
    }
}

impl OrderStore for RedisOrderStore {
    async fn put(&self, order: &Order) -> Result<(), AppError> {
        let document = serde_json::to_string(order)?;

        let mut conn = self.redis.clone();
        let _: () = conn.hset(ORDERS_KEY, &order.order_id, document).await?;

        Ok(())
    }

    async fn get(&self, order_id: &str) -> Result<Option<Order>, AppError> {
        let mut conn = self.redis.clone();
        let raw: Option<String> = conn.hget(ORDERS_KEY, order_id).await?;

        match raw {
            Some(document) => Ok(Some(serde_json::from_str(&document)?)),
            None => Ok(None),
        }
    }

    async fn all(&self) -> Result<Vec<Order>, AppError> {
        let mut conn = self.redis.clone();
        let raw: Vec<String> = conn.hvals(ORDERS_KEY).await?;

        raw.iter()
            .map(|document| serde_json::from_str(document).map_err(AppError::from))
            .collect()
    }
}
