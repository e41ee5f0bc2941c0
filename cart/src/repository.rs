//! Cart storage. One Redis key per (customer, restaurant) pair holding
//! the whole cart as JSON; no per-item keys.

use redis::{AsyncCommands, aio::ConnectionManager};

use crate::{error::AppError, models::Cart};

pub fn cart_key(customer_id: &str, restaurant_id: &str) -> String {
    format!("cart:{customer_id}:{restaurant_id}")
}

#[derive(Clone)]
pub struct CartRepository {
    redis: ConnectionManager,
}

impl CartRepository {
    pub fn new(redis: ConnectionManager) -> Self {
        Self { redis }
    }

    pub async fn find(
        &self,
        customer_id: &str,
        restaurant_id: &str,
    ) -> Result<Option<Cart>, AppError> {
        let mut conn = self.redis.clone();
        let raw: Option<String> = conn.get(cart_key(customer_id, restaurant_id)).await?;

        match raw {
            Some(document) => Ok(Some(serde_json::from_str(&document)?)),
            None => Ok(None),
        }
    }

    pub async fn save(&self, cart: &Cart) -> Result<(), AppError> {
        let document = serde_json::to_string(cart)?;

        let mut conn = self.redis.clone();
        let _: () = conn
            .set(cart_key(&cart.customer_id, &cart.restaurant_id), document)
            .await?;

        Ok(())
    }

    pub async fn delete(&self, customer_id: &str, restaurant_id: &str) -> Result<(), AppError> {
        let mut conn = self.redis.clone();
        let _: () = conn.del(cart_key(customer_id, restaurant_id)).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::cart_key;

    #[test]
    fn key_is_scoped_to_customer_and_restaurant() {
        assert_eq!(cart_key("c1", "r1"), "cart:c1:r1");
        assert_ne!(cart_key("c1", "r2"), cart_key("c1", "r1"));
    }
}
