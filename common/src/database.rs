//! # Redis
//!
//! Every service keeps its documents in Redis: one hash per collection
//! (`orders`, `reviews`, `sessions`, `users`) mapping a generated id to a
//! JSON document, and plain `cart:{customerId}:{restaurantId}` keys for
//! carts. Lookups are by key only; filtered listings scan the hash values.

use std::time::Duration;

use redis::{
    Client,
    aio::{ConnectionManager, ConnectionManagerConfig},
};

pub async fn init_redis(redis_url: &str) -> ConnectionManager {
    let config = ConnectionManagerConfig::new()
        .set_number_of_retries(1)
        .set_connection_timeout(Duration::from_millis(100));

    let client = Client::open(redis_url).unwrap();

    client
        .get_connection_manager_with_config(config)
        .await
        .unwrap()
}
