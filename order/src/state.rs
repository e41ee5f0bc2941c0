use std::sync::Arc;

use common::database::init_redis;

use crate::{cart::HttpCartSource, config::Config, store::RedisOrderStore};

pub struct AppState {
    pub config: Config,
    pub orders: RedisOrderStore,
    pub cart: HttpCartSource,
}

impl AppState {
    pub async fn new() -> Arc<Self> {
        let config = Config::load();

        let redis_connection = init_redis(&config.redis_url).await;
        let orders = RedisOrderStore::new(redis_connection);
        let cart = HttpCartSource::new(config.cart_service_url.clone());

        Arc::new(Self {
            config,
            orders,
            cart,
        })
    }
}
