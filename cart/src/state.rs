use std::sync::Arc;

use common::database::init_redis;

use crate::{config::Config, repository::CartRepository};

pub struct AppState {
    pub config: Config,
    pub carts: CartRepository,
}

impl AppState {
    pub async fn new() -> Arc<Self> {
        let config = Config::load();

        let redis_connection = init_redis(&config.redis_url).await;
        let carts = CartRepository::new(redis_connection);

        Arc::new(Self { config, carts })
    }
}
