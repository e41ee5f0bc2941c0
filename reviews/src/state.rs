use std::sync::Arc;

use common::database::init_redis;

use crate::{config::Config, repository::ReviewRepository};

pub struct AppState {
    pub config: Config,
    pub reviews: ReviewRepository,
}

impl AppState {
    pub async fn new() -> Arc<Self> {
        let config = Config::load();

        let redis_connection = init_redis(&config.redis_url).await;
        let reviews = ReviewRepository::new(redis_connection);

        Arc::new(Self { config, reviews })
    }
}
