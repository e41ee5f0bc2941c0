use std::sync::Arc;

use common::database::init_redis;

use crate::{config::Config, repository::SessionRepository};

pub struct AppState {
    pub config: Config,
    pub sessions: SessionRepository,
}

impl AppState {
    pub async fn new() -> Arc<Self> {
        let config = Config::load();

        let redis_connection = init_redis(&config.redis_url).await;
        let sessions = SessionRepository::new(redis_connection);

        Arc::new(Self { config, sessions })
    }
}
