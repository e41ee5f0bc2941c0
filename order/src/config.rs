use common::config::try_load;

pub struct Config {
    pub port: u16,
    pub redis_url: String,
    pub cart_service_url: String,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("RUST_PORT", "8082"),
            redis_url: try_load("REDIS_URL", "redis://127.0.0.1:6379"),
            cart_service_url: try_load("CART_SERVICE_URL", "http://127.0.0.1:8081/cart"),
        }
    }
}
