//! Outbound dependency on the cart service.
//!
//! One GET per order creation, no retry and no backoff. If the cart
//! service is slow or down, that surfaces to the caller as a 502; retry
//! policy belongs to whoever is calling us.

use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::{dto::CartDto, error::AppError};

pub trait CartSource {
    async fn fetch(
        &self,
        customer_id: &str,
        restaurant_id: &str,
    ) -> Result<Option<CartDto>, AppError>;
}

pub struct HttpCartSource {
    client: Client,
    base_url: String,
}

impl HttpCartSource {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }
}

impl CartSource for HttpCartSource {
    async fn fetch(
        &self,
        customer_id: &str,
        restaurant_id: &str,
    ) -> Result<Option<CartDto>, AppError> {
        let url = format!("{}/{customer_id}/{restaurant_id}", self.base_url);
        debug!("Fetching cart from {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::UpstreamUnavailable(e.to_string()))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !response.status().is_success() {
            return Err(AppError::UpstreamUnavailable(format!(
                "cart service returned {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::UpstreamUnavailable(e.to_string()))?;

        // An empty body counts as "no cart", same as a 404.
        if body.trim().is_empty() {
            return Ok(None);
        }

        let cart: CartDto = serde_json::from_str(&body)
            .map_err(|e| AppError::UpstreamUnavailable(format!("malformed cart payload: {e}")))?;

        Ok(Some(cart))
    }
}
