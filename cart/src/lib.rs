//! # Cart service
//!
//! Holds one transient cart per (customer, restaurant) pair. The order
//! service reads a cart through `GET /cart/{customerId}/{restaurantId}`
//! when it places an order and drops it afterwards with the DELETE
//! route. Item totals are computed here (price × quantity); downstream
//! consumers trust them as-is.

use std::time::Duration;

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::{delete, get, post},
};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod routes;
pub mod state;

use routes::{add_item_handler, delete_cart_handler, get_cart_handler, remove_item_handler};
use state::AppState;

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = AppState::new().await;

    info!("Starting server...");

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    let app = Router::new()
        .route(
            "/cart/{customerId}/{restaurantId}",
            get(get_cart_handler).delete(delete_cart_handler),
        )
        .route(
            "/cart/{customerId}/{restaurantId}/items",
            post(add_item_handler),
        )
        .route(
            "/cart/{customerId}/{restaurantId}/items/{itemId}",
            delete(remove_item_handler),
        )
        .layer(cors)
        .with_state(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await.unwrap();
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(common::shutdown_signal())
        .await
        .unwrap();

    println!("Server shutting down...");
}
