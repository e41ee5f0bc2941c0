//! # Order service
//!
//! Turns a customer's cart into a persisted order and tracks it until
//! delivery. The only cross-service dependency in the platform lives
//! here: order creation pulls the cart for a (customer, restaurant) pair
//! from the cart service over HTTP, snapshots the items, and writes the
//! order document to Redis.
//!
//! ## Money
//! - `orderTotal` is the sum of the cart's precomputed line totals.
//! - `deliveryFee` is a flat 5.0.
//! - `totalAmount` is the sum of both; discounts subtract from it but
//!   never push it below zero.
//!
//! ## Status
//! Orders start `Pending`. Cancellation is only allowed from `Pending`;
//! driver assignment moves any order to `Out for Delivery`. The plain
//! status update endpoint overwrites without checks, and unknown status
//! strings are stored verbatim.

use std::time::Duration;

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::{get, post, put},
};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod cart;
pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

use routes::{
    apply_discount_handler, assign_driver_handler, cancel_order_handler, create_order_handler,
    get_order_handler, list_orders_handler, orders_by_customer_handler, update_status_handler,
};
use state::AppState;

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = AppState::new().await;

    info!("Starting server...");

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    let app = Router::new()
        .route("/orders", post(create_order_handler).get(list_orders_handler))
        .route("/orders/{id}", get(get_order_handler))
        .route("/orders/customer/{customerId}", get(orders_by_customer_handler))
        .route("/orders/{id}/status", put(update_status_handler))
        .route("/orders/{id}/cancel", post(cancel_order_handler))
        .route("/orders/{id}/driver", post(assign_driver_handler))
        .route("/orders/{id}/discount", post(apply_discount_handler))
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
