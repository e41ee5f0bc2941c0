//! # Session service
//!
//! Issues session documents keyed by a generated id and looks them up by
//! user. Device info is whatever the client reports; nothing here checks
//! it. Revocation is per session or wholesale per user.

use std::time::Duration;

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::{get, post},
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

use routes::{
    create_session_handler, get_session_handler, revoke_session_handler,
    revoke_user_sessions_handler, sessions_by_user_handler,
};
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
        .route("/sessions", post(create_session_handler))
        .route(
            "/sessions/{id}",
            get(get_session_handler).delete(revoke_session_handler),
        )
        .route(
            "/sessions/user/{userId}",
            get(sessions_by_user_handler).delete(revoke_user_sessions_handler),
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
