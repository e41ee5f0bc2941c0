//! Glue shared by every NomNom service.
//!
//! Each service is its own binary with its own `Config`, router, and error
//! type. What they have in common lives here: env-based config loading,
//! the Redis connection setup, and the shutdown signal handler.

use tokio::signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tracing::info;

pub mod config;
pub mod database;

pub async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
