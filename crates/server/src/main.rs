//! Tatvaani Server - REST API for the Tatvaani storefront.
//!
//! This binary serves the storefront API on port 5000 by default.
//!
//! # Architecture
//!
//! - Axum web framework serving JSON under `/api`
//! - Flat JSON collection files under the data directory for persistence
//! - HMAC-signed bearer tokens for authentication
//!
//! There is no database: each collection (`users`, `products`, `orders`,
//! `inquiries`) is one pretty-printed JSON array file, read and rewritten
//! whole per request.

#![cfg_attr(not(test), forbid(unsafe_code))]

use tatvaani_server::config::ServerConfig;
use tatvaani_server::state::AppState;
use tatvaani_server::store::FileStore;

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = ServerConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "tatvaani_server=info,tower_http=debug".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    if config.auth.using_default_secret {
        tracing::warn!(
            "TATVAANI_JWT_SECRET is not set; tokens are signed with the built-in development secret"
        );
    }

    // Create the data directory and seed the catalog on first run
    let store = FileStore::new(&config.data_dir);
    store.init().await.expect("Failed to initialize data files");
    tracing::info!(data_dir = %config.data_dir.display(), "Data store initialized");

    let addr = config.socket_addr();
    let state = AppState::new(config, store);
    let app = tatvaani_server::app(state);

    // Start server
    tracing::info!("Tatvaani server running on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
