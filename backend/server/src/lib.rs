//! Backend for the Halloween invitation site.
//!
//! Guests confirm attendance through the site's form, which lands on
//! `/api/confirm`; the guest-list page reads everything back through
//! `/api/get-list`. Both endpoints are thin proxies in front of the managed
//! Postgres holding the `people` table. Nothing is cached and nothing is
//! mutated in place: confirmations are append-only rows and the roster is a
//! full-table read, so the store itself is the single source of truth.
//!
//!
//!
//! # General Infrastructure
//! - One container running this binary, reverse proxied by the frontend host
//! - The database is managed and lives outside the stack; we only hold a
//!   connection string for it
//! - Connection string is mounted as a docker secret, never an env var
//!
//!
//!
//! # Setup
//!
//! View current docs.
//! ```sh
//! cargo doc --open
//! `````
//!
//! Run locally (expects `/run/secrets/DATABASE_URL` to exist).
//! ```sh
//! RUST_PORT=3000 cargo run -p rsvp
//! ```
use std::time::Duration;

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::get,
};
use tokio::{
    net::TcpListener,
    signal::{
        ctrl_c,
        unix::{SignalKind, signal},
    },
};
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;

use routes::{confirm_handler, get_list_handler};
use state::State;

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = State::new().await;

    info!("Starting server...");

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    let app = Router::new()
        .route("/api/confirm", get(confirm_handler))
        .route("/api/get-list", get(get_list_handler))
        .layer(cors)
        .with_state(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await.unwrap();
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    println!("Server shutting down...");
}

async fn shutdown_signal() {
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
