//! Comic Storefront - Main Application Entry Point
//!
//! This is the JSON API behind a comic-book storefront. It browses comics and
//! characters from the Marvel catalog API and runs a simulated checkout that
//! classifies orders against fixed test card numbers.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Catalog**: Marvel REST API via reqwest, requests signed with
//!   `md5(ts + private_key + public_key)`
//! - **Checkout**: mock validation, nothing persisted server-side
//! - **Format**: JSON requests/responses
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Build the signed catalog client (fails fast on missing keys)
//! 3. Build HTTP router with routes and middleware
//! 4. Start server on configured port

mod config;
mod error;
mod handlers;
mod middleware;
mod models;
mod services;
mod state;

#[cfg(test)]
mod test_support;

use tracing_subscriber::EnvFilter;

use axum::{
    Router, middleware as axum_middleware,
    routing::{any, get},
};
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration; missing catalog keys stop the process here
    let config = config::Config::from_env()?;
    tracing::info!(catalog = %config.catalog.base_url, "Configuration loaded");

    let state = AppState::new(&config)?;
    tracing::info!("Catalog client ready");

    let app = app(state);

    // Bind to network address and start server
    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the HTTP router.
fn app(state: AppState) -> Router {
    // Checkout accepts every verb so the guard can answer non-POST requests
    // in the checkout error format. Panics become ERROR_SERVER.
    let checkout_routes = Router::new()
        .route("/api/checkout", any(handlers::checkout::checkout))
        .route_layer(
            ServiceBuilder::new()
                .layer(CatchPanicLayer::custom(
                    middleware::guard::server_error_on_panic,
                ))
                .layer(axum_middleware::from_fn(middleware::guard::require_post)),
        );

    Router::new()
        .route("/health", get(handlers::health::health_check))
        // Catalog routes
        .route("/api/comics", get(handlers::comics::list_comics))
        .route("/api/comics/{id}", get(handlers::comics::get_comic))
        .route(
            "/api/characters/{id}",
            get(handlers::characters::get_character),
        )
        .route("/api/faqs", get(handlers::faqs::list_faqs))
        .merge(checkout_routes)
        // Add distributed tracing middleware for observability
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
