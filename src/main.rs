//! RDQ Backend
//!
//! A production-grade REST backend for planning client meetings (RDQ),
//! with SQLite persistence and dynamic criteria-based search.

mod api;
mod auth;
mod config;
mod db;
mod errors;
mod models;
mod search;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use db::Repository;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting RDQ Backend");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Warn if PSK is not configured
    if config.api_psk.is_none() {
        tracing::warn!("No API PSK configured (RDQ_API_PSK). Authentication is disabled!");
    }

    // Initialize database
    let pool = db::init_database(&config.db_path).await?;
    let repo = Arc::new(Repository::new(pool));

    // Create application state
    let state = AppState {
        repo,
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Clone PSK for the auth layer
    let psk = state.config.api_psk.clone();

    // API routes
    let api_routes = Router::new()
        // RDQs
        .route("/rdqs", post(api::create_rdq))
        .route("/rdqs/search", get(api::search_rdqs))
        .route("/rdqs/{id}", get(api::get_rdq))
        .route("/rdqs/{id}", put(api::update_rdq))
        .route("/rdqs/{id}", delete(api::delete_rdq))
        .route("/rdqs/{id}/bilans", post(api::add_bilan))
        .route("/rdqs/{id}/documents", post(api::add_document))
        // Managers
        .route("/managers", get(api::list_managers))
        .route("/managers", post(api::create_manager))
        .route("/managers/{id}", get(api::get_manager))
        // Collaborateurs
        .route("/collaborateurs", get(api::list_collaborateurs))
        .route("/collaborateurs", post(api::create_collaborateur))
        .route("/collaborateurs/{id}", get(api::get_collaborateur))
        // Clients and projets
        .route("/clients", get(api::list_clients))
        .route("/clients", post(api::create_client))
        .route("/projets", get(api::list_projets))
        .route("/projets", post(api::create_projet))
        .route("/projets/{id}", get(api::get_projet))
        // Apply PSK auth middleware
        .layer(middleware::from_fn(move |req, next| {
            auth::psk_auth_layer(psk.clone(), req, next)
        }));

    // Health check (no auth required)
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
