mod config;
mod db;
mod error;
mod handlers;
mod middleware;
mod models;
mod services;
mod store;
#[cfg(test)]
mod test_support;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::db::Database;
use crate::store::VideoStore;

/// Room for multipart boundaries and part headers on top of the file itself
pub const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn VideoStore>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tubely=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Tubely...");

    // Load configuration
    let config = Arc::new(Config::load()?);
    tracing::info!("Configuration loaded");

    // Initialize database
    let db = Database::new(&config.database.path).await?;
    db.run_migrations().await?;
    tracing::info!("Database initialized");

    let state = AppState {
        store: Arc::new(db),
        config: config.clone(),
    };

    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let body_limit = state.config.upload.max_thumbnail_bytes + MULTIPART_OVERHEAD_BYTES;

    // Public routes (no auth required)
    let public_routes = Router::new().route(
        "/thumbnails/:video_id",
        get(handlers::thumbnail::get_thumbnail),
    );

    // Protected routes (auth required)
    let protected_routes = Router::new()
        .route("/videos/:video_id", get(handlers::video::get_video))
        .route(
            "/videos/:video_id/thumbnail",
            post(handlers::thumbnail::upload_thumbnail).layer(DefaultBodyLimit::max(body_limit)),
        )
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::auth_middleware,
        ));

    Router::new()
        .nest("/api", public_routes.merge(protected_routes))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
