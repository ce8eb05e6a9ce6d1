//! HEXBOARD Server - HTTP API for the browser board
//!
//! This crate provides the web backend:
//! - REST API over the shared board graph (toggle, reset, highlight, traverse)
//! - Static file serving for the board page

mod error;
mod routes;
mod state;

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::services::ServeDir;

pub use error::ApiError;
pub use state::ServerState;

/// Server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8003,
            static_dir: "hexboard/web".to_string(),
        }
    }
}

/// Create the router with all routes
pub fn create_router(config: &ServerConfig, state: Arc<ServerState>) -> Router {
    let static_service = ServeDir::new(&config.static_dir);

    Router::new()
        // Status endpoint
        .route("/api/status", get(routes::status::status_handler))
        // Board geometry + node flags
        .route("/api/board", get(routes::board::get_board))
        .route("/api/reset", post(routes::board::reset_board))
        .route("/api/active", get(routes::board::get_active))
        // Single nodes
        .route("/api/nodes/:index", get(routes::nodes::get_node))
        .route(
            "/api/nodes/:index/highlight",
            get(routes::nodes::get_highlight),
        )
        .route("/api/nodes/:index/toggle", post(routes::nodes::toggle_node))
        // Traversal
        .route("/api/traverse/:start", get(routes::traverse::get_traversal))
        // Shared state
        .with_state(state)
        // Static file serving (must be last)
        .fallback_service(static_service)
}

/// Start the HTTP server
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = Arc::new(ServerState::new());
    let router = create_router(&config, state);

    tracing::info!("HEXBOARD Server starting on http://0.0.0.0:{}", config.port);
    tracing::info!("Static files served from: {}", config.static_dir);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
