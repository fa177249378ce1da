//! # HTTP Server
//!
//! Builds the full router (contact routes, documentation, health, root
//! pointer) and runs the Axum listener.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::AppConfig;
use crate::store::ContactStore;

use super::contacts::{contact_routes, ContactsState};
use super::docs::ApiDoc;

/// HTTP server for the contacts API
pub struct ApiServer {
    config: AppConfig,
    router: Router,
}

impl ApiServer {
    /// Create a server over the given store connection.
    pub fn new(config: AppConfig, store: Arc<dyn ContactStore>) -> Self {
        let router = Self::build_router(&config, store);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &AppConfig, store: Arc<dyn ContactStore>) -> Router {
        let state = ContactsState::new(store);

        // Permissive CORS when no origins are configured.
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .route("/", get(root_handler))
            .merge(health_routes())
            .nest("/api", contact_routes(state))
            .merge(SwaggerUi::new("/api/docs").url("/api/docs.json", ApiDoc::openapi()))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        let listener = TcpListener::bind(addr).await?;

        tracing::info!(%addr, "contacts API listening");
        tracing::info!("API docs available at http://{}/api/docs", addr);

        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Health check routes
fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

/// Health check handler
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Root handler pointing at the documentation route
async fn root_handler() -> &'static str {
    "API docs available at /api/docs"
}
